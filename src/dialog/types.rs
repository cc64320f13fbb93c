use serde::{Deserialize, Serialize};

use super::handle::Completer;

pub const DEFAULT_PRIMARY_LABEL: &str = "OK";
pub const DEFAULT_SECONDARY_LABEL: &str = "Cancel";

/// Props for a dialog surface that is driven directly rather than through the
/// coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogProps {
    pub title: String,
    pub visible: bool,
    #[serde(default)]
    pub primary_label: Option<String>,
    #[serde(default)]
    pub secondary_label: Option<String>,
}

/// A caller's request for a confirmation or alert.
///
/// Optional fields are stored as given; the accessors resolve the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub primary_label: Option<String>,
    #[serde(default)]
    pub secondary_label: Option<String>,
    #[serde(default)]
    pub show_secondary: Option<bool>,
}

impl DialogConfig {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn primary(mut self, label: impl Into<String>) -> Self {
        self.primary_label = Some(label.into());
        self
    }

    pub fn secondary(mut self, label: impl Into<String>) -> Self {
        self.secondary_label = Some(label.into());
        self
    }

    pub fn without_secondary(mut self) -> Self {
        self.show_secondary = Some(false);
        self
    }

    pub fn primary_label(&self) -> &str {
        self.primary_label.as_deref().unwrap_or(DEFAULT_PRIMARY_LABEL)
    }

    pub fn secondary_label(&self) -> &str {
        self.secondary_label
            .as_deref()
            .unwrap_or(DEFAULT_SECONDARY_LABEL)
    }

    pub fn shows_secondary(&self) -> bool {
        self.show_secondary.unwrap_or(true)
    }

    /// Props view of this request, as a rendering surface would receive them.
    pub fn props(&self, visible: bool) -> DialogProps {
        DialogProps {
            title: self.title.clone(),
            visible,
            primary_label: Some(self.primary_label().to_string()),
            secondary_label: self
                .shows_secondary()
                .then(|| self.secondary_label().to_string()),
        }
    }
}

/// The record a rendering surface observes.
#[derive(Debug, Default)]
pub struct DialogState {
    pub config: DialogConfig,
    pub visible: bool,
    /// Completion for the displayed request. Consumed when the user answers.
    pub resolve: Option<Completer>,
}

impl DialogState {
    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn message(&self) -> &str {
        &self.config.message
    }

    pub fn is_pending(&self) -> bool {
        self.resolve.is_some()
    }
}
