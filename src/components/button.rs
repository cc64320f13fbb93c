use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSeverity {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
    Contrast,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outlined,
    Text,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    /// Blank cells on each side of the label.
    pub fn padding(self) -> usize {
        match self {
            ButtonSize::Sm => 0,
            ButtonSize::Md => 1,
            ButtonSize::Lg => 2,
        }
    }
}

/// Element a button renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonElement {
    #[default]
    Button,
    A,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonProps {
    pub label: String,
    pub icon: Option<String>,
    pub icon_right: bool,
    pub severity: ButtonSeverity,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub rounded: bool,
    pub disabled: bool,
    pub block: bool,
    #[serde(rename = "as")]
    pub element: ButtonElement,
    pub href: Option<String>,
}

impl ButtonProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn severity(mut self, severity: ButtonSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>, right: bool) -> Self {
        self.icon = Some(icon.into());
        self.icon_right = right;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.element = ButtonElement::A;
        self.href = Some(href.into());
        self
    }

    /// Text shown inside the button, icon included.
    pub fn content(&self) -> String {
        match (&self.icon, self.icon_right) {
            (Some(icon), false) => format!("{} {}", icon, self.label),
            (Some(icon), true) => format!("{} {}", self.label, icon),
            (None, _) => self.label.clone(),
        }
    }

    /// Width in terminal cells, including padding and the bracket caps that
    /// solid and outlined buttons draw.
    pub fn display_width(&self) -> usize {
        let caps = match self.variant {
            ButtonVariant::Text => 0,
            ButtonVariant::Solid | ButtonVariant::Outlined => 2,
        };
        self.content().width() + self.size.padding() * 2 + caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let button = ButtonProps::new("Save");
        assert_eq!(button.severity, ButtonSeverity::Neutral);
        assert_eq!(button.variant, ButtonVariant::Solid);
        assert_eq!(button.size, ButtonSize::Md);
        assert_eq!(button.element, ButtonElement::Button);
        assert!(!button.disabled);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(ButtonProps::new("OK").display_width(), 6);
        assert_eq!(
            ButtonProps::new("OK")
                .variant(ButtonVariant::Text)
                .size(ButtonSize::Sm)
                .display_width(),
            2
        );
        // CJK glyphs take two cells each.
        assert_eq!(
            ButtonProps::new("削除").size(ButtonSize::Sm).display_width(),
            6
        );
    }

    #[test]
    fn test_icon_placement() {
        assert_eq!(ButtonProps::new("Next").icon("→", true).content(), "Next →");
        assert_eq!(ButtonProps::new("Back").icon("←", false).content(), "← Back");
    }

    #[test]
    fn test_parse_from_toml() {
        let button: ButtonProps = toml::from_str(
            r#"
            label = "Docs"
            severity = "info"
            variant = "outlined"
            size = "lg"
            as = "a"
            href = "https://example.org"
            "#,
        )
        .unwrap();
        assert_eq!(button.severity, ButtonSeverity::Info);
        assert_eq!(button.variant, ButtonVariant::Outlined);
        assert_eq!(button.size, ButtonSize::Lg);
        assert_eq!(button.element, ButtonElement::A);
        assert_eq!(button.href.as_deref(), Some("https://example.org"));
    }
}
