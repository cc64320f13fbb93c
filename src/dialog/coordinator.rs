use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::handle::{pending, Completer, DialogHandle};
use super::types::{DialogConfig, DialogState};

/// What happens to a request made while another one is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Wait in line and show once the earlier requests are answered.
    #[default]
    Queue,
    /// Take over the dialog. The displaced request's handle resolves to
    /// [`DialogError::Abandoned`](super::DialogError::Abandoned).
    Replace,
}

#[derive(Debug)]
struct QueuedRequest {
    config: DialogConfig,
    completer: Completer,
}

/// Mediates between callers asking for a yes/no answer and the one surface
/// that shows the dialog.
///
/// Owned by the application state; the rendering surface reads [`state`] and
/// reports the user's choice through [`handle_primary`] or
/// [`handle_secondary`].
///
/// [`state`]: DialogCoordinator::state
/// [`handle_primary`]: DialogCoordinator::handle_primary
/// [`handle_secondary`]: DialogCoordinator::handle_secondary
#[derive(Debug, Default)]
pub struct DialogCoordinator {
    state: DialogState,
    queue: VecDeque<QueuedRequest>,
    policy: OverlapPolicy,
}

impl DialogCoordinator {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Number of requests waiting behind the displayed one.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn show(&mut self, config: DialogConfig) -> DialogHandle {
        let (completer, handle) = pending();

        if self.state.is_pending() {
            match self.policy {
                OverlapPolicy::Queue => {
                    debug!(title = %config.title, queued = self.queue.len() + 1, "dialog request queued");
                    self.queue.push_back(QueuedRequest { config, completer });
                    return handle;
                }
                OverlapPolicy::Replace => {
                    warn!(
                        replaced = %self.state.config.title,
                        title = %config.title,
                        "dialog request replaced before it was answered"
                    );
                }
            }
        }

        self.present(config, completer);
        handle
    }

    pub fn alert(
        &mut self,
        title: &str,
        message: &str,
        primary_label: &str,
        secondary_label: &str,
    ) -> DialogHandle {
        self.show(DialogConfig {
            title: title.to_string(),
            message: message.to_string(),
            primary_label: Some(primary_label.to_string()),
            secondary_label: Some(secondary_label.to_string()),
            show_secondary: None,
        })
    }

    /// Ask with the default labels.
    pub fn confirm(&mut self, title: &str, message: &str) -> DialogHandle {
        self.show(DialogConfig::new(title, message))
    }

    pub fn handle_primary(&mut self) {
        self.settle(true);
    }

    pub fn handle_secondary(&mut self) {
        self.settle(false);
    }

    fn present(&mut self, config: DialogConfig, completer: Completer) {
        debug!(title = %config.title, "dialog shown");
        // Dropping a previous completer here abandons its handle.
        self.state = DialogState {
            config,
            visible: true,
            resolve: Some(completer),
        };
    }

    fn settle(&mut self, result: bool) {
        self.state.visible = false;

        let Some(completer) = self.state.resolve.take() else {
            return;
        };
        debug!(title = %self.state.config.title, result, "dialog answered");
        completer.fulfil(result);

        // Skip requests whose callers already gave up waiting.
        while let Some(next) = self.queue.pop_front() {
            if next.completer.is_orphaned() {
                debug!(title = %next.config.title, "dropping queued dialog nobody awaits");
                continue;
            }
            self.present(next.config, next.completer);
            break;
        }
    }
}
