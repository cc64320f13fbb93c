//! Multi-step wizard model.
//!
//! Step metadata is passive; [`WizardNavigation`] tracks which step is active
//! and moves between steps, skipping disabled ones. Whether a step is `valid`
//! is decided by the caller and only carried here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStepStatus {
    Complete,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardStepMeta {
    pub index: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub disabled: bool,
    pub optional: bool,
    pub valid: Option<bool>,
}

impl WizardStepMeta {
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardStepChangeEvent {
    pub from: usize,
    pub to: usize,
}

/// Snapshot handed to a navigation footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardNavigationSlotProps {
    pub active_index: usize,
    pub total: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardHeaderSlotProps {
    pub steps: Vec<WizardStepMeta>,
    pub active_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardBadgesSlotProps {
    pub index: usize,
    pub step: WizardStepMeta,
    pub status: WizardStepStatus,
}

#[derive(Debug, Clone)]
pub struct WizardNavigation {
    steps: Vec<WizardStepMeta>,
    active_index: usize,
}

impl WizardNavigation {
    /// `active_index` is clamped to the last step.
    pub fn new(steps: Vec<WizardStepMeta>, active_index: usize) -> Self {
        let active_index = active_index.min(steps.len().saturating_sub(1));
        Self {
            steps,
            active_index,
        }
    }

    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = titles
            .into_iter()
            .enumerate()
            .map(|(i, t)| WizardStepMeta::new(i, t))
            .collect();
        Self::new(steps, 0)
    }

    pub fn steps(&self) -> &[WizardStepMeta] {
        &self.steps
    }

    pub fn step_mut(&mut self, index: usize) -> Option<&mut WizardStepMeta> {
        self.steps.get_mut(index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_step(&self) -> Option<&WizardStepMeta> {
        self.steps.get(self.active_index)
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn is_first(&self) -> bool {
        self.active_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.active_index + 1 >= self.steps.len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.previous_target().is_some()
    }

    pub fn can_go_next(&self) -> bool {
        self.next_target().is_some()
    }

    pub fn status(&self, index: usize) -> WizardStepStatus {
        match index.cmp(&self.active_index) {
            std::cmp::Ordering::Less => WizardStepStatus::Complete,
            std::cmp::Ordering::Equal => WizardStepStatus::Active,
            std::cmp::Ordering::Greater => WizardStepStatus::Upcoming,
        }
    }

    pub fn previous(&mut self) -> Option<WizardStepChangeEvent> {
        let target = self.previous_target()?;
        self.go_to(target)
    }

    pub fn next(&mut self) -> Option<WizardStepChangeEvent> {
        let target = self.next_target()?;
        self.go_to(target)
    }

    /// Returns `None` without moving when `index` is out of range, disabled,
    /// or already active.
    pub fn go_to(&mut self, index: usize) -> Option<WizardStepChangeEvent> {
        let step = self.steps.get(index)?;
        if step.disabled || index == self.active_index {
            return None;
        }
        let event = WizardStepChangeEvent {
            from: self.active_index,
            to: index,
        };
        self.active_index = index;
        Some(event)
    }

    pub fn navigation_props(&self) -> WizardNavigationSlotProps {
        WizardNavigationSlotProps {
            active_index: self.active_index,
            total: self.total(),
            is_first: self.is_first(),
            is_last: self.is_last(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        }
    }

    pub fn header_props(&self) -> WizardHeaderSlotProps {
        WizardHeaderSlotProps {
            steps: self.steps.clone(),
            active_index: self.active_index,
        }
    }

    pub fn badge_props(&self, index: usize) -> Option<WizardBadgesSlotProps> {
        let step = self.steps.get(index)?.clone();
        Some(WizardBadgesSlotProps {
            index,
            step,
            status: self.status(index),
        })
    }

    fn previous_target(&self) -> Option<usize> {
        (0..self.active_index)
            .rev()
            .find(|&i| !self.steps[i].disabled)
    }

    fn next_target(&self) -> Option<usize> {
        (self.active_index + 1..self.steps.len()).find(|&i| !self.steps[i].disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_steps() -> WizardNavigation {
        WizardNavigation::from_titles(["Details", "Options", "Review"])
    }

    #[test]
    fn test_statuses_follow_active_step() {
        let mut wizard = three_steps();
        wizard.next();
        assert_eq!(wizard.status(0), WizardStepStatus::Complete);
        assert_eq!(wizard.status(1), WizardStepStatus::Active);
        assert_eq!(wizard.status(2), WizardStepStatus::Upcoming);
    }

    #[test]
    fn test_next_and_previous_emit_events() {
        let mut wizard = three_steps();
        assert!(wizard.is_first());
        assert!(!wizard.can_go_previous());
        assert_eq!(wizard.previous(), None);

        assert_eq!(wizard.next(), Some(WizardStepChangeEvent { from: 0, to: 1 }));
        assert_eq!(wizard.next(), Some(WizardStepChangeEvent { from: 1, to: 2 }));
        assert!(wizard.is_last());
        assert_eq!(wizard.next(), None);
        assert_eq!(wizard.previous(), Some(WizardStepChangeEvent { from: 2, to: 1 }));
    }

    #[test]
    fn test_disabled_steps_are_skipped() {
        let mut wizard = three_steps();
        wizard.step_mut(1).unwrap().disabled = true;
        assert_eq!(wizard.next(), Some(WizardStepChangeEvent { from: 0, to: 2 }));
        assert_eq!(wizard.go_to(1), None);
        assert_eq!(wizard.previous(), Some(WizardStepChangeEvent { from: 2, to: 0 }));
    }

    #[test]
    fn test_go_to_rejects_out_of_range_and_current() {
        let mut wizard = three_steps();
        assert_eq!(wizard.go_to(7), None);
        assert_eq!(wizard.go_to(0), None);
        assert_eq!(wizard.go_to(2), Some(WizardStepChangeEvent { from: 0, to: 2 }));
    }

    #[test]
    fn test_navigation_props_snapshot() {
        let mut wizard = three_steps();
        wizard.next();
        let props = wizard.navigation_props();
        assert_eq!(props.active_index, 1);
        assert_eq!(props.total, 3);
        assert!(!props.is_first);
        assert!(!props.is_last);
        assert!(props.can_go_previous);
        assert!(props.can_go_next);

        let badge = wizard.badge_props(2).unwrap();
        assert_eq!(badge.status, WizardStepStatus::Upcoming);
        assert_eq!(badge.step.title, "Review");
        assert!(wizard.badge_props(3).is_none());
    }

    #[test]
    fn test_new_clamps_active_index() {
        let wizard = WizardNavigation::new(vec![WizardStepMeta::new(0, "Only")], 5);
        assert_eq!(wizard.active_index(), 0);
        assert!(wizard.is_first() && wizard.is_last());
    }
}
