//! Component prop types shared by the rendering surface and callers.

pub mod button;
pub mod wizard;

pub use button::{ButtonElement, ButtonProps, ButtonSeverity, ButtonSize, ButtonVariant};
pub use wizard::{
    WizardBadgesSlotProps, WizardHeaderSlotProps, WizardNavigation, WizardNavigationSlotProps,
    WizardStepChangeEvent, WizardStepMeta, WizardStepStatus,
};
