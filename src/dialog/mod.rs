//! Confirm/alert dialogs driven by futures.
//!
//! A [`DialogCoordinator`] holds the state of the one dialog a rendering
//! surface displays. Callers ask for a dialog with [`DialogCoordinator::show`]
//! (or the `alert`/`confirm` shorthands) and get back a [`DialogHandle`] that
//! resolves once the surface reports the user's choice.

mod coordinator;
mod error;
mod handle;
mod types;

pub use coordinator::{DialogCoordinator, OverlapPolicy};
pub use error::DialogError;
pub use handle::{pending, Completer, DialogHandle};
pub use types::{
    DialogConfig, DialogProps, DialogState, DEFAULT_PRIMARY_LABEL, DEFAULT_SECONDARY_LABEL,
};
