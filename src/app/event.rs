use crossterm::event::Event as CrosstermEvent;

use crate::dialog::DialogError;

pub type TaskId = u64;

/// What a dialog answer is for, so the handler knows how to apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    DeleteTask { id: TaskId },
    Quit,
    Finish,
    /// Informational dialog; the answer changes nothing.
    Acknowledge,
}

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A dialog request was answered (or abandoned)
    DialogAnswered {
        decision: Decision,
        result: Result<bool, DialogError>,
    },

    /// Tick for status expiry and UI refresh
    Tick,
}
