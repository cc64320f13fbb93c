use crate::app::event::Decision;
use crate::dialog::DialogHandle;

#[derive(Debug)]
pub enum Action {
    /// Wait for the user's answer off the event loop and report it back as
    /// `AppEvent::DialogAnswered`.
    AwaitDialog { decision: Decision, handle: DialogHandle },
    Quit,
}
