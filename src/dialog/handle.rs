//! Single-use completion pairs for dialog requests.
//!
//! [`pending`] creates a [`Completer`] that the coordinator keeps and a
//! [`DialogHandle`] that the caller awaits. The completer is consumed on
//! fulfilment, so a request can be answered at most once.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::debug;

use super::error::DialogError;

pub fn pending() -> (Completer, DialogHandle) {
    let (tx, rx) = oneshot::channel();
    (Completer { tx }, DialogHandle { rx })
}

#[derive(Debug)]
pub struct Completer {
    tx: oneshot::Sender<bool>,
}

impl Completer {
    pub fn fulfil(self, result: bool) {
        if self.tx.send(result).is_err() {
            debug!(result, "dialog answered after its caller stopped waiting");
        }
    }

    /// True once the caller has dropped its handle.
    pub fn is_orphaned(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Resolves to `Ok(true)` for the primary action, `Ok(false)` for the
/// secondary action or a dismissal.
#[derive(Debug)]
#[must_use = "a dialog handle does nothing unless awaited or polled"]
pub struct DialogHandle {
    rx: oneshot::Receiver<bool>,
}

impl DialogHandle {
    /// Non-blocking check. `None` while the user has not answered yet.
    pub fn try_result(&mut self) -> Option<Result<bool, DialogError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(Ok(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(DialogError::Abandoned)),
        }
    }
}

impl Future for DialogHandle {
    type Output = Result<bool, DialogError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|r| r.map_err(|_| DialogError::Abandoned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fulfil_resolves_handle() {
        let (completer, handle) = pending();
        completer.fulfil(true);
        assert_eq!(handle.await, Ok(true));
    }

    #[tokio::test]
    async fn test_dropped_completer_abandons_handle() {
        let (completer, handle) = pending();
        drop(completer);
        assert_eq!(handle.await, Err(DialogError::Abandoned));
    }

    #[test]
    fn test_try_result_is_none_while_pending() {
        let (completer, mut handle) = pending();
        assert_eq!(handle.try_result(), None);
        completer.fulfil(false);
        assert_eq!(handle.try_result(), Some(Ok(false)));
    }

    #[test]
    fn test_fulfil_after_handle_dropped_is_silent() {
        let (completer, handle) = pending();
        drop(handle);
        assert!(completer.is_orphaned());
        completer.fulfil(true);
    }
}
