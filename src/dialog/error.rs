use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DialogError {
    /// The request's completion was dropped before the user answered: it was
    /// replaced by a newer request, or the coordinator went away.
    #[error("dialog request was abandoned before the user responded")]
    Abandoned,
}
