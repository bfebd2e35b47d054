use raw_window_handle::HandleError;

/// Failures that happen before a dialog is presented.
///
/// Once a dialog is on screen nothing is reported as an error: cancelling is
/// `None`, and the native toolkit reports its own failures the same way.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// The parent window or its display did not yield a usable handle.
    #[error("parent window handle is unavailable: {0}")]
    ParentUnavailable(#[from] HandleError),
    /// A file type filter that no chooser can represent.
    #[error("invalid file type filter {name:?}: {reason}")]
    InvalidFilter { name: String, reason: &'static str },
    /// A settings document that could not be parsed.
    #[error("invalid dialog settings: {0}")]
    Settings(#[from] serde_json::Error),
}
