//! Clipboard provider trait and error types.

use std::fmt;

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// No clipboard is available in this environment.
    Unavailable(String),
    /// The clipboard exists but the write failed.
    WriteError(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "Clipboard unavailable: {}", e),
            Self::WriteError(e) => write!(f, "Clipboard write error: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Trait for placing text on the clipboard.
///
/// The form logic only ever writes; reads and format negotiation are out of
/// scope. Failures must not disrupt the flow: callers log them and skip the
/// copy confirmation.
///
/// # Implementations
///
/// - [`crate::clipboard::SystemClipboard`] - OS clipboard via `arboard`
/// - [`crate::clipboard::NullClipboard`] - Always fails, for headless environments
pub trait ClipboardProvider {
    /// Places `text` on the clipboard, replacing previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error when the environment has no clipboard or the write
    /// is rejected. Callers treat any error as "nothing was copied".
    fn set_text(&mut self, text: &str) -> ClipboardResult<()>;
}
