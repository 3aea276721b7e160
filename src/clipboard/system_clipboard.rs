//! OS clipboard implementation backed by `arboard`.

use super::provider::{ClipboardError, ClipboardProvider, ClipboardResult};
use tracing::debug;

/// Clipboard provider that writes to the real OS clipboard.
///
/// Holds the platform handle for the lifetime of the session. On X11 the
/// clipboard contents are owned by this process, so the handle (and the
/// process) must outlive any paste.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connects to the OS clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when no clipboard exists,
    /// typically in headless or sandboxed environments. Callers should fall
    /// back to [`crate::clipboard::NullClipboard`].
    pub fn new() -> ClipboardResult<Self> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        debug!("Using SystemClipboard");
        Ok(Self { inner })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::WriteError(e.to_string()))
    }
}
