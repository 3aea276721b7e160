//! No-op clipboard implementation for headless environments.

use super::provider::{ClipboardError, ClipboardProvider, ClipboardResult};
use tracing::debug;

/// A clipboard provider with no clipboard behind it.
///
/// Every write fails with [`ClipboardError::Unavailable`], so the copy
/// confirmation is never shown for text that was not actually copied.
///
/// # Use Cases
///
/// - SSH sessions and containers without a display server
/// - CI environments running the binary end to end
pub struct NullClipboard;

impl NullClipboard {
    /// Creates a new NullClipboard instance.
    pub fn new() -> Self {
        debug!("Using NullClipboard (clipboard disabled)");
        Self
    }
}

impl Default for NullClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardProvider for NullClipboard {
    fn set_text(&mut self, _text: &str) -> ClipboardResult<()> {
        Err(ClipboardError::Unavailable(
            "no clipboard in this environment".to_string(),
        ))
    }
}
