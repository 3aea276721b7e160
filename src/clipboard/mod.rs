//! Clipboard integration for the copy-to-clipboard action.
//!
//! Provides a [`ClipboardProvider`] trait with two implementations:
//! - [`SystemClipboard`] - OS clipboard backed by `arboard`
//! - [`NullClipboard`] - No-op implementation for headless environments

mod null_clipboard;
mod provider;
mod system_clipboard;

pub use null_clipboard::NullClipboard;
pub use provider::{ClipboardError, ClipboardProvider, ClipboardResult};
pub use system_clipboard::SystemClipboard;
