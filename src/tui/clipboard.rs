//! Clipboard abstraction layer.

/// Trait for clipboard operations.
pub trait ClipboardProvider {
    /// Put text on the clipboard; `false` when the clipboard is unavailable.
    fn set_text(&mut self, text: String) -> bool;
}

/// System clipboard implementation using arboard.
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: String) -> bool {
        let mut cb = match arboard::Clipboard::new() {
            Ok(cb) => cb,
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                return false;
            }
        };
        cb.set_text(text).is_ok()
    }
}
