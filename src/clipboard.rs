use anyhow::{Context, Result};
use arboard::Clipboard;

/// A destination for clipboard text.
///
/// The poller writes through this trait so tests can observe writes
/// without touching the real clipboard.
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The host system clipboard, written via arboard.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    /// Copy text to the system clipboard.
    ///
    /// Opens a fresh handle per write; arboard handles are not `Sync`,
    /// and a stale handle can miss ownership changes on X11.
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new()
            .context("Failed to access system clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;
        Ok(())
    }
}
