//! Clipboard access for copying generated passwords.
//!
//! The component only ever writes to the clipboard, so the seam is a single
//! write method. `SystemClipboard` uses `arboard` and opens a fresh handle
//! per write to avoid holding the clipboard between copies.

use crate::error::Result;

pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard (Windows/macOS/Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        // Common failures: no display server (headless Linux), clipboard
        // held by another process.
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
