//! Clipboard functionality

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Read a pasted link from the system clipboard, trimmed
pub fn read_link() -> Result<String> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    let content = clipboard.get_text().context("Failed to read clipboard")?;
    Ok(content.trim().to_string())
}
