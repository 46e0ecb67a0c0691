//! System clipboard access for `--copy`.

use anyhow::{Context, Result};

/// Place `text` on the system clipboard verbatim.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("could not open the system clipboard")?;
    clipboard
        .set_text(text)
        .context("could not write to the system clipboard")?;
    Ok(())
}
