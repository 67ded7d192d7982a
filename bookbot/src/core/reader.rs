// src/core/reader.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Reads the whole book at `path` into a string.
///
/// The file is opened once and closed before this returns, on success or failure.
///
/// # Errors
///
/// This function will return an error if:
/// * The file does not exist or cannot be opened
/// * The content is not valid UTF-8
#[inline]
pub fn read_book(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read book: {}", path.display()))?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
