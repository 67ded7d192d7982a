// src/core/library.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::is_hidden;

/// Collects the books in `dir` and its subdirectories whose file name matches
/// `pattern`.
///
/// Hidden files and directories are skipped. Paths come back sorted so that
/// reports are printed in a stable order.
///
/// # Errors
///
/// This function may return an error if:
/// * `pattern` is not a valid glob
/// * The directory cannot be accessed or read
/// * File system operations fail during traversal
pub fn collect_books(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher =
        Pattern::new(pattern).with_context(|| format!("Invalid book pattern: {pattern}"))?;
    let mut books = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.matches(name))
        {
            books.push(entry.into_path());
        }
    }

    books.sort();
    log::info!(
        "found {} books matching '{}' in {}",
        books.len(),
        pattern,
        dir.display()
    );
    Ok(books)
}
