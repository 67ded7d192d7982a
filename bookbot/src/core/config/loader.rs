// src/core/config/loader.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::CONFIG_FILE_NAME;
use crate::models::Settings;

/// Looks for a `.bookbot.toml` in `dir`, then in each parent directory in
/// turn, returning the first one found.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Parses the configuration file at `path`.
///
/// A relative `book` is resolved against the directory holding the file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or has unknown keys
pub fn load_config_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut settings: Settings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    if let Some(book) = settings.book.take() {
        settings.book = Some(match path.parent() {
            Some(base) if book.is_relative() => base.join(book),
            _ => book,
        });
    }

    log::info!("loaded config from {}", path.display());
    Ok(settings)
}
