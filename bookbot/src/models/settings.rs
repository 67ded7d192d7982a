// src/models/settings.rs
use serde::Deserialize;
use std::path::PathBuf;

/// File-name pattern used when no other is configured.
pub const DEFAULT_PATTERN: &str = "*.txt";

/// Values read from a `.bookbot.toml` file or the command line.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Book file, or directory of books
    pub book: Option<PathBuf>,
    /// Glob matched against file names in directory mode
    pub pattern: Option<String>,
}

impl Settings {
    /// Returns `self` with every value present in `overrides` replaced.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            book: overrides.book.or(self.book),
            pattern: overrides.pattern.or(self.pattern),
        }
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }
}
