// src/models/book_report.rs
use std::fmt;

use crate::core::report::{generate_report, report_lines};
use crate::models::LetterFrequency;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReport {
    pub label: String,
    pub words: usize,
    pub letters: LetterFrequency,
}

impl BookReport {
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, words: usize, letters: LetterFrequency) -> Self {
        Self {
            label: label.into(),
            words,
            letters,
        }
    }

    #[inline]
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        report_lines(&self.label, self.words, &self.letters)
    }
}

impl fmt::Display for BookReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&generate_report(&self.label, self.words, &self.letters))
    }
}
