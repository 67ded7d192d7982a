// src/core/report.rs
use anyhow::Result;
use std::path::Path;

use crate::core::counter::{count_words, parse_letters};
use crate::core::reader::read_book;
use crate::models::{BookReport, LetterFrequency};

/// Builds the report lines for one book.
///
/// Letters are listed in the order `letters` yields them; entries that are
/// not alphabetic are left out.
#[must_use]
pub fn report_lines(label: &str, word_count: usize, letters: &LetterFrequency) -> Vec<String> {
    let mut lines = vec![
        format!("--- Begin report of {label} ---"),
        format!("{word_count} words found in the document"),
        String::new(),
    ];
    lines.extend(
        letters
            .alphabetic()
            .map(|(c, count)| format!("The '{c}' was found {count} times")),
    );
    lines.push(String::from("--- End report ---"));
    lines
}

/// Renders the report as a single string, one line per entry of [`report_lines`].
#[inline]
#[must_use]
pub fn generate_report(label: &str, word_count: usize, letters: &LetterFrequency) -> String {
    report_lines(label, word_count, letters).join("\n")
}

/// Reads the book at `path` and counts its words and letters.
///
/// # Errors
///
/// Returns an error if the book cannot be read; see [`read_book`].
pub fn analyze_book(path: &Path, label: &str) -> Result<BookReport> {
    let content = read_book(path)?;
    let words = count_words(&content);
    let letters = parse_letters(&content);
    log::debug!(
        "{}: {} words, {} distinct characters",
        path.display(),
        words,
        letters.len()
    );
    Ok(BookReport::new(label, words, letters))
}
