// src/core/counter.rs
use crate::models::LetterFrequency;

// Unicode whitespace plus the ASCII file, group, record and unit separators,
// which also delimit words.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Splits `content` into words: maximal runs of non-separator characters.
pub fn words(content: &str) -> impl Iterator<Item = &str> {
    content.split(is_separator).filter(|word| !word.is_empty())
}

/// Counts the whitespace-delimited words in `content`.
///
/// Runs of whitespace count as one separator and leading or trailing
/// whitespace is ignored, so empty or blank content has zero words.
#[inline]
#[must_use]
pub fn count_words(content: &str) -> usize {
    words(content).count()
}

/// Tallies every character of every word in `content`, lower-cased, most
/// frequent first.
///
/// Digits and punctuation are counted too; dropping them is left to the report.
#[inline]
#[must_use]
pub fn parse_letters(content: &str) -> LetterFrequency {
    LetterFrequency::tally(words(content).flat_map(str::chars))
}
