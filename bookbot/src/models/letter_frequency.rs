// src/models/letter_frequency.rs
use std::collections::HashMap;

/// Occurrence counts of lower-cased characters.
///
/// Entries are kept in report order. Built with [`LetterFrequency::tally`] that
/// order is descending by count, with ties left in first-encounter order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterFrequency {
    entries: Vec<(char, usize)>,
}

impl LetterFrequency {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Counts every character of `chars` after folding it to lower case, then
    /// orders the entries by descending count.
    ///
    /// The sort is stable, so characters with equal counts stay in the order
    /// they were first seen.
    #[must_use]
    pub fn tally<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut index: HashMap<char, usize> = HashMap::new();
        let mut entries: Vec<(char, usize)> = Vec::new();

        for c in chars {
            let key = fold_case(c);
            let slot = *index.entry(key).or_insert_with(|| {
                entries.push((key, 0));
                entries.len().saturating_sub(1)
            });
            if let Some(entry) = entries.get_mut(slot) {
                entry.1 = entry.1.saturating_add(1);
            }
        }

        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, c: char) -> Option<usize> {
        self.entries
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, count)| *count)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries
            .iter()
            .fold(0_usize, |acc, (_, count)| acc.saturating_add(*count))
    }

    /// Iterates `(character, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Like [`LetterFrequency::iter`] but skips digits, punctuation and other
    /// non-alphabetic characters.
    pub fn alphabetic(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.iter().filter(|(c, _)| c.is_alphabetic())
    }
}

/// Keeps the given order; repeated keys are merged into the first occurrence.
impl FromIterator<(char, usize)> for LetterFrequency {
    fn from_iter<T: IntoIterator<Item = (char, usize)>>(iter: T) -> Self {
        let mut entries: Vec<(char, usize)> = Vec::new();
        for (c, count) in iter {
            if let Some(entry) = entries.iter_mut().find(|(key, _)| *key == c) {
                entry.1 = entry.1.saturating_add(count);
            } else {
                entries.push((c, count));
            }
        }
        Self { entries }
    }
}

// Characters whose lower case form is more than one char keep their original form.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
