// src/models.rs
pub mod book_report;
pub mod letter_frequency;
pub mod settings;

pub use book_report::BookReport;
pub use letter_frequency::LetterFrequency;
pub use settings::{DEFAULT_PATTERN, Settings};
