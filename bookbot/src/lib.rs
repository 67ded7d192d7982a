// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, build_reports, run};
pub use crate::core::config::{CONFIG_FILE_NAME, find_config_file, load_config_file, load_settings};
pub use crate::core::counter::{count_words, parse_letters};
pub use crate::core::library::collect_books;
pub use crate::core::reader::read_book;
pub use crate::core::report::{analyze_book, generate_report, report_lines};
pub use crate::models::{BookReport, LetterFrequency, Settings};
