// src/cli.rs
use anyhow::{Context as _, Result, anyhow, bail};
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};

use crate::core::config::{CONFIG_FILE_NAME, load_settings};
use crate::core::library::collect_books;
use crate::core::report::analyze_book;
use crate::models::{BookReport, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Book to analyse, or a directory of books
    pub book: Option<PathBuf>,

    /// Label for the report header (defaults to the book path)
    #[arg(short, long)]
    pub label: Option<String>,

    /// File-name pattern selecting books in a directory (e.g., "*.txt")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Configuration file to use instead of the nearest .bookbot.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Resolves the book(s) named by `args` and the configuration file, and
/// builds one report per book.
///
/// Every book is read before anything is returned, so a failure leaves no
/// partial output behind.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration file cannot be read or parsed
/// * No book is given on the command line or in the configuration
/// * A directory holds no books matching the pattern
/// * Any book cannot be read
pub fn build_reports(args: &Args) -> Result<Vec<BookReport>> {
    let cwd = env::current_dir().context("Failed to resolve the working directory")?;
    let settings = load_settings(args.config.as_deref(), &cwd)?.merge(Settings {
        book: args.book.clone(),
        pattern: args.pattern.clone(),
    });

    let book = settings.book.as_deref().ok_or_else(|| {
        anyhow!("No book given: pass a path or set `book` in {CONFIG_FILE_NAME}")
    })?;

    let is_dir = book.is_dir();
    let kind = if is_dir { "directory" } else { "single book" };
    for option in ignored_options(args, &settings, is_dir) {
        log::warn!("{option} is ignored when reporting on a {kind}");
    }

    if is_dir {
        library_reports(book, settings.pattern())
    } else {
        let label = args
            .label
            .clone()
            .unwrap_or_else(|| book.display().to_string());
        Ok(vec![analyze_book(book, &label)?])
    }
}

// Options that have no effect for the kind of book being reported on.
fn ignored_options(args: &Args, settings: &Settings, is_dir: bool) -> Vec<&'static str> {
    let mut ignored = Vec::new();
    if is_dir && args.label.is_some() {
        ignored.push("--label");
    }
    if !is_dir && settings.pattern.is_some() {
        ignored.push("--pattern");
    }
    ignored
}

fn library_reports(dir: &Path, pattern: &str) -> Result<Vec<BookReport>> {
    let books = collect_books(dir, pattern)?;
    if books.is_empty() {
        bail!("No books matching '{}' found in {}", pattern, dir.display());
    }

    books
        .iter()
        .map(|path| {
            let label = path.strip_prefix(dir).unwrap_or(path).display().to_string();
            analyze_book(path, &label)
        })
        .collect()
}

/// Builds the reports for `args` and prints them to stdout, separated by a
/// blank line.
///
/// # Errors
///
/// See [`build_reports`].
pub fn run(args: Args) -> Result<()> {
    let reports = build_reports(&args)?;
    let rendered: Vec<String> = reports.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join("\n\n"));
    Ok(())
}
