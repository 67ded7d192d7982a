// tests/integration_tests/errors_test.rs
use super::common::{create_config_file, setup_test_library};
use anyhow::Result;
use bookbot::{Args, analyze_book, build_reports, run};
use std::io;
use tempfile::TempDir;

#[test]
fn test_missing_book() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("frankenstein.txt");

    let err = analyze_book(&missing, "frankenstein.txt").expect_err("Missing book should fail");
    let io_err = err
        .root_cause()
        .downcast_ref::<io::Error>()
        .expect("Root cause should be an io::Error");
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

    let args = Args {
        book: Some(missing),
        label: None,
        pattern: None,
        config: None,
    };
    assert!(run(args).is_err(), "Run should stop on the missing book");
    Ok(())
}

#[test]
fn test_no_book_given() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = create_config_file(temp_dir.path(), &["# nothing configured"])?;

    let args = Args {
        book: None,
        label: None,
        pattern: None,
        config: Some(config),
    };
    let err = build_reports(&args).expect_err("No book should fail");
    assert!(err.to_string().contains("No book given"));
    Ok(())
}

#[test]
fn test_no_matching_books() -> Result<()> {
    let temp_dir = setup_test_library()?;

    let args = Args {
        book: Some(temp_dir.path().to_path_buf()),
        label: None,
        pattern: Some(String::from("*.epub")),
        config: None,
    };
    let err = build_reports(&args).expect_err("Empty library should fail");
    assert!(err.to_string().contains("No books matching '*.epub'"));
    Ok(())
}

#[test]
fn test_unreadable_book_in_library() -> Result<()> {
    let temp_dir = setup_test_library()?;
    std::fs::write(temp_dir.path().join("broken.txt"), [0xff, 0xfe, 0xfd])?;

    let args = Args {
        book: Some(temp_dir.path().to_path_buf()),
        label: None,
        pattern: None,
        config: None,
    };
    let err = build_reports(&args).expect_err("One bad book should fail the run");
    assert!(err.to_string().contains("broken.txt"));
    Ok(())
}
