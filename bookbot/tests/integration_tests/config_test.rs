// tests/integration_tests/config_test.rs
use super::common::{create_config_file, setup_test_library};
use anyhow::Result;
use bookbot::{Args, build_reports, load_settings};

#[test]
fn test_book_from_config() -> Result<()> {
    let temp_dir = setup_test_library()?;
    let config = create_config_file(temp_dir.path(), &["book = \"hello.txt\""])?;

    let args = Args {
        book: None,
        label: None,
        pattern: None,
        config: Some(config),
    };
    let reports = build_reports(&args)?;

    assert_eq!(reports.len(), 1);
    let report = reports.first().expect("one report");
    assert_eq!(report.words, 2);
    assert_eq!(
        report.label,
        temp_dir.path().join("hello.txt").display().to_string()
    );
    Ok(())
}

#[test]
fn test_command_line_overrides_config() -> Result<()> {
    let temp_dir = setup_test_library()?;
    let config = create_config_file(
        temp_dir.path(),
        &["book = \"hello.txt\"", "pattern = \"*.md\""],
    )?;

    let args = Args {
        book: Some(temp_dir.path().join("shelf")),
        label: None,
        pattern: None,
        config: Some(config.clone()),
    };
    let reports = build_reports(&args)?;
    let labels: Vec<&str> = reports.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["readme.md"], "Pattern should come from the config");

    let args = Args {
        book: Some(temp_dir.path().join("shelf")),
        label: None,
        pattern: Some(String::from("*.txt")),
        config: Some(config),
    };
    let reports = build_reports(&args)?;
    let labels: Vec<&str> = reports.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["numbers.txt"], "Command line pattern should win");
    Ok(())
}

#[test]
fn test_discovered_config() -> Result<()> {
    let temp_dir = setup_test_library()?;
    create_config_file(temp_dir.path(), &["pattern = \"*.md\""])?;
    let shelf = temp_dir.path().join("shelf");

    let settings = load_settings(None, &shelf)?;
    assert_eq!(settings.pattern(), "*.md");
    Ok(())
}
