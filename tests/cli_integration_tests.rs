//! Black-box tests for the bookshelf binary

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A scratch directory with a settings file pointing storage at itself
fn workspace(seed_demo: bool) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("bookshelf.yaml"),
        format!(
            "data_dir: .\ncatalog_file: catalog.bin\nseed_demo: {seed_demo}\nlog_level: \"off\"\n"
        ),
    )
    .unwrap();
    temp_dir
}

fn bookshelf(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bookshelf"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_demo_then_show() {
    let dir = workspace(false);

    let output = bookshelf(dir.path(), &["demo"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(dir.path().join("catalog.bin").exists());

    let output = bookshelf(dir.path(), &["show"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Main Catalog (6 items)\n  Fantasy Now Collection (1 items)\n"));
    assert!(text.contains("3 books, 2 magazines, 2 DVDs in 3 collections"));
}

#[test]
fn test_demo_refuses_to_overwrite_without_force() {
    let dir = workspace(false);
    assert!(bookshelf(dir.path(), &["demo"]).status.success());

    let output = bookshelf(dir.path(), &["demo"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already exists"));

    assert!(bookshelf(dir.path(), &["demo", "--force"]).status.success());
}

#[test]
fn test_search_is_case_insensitive() {
    let dir = workspace(true);

    let output = bookshelf(dir.path(), &["search", "TOLKIEN"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Found 1 item(s):"));

    let output = bookshelf(dir.path(), &["search", "no-such-thing"]);
    assert!(stdout(&output).contains("Nothing found for: no-such-thing"));
}

#[test]
fn test_add_persists_and_validation_is_reported() {
    let dir = workspace(false);

    let output = bookshelf(
        dir.path(),
        &["add", "collection", "--name", "Sci-Fi"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let output = bookshelf(
        dir.path(),
        &[
            "add", "book", "--title", "Dune", "--author", "Frank Herbert", "--year", "1965",
            "--isbn", "978-0441013593", "--into", "Sci-Fi",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let output = bookshelf(
        dir.path(),
        &["add", "book", "--title", "Old", "--author", "Scribe", "--year", "999", "--isbn", "x"],
    );
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim(),
        "Invalid input: year must be between 1000 and 2030 (got 999)"
    );

    let output = bookshelf(dir.path(), &["show"]);
    let text = stdout(&output);
    assert!(text.contains("Sci-Fi (1 items)"));
    assert!(text.contains("    Book: Dune by Frank Herbert (1965)"));
    assert!(!text.contains("Old"));
}

#[test]
fn test_list_and_remove() {
    let dir = workspace(true);
    assert!(bookshelf(dir.path(), &["demo"]).status.success());

    let output = bookshelf(dir.path(), &["list"]);
    let text = stdout(&output);
    assert!(text.contains("  1. [collection] Fantasy Now Collection (1 items)"));
    assert!(text.contains("  6. [dvd] DVD: The Matrix"));

    let output = bookshelf(dir.path(), &["remove", "The Matrix"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let output = bookshelf(
        dir.path(),
        &["remove", "Clean Code", "--from", "Digital Tech Collection"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let output = bookshelf(dir.path(), &["remove", "The Matrix"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no entry titled 'The Matrix'"));

    let text = stdout(&bookshelf(dir.path(), &["show"]));
    assert!(text.contains("Main Catalog (5 items)"));
    assert!(text.contains("Digital Tech Collection (1 items)"));
}

#[test]
fn test_unreadable_catalog_shows_short_message() {
    let dir = workspace(true);
    fs::write(dir.path().join("catalog.bin"), b"definitely not a catalog").unwrap();

    let output = bookshelf(dir.path(), &["show"]);
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim(),
        "Error: Unable to load the catalog from 'catalog.bin'"
    );
}

#[test]
fn test_demo_force_replaces_unreadable_catalog() {
    let dir = workspace(false);
    fs::write(dir.path().join("catalog.bin"), b"definitely not a catalog").unwrap();

    let output = bookshelf(dir.path(), &["demo"]);
    assert!(!output.status.success());

    let output = bookshelf(dir.path(), &["demo", "--force"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let output = bookshelf(dir.path(), &["show"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("Main Catalog (6 items)\n"));
}

#[test]
fn test_interactive_shell_over_stdin() {
    let dir = workspace(true);

    let mut child = Command::new(env!("CARGO_BIN_EXE_bookshelf"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"2\nnolan\n7\nsaved.bin\n0\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("===== BOOKSHELF ====="));
    assert!(text.contains("DVD: Inception directed by Christopher Nolan (2010, 148 min)"));
    assert!(text.contains("Catalog saved."));
    assert!(dir.path().join("saved.bin").exists());
}
