//! Tests driving the `history-splitter` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn splitter() -> Command {
    Command::cargo_bin("history-splitter").unwrap()
}

#[test]
fn test_cli_reports_each_append() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("history.md");
    fs::write(
        &input,
        "## 2024-01-01 09:00:00 の出力\nA\n\n## 2024-01-02 10:00:00 の出力\nC\n",
    )
    .unwrap();
    let out = dir.path().join("archives");

    splitter()
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created directory:"))
        .stdout(predicate::str::contains("20240101_history.md"))
        .stdout(predicate::str::contains("20240102_history.md"))
        .stdout(predicate::str::contains("Done: 2 section(s) into 2 file(s)"));

    assert!(out.join("20240101_history.md").is_file());
    assert!(out.join("20240102_history.md").is_file());
}

#[test]
fn test_cli_default_paths() {
    let dir = tempdir().unwrap();
    let github = dir.path().join(".github");
    fs::create_dir_all(&github).unwrap();
    fs::write(github.join("history.md"), "## 2024-03-01 12:00:00 の出力\nX\n").unwrap();

    splitter().current_dir(dir.path()).assert().success();

    let archive = Path::new(".github").join("archives").join("20240301_history.md");
    assert!(dir.path().join(archive).is_file());
}

#[test]
fn test_cli_missing_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("archives");

    splitter()
        .arg("-i")
        .arg(dir.path().join("missing.md"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Input file not found"))
        .stderr(predicate::str::contains("missing.md"));

    assert!(!out.exists());
}
