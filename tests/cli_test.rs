//! End-to-end tests driving the check-dependency binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-dependency"))
        .args(args)
        .env_remove("CHECK_DEPENDENCY_FORMAT")
        .env_remove("CHECK_DEPENDENCY_ERROR_ON_CYCLES")
        .env_remove("CHECK_DEPENDENCY_VERBOSE")
        .env_remove("CHECK_DEPENDENCY_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run check-dependency")
}

fn write_listing(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("deps.txt");
    fs::write(&path, contents).unwrap();
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_check_reports_cycle() {
    let dir = TempDir::new().unwrap();
    let file = write_listing(&dir, "A: B\nB: C\nC: A\n");

    let output = run(&["check", &file]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Cyclic dependency\n");
}

#[test]
fn test_check_reports_no_cycle() {
    let dir = TempDir::new().unwrap();
    let file = write_listing(&dir, "A: B, C\nB:\nC:\n");

    let output = run(&["check", &file]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No Cyclic dependency\n");
}

#[test]
fn test_error_on_cycles_sets_exit_code() {
    let dir = TempDir::new().unwrap();
    let cyclic = write_listing(&dir, "A: A\n");

    let output = run(&["check", &cyclic, "--error-on-cycles"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Cyclic dependency\n");

    let acyclic = dir.path().join("ok.txt");
    fs::write(&acyclic, "A: B\n").unwrap();
    let output = run(&["check", &path_str(&acyclic), "--error-on-cycles"]);
    assert!(output.status.success());
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_listing(&dir, "A: B, B\nB:\nC: A\n");

    let output = run(&["check", &file, "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["cyclic"], false);
    assert_eq!(value["nodes"], 3);
    assert_eq!(value["edges"], 2);
    assert_eq!(value["file"], file.as_str());
}

#[test]
fn test_malformed_input_fails_without_verdict() {
    let dir = TempDir::new().unwrap();
    let file = write_listing(&dir, "justaname\n");

    let output = run(&["check", &file]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(predicate::str::contains("line 1").eval(&stderr(&output)));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = path_str(&dir.path().join("missing.txt"));

    let output = run(&["check", &missing]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(predicate::str::contains("Error! trying to open the file").eval(&stderr(&output)));
}

#[test]
fn test_wrong_argument_count_is_rejected() {
    let output = run(&["check"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");

    let output = run(&["check", "a.txt", "b.txt"]);
    assert!(!output.status.success());
}

#[test]
fn test_lineup_prints_normalized_listing() {
    let dir = TempDir::new().unwrap();
    let file = write_listing(&dir, "A: B, B\n\nA: C\nC: D\n");

    let output = run(&["lineup", &file]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "A: B, C\nB:\nC: D\nD:\n");
}

#[test]
fn test_lineup_json() {
    let dir = TempDir::new().unwrap();
    let file = write_listing(&dir, "x: y\n");

    let output = run(&["lineup", &file, "-f", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["name"], "x");
    assert_eq!(value[0]["dependencies"][0], "y");
    assert_eq!(value[1]["name"], "y");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let file = write_listing(&dir, "a: b\nb: a\n");

    let output = run(&["check", &file, "--verbose"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Cyclic dependency\n");
    assert!(predicate::str::contains("cycle detection finished").eval(&stderr(&output)));
}
