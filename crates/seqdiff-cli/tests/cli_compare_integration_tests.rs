//! CLI integration tests
//!
//! These tests run the built binary and check its stdout, stderr and
//! exit status.

use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seqdiff"))
}

fn write(temp_dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    cli().args(args).output().expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_compare_files_lines_json() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(&temp_dir, "a.txt", "Hello World\nThis is line 2\nGoodbye\n");
    let b = write(
        &temp_dir,
        "b.txt",
        "Hello World\nThis is line two\nGoodbye\nNew line\n",
    );

    let output = run(&["compare", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "lines");
    assert_eq!(json["runs"].as_array().unwrap().len(), 5);
    assert_eq!(json["runs"][1]["kind"], "removed");
    assert_eq!(json["runs"][1]["value"], "This is line 2");
    assert_eq!(json["stats"]["additions"], 2);
    assert_eq!(json["stats"]["deletions"], 1);
    assert_eq!(json["stats"]["unchanged"], 2);
    assert_eq!(json["stats"]["totalChanges"], 3);
    assert_eq!(json["stats"]["similarity"], 40.0);
}

#[test]
fn test_compare_inline_chars_text() {
    let output = run(&[
        "compare", "Hello", "Hallo", "--inline", "--mode", "chars", "--format", "text",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("similarity: 66.67%"));
    assert!(stdout.contains("  H\n- e\n+ a\n  llo\n"));
}

#[test]
fn test_compare_ignore_case_words() {
    let output = run(&[
        "compare",
        "Quick Brown Fox",
        "quick brown fox",
        "--inline",
        "--mode",
        "words",
        "--ignore-case",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["stats"]["similarity"], 100.0);
}

#[test]
fn test_compare_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("diff.json");

    let output = run(&[
        "compare",
        "a b c",
        "a c",
        "--inline",
        "--mode",
        "words",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let json: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["stats"]["deletions"], 1);
}

#[test]
fn test_compare_respects_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = write(
        &temp_dir,
        "seqdiff.toml",
        "max_elements = 3\ndefault_mode = \"chars\"\n",
    );

    let ok = run(&[
        "compare",
        "abc",
        "abd",
        "--inline",
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(ok.status.success());
    assert_eq!(stdout_json(&ok)["mode"], "chars");

    let too_large = run(&[
        "compare",
        "abcd",
        "abc",
        "--inline",
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(!too_large.status.success());
    let stderr = String::from_utf8_lossy(&too_large.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("exceeding the limit of 3"), "stderr: {stderr}");
}

#[test]
fn test_compare_trace_budget_flag() {
    // 20 bytes fits only an identical-input search.
    let same = run(&[
        "compare", "abc", "abc", "--inline", "--mode", "chars", "--max-trace-bytes", "20",
        "--format", "text",
    ]);
    assert!(same.status.success());
    assert!(String::from_utf8_lossy(&same.stdout).contains("(identical)"));

    let differ = run(&[
        "compare", "abc", "abd", "--inline", "--mode", "chars", "--max-trace-bytes", "20",
    ]);
    assert!(!differ.status.success());
    let stderr = String::from_utf8_lossy(&differ.stderr);
    assert!(stderr.contains("more than 0 edits"), "stderr: {stderr}");
}

#[test]
fn test_compare_rejects_unusable_trace_budget() {
    let output = run(&["compare", "a", "a", "--inline", "--max-trace-bytes", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_trace_bytes"));
}

#[test]
fn test_compare_missing_file_fails() {
    let output = run(&["compare", "/nonexistent/a.txt", "/nonexistent/b.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/a.txt"));
}

#[test]
fn test_compare_rejects_unknown_mode() {
    let output = run(&["compare", "a", "b", "--inline", "--mode", "pixels"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pixels"));
}

#[test]
fn test_config_show_defaults_and_overrides() {
    let output = run(&["config", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("max_elements = 50000"));
    assert!(stdout.contains("max_trace_bytes = 268435456"));
    assert!(stdout.contains("default_mode = \"lines\""));

    let temp_dir = TempDir::new().unwrap();
    let config = write(&temp_dir, "seqdiff.toml", "default_mode = \"words\"\n");
    let output = run(&["config", "show", "--config", config.to_str().unwrap()]);
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains("default_mode = \"words\""));
}
