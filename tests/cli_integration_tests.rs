//! Integration tests for the csscompactor binary
//!
//! Every test runs the binary in a fresh temporary directory so that no
//! stray csscompactor.toml is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/css")
        .join(name)
}

fn input_arg() -> String {
    format!("/IN:{}", fixture("site.css").display())
}

fn csscompactor(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("csscompactor").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_help() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: No input file specified"))
        .stderr(predicate::str::contains(
            "Cascading StyleSheet compactor and syntax validator",
        ))
        .stderr(predicate::str::contains("/IN:"));
}

#[test]
fn test_unrecognized_argument() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .args([input_arg().as_str(), "/X"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Unrecognized argument: /X"));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .arg("/IN:does-not-exist.css")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input file not found: does-not-exist.css"));
}

#[test]
fn test_human_output() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .args([
            "--color",
            "never",
            input_arg().as_str(),
            "/OUT:site.min.css",
            "/INFO:(c)2007 My CSS",
            "/pretty",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments:"))
        .stdout(predicate::str::contains("  output-file   site.min.css\n"))
        .stdout(predicate::str::contains("  copyright     (c)2007 My CSS\n"))
        .stdout(predicate::str::contains("  pretty-print  on\n"))
        .stdout(predicate::str::contains("  mode          pretty print\n"));
}

#[test]
fn test_jsonl_output() {
    let dir = TempDir::new().unwrap();

    let output = csscompactor(&dir)
        .args([
            "--format",
            "jsonl",
            input_arg().as_str(),
            "/TIME:yyyy-MM-dd",
            "/WARNING",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["kind"], "input-file");
    assert_eq!(records[1]["kind"], "time-stamp");
    assert_eq!(records[1]["value"], "yyyy-MM-dd");
    assert_eq!(records[2]["kind"], "warning");
    assert_eq!(records[3]["type"], "request");
    assert_eq!(records[3]["output"]["kind"], "stdout");
    assert_eq!(records[3]["issues_as_warnings"], true);
}

#[test]
fn test_last_argument_wins() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .args([
            "--format",
            "jsonl",
            "/IN:missing.css",
            input_arg().as_str(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing.css").not());
}

#[test]
fn test_syntax_only_with_output_file_warns() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .args([
            "--color",
            "never",
            input_arg().as_str(),
            "/OUT:ignored.css",
            "/SYNTAX",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Cannot specify an output file when using /SYNTAX",
        ))
        .stdout(predicate::str::contains("  output        (discarded)\n"));
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("csscompactor.toml"),
        "[output]\nformat = \"jsonl\"\n\n[[prefix]]\nprefix = \"-i:\"\nkind = \"input-file\"\n",
    )
    .unwrap();

    csscompactor(&dir)
        .arg(format!("-I:{}", fixture("site.css").display()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"{"type":"argument","kind":"input-file""#,
        ));

    csscompactor(&dir)
        .arg(input_arg())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unrecognized argument"));
}

#[test]
fn test_explicit_config_is_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let config = fixture("custom-prefixes.toml");
    let input = fixture("site.css");

    csscompactor(&dir)
        .arg("--config")
        .arg(&config)
        .args(["--color", "never"])
        .arg(format!("--in={}", input.display()))
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("  pretty-print  on\n"));

    csscompactor(&dir)
        .arg("--config")
        .arg(&config)
        .arg(format!("--IN={}", input.display()))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unrecognized argument: --IN="));
}

#[test]
fn test_case_sensitive_flag() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .arg("--case-sensitive")
        .arg(format!("/in:{}", fixture("site.css").display()))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unrecognized argument: /in:"));
}

#[test]
fn test_invalid_config_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("csscompactor.toml"),
        "[[prefix]]\nprefix = \"\"\nkind = \"input-file\"\n",
    )
    .unwrap();

    csscompactor(&dir)
        .arg(input_arg())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid prefix table"))
        .stderr(predicate::str::contains("Cascading StyleSheet").not());
}

#[test]
fn test_missing_explicit_config() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .args(["--config", "nope.toml"])
        .arg(input_arg())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file 'nope.toml'"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();

    csscompactor(&dir)
        .args(["-v", "--format", "jsonl"])
        .arg(input_arg())
        .assert()
        .success()
        .stderr(predicate::str::contains("built prefix router"));
}
