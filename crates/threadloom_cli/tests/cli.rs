//! Integration tests for the `threadloom` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Runs inside `dir` so no developer `.env` is picked up.
fn threadloom_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_threadloom"));
    cmd.current_dir(dir.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT")
        .env("NO_COLOR", "1");
    cmd
}

fn run_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    let dir = TempDir::new().unwrap();
    let mut child = threadloom_in(&dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn threadloom");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait threadloom")
}

#[test]
fn segment_reads_stdin_and_prints_json() {
    let out = run_with_stdin(
        &["--output", "json", "segment", "--count", "2"],
        "intro noise\n1. First\nmore text\n2. Second\n3. Extra",
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let line: Value = serde_json::from_str(stdout.trim()).expect("one JSON line");
    assert_eq!(line["level"], "data");
    assert_eq!(
        line["data"]["thread"],
        serde_json::json!(["1. First\nmore text", "2. Second\n3. Extra"])
    );
}

#[test]
fn segment_reads_a_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("draft.txt"), "1. Hello\n2. World\n").unwrap();

    let out = threadloom_in(&dir)
        .args(["-o", "json", "segment", "-n", "2", "draft.txt"])
        .output()
        .expect("run threadloom");

    assert!(out.status.success());
    let line: Value = serde_json::from_slice(&out.stdout).expect("JSON output");
    assert_eq!(line["data"]["thread"], serde_json::json!(["1. Hello", "2. World"]));
}

#[test]
fn segment_short_output_warns_but_succeeds() {
    let out = run_with_stdin(&["segment", "--count", "3"], "1. Only one");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("found 1 of 3 tweets"), "stderr: {stderr}");
    assert!(String::from_utf8_lossy(&out.stdout).contains("1. Only one"));
}

#[test]
fn segment_rejects_zero_count() {
    let out = run_with_stdin(&["segment", "--count", "0"], "1. a");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--count must be at least 1"));
}

#[test]
fn tweet_without_credential_names_the_variable() {
    let dir = TempDir::new().unwrap();
    let out = threadloom_in(&dir)
        .args(["tweet", "Rust ownership"])
        .output()
        .expect("run threadloom");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("OPENAI_API_KEY not found in environment variables"),
        "stderr: {stderr}"
    );
}

#[test]
fn tweet_rejects_invalid_timeout() {
    let dir = TempDir::new().unwrap();
    let out = threadloom_in(&dir)
        .args(["tweet", "Rust ownership"])
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_TIMEOUT_SECS", "soon")
        .output()
        .expect("run threadloom");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid OPENAI_TIMEOUT_SECS: soon"), "stderr: {stderr}");
}

#[test]
fn thread_validates_length_before_credentials() {
    let out = run_with_stdin(&["thread", "--length", "0"], "some content");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("thread_length must be at least 1"), "stderr: {stderr}");
}
