/*!
 * Binary Output Tests
 * Logs stay on stderr so stdout carries only program output
 */

use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn run(bin: &str, json: bool) -> Output {
    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "info");
    if json {
        cmd.env("HEAP_TRACE_JSON", "1");
    } else {
        cmd.env_remove("HEAP_TRACE_JSON");
    }
    cmd.output().unwrap()
}

fn assert_silent_stdout(bin: &str, json: bool) -> String {
    let output = run(bin, json);
    assert!(output.status.success(), "{bin} exited with {}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    assert!(!stderr.is_empty());
    stderr
}

#[test]
fn test_person_lifecycle_stdout_empty() {
    let stderr = assert_silent_stdout(env!("CARGO_BIN_EXE_person_lifecycle"), false);
    assert!(stderr.contains("Lifecycle finished"));
}

#[test]
fn test_bulk_alloc_stdout_empty() {
    let stderr = assert_silent_stdout(env!("CARGO_BIN_EXE_bulk_alloc"), false);
    assert!(stderr.contains("Final ledger"));
}

#[test]
fn test_json_logs_stay_on_stderr() {
    for bin in [
        env!("CARGO_BIN_EXE_person_lifecycle"),
        env!("CARGO_BIN_EXE_bulk_alloc"),
    ] {
        let stderr = assert_silent_stdout(bin, true);
        assert!(stderr.lines().any(|line| line.starts_with('{')), "{bin}: {stderr}");
    }
}

#[test]
fn test_bulk_alloc_exit_code_zero() {
    let output = run(env!("CARGO_BIN_EXE_bulk_alloc"), false);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_managed_demo_prints_every_record() {
    let output = run(env!("CARGO_BIN_EXE_managed_demo"), false);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 100_000);
    assert_eq!(
        stdout.lines().next(),
        Some("Person{name: \"max musterman\", age: 89.000000}")
    );
}
