//! End-to-end tests for the `triage` binary.

use std::process::{Command, Output};

use serde_json::{json, Value};

fn triage(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_triage"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run triage binary")
}

fn classify(text: &str) -> Value {
    let output = triage(&["--text", text]);
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn wifi_is_technology() {
    assert_eq!(
        classify("The wifi is not working"),
        json!({"category": "Technology", "tags": ["network", "connectivity"], "score": 0.9})
    );
}

#[test]
fn room_maintenance_is_hostel() {
    assert_eq!(
        classify("Room maintenance needed"),
        json!({"category": "Hostel", "tags": ["facility", "maintenance"], "score": 0.85})
    );
}

#[test]
fn exam_grade_is_academic() {
    assert_eq!(
        classify("What is my exam grade"),
        json!({"category": "Academic", "tags": ["grading", "academic"], "score": 0.88})
    );
}

#[test]
fn empty_text_is_other() {
    assert_eq!(
        classify(""),
        json!({"category": "Other", "tags": ["general"], "score": 0.5})
    );
}

#[test]
fn missing_flag_matches_empty_text() {
    let output = triage(&[]);
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, classify(""));
}

#[test]
fn priority_is_first_match() {
    assert_eq!(classify("wifi in hostel room")["category"], "Technology");
}

#[test]
fn stdout_is_a_single_line_without_newline() {
    let output = triage(&["--text", "WIFI issue"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        r#"{"category":"Technology","tags":["network","connectivity"],"score":0.9}"#
    );
}

#[test]
fn missing_value_is_usage_error() {
    let output = triage(&["--text"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn unknown_flag_is_usage_error() {
    let output = triage(&["--mode", "weighted"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}
