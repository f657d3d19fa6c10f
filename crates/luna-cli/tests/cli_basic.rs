//! Basic CLI E2E tests.
//!
//! Tests invoke the built `luna` binary with HOME pointed at a temporary
//! directory so the config file never touches the real home.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_luna"))
        .args(args)
        .env("HOME", home)
        .env_remove("LUNA_ENV")
        .env_remove("LUNA_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\nstderr: {}", args, stderr);
    stdout
}

#[test]
fn test_trend_text_chart() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["trend"]);
    assert!(out.contains("Mood & Energy Trend:"));
    assert!(out.contains("May 01"));
    assert!(out.contains("Excellent (Happy)"));
}

#[test]
fn test_trend_json() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["trend", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["points"].as_array().unwrap().len(), 10);
    assert_eq!(parsed["ticks"][5]["label"], "Excellent");
}

#[test]
fn test_trend_without_fixtures_is_empty() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["trend", "--no-fixtures"]);
    assert!(out.contains("No entries logged yet."));
}

#[test]
fn test_trend_from_input_file_with_unknown_mood() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("entries.json");
    std::fs::write(
        &input,
        r#"[
            {"date": "2023-05-05", "mood": "irritable", "energy": "low"},
            {"date": "2023-05-01", "mood": "meh", "energy": "high"}
        ]"#,
    )
    .unwrap();

    let out = run_cli_success(home.path(), &["trend", "--json", "--input", input.to_str().unwrap()]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let points = parsed["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["date"], "2023-05-01");
    assert_eq!(points[0]["mood_score"], 5);
    assert_eq!(points[0]["mood_band"], "Moderate");
    assert_eq!(points[1]["mood_score"], 4);
}

#[test]
fn test_mood_log_adds_to_trend() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["mood", "log", "--mood", "anxious", "--energy", "exhausted", "--date", "2023-05-02"],
    );
    assert!(out.contains("Logged"));
    assert!(out.contains("Anxious"));
    assert!(out.contains("May 02"));
}

#[test]
fn test_mood_log_json_is_one_document() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["mood", "log", "--mood", "sad", "--energy", "low", "--date", "2023-05-02", "--json"],
    );
    let logged: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(logged["entry"]["mood"], "sad");
    assert_eq!(logged["entry"]["date"], "2023-05-02");
    let points = logged["trend"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 11);
    assert_eq!(points[1]["mood_score"], 0);
}

#[test]
fn test_mood_log_rejects_unknown_mood() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["mood", "log", "--mood", "bored"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown mood 'bored'"));
}

#[test]
fn test_mood_options() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["mood", "options"]);
    assert!(out.contains("irritable"));
    assert!(out.contains("exhausted"));
}

#[test]
fn test_medication_log_requires_name() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["medication", "log", "--name", "  "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Missing required field: name"));
}

#[test]
fn test_medication_log_scheduled() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &[
            "medication", "log", "--name", "Iron Supplement", "--kind", "iron-supplements",
            "--dosage", "65mg", "--scheduled", "12:00", "--date", "2023-05-12",
        ],
    );
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["type"], "ironSupplements");
    assert_eq!(parsed["isScheduled"], true);
    assert_eq!(parsed["scheduledTime"], "12:00");
}

#[test]
fn test_medication_history() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["medication", "history"]);
    assert!(out.contains("Ibuprofen"));
    assert!(out.contains("Scheduled daily at 08:00"));
}

#[test]
fn test_config_get_set_reset() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["config", "get", "chart.bar_width"]);
    assert_eq!(out.trim(), "30");

    run_cli_success(home.path(), &["config", "set", "chart.bar_width", "12"]);
    let out = run_cli_success(home.path(), &["config", "get", "chart.bar_width"]);
    assert_eq!(out.trim(), "12");

    run_cli_success(home.path(), &["config", "reset"]);
    let out = run_cli_success(home.path(), &["config", "get", "chart.bar_width"]);
    assert_eq!(out.trim(), "30");
}

#[test]
fn test_config_seed_fixtures_off() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "journal.seed_fixtures", "false"]);
    let out = run_cli_success(home.path(), &["medication", "history"]);
    assert!(out.contains("No medications logged yet."));
}

#[test]
fn test_config_get_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "get", "chart.nope"]);
    assert_ne!(code, 0);
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["completions", "bash"]);
    assert!(out.contains("luna"));
}
