use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the binary with an empty config file so the user's config is ignored
fn run_cli(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    fs::write(&config, "{}").unwrap();

    Command::new(env!("CARGO_BIN_EXE_i3-status-info"))
        .args(args)
        .arg("--config")
        .arg(&config)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run i3-status-info")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_invalid_thresholds_exit_1() {
    let output = run_cli(&["cpu", "--warning", "0", "--critical", "50"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output).trim(),
        "Warning threshold should be set between 1 and 99"
    );
}

#[test]
fn test_reverse_thresholds_checked() {
    let output = run_cli(&["battery", "--warning", "20", "--critical", "40"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("can't be greater than warning threshold"));
}

#[test]
fn test_wifi_without_interface_exit_1() {
    let output = run_cli(&["wifi"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("--wifiInterface"));
}

#[test]
fn test_malformed_model_exit_1() {
    let output = run_cli(&["battery", "--model1", "Mouse,M"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Invalid device rule"));
}

#[test]
fn test_out_of_range_integer_is_usage_error() {
    let output = run_cli(&["cpu", "--warning", "300"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_config_file_exit_1() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_i3-status-info"))
        .args(["load", "--config"])
        .arg(temp_dir.path().join("missing.json"))
        .output()
        .expect("failed to run i3-status-info");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Configuration error"));
}

#[test]
fn test_load_prints_triple() {
    let output = run_cli(&["load"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    let first = text.lines().next().unwrap_or_default();
    assert_eq!(first.split('/').count(), 3);
}

#[test]
fn test_json_format() {
    let output = run_cli(&["--format", "json", "disk", "--volumePath", "/"]);
    assert_eq!(output.status.code(), Some(0));
    let block: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert!(block["full_text"].is_string());
}
