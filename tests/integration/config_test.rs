use std::fs;

use i3_status_info::core::metrics::CpuSample;
use i3_status_info::core::ColorTag;
use i3_status_info::{Config, StatusError};
use tempfile::TempDir;

use super::support::{run_with, FakeSource};

#[test]
fn test_config_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"cpu": {"warning": 10, "critical": 20}, "wifi": {"warning": 70}}"#,
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.cpu.warning, Some(10));
    assert_eq!(config.cpu.critical, Some(20));
    assert_eq!(config.wifi.warning, Some(70));
    assert_eq!(config.wifi.critical, None);
}

#[test]
fn test_config_empty_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "").unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_missing_explicit_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(Some(temp_dir.path().join("missing.json").as_path())).unwrap_err();
    assert!(matches!(err, StatusError::Config(_)));
    assert!(err.is_configuration());
}

#[test]
fn test_config_malformed_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, StatusError::Config(_)));
}

fn cpu_at(average: f32) -> FakeSource {
    FakeSource {
        cpu: Some(CpuSample {
            average,
            per_core: vec![average],
        }),
        ..Default::default()
    }
}

#[test]
fn test_config_thresholds_apply_without_flags() {
    let config: Config =
        serde_json::from_str(r#"{"cpu": {"warning": 10, "critical": 20}}"#).unwrap();
    let line = run_with(&["cpu"], &config, &mut cpu_at(15.0)).unwrap();
    assert_eq!(line.color, ColorTag::Warning);
}

#[test]
fn test_flags_take_precedence_over_config() {
    let config: Config =
        serde_json::from_str(r#"{"cpu": {"warning": 10, "critical": 20}}"#).unwrap();
    let line = run_with(
        &["cpu", "--warning", "30", "--critical", "40"],
        &config,
        &mut cpu_at(15.0),
    )
    .unwrap();
    assert_eq!(line.color, ColorTag::None);
}

#[test]
fn test_invalid_config_thresholds_are_rejected() {
    let config: Config =
        serde_json::from_str(r#"{"mem": {"warning": 90, "critical": 50}}"#).unwrap();
    let mut source = FakeSource::default();
    let err = run_with(&["mem"], &config, &mut source).unwrap_err();
    assert!(matches!(err, StatusError::Threshold(_)));
}

#[test]
fn test_config_thresholds_are_per_metric() {
    // A cpu override must not leak into load
    let config: Config =
        serde_json::from_str(r#"{"cpu": {"warning": 90, "critical": 95}}"#).unwrap();
    let mut source = FakeSource {
        load: Some(i3_status_info::core::metrics::LoadSample {
            one: 9.0,
            five: 1.0,
            fifteen: 1.0,
        }),
        ..Default::default()
    };
    let line = run_with(&["load"], &config, &mut source).unwrap();
    assert_eq!(line.color, ColorTag::Critical);
}

#[test]
fn test_config_disk_io_thresholds() {
    let config: Config =
        serde_json::from_str(r#"{"disk_io": {"warning": 40, "critical": 90}}"#).unwrap();
    let mut source = FakeSource {
        disk_io: Some(i3_status_info::core::metrics::DiskIoSample {
            read_bytes_per_sec: 20.0 * 1024.0 * 1024.0,
            write_bytes_per_sec: 0.0,
            iowait_percent: 0.0,
        }),
        ..Default::default()
    };
    let line = run_with(&["disk-io"], &config, &mut source).unwrap();
    assert_eq!(line.color, ColorTag::None);
}
