use std::path::PathBuf;

use i3_status_info::core::metrics::*;
use i3_status_info::core::ColorTag;
use i3_status_info::StatusError;

use super::support::{run, FakeSource};

const GIB: u64 = 1024 * 1024 * 1024;

fn cpu_source(average: f32) -> FakeSource {
    FakeSource {
        cpu: Some(CpuSample {
            average,
            per_core: vec![average, average],
        }),
        ..Default::default()
    }
}

#[test]
fn test_cpu_below_warning() {
    let line = run(&["cpu"], &mut cpu_source(12.34)).unwrap();
    assert_eq!(line.full_text, "12.3%");
    assert_eq!(line.color, ColorTag::None);
}

#[test]
fn test_cpu_thresholds_are_strict() {
    let line = run(&["cpu"], &mut cpu_source(60.0)).unwrap();
    assert_eq!(line.color, ColorTag::None);

    let line = run(&["cpu"], &mut cpu_source(80.0)).unwrap();
    assert_eq!(line.color, ColorTag::Warning);

    let line = run(&["cpu"], &mut cpu_source(81.0)).unwrap();
    assert_eq!(line.color, ColorTag::Critical);
}

#[test]
fn test_cpu_fraction_is_truncated_before_classification() {
    // 60.9 classifies as 60, which is not above the warning threshold
    let line = run(&["cpu"], &mut cpu_source(60.9)).unwrap();
    assert_eq!(line.full_text, "60.9%");
    assert_eq!(line.color, ColorTag::None);
}

#[test]
fn test_cpu_custom_thresholds() {
    let line = run(
        &["cpu", "--warning", "10", "--critical", "20"],
        &mut cpu_source(15.0),
    )
    .unwrap();
    assert_eq!(line.color, ColorTag::Warning);
}

#[test]
fn test_cpu_all_cores() {
    let mut source = FakeSource {
        cpu: Some(CpuSample {
            average: 50.0,
            per_core: vec![3.0, 97.5],
        }),
        ..Default::default()
    };
    let line = run(&["cpu", "--display", "all"], &mut source).unwrap();
    assert_eq!(line.full_text, "03% 97%");
}

#[test]
fn test_invalid_thresholds_abort_before_query() {
    let mut source = cpu_source(50.0);
    let err = run(&["cpu", "--warning", "90", "--critical", "80"], &mut source).unwrap_err();
    assert!(matches!(err, StatusError::Threshold(_)));
    assert_eq!(
        err.to_string(),
        "Warning threshold (90) can't be greater than critical threshold (80)"
    );
    assert_eq!(source.queries, 0);
}

#[test]
fn test_failed_query_is_unavailable() {
    let mut source = FakeSource::default();
    let line = run(&["cpu"], &mut source).unwrap();
    assert_eq!(line.full_text, "N/A");
    assert_eq!(line.color, ColorTag::None);
}

#[test]
fn test_mem_used_gigabytes() {
    let mut source = FakeSource {
        memory: Some(MemorySample {
            used_bytes: 7 * GIB,
            total_bytes: 8 * GIB,
            used_percent: 87.5,
        }),
        ..Default::default()
    };
    let line = run(&["mem"], &mut source).unwrap();
    assert_eq!(line.full_text, "7.0G");
    assert_eq!(line.color, ColorTag::Critical);
}

#[test]
fn test_mem_display_percentage() {
    let mut source = FakeSource {
        memory: Some(MemorySample {
            used_bytes: 5 * GIB,
            total_bytes: 8 * GIB,
            used_percent: 62.5,
        }),
        ..Default::default()
    };
    let line = run(&["mem", "--display", "used-percentage"], &mut source).unwrap();
    assert_eq!(line.full_text, "62%");
    assert_eq!(line.color, ColorTag::Warning);
}

#[test]
fn test_disk_free_space_on_volume() {
    let mut source = FakeSource {
        disk: Some(DiskSample::from_space(100 * GIB, 30 * GIB)),
        ..Default::default()
    };
    let line = run(&["disk", "--volumePath", "/home"], &mut source).unwrap();
    assert_eq!(line.full_text, "30G");
    // 70% used: above the default warning of 60
    assert_eq!(line.color, ColorTag::Warning);
    assert_eq!(source.disk_paths, vec![PathBuf::from("/home")]);
}

#[test]
fn test_disk_defaults_to_root() {
    let mut source = FakeSource {
        disk: Some(DiskSample::from_space(100 * GIB, 90 * GIB)),
        ..Default::default()
    };
    let line = run(&["disk"], &mut source).unwrap();
    assert_eq!(line.full_text, "90G");
    assert_eq!(line.color, ColorTag::None);
    assert_eq!(source.disk_paths, vec![PathBuf::from("/")]);
}

#[test]
fn test_load_triple() {
    let mut source = FakeSource {
        load: Some(LoadSample {
            one: 5.5,
            five: 3.25,
            fifteen: 1.0,
        }),
        ..Default::default()
    };
    let line = run(&["load"], &mut source).unwrap();
    assert_eq!(line.full_text, "5.50/3.25/1.00");
    assert_eq!(line.color, ColorTag::Warning);
}

#[test]
fn test_load_uses_its_own_thresholds() {
    let mut source = FakeSource {
        load: Some(LoadSample {
            one: 9.0,
            five: 9.0,
            fifteen: 9.0,
        }),
        ..Default::default()
    };
    let line = run(&["load", "--warning", "10", "--critical", "20"], &mut source).unwrap();
    assert_eq!(line.color, ColorTag::None);
}

fn wifi_source(signal_dbm: f64, ssid: &str) -> FakeSource {
    FakeSource {
        wifi: Some(Some(WifiSample {
            signal_dbm,
            ssid: ssid.to_string(),
        })),
        ..Default::default()
    }
}

#[test]
fn test_wifi_signal_and_ssid() {
    let mut source = wifi_source(-60.0, "Home");
    let line = run(&["wifi", "--wifiInterface", "wlan0"], &mut source).unwrap();
    assert_eq!(line.full_text, "72% Home");
    assert_eq!(line.color, ColorTag::None);
}

#[test]
fn test_wifi_hide_ssid_and_reverse_color() {
    let mut source = wifi_source(-80.0, "Home");
    let line = run(
        &["wifi", "--wifiInterface", "wlan0", "--hideSsidName"],
        &mut source,
    )
    .unwrap();
    assert_eq!(line.full_text, "36%");
    assert_eq!(line.color, ColorTag::Warning);
}

#[test]
fn test_wifi_requires_interface() {
    let mut source = wifi_source(-60.0, "Home");
    let err = run(&["wifi"], &mut source).unwrap_err();
    assert!(matches!(err, StatusError::MissingFlag(_)));
    assert!(err.is_configuration());
    assert_eq!(source.queries, 0);
}

#[test]
fn test_wifi_not_associated_prints_nothing() {
    let mut source = FakeSource {
        wifi: Some(None),
        ..Default::default()
    };
    let line = run(&["wifi", "--wifiInterface", "wlan0"], &mut source).unwrap();
    assert!(line.is_empty());
}

#[test]
fn test_perf_mode() {
    let mut source = FakeSource {
        profile: Some("low-power\n".to_string()),
        ..Default::default()
    };
    let line = run(&["perf-mode", "--display", "text"], &mut source).unwrap();
    assert_eq!(line.full_text, "Low Power");
}

#[test]
fn test_perf_mode_unknown_profile_is_unavailable() {
    let mut source = FakeSource {
        profile: Some("turbo".to_string()),
        ..Default::default()
    };
    let line = run(&["perf-mode"], &mut source).unwrap();
    assert_eq!(line.full_text, "N/A");
}

const MIB: f64 = 1024.0 * 1024.0;

fn disk_io_source(read: f64, write: f64, iowait: f64) -> FakeSource {
    FakeSource {
        disk_io: Some(DiskIoSample {
            read_bytes_per_sec: read,
            write_bytes_per_sec: write,
            iowait_percent: iowait,
        }),
        ..Default::default()
    }
}

#[test]
fn test_disk_io_adaptive_units() {
    let mut source = disk_io_source(12.5 * MIB, 512.0 * 1024.0, 2.0);
    let line = run(&["disk-io", "--device", "sda"], &mut source).unwrap();
    assert_eq!(line.full_text, "12.5M/s 512.0K/s 2.0%");
    // 12 MB/s is above the default warning of 10
    assert_eq!(line.color, ColorTag::Warning);
    assert_eq!(source.io_devices, vec!["sda".to_string()]);
}

#[test]
fn test_disk_io_fixed_unit_and_default_device() {
    let mut source = disk_io_source(512.0 * 1024.0, 3.0 * MIB, 0.0);
    let line = run(&["disk-io", "--unit", "mb"], &mut source).unwrap();
    assert_eq!(line.full_text, "0.5M/s 3.0M/s 0.0%");
    assert_eq!(line.color, ColorTag::None);
    assert_eq!(source.io_devices, vec!["nvme0n1".to_string()]);
}

#[test]
fn test_disk_io_colored_by_busier_direction() {
    let mut source = disk_io_source(1.0 * MIB, 150.0 * MIB, 0.0);
    let line = run(&["disk-io"], &mut source).unwrap();
    assert_eq!(line.color, ColorTag::Critical);
}

#[test]
fn test_disk_io_high_iowait_is_colored() {
    let mut source = disk_io_source(0.0, 0.0, 12.0);
    let line = run(&["disk-io"], &mut source).unwrap();
    assert_eq!(line.full_text, "0.0K/s 0.0K/s 12.0%");
    assert_eq!(line.color, ColorTag::Critical);
}

#[test]
fn test_disk_io_invalid_thresholds_abort_before_query() {
    let mut source = disk_io_source(0.0, 0.0, 0.0);
    let err = run(
        &["disk-io", "--warning", "50", "--critical", "20"],
        &mut source,
    )
    .unwrap_err();
    assert!(matches!(err, StatusError::Threshold(_)));
    assert_eq!(source.queries, 0);
}

#[test]
fn test_disk_io_unknown_device_is_unavailable() {
    let mut source = FakeSource::default();
    let line = run(&["disk-io", "--device", "sdz"], &mut source).unwrap();
    assert_eq!(line.full_text, "N/A");
    assert_eq!(line.color, ColorTag::None);
}
