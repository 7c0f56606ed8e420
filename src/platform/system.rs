//! Live metric source backed by the operating system.

use std::fs;
use std::path::Path;

use battery::units::ratio::percent;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use super::{diskstats, fs as platform_fs, power_supply, wireless};
use crate::core::battery_icon::BatteryState;
use crate::core::color::level;
use crate::core::metrics::*;
use crate::core::source::MetricSource;
use crate::error::{Result, StatusError};

pub const PLATFORM_PROFILE: &str = "/sys/firmware/acpi/platform_profile";

/// Queries sysinfo, the battery crate, sysfs and procfs.
///
/// The sysinfo handle is created lazily so that commands which never look
/// at CPU or memory do not pay for it.
#[derive(Default)]
pub struct SystemSource {
    system: Option<System>,
}

impl SystemSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn system(&mut self) -> &mut System {
        self.system.get_or_insert_with(|| {
            System::new_with_specifics(
                RefreshKind::nothing()
                    .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                    .with_memory(MemoryRefreshKind::nothing().with_ram()),
            )
        })
    }
}

fn map_state(state: battery::State) -> BatteryState {
    match state {
        battery::State::Charging | battery::State::Full => BatteryState::Charging,
        battery::State::Discharging | battery::State::Empty => BatteryState::Discharging,
        _ => BatteryState::Unknown,
    }
}

impl MetricSource for SystemSource {
    fn cpu(&mut self) -> Result<CpuSample> {
        let system = self.system();

        // Usage is a delta between two refreshes
        system.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        system.refresh_cpu_usage();

        let per_core: Vec<f32> = system.cpus().iter().map(|cpu| cpu.cpu_usage()).collect();
        if per_core.is_empty() {
            return Err(StatusError::unavailable("no CPU reported"));
        }

        Ok(CpuSample {
            average: system.global_cpu_usage(),
            per_core,
        })
    }

    fn memory(&mut self) -> Result<MemorySample> {
        let system = self.system();
        system.refresh_memory();

        let total = system.total_memory();
        if total == 0 {
            return Err(StatusError::unavailable("total memory reported as 0"));
        }
        let used = system.used_memory();

        Ok(MemorySample {
            used_bytes: used,
            total_bytes: total,
            used_percent: used as f64 / total as f64 * 100.0,
        })
    }

    fn disk(&mut self, path: &Path) -> Result<DiskSample> {
        platform_fs::disk_usage(path)
    }

    fn load_average(&mut self) -> Result<LoadSample> {
        let load = System::load_average();
        Ok(LoadSample {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        })
    }

    fn batteries(&mut self) -> Result<Vec<BatterySample>> {
        let manager = battery::Manager::new()?;
        let mut samples = Vec::new();

        for battery in manager.batteries()? {
            let battery = battery?;
            let charge = battery.state_of_charge().get::<percent>();
            log::debug!(
                "battery {:?}: {:.1}% {:?}",
                battery.model(),
                charge,
                battery.state()
            );
            samples.push(BatterySample {
                level: level(f64::from(charge)),
                state: map_state(battery.state()),
            });
        }

        Ok(samples)
    }

    fn power_devices(&mut self) -> Result<Vec<PowerDevice>> {
        power_supply::read_power_devices(Path::new(power_supply::POWER_SUPPLY_ROOT))
    }

    fn wifi(&mut self, interface: &str) -> Result<Option<WifiSample>> {
        wireless::wifi_info(interface)
    }

    fn platform_profile(&mut self) -> Result<String> {
        fs::read_to_string(PLATFORM_PROFILE).map_err(|e| {
            StatusError::unavailable(format!("Failed to read {}: {}", PLATFORM_PROFILE, e))
        })
    }

    fn disk_io(&mut self, device: &str) -> Result<DiskIoSample> {
        diskstats::sample_disk_io(device)
    }
}
