use super::battery_icon::BatteryState;

/// CPU usage sample
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuSample {
    pub average: f32,
    pub per_core: Vec<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySample {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub used_percent: f64,
}

/// Usage of the filesystem holding a path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskSample {
    pub free_bytes: u64,
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSample {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// A laptop battery as seen by the power supply subsystem
#[derive(Debug, Clone, PartialEq)]
pub struct BatterySample {
    pub level: i32,
    pub state: BatteryState,
}

/// A peripheral with its own battery (keyboard, mouse, headset...)
#[derive(Debug, Clone, PartialEq)]
pub struct PowerDevice {
    pub model: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WifiSample {
    /// Link signal level in dBm
    pub signal_dbm: f64,
    pub ssid: String,
}

/// Block device throughput over a short sampling interval
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskIoSample {
    pub read_bytes_per_sec: f64,
    pub write_bytes_per_sec: f64,
    /// Share of CPU time spent waiting on I/O during the interval
    pub iowait_percent: f64,
}

impl DiskIoSample {
    /// The busier direction, used for coloring
    pub fn peak_bytes_per_sec(&self) -> f64 {
        self.read_bytes_per_sec.max(self.write_bytes_per_sec)
    }
}

impl DiskSample {
    /// Build a sample from filesystem totals.
    ///
    /// `used` is everything not available to unprivileged users, so blocks
    /// reserved for root count as used and the percent is taken over the
    /// whole filesystem.
    pub fn from_space(total_bytes: u64, free_bytes: u64) -> Self {
        let used_bytes = total_bytes.saturating_sub(free_bytes);
        let used_percent = if total_bytes > 0 {
            used_bytes as f64 / total_bytes as f64 * 100.0
        } else {
            0.0
        };
        Self {
            free_bytes,
            used_bytes,
            total_bytes,
            used_percent,
        }
    }
}

impl WifiSample {
    const SIGNAL_COEFFICIENT: f64 = 1.8;

    /// Signal strength mapped onto 0-100: -100 dBm is 0%, about -45 dBm is 100%
    pub fn signal_percent(&self) -> i32 {
        let percent = Self::SIGNAL_COEFFICIENT * (self.signal_dbm + 100.0);
        percent.round() as i32
    }
}
