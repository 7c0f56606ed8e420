//! Block device throughput from `/proc/diskstats`, iowait from `/proc/stat`.

use std::time::Duration;

use crate::core::metrics::DiskIoSample;
use crate::error::Result;

/// `/proc/diskstats` counts 512-byte sectors whatever the device block size
pub const SECTOR_SIZE: u64 = 512;

pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Cumulative counters for one device, read at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoCounters {
    pub sectors_read: u64,
    pub sectors_written: u64,
    pub iowait_ticks: u64,
    pub total_ticks: u64,
}

impl IoCounters {
    /// Rates between this reading and a `later` one taken `elapsed` after it
    pub fn rate_until(&self, later: &IoCounters, elapsed: Duration) -> DiskIoSample {
        let secs = elapsed.as_secs_f64();
        let per_sec = |before: u64, after: u64| {
            if secs > 0.0 {
                (after.saturating_sub(before) * SECTOR_SIZE) as f64 / secs
            } else {
                0.0
            }
        };

        let total = later.total_ticks.saturating_sub(self.total_ticks);
        let iowait_percent = if total > 0 {
            later.iowait_ticks.saturating_sub(self.iowait_ticks) as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        DiskIoSample {
            read_bytes_per_sec: per_sec(self.sectors_read, later.sectors_read),
            write_bytes_per_sec: per_sec(self.sectors_written, later.sectors_written),
            iowait_percent,
        }
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use procfs::{CpuTime, CurrentSI, DiskStat, KernelStats};

    use super::IoCounters;
    use crate::error::{Result, StatusError};

    /// Sector counters of `device`, `None` when the kernel does not list it
    pub fn device_sectors(stats: &[DiskStat], device: &str) -> Option<(u64, u64)> {
        stats
            .iter()
            .find(|stat| stat.name == device)
            .map(|stat| (stat.sectors_read as u64, stat.sectors_written as u64))
    }

    /// (iowait, total) ticks summed over every CPU state
    pub fn cpu_ticks(time: &CpuTime) -> (u64, u64) {
        let iowait = time.iowait.unwrap_or(0);
        let total = time.user
            + time.nice
            + time.system
            + time.idle
            + iowait
            + time.irq.unwrap_or(0)
            + time.softirq.unwrap_or(0)
            + time.steal.unwrap_or(0);
        (iowait, total)
    }

    pub fn read_counters(device: &str) -> Result<IoCounters> {
        let stats = procfs::diskstats()
            .map_err(|e| StatusError::unavailable(format!("can't read disk stats: {}", e)))?;
        let (sectors_read, sectors_written) = device_sectors(&stats, device)
            .ok_or_else(|| StatusError::unavailable(format!("device `{}` not found", device)))?;

        let kernel = KernelStats::current()
            .map_err(|e| StatusError::unavailable(format!("can't read /proc/stat: {}", e)))?;
        let (iowait_ticks, total_ticks) = cpu_ticks(&kernel.total);

        Ok(IoCounters {
            sectors_read,
            sectors_written,
            iowait_ticks,
            total_ticks,
        })
    }
}

/// Sample `device` twice, `SAMPLE_INTERVAL` apart
#[cfg(target_os = "linux")]
pub fn sample_disk_io(device: &str) -> Result<DiskIoSample> {
    use std::time::Instant;

    let before = linux::read_counters(device)?;
    let started = Instant::now();
    std::thread::sleep(SAMPLE_INTERVAL);
    let after = linux::read_counters(device)?;

    let sample = before.rate_until(&after, started.elapsed());
    log::debug!("{}: {:?}", device, sample);
    Ok(sample)
}

#[cfg(not(target_os = "linux"))]
pub fn sample_disk_io(device: &str) -> Result<DiskIoSample> {
    Err(crate::error::StatusError::unavailable(format!(
        "disk I/O statistics for `{}` need /proc/diskstats",
        device
    )))
}
