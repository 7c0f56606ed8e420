use std::path::Path;

use super::metrics::*;
use crate::error::Result;

/// Trait for host metric providers
///
/// Abstracts the operating system and hardware queries behind the status
/// commands. The live implementation is `platform::SystemSource`; tests
/// provide canned readings.
pub trait MetricSource {
    /// Sample CPU usage (blocks for a short sampling interval)
    fn cpu(&mut self) -> Result<CpuSample>;

    fn memory(&mut self) -> Result<MemorySample>;

    /// Usage of the filesystem holding `path`
    fn disk(&mut self, path: &Path) -> Result<DiskSample>;

    fn load_average(&mut self) -> Result<LoadSample>;

    /// Laptop batteries, in the order the hardware reports them
    fn batteries(&mut self) -> Result<Vec<BatterySample>>;

    /// Peripheral devices with their own battery
    fn power_devices(&mut self) -> Result<Vec<PowerDevice>>;

    /// Link state of a wireless interface, `None` when it does not exist
    /// or is not associated
    fn wifi(&mut self, interface: &str) -> Result<Option<WifiSample>>;

    /// Current ACPI platform profile (e.g. "balanced")
    fn platform_profile(&mut self) -> Result<String>;

    /// Throughput of a block device (blocks for a short sampling interval)
    fn disk_io(&mut self, device: &str) -> Result<DiskIoSample>;
}
