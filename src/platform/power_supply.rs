//! Peripheral batteries from the Linux power supply class.
//!
//! Wireless keyboards, mice and headsets show up under
//! `/sys/class/power_supply` with `scope` set to `Device`. Laptop batteries
//! (`scope` absent or `System`) are left to the battery crate.

use std::fs;
use std::path::Path;

use crate::core::metrics::PowerDevice;
use crate::error::Result;

pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

fn read_attr(dir: &Path, name: &str) -> Option<String> {
    fs::read_to_string(dir.join(name))
        .ok()
        .map(|s| s.trim().to_string())
}

/// List peripheral devices under `root`, sorted by sysfs entry name
pub fn read_power_devices(root: &Path) -> Result<Vec<PowerDevice>> {
    if !root.exists() {
        log::debug!("{:?} does not exist, no peripheral batteries", root);
        return Ok(Vec::new());
    }

    let mut entries: Vec<_> = fs::read_dir(root)?.flatten().map(|e| e.path()).collect();
    entries.sort();

    let mut devices = Vec::new();
    for dir in entries {
        if read_attr(&dir, "scope").as_deref() != Some("Device") {
            continue;
        }

        let Some(model) = read_attr(&dir, "model_name") else {
            continue;
        };
        let Some(percentage) = read_attr(&dir, "capacity").and_then(|c| c.parse::<f64>().ok())
        else {
            log::debug!("{:?} ({}) reports no capacity", dir, model);
            continue;
        };

        log::debug!("power device {:?}: {} at {}%", dir, model, percentage);
        devices.push(PowerDevice { model, percentage });
    }

    Ok(devices)
}
