//! Wireless link state: signal from `/proc/net/wireless`, SSID from `iw`.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::core::metrics::WifiSample;
use crate::error::Result;

pub const PROC_NET_WIRELESS: &str = "/proc/net/wireless";

/// Signal level (dBm) of `interface` from a `/proc/net/wireless` table.
///
/// Only associated interfaces are listed there, so `None` means the
/// interface is down, unknown or not connected.
pub fn parse_signal_level(content: &str, interface: &str) -> Option<f64> {
    content.lines().skip(2).find_map(|line| {
        let (name, rest) = line.split_once(':')?;
        if name.trim() != interface {
            return None;
        }
        // status, link quality, signal level, noise...
        rest.split_whitespace()
            .nth(2)
            .and_then(|level| level.trim_end_matches('.').parse::<f64>().ok())
    })
}

/// SSID from the output of `iw dev <interface> link`
pub fn parse_iw_ssid(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        line.trim()
            .strip_prefix("SSID:")
            .map(|ssid| ssid.trim().to_string())
    })
}

fn query_ssid(interface: &str) -> Option<String> {
    let output = match Command::new("iw").args(["dev", interface, "link"]).output() {
        Ok(output) => output,
        Err(e) => {
            log::warn!("Failed to run iw: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        log::warn!(
            "iw dev {} link exited with {}: {}",
            interface,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    parse_iw_ssid(&String::from_utf8_lossy(&output.stdout))
}

/// Query the link state of a wireless interface
pub fn wifi_info(interface: &str) -> Result<Option<WifiSample>> {
    let content = fs::read_to_string(Path::new(PROC_NET_WIRELESS))?;

    let Some(signal_dbm) = parse_signal_level(&content, interface) else {
        return Ok(None);
    };
    let ssid = query_ssid(interface).unwrap_or_default();
    log::debug!("{}: signal {} dBm, ssid '{}'", interface, signal_dbm, ssid);

    Ok(Some(WifiSample { signal_dbm, ssid }))
}
