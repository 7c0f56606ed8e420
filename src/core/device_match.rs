//! Matching configured device rules against peripheral batteries.

use std::str::FromStr;

use super::color::{classify, level};
use super::display::StatusLine;
use super::metrics::PowerDevice;
use super::threshold::{Polarity, ThresholdPair};
use crate::error::{Result, StatusError};

/// Maximum number of rules accepted on the command line
pub const MAX_DEVICE_RULES: usize = 3;

/// A configured device: exact model name, display icon, own thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRule {
    pub name_match: String,
    pub icon: String,
    pub thresholds: ThresholdPair,
}

impl FromStr for DeviceRule {
    type Err = StatusError;

    /// Parse `name,icon,warning,critical`
    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != 4 {
            return Err(StatusError::invalid_rule(format!(
                "'{}' must have 4 fields (name,icon,warning,critical), got {}",
                s,
                fields.len()
            )));
        }

        let parse_threshold = |field: &str, which: &str| -> Result<i8> {
            field.trim().parse::<i8>().map_err(|e| {
                StatusError::invalid_rule(format!("{} threshold '{}' in '{}': {}", which, field, s, e))
            })
        };
        let warning = parse_threshold(fields[2], "warning")?;
        let critical = parse_threshold(fields[3], "critical")?;
        let thresholds = ThresholdPair::new(warning, critical, Polarity::Reverse)?;

        Ok(Self {
            name_match: fields[0].to_string(),
            icon: fields[1].trim().to_string(),
            thresholds,
        })
    }
}

impl DeviceRule {
    /// Whether this rule applies to a hardware-reported device
    pub fn matches(&self, device: &PowerDevice) -> bool {
        device.model == self.name_match
    }

    /// Format one matched device with this rule's icon and thresholds
    pub fn format(&self, device: &PowerDevice) -> StatusLine {
        let percentage = level(device.percentage);
        StatusLine::new(
            format!("{} {}%", self.icon, percentage),
            classify(percentage, &self.thresholds),
        )
    }
}

/// Format every hardware device that a rule names.
///
/// Devices are visited in hardware order. Unmatched rules and unmatched
/// devices are skipped silently. The aggregate color is the first
/// non-empty one.
pub fn match_devices(rules: &[DeviceRule], devices: &[PowerDevice]) -> StatusLine {
    let lines = devices.iter().flat_map(move |device| {
        rules
            .iter()
            .filter(move |rule| rule.matches(device))
            .map(move |rule| rule.format(device))
    });

    StatusLine::compose(lines)
}
