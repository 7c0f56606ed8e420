use clap::{Arg, ArgMatches, Command};

use super::metric::{bool_flag, MetricDef};
use crate::core::battery_icon::{battery_color, select_icon};
use crate::core::config::Config;
use crate::core::device_match::{match_devices, DeviceRule, MAX_DEVICE_RULES};
use crate::core::display::StatusLine;
use crate::core::metrics::BatterySample;
use crate::core::source::MetricSource;
use crate::core::threshold::{Polarity, ThresholdPair};
use crate::error::{Result, StatusError};

pub const DEF: MetricDef = MetricDef {
    name: "battery",
    about: "Get Battery info",
    polarity: Polarity::Reverse,
    default_warning: 50,
    default_critical: 30,
};

const MODEL_FLAGS: [&str; MAX_DEVICE_RULES] = ["model1", "model2", "model3"];

pub fn command() -> Command {
    let mut cmd = DEF
        .command()
        .long_about(
            "Show the laptop battery (--use-acpi) and up to 3 peripheral batteries, \
             like a wireless keyboard or mouse. Example:\n\
             i3-status-info battery --model1=\"MX Keys Wireless Keyboard,K,20,10\"",
        )
        .arg(bool_flag("use-acpi", "Check laptop battery through ACPI"));

    for (i, flag) in MODEL_FLAGS.iter().enumerate() {
        cmd = cmd.arg(
            Arg::new(*flag)
                .long(*flag)
                .value_name("NAME,ICON,WARNING,CRITICAL")
                .help(format!(
                    "Peripheral device {}: model name, unicode icon, warning, critical",
                    i + 1
                )),
        );
    }

    cmd
}

pub fn execute(
    matches: &ArgMatches,
    config: &Config,
    source: &mut dyn MetricSource,
) -> Result<StatusLine> {
    let thresholds = DEF.thresholds(matches, config)?;
    let use_acpi = matches.get_flag("use-acpi");
    let rules = device_rules(matches, config)?;

    let mut parts = Vec::new();

    if use_acpi {
        let batteries = source.batteries()?;
        parts.push(laptop_battery(&batteries, &thresholds)?);
    }

    if !use_acpi || !rules.is_empty() {
        let devices = source.power_devices()?;
        log::debug!("{} power devices reported", devices.len());
        parts.push(match_devices(&rules, &devices));
    }

    Ok(StatusLine::compose(parts))
}

/// Rules from `--model1..3`, or from the config file when no flag is given
fn device_rules(matches: &ArgMatches, config: &Config) -> Result<Vec<DeviceRule>> {
    let from_flags: Vec<&String> = MODEL_FLAGS
        .iter()
        .filter_map(|flag| matches.get_one::<String>(flag))
        .collect();

    if !from_flags.is_empty() {
        return from_flags.into_iter().map(|s| s.parse::<DeviceRule>()).collect();
    }

    if config.battery_devices.len() > MAX_DEVICE_RULES {
        return Err(StatusError::config(format!(
            "at most {} battery_devices can be configured",
            MAX_DEVICE_RULES
        )));
    }
    config.battery_devices.iter().map(|s| s.parse::<DeviceRule>()).collect()
}

/// Format the laptop battery line.
///
/// Some firmwares report a phantom battery at 0% first; when several
/// batteries are present, the first one with a non-zero level is used.
fn laptop_battery(batteries: &[BatterySample], thresholds: &ThresholdPair) -> Result<StatusLine> {
    let battery = if batteries.len() > 1 {
        batteries
            .iter()
            .find(|b| b.level != 0)
            .unwrap_or(&batteries[0])
    } else {
        batteries
            .first()
            .ok_or_else(|| StatusError::unavailable("no laptop battery found"))?
    };

    let icon = select_icon(battery.level, battery.state);
    let color = battery_color(battery.level, battery.state, thresholds);

    Ok(StatusLine::new(
        format!("{} {}%", icon.glyph(), battery.level),
        color,
    ))
}
