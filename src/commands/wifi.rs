use clap::{Arg, ArgMatches, Command};

use super::metric::{bool_flag, MetricDef};
use crate::core::color::classify;
use crate::core::config::Config;
use crate::core::display::StatusLine;
use crate::core::source::MetricSource;
use crate::core::threshold::Polarity;
use crate::error::{Result, StatusError};

pub const DEF: MetricDef = MetricDef {
    name: "wifi",
    about: "Get Wifi info",
    polarity: Polarity::Reverse,
    default_warning: 50,
    default_critical: 30,
};

pub fn command() -> Command {
    DEF.command()
        .arg(
            Arg::new("wifiInterface")
                .long("wifiInterface")
                .value_name("NAME")
                .help("Wifi device interface (required)"),
        )
        .arg(bool_flag("hideSsidName", "Do not show the network name"))
}

pub fn execute(
    matches: &ArgMatches,
    config: &Config,
    source: &mut dyn MetricSource,
) -> Result<StatusLine> {
    let thresholds = DEF.thresholds(matches, config)?;
    let interface = matches
        .get_one::<String>("wifiInterface")
        .filter(|name| !name.is_empty())
        .ok_or_else(|| StatusError::missing_flag("wifiInterface"))?;
    let hide_ssid = matches.get_flag("hideSsidName");

    let Some(sample) = source.wifi(interface)? else {
        // Not associated: nothing to show
        log::info!("{} is not associated", interface);
        return Ok(StatusLine::default());
    };

    let percent = sample.signal_percent();
    let text = if hide_ssid || sample.ssid.is_empty() {
        format!("{}%", percent)
    } else {
        format!("{}% {}", percent, sample.ssid)
    };

    Ok(StatusLine::new(text, classify(percent, &thresholds)))
}
