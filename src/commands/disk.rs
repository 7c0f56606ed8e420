use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, ValueEnum};

use super::metric::MetricDef;
use crate::core::color::{classify, level};
use crate::core::config::Config;
use crate::core::display::StatusLine;
use crate::core::metrics::DiskSample;
use crate::core::source::MetricSource;
use crate::core::threshold::Polarity;
use crate::error::Result;
use crate::ui::formatters::{format_bytes, format_bytes_whole, format_percent, ByteUnit};

pub const DEF: MetricDef = MetricDef {
    name: "disk",
    about: "Get Disk free",
    polarity: Polarity::Regular,
    default_warning: 60,
    default_critical: 80,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiskDisplay {
    /// Free space in whole units
    Remaining,
    Used,
    UsedPercentage,
    RemainingPercentage,
}

pub fn command() -> Command {
    DEF.command()
        .arg(
            Arg::new("volumePath")
                .long("volumePath")
                .value_name("PATH")
                .help("Volume path")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("/"),
        )
        .arg(
            Arg::new("display")
                .long("display")
                .help("What to show")
                .value_parser(clap::value_parser!(DiskDisplay))
                .default_value("remaining"),
        )
        .arg(
            Arg::new("unit")
                .long("unit")
                .help("Unit for byte amounts")
                .value_parser(clap::value_parser!(ByteUnit))
                .default_value("gb"),
        )
}

pub fn execute(
    matches: &ArgMatches,
    config: &Config,
    source: &mut dyn MetricSource,
) -> Result<StatusLine> {
    let thresholds = DEF.thresholds(matches, config)?;
    let path = matches
        .get_one::<PathBuf>("volumePath")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("/"));
    let display = matches
        .get_one::<DiskDisplay>("display")
        .copied()
        .unwrap_or(DiskDisplay::Remaining);
    let unit = matches.get_one::<ByteUnit>("unit").copied().unwrap_or_default();

    let sample = source.disk(&path)?;
    let color = classify(level(sample.used_percent), &thresholds);

    Ok(StatusLine::new(format_disk(&sample, display, unit), color))
}

fn format_disk(sample: &DiskSample, display: DiskDisplay, unit: ByteUnit) -> String {
    match display {
        DiskDisplay::Remaining => format_bytes_whole(sample.free_bytes, unit),
        DiskDisplay::Used => format_bytes(sample.used_bytes, unit),
        DiskDisplay::UsedPercentage => format_percent(sample.used_percent),
        DiskDisplay::RemainingPercentage => format_percent(100.0 - sample.used_percent),
    }
}
