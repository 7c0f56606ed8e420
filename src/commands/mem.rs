use clap::{Arg, ArgMatches, Command, ValueEnum};

use super::metric::MetricDef;
use crate::core::color::{classify, level};
use crate::core::config::Config;
use crate::core::display::StatusLine;
use crate::core::metrics::MemorySample;
use crate::core::source::MetricSource;
use crate::core::threshold::Polarity;
use crate::error::Result;
use crate::ui::formatters::{format_bytes, format_percent, ByteUnit};

pub const DEF: MetricDef = MetricDef {
    name: "mem",
    about: "Get memory info",
    polarity: Polarity::Regular,
    default_warning: 60,
    default_critical: 80,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MemoryDisplay {
    Used,
    Remaining,
    UsedPercentage,
    RemainingPercentage,
}

pub fn command() -> Command {
    DEF.command()
        .arg(
            Arg::new("display")
                .long("display")
                .help("What to show")
                .value_parser(clap::value_parser!(MemoryDisplay))
                .default_value("used"),
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
    let display = matches
        .get_one::<MemoryDisplay>("display")
        .copied()
        .unwrap_or(MemoryDisplay::Used);
    let unit = matches.get_one::<ByteUnit>("unit").copied().unwrap_or_default();

    let sample = source.memory()?;
    // Color always follows used percentage, whatever is displayed
    let color = classify(level(sample.used_percent), &thresholds);

    Ok(StatusLine::new(format_memory(&sample, display, unit), color))
}

fn format_memory(sample: &MemorySample, display: MemoryDisplay, unit: ByteUnit) -> String {
    match display {
        MemoryDisplay::Used => format_bytes(sample.used_bytes, unit),
        MemoryDisplay::Remaining => format_bytes(
            sample.total_bytes.saturating_sub(sample.used_bytes),
            unit,
        ),
        MemoryDisplay::UsedPercentage => format_percent(sample.used_percent),
        MemoryDisplay::RemainingPercentage => format_percent(100.0 - sample.used_percent),
    }
}
