use std::fmt;

use clap::{Arg, ArgMatches, Command, ValueEnum};

use crate::core::display::StatusLine;
use crate::core::source::MetricSource;
use crate::error::{Result, StatusError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PerfModeStyle {
    Icons,
    Text,
}

/// ACPI platform profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceMode {
    Balanced,
    Performance,
    LowPower,
}

impl fmt::Display for PerformanceMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PerformanceMode::Balanced => write!(f, "Balanced"),
            PerformanceMode::Performance => write!(f, "Performance"),
            PerformanceMode::LowPower => write!(f, "Low Power"),
        }
    }
}

impl std::str::FromStr for PerformanceMode {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "balanced" => Ok(PerformanceMode::Balanced),
            "performance" => Ok(PerformanceMode::Performance),
            "low-power" => Ok(PerformanceMode::LowPower),
            other => Err(StatusError::unavailable(format!(
                "unknown performance mode: `{}`",
                other
            ))),
        }
    }
}

impl PerformanceMode {
    pub fn icon(self) -> &'static str {
        match self {
            PerformanceMode::Balanced => "\u{f24e}",
            PerformanceMode::Performance => "\u{f0e7}",
            PerformanceMode::LowPower => "\u{f06c}",
        }
    }
}

pub fn command() -> Command {
    Command::new("perf-mode")
        .about("Show Performance mode")
        .arg(
            Arg::new("display")
                .long("display")
                .help("Show an icon or the mode name")
                .value_parser(clap::value_parser!(PerfModeStyle))
                .default_value("icons"),
        )
}

pub fn execute(matches: &ArgMatches, source: &mut dyn MetricSource) -> Result<StatusLine> {
    let style = matches
        .get_one::<PerfModeStyle>("display")
        .copied()
        .unwrap_or(PerfModeStyle::Icons);
    let mode: PerformanceMode = source.platform_profile()?.parse()?;

    Ok(match style {
        PerfModeStyle::Icons => StatusLine::plain(mode.icon()),
        PerfModeStyle::Text => StatusLine::plain(mode.to_string()),
    })
}
