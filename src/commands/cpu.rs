use clap::{Arg, ArgMatches, Command, ValueEnum};

use super::metric::MetricDef;
use crate::core::color::{classify, level};
use crate::core::config::Config;
use crate::core::display::StatusLine;
use crate::core::metrics::CpuSample;
use crate::core::source::MetricSource;
use crate::core::threshold::Polarity;
use crate::error::Result;

pub const DEF: MetricDef = MetricDef {
    name: "cpu",
    about: "Get CPU info",
    polarity: Polarity::Regular,
    default_warning: 60,
    default_critical: 80,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CpuDisplay {
    /// Average usage across all cores
    Average,
    /// One percentage per core
    All,
}

pub fn command() -> Command {
    DEF.command().arg(
        Arg::new("display")
            .long("display")
            .help("What to show")
            .value_parser(clap::value_parser!(CpuDisplay))
            .default_value("average"),
    )
}

pub fn execute(
    matches: &ArgMatches,
    config: &Config,
    source: &mut dyn MetricSource,
) -> Result<StatusLine> {
    let thresholds = DEF.thresholds(matches, config)?;
    let display = matches
        .get_one::<CpuDisplay>("display")
        .copied()
        .unwrap_or(CpuDisplay::Average);

    let sample = source.cpu()?;
    let color = classify(level(f64::from(sample.average)), &thresholds);

    Ok(StatusLine::new(format_usage(&sample, display), color))
}

fn format_usage(sample: &CpuSample, display: CpuDisplay) -> String {
    match display {
        CpuDisplay::Average => format!("{:.1}%", sample.average),
        CpuDisplay::All => sample
            .per_core
            .iter()
            .map(|usage| format!("{:02}%", *usage as u8))
            .collect::<Vec<_>>()
            .join(" "),
    }
}
