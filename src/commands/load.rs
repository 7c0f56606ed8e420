use clap::{ArgMatches, Command};

use super::metric::MetricDef;
use crate::core::color::{classify, level};
use crate::core::config::Config;
use crate::core::display::StatusLine;
use crate::core::source::MetricSource;
use crate::core::threshold::Polarity;
use crate::error::Result;

pub const DEF: MetricDef = MetricDef {
    name: "load",
    about: "Get load info",
    polarity: Polarity::Regular,
    default_warning: 4,
    default_critical: 8,
};

pub fn command() -> Command {
    DEF.command()
}

/// Print the 1/5/15 minute load; color follows the 1 minute value
pub fn execute(
    matches: &ArgMatches,
    config: &Config,
    source: &mut dyn MetricSource,
) -> Result<StatusLine> {
    let thresholds = DEF.thresholds(matches, config)?;
    let load = source.load_average()?;
    let color = classify(level(load.one), &thresholds);

    Ok(StatusLine::new(
        format!("{:.2}/{:.2}/{:.2}", load.one, load.five, load.fifteen),
        color,
    ))
}
