//! Shared builder for threshold-colored metric subcommands.

use clap::{Arg, ArgMatches, Command};

use crate::core::config::Config;
use crate::core::threshold::{Polarity, ThresholdPair};
use crate::error::Result;

/// Static description of a metric subcommand.
#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub about: &'static str,
    pub polarity: Polarity,
    pub default_warning: i8,
    pub default_critical: i8,
}

impl MetricDef {
    /// Subcommand with `--warning` / `--critical` flags for this metric.
    ///
    /// No clap defaults are set so that an explicit flag can be told apart
    /// from a config file value.
    pub fn command(&self) -> Command {
        let (warn_min, warn_max) = self.polarity.warning_range();
        let (crit_min, crit_max) = self.polarity.critical_range();

        Command::new(self.name)
            .about(self.about)
            .arg(
                Arg::new("warning")
                    .long("warning")
                    .value_name("INT")
                    .help(format!(
                        "Warning threshold ([{}-{}], default {})",
                        warn_min, warn_max, self.default_warning
                    ))
                    .value_parser(clap::value_parser!(i8))
                    .allow_negative_numbers(true),
            )
            .arg(
                Arg::new("critical")
                    .long("critical")
                    .value_name("INT")
                    .help(format!(
                        "Critical threshold ([{}-{}], default {})",
                        crit_min, crit_max, self.default_critical
                    ))
                    .value_parser(clap::value_parser!(i8))
                    .allow_negative_numbers(true),
            )
    }

    /// Resolve and validate the thresholds: flag, then config file, then default
    pub fn thresholds(&self, matches: &ArgMatches, config: &Config) -> Result<ThresholdPair> {
        let overrides = config.thresholds(self.name);

        let warning = matches
            .get_one::<i8>("warning")
            .copied()
            .or(overrides.warning)
            .unwrap_or(self.default_warning);
        let critical = matches
            .get_one::<i8>("critical")
            .copied()
            .or(overrides.critical)
            .unwrap_or(self.default_critical);

        log::debug!(
            "{} thresholds: warning={} critical={} ({:?})",
            self.name,
            warning,
            critical,
            self.polarity
        );
        Ok(ThresholdPair::new(warning, critical, self.polarity)?)
    }
}

/// Boolean flag that accepts `--flag`, `--flag=true` and `--flag false`
pub fn bool_flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("BOOL")
        .help(help)
        .value_parser(clap::value_parser!(bool))
        .num_args(0..=1)
        .default_value("false")
        .default_missing_value("true")
}
