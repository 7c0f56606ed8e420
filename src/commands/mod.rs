// Command handlers module
pub mod battery;
pub mod cpu;
pub mod disk;
pub mod disk_io;
pub mod load;
pub mod mem;
pub mod metric;
pub mod perf_mode;
pub mod wifi;

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

use crate::core::config::Config;
use crate::core::display::{OutputFormat, StatusLine};
use crate::core::source::MetricSource;
use crate::error::{Result, StatusError};

/// Build the command-line interface
pub fn cli() -> Command {
    Command::new("i3-status-info")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Host metrics for i3blocks and i3bar, colored by thresholds")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .help("Output format")
                .value_parser(clap::value_parser!(OutputFormat))
                .default_value("plain"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("Path to a JSON config file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Log debug information to stderr")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(battery::command())
        .subcommand(cpu::command())
        .subcommand(disk::command())
        .subcommand(load::command())
        .subcommand(mem::command())
        .subcommand(wifi::command())
        .subcommand(perf_mode::command())
        .subcommand(disk_io::command())
}

/// Run the selected metric subcommand.
///
/// Configuration errors are returned to the caller. A failed hardware or OS
/// query is logged and reported as an unavailable reading, never as a
/// zero-valued one.
pub fn run(
    matches: &ArgMatches,
    config: &Config,
    source: &mut dyn MetricSource,
) -> Result<StatusLine> {
    let result = match matches.subcommand() {
        Some(("battery", sub_matches)) => battery::execute(sub_matches, config, source),
        Some(("cpu", sub_matches)) => cpu::execute(sub_matches, config, source),
        Some(("disk", sub_matches)) => disk::execute(sub_matches, config, source),
        Some(("load", sub_matches)) => load::execute(sub_matches, config, source),
        Some(("mem", sub_matches)) => mem::execute(sub_matches, config, source),
        Some(("wifi", sub_matches)) => wifi::execute(sub_matches, config, source),
        Some(("perf-mode", sub_matches)) => perf_mode::execute(sub_matches, source),
        Some(("disk-io", sub_matches)) => disk_io::execute(sub_matches, config, source),
        Some((name, _)) => Err(StatusError::other(format!("unknown command '{}'", name))),
        None => Err(StatusError::other("no command given")),
    };

    match result {
        Err(e) if !e.is_configuration() => {
            log::error!("{}", e);
            Ok(StatusLine::unavailable())
        }
        other => other,
    }
}
