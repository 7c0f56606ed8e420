use clap::{Arg, ArgMatches, Command};

use super::metric::MetricDef;
use crate::core::color::{classify, level};
use crate::core::config::Config;
use crate::core::display::StatusLine;
use crate::core::source::MetricSource;
use crate::core::threshold::{Polarity, ThresholdPair};
use crate::error::Result;
use crate::ui::formatters::{format_rate, ByteUnit};

/// Thresholds are in MB/s
pub const DEF: MetricDef = MetricDef {
    name: "disk-io",
    about: "Get Disk IO info",
    polarity: Polarity::Regular,
    default_warning: 10,
    default_critical: 100,
};

const IOWAIT_WARNING: i8 = 5;
const IOWAIT_CRITICAL: i8 = 10;

pub fn command() -> Command {
    DEF.command()
        .arg(
            Arg::new("device")
                .long("device")
                .value_name("NAME")
                .help("Block device as named in /proc/diskstats")
                .default_value("nvme0n1"),
        )
        .arg(
            Arg::new("unit")
                .long("unit")
                .help("Unit for throughput (adapts to each value when omitted)")
                .value_parser(clap::value_parser!(ByteUnit)),
        )
}

/// Print read and write throughput plus iowait.
///
/// Throughput is colored by the busier direction, iowait by its own fixed
/// thresholds; the first color wins.
pub fn execute(
    matches: &ArgMatches,
    config: &Config,
    source: &mut dyn MetricSource,
) -> Result<StatusLine> {
    let thresholds = DEF.thresholds(matches, config)?;
    let iowait_thresholds = ThresholdPair::new(IOWAIT_WARNING, IOWAIT_CRITICAL, Polarity::Regular)?;
    let unit = matches.get_one::<ByteUnit>("unit").copied();
    let device = matches
        .get_one::<String>("device")
        .map(String::as_str)
        .unwrap_or("nvme0n1");

    let sample = source.disk_io(device)?;

    let peak_mb = sample.peak_bytes_per_sec() / ByteUnit::Mb.divisor() as f64;
    let throughput = StatusLine::new(
        format!(
            "{} {}",
            format_rate(sample.read_bytes_per_sec, unit),
            format_rate(sample.write_bytes_per_sec, unit)
        ),
        classify(level(peak_mb), &thresholds),
    );
    let iowait = StatusLine::new(
        format!("{:.1}%", sample.iowait_percent),
        classify(level(sample.iowait_percent), &iowait_thresholds),
    );

    Ok(StatusLine::compose([throughput, iowait]))
}
