/// Binary unit used to display byte counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ByteUnit {
    Kb,
    Mb,
    #[default]
    Gb,
}

impl ByteUnit {
    pub fn divisor(self) -> u64 {
        match self {
            ByteUnit::Kb => 1024,
            ByteUnit::Mb => 1024 * 1024,
            ByteUnit::Gb => 1024 * 1024 * 1024,
        }
    }

    /// Unit that keeps a throughput readable: K below 1 MiB/s, G above 1 GiB/s
    pub fn for_rate(bytes_per_sec: f64) -> Self {
        let mib = bytes_per_sec / ByteUnit::Mb.divisor() as f64;
        if mib < 1.0 {
            ByteUnit::Kb
        } else if mib > 1024.0 {
            ByteUnit::Gb
        } else {
            ByteUnit::Mb
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ByteUnit::Kb => "K",
            ByteUnit::Mb => "M",
            ByteUnit::Gb => "G",
        }
    }
}

/// Format a byte count with one decimal (e.g. `3.2G`)
pub fn format_bytes(bytes: u64, unit: ByteUnit) -> String {
    format!(
        "{:.1}{}",
        bytes as f64 / unit.divisor() as f64,
        unit.suffix()
    )
}

/// Format a byte count in whole units, rounding down (e.g. `41G`)
pub fn format_bytes_whole(bytes: u64, unit: ByteUnit) -> String {
    format!("{}{}", bytes / unit.divisor(), unit.suffix())
}

/// Format a transfer rate (e.g. `12.4M/s`). `None` picks the unit per value.
pub fn format_rate(bytes_per_sec: f64, unit: Option<ByteUnit>) -> String {
    let unit = unit.unwrap_or_else(|| ByteUnit::for_rate(bytes_per_sec));
    format!(
        "{:.1}{}/s",
        bytes_per_sec / unit.divisor() as f64,
        unit.suffix()
    )
}

/// Format a percentage without decimals, truncating
pub fn format_percent(percent: f64) -> String {
    format!("{}%", percent.clamp(0.0, 100.0) as u8)
}
