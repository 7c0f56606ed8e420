use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

// Use modules from the library
use i3_status_info::commands;
use i3_status_info::core::display::OutputFormat;
use i3_status_info::platform::SystemSource;
use i3_status_info::{init_logging, Config, StatusError};

fn main() -> Result<ExitCode> {
    let matches = commands::cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default();
    let config_path = matches.get_one::<PathBuf>("config");

    let config = match Config::load(config_path.map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(e) => return Ok(report_configuration_error(&e)),
    };

    // Query failures already come back as an unavailable line
    let mut source = SystemSource::new();
    let line = match commands::run(&matches, &config, &mut source) {
        Ok(line) => line,
        Err(e) => return Ok(report_configuration_error(&e)),
    };

    if !line.is_empty() || format == OutputFormat::Json {
        println!("{}", line.render(format));
    }

    Ok(ExitCode::SUCCESS)
}

/// Configuration problems are shown in the bar itself and exit with 1
fn report_configuration_error(err: &StatusError) -> ExitCode {
    println!("{}", err);
    ExitCode::from(1)
}
