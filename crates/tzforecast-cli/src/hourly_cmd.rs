use std::process::ExitCode;

use tzforecast_core::{DefaultIconResolver, HourlyEntry, build_hourly};

use crate::cli::HourlyArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, print_json};
use crate::shared::{load_samples, parse_hourly_policy};

pub fn run_hourly(args: HourlyArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let policy = parse_hourly_policy(&args.hourly_policy)?;
    let samples = load_samples(&args.input)?;

    let hourly = build_hourly(&samples, &DefaultIconResolver, policy)?;

    match output_format {
        OutputFormat::Json => print_json(&hourly)?,
        OutputFormat::Text => print_hourly_text(&hourly),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn print_hourly_text(hourly: &[HourlyEntry]) {
    for entry in hourly {
        println!(
            "{} {:>8}  {} / {}  (icon {})",
            entry.local_date, entry.local_time, entry.temp_min, entry.temp_max, entry.icon_id
        );
    }
}
