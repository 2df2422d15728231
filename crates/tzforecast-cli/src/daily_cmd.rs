use std::process::ExitCode;

use tzforecast_core::{DailyEntry, DefaultIconResolver, build_daily};

use crate::cli::DailyArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, print_json};
use crate::shared::{load_samples, parse_merge_policy};

pub fn run_daily(args: DailyArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let policy = parse_merge_policy(&args.merge_policy)?;
    let samples = load_samples(&args.input)?;

    let daily = build_daily(&samples, &DefaultIconResolver, policy)?;

    match output_format {
        OutputFormat::Json => print_json(&daily)?,
        OutputFormat::Text => print_daily_text(&daily),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn print_daily_text(daily: &[DailyEntry]) {
    for entry in daily {
        println!(
            "{}: {} / {}  (icon {})",
            entry.date, entry.min_temp, entry.max_temp, entry.icon_id
        );
    }
}
