use std::process::ExitCode;

use serde::Serialize;
use tzforecast_core::place::CityPlaceResolver;
use tzforecast_core::{
    DailyEntry, DefaultIconResolver, HourlyEntry, ViewOptions, build_views,
};

use crate::cli::ViewsArgs;
use crate::daily_cmd::print_daily_text;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, print_json};
use crate::hourly_cmd::print_hourly_text;
use crate::shared::{load_document, parse_hourly_policy, parse_merge_policy};

#[derive(Debug, Serialize)]
struct ViewsOutput {
    place: String,
    hourly: Vec<HourlyEntry>,
    daily: Vec<DailyEntry>,
}

pub fn run_views(args: ViewsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let options = ViewOptions {
        hourly: parse_hourly_policy(&args.hourly_policy)?,
        merge: parse_merge_policy(&args.merge_policy)?,
    };

    let document = load_document(&args.input)?;
    let samples = document.samples()?;
    let views = build_views(&samples, &DefaultIconResolver, options)?;

    let output = ViewsOutput {
        place: CityPlaceResolver::new(document.city).label(),
        hourly: views.hourly,
        daily: views.daily,
    };

    match output_format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Text => {
            println!("Place: {}", output.place);
            println!();
            println!("Hourly:");
            print_hourly_text(&output.hourly);
            println!();
            println!("Daily:");
            print_daily_text(&output.daily);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
