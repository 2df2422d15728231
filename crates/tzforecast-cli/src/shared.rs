use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use tracing::debug;
use tzforecast_core::{ForecastDocument, HourlyPolicy, MergePolicy, Sample};

use crate::cli::InputArgs;
use crate::error::{CliError, CliResult};

pub fn parse_hourly_policy(s: &str) -> CliResult<HourlyPolicy> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(HourlyPolicy::Strict),
        "clamp" => Ok(HourlyPolicy::Clamp),
        _ => Err(CliError::input(format!(
            "Invalid hourly_policy '{}'. Expected: strict, clamp",
            s
        ))),
    }
}

pub fn parse_merge_policy(s: &str) -> CliResult<MergePolicy> {
    match s.to_lowercase().as_str() {
        "reuse_min" => Ok(MergePolicy::ReuseMinAsMax),
        "keep_max" => Ok(MergePolicy::KeepMax),
        _ => Err(CliError::input(format!(
            "Invalid merge_policy '{}'. Expected: reuse_min, keep_max",
            s
        ))),
    }
}

fn read_source(args: &InputArgs) -> anyhow::Result<String> {
    if args.stdin || args.input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read file: {}", args.input))
    }
}

/// Read and parse the forecast document named by the input arguments.
pub fn load_document(args: &InputArgs) -> CliResult<ForecastDocument> {
    let text = read_source(args).map_err(|e| CliError::runtime(format!("{e:#}")))?;
    let document = ForecastDocument::from_json(&text)?;
    debug!(entries = document.list.len(), "Loaded forecast document");
    Ok(document)
}

pub fn load_samples(args: &InputArgs) -> CliResult<Vec<Sample>> {
    Ok(load_document(args)?.samples()?)
}
