use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod daily_cmd;
mod error;
mod hourly_cmd;
mod shared;
mod views_cmd;

use cli::{Cli, Commands};
use daily_cmd::run_daily;
use error::{output_format_hint, parse_output_format, render_error};
use hourly_cmd::run_hourly;
use views_cmd::run_views;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Hourly(args) => {
            let fallback = output_format_hint(&args.input.output_format);
            let output_format = match parse_output_format(&args.input.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_hourly(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Daily(args) => {
            let fallback = output_format_hint(&args.input.output_format);
            let output_format = match parse_output_format(&args.input.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_daily(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Views(args) => {
            let fallback = output_format_hint(&args.input.output_format);
            let output_format = match parse_output_format(&args.input.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_views(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
