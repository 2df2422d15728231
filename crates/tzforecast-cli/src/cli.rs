use clap::{Parser, Subcommand};

/// Hourly and daily forecast views in a fixed local offset
#[derive(Parser, Debug)]
#[command(name = "tzforecast")]
#[command(version, about = "Hourly and daily forecast views in a fixed local offset")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the next eight forecast samples in local time
    Hourly(HourlyArgs),
    /// Show one min/max range per local day
    Daily(DailyArgs),
    /// Show the place label with both views
    Views(ViewsArgs),
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Forecast document path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct HourlyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Short input handling: strict, clamp
    #[arg(long, default_value = "strict")]
    pub hourly_policy: String,
}

#[derive(clap::Args, Debug)]
pub struct DailyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Max of a day narrowed by a colder sample: reuse_min, keep_max
    #[arg(long, default_value = "reuse_min")]
    pub merge_policy: String,
}

#[derive(clap::Args, Debug)]
pub struct ViewsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Short input handling: strict, clamp
    #[arg(long, default_value = "strict")]
    pub hourly_policy: String,

    /// Max of a day narrowed by a colder sample: reuse_min, keep_max
    #[arg(long, default_value = "reuse_min")]
    pub merge_policy: String,
}
