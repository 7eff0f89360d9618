// Command-line surface of the check_graphite plugin

use std::path::PathBuf;

use clap::Parser;

use crate::decode::SeriesFormat;

/// Graphite Nagios Plugin.
///
/// `-h` is the Graphite host, so help is only available as `--help`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "check_graphite",
    version,
    about = "Graphite Nagios Plugin.",
    disable_help_flag = true
)]
pub struct CheckArgs {
    /// Graphite target (metric path or function expression)
    #[arg(short, long)]
    pub target: String,

    /// Graphite host, optionally with :port
    #[arg(short = 'h', long)]
    pub host: String,

    /// Time window passed as the render `from` parameter
    #[arg(long, default_value = "-5minutes", allow_hyphen_values = true)]
    pub window: String,

    /// Metric units
    #[arg(short, long, default_value = "percent")]
    pub units: String,

    /// Warning threshold (alert when value >= warning)
    #[arg(short, long, allow_negative_numbers = true)]
    pub warning: f64,

    /// Critical threshold (alert when value >= critical)
    #[arg(short, long, allow_negative_numbers = true)]
    pub critical: f64,

    /// Render API response format
    #[arg(short, long, value_enum, default_value_t = SeriesFormat::Pickle)]
    pub format: SeriesFormat,

    /// Log fetched values and the computed scalar to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Optional TOML file with HTTP transport settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}
