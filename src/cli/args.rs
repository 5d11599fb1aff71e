// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// Default rule table shipped with the crate.
pub const DEFAULT_RULES: &str = "assets/fall_rules.csv";

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Examples:
    fall-detection classify --poses poses.json
    fall-detection classify --poses poses.json --rules custom_rules.csv --conf 0.6
    fall-detection classify -p poses.json --tolerance 30 --height 513 --verbose
    fall-detection check --rules custom_rules.csv"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify detected poses from a JSON file against a rule table
    Classify(ClassifyArgs),
    /// Validate a rule table and list its configured constraints
    Check(CheckArgs),
}

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to a JSON file with an array of poses
    #[arg(short, long)]
    pub poses: String,

    /// Path to the CSV rule table
    #[arg(short, long, default_value = DEFAULT_RULES)]
    pub rules: String,

    /// Confidence threshold for poses and keypoints
    #[arg(long, default_value_t = 0.5)]
    pub conf: f32,

    /// Angle tolerance in degrees
    #[arg(long, default_value_t = 40)]
    pub tolerance: u32,

    /// Model input height in pixels
    #[arg(long, default_value_t = 257.0)]
    pub height: f32,

    /// Leading non-data lines in the rule table
    #[arg(long, default_value_t = 2)]
    pub skip_lines: usize,

    /// Leading metadata columns in each rule row
    #[arg(long, default_value_t = 2)]
    pub metadata_columns: usize,

    /// Continue with no rules when the table cannot be loaded
    #[arg(long)]
    pub allow_missing_rules: bool,

    /// Show verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the CSV rule table
    #[arg(short, long, default_value = DEFAULT_RULES)]
    pub rules: String,

    /// Leading non-data lines in the rule table
    #[arg(long, default_value_t = 2)]
    pub skip_lines: usize,

    /// Leading metadata columns in each rule row
    #[arg(long, default_value_t = 2)]
    pub metadata_columns: usize,
}
