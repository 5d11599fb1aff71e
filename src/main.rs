// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use fall_detection::cli::args::{Cli, Commands};
use fall_detection::cli::classify::{run_check, run_classification};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => run_classification(&args),
        Commands::Check(args) => run_check(&args),
    }
}
