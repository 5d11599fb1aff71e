// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fs;
use std::process;

use colored::Colorize;

use crate::cli::args::{CheckArgs, ClassifyArgs};
use crate::{BodyState, ClassifierConfig, Pose, RuleFormat, RuleMatrix, classify};
use crate::{error, info, verbose, warn};

/// Run pose classification over a JSON pose file.
pub fn run_classification(args: &ClassifyArgs) {
    crate::cli::logging::set_verbose(args.verbose);

    let format = RuleFormat::new()
        .with_skip_lines(args.skip_lines)
        .with_metadata_columns(args.metadata_columns);

    let rules = match RuleMatrix::load_with(&args.rules, &format) {
        Ok(rules) => rules,
        Err(e) if args.allow_missing_rules => {
            warn!("{e}; continuing with no rules configured");
            RuleMatrix::unconstrained()
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };
    verbose!(
        "Loaded {} with {} constraints",
        args.rules,
        rules.constraints().len()
    );

    let poses = match load_poses(&args.poses) {
        Ok(poses) => poses,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let config = ClassifierConfig::new()
        .with_confidence(args.conf)
        .with_tolerance(args.tolerance)
        .with_model_input_height(args.height);

    let mut counts = [0usize; 3];
    for (i, pose) in poses.iter().enumerate() {
        let result = classify(pose, &rules, &config);
        counts[result.state as usize] += 1;

        let label = match result.state {
            BodyState::Unknown => result.state.as_str().dimmed(),
            BodyState::Normal => result.state.as_str().green(),
            BodyState::Fall => result.state.as_str().red().bold(),
        };
        match result.violation {
            Some(violation) => info!("pose {}: {label} ({violation})", i + 1),
            None => info!("pose {}: {label}", i + 1),
        }
    }

    info!(
        "\n{} poses: {} normal, {} falls, {} unknown",
        poses.len(),
        counts[BodyState::Normal as usize],
        counts[BodyState::Fall as usize],
        counts[BodyState::Unknown as usize]
    );
}

/// Validate a rule table and list its configured constraints.
pub fn run_check(args: &CheckArgs) {
    let format = RuleFormat::new()
        .with_skip_lines(args.skip_lines)
        .with_metadata_columns(args.metadata_columns);

    match RuleMatrix::load_with(&args.rules, &format) {
        Ok(rules) => {
            info!(
                "{} OK: {} constraints configured",
                args.rules,
                rules.constraints().len()
            );
            for c in rules.constraints() {
                info!("  {} -> {}: {}°", c.from, c.to, c.expected);
            }
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

/// Read a JSON array of poses from a file.
fn load_poses(path: &str) -> crate::Result<Vec<Pose>> {
    let text = fs::read_to_string(path).map_err(|e| {
        crate::FallDetectionError::PoseFileError(format!("cannot read {path}: {e}"))
    })?;
    Ok(serde_json::from_str(&text)?)
}
