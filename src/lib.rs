// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Fall Detection Library
//!
//! Rule-driven fall detection over 2D pose keypoints, written in Rust. A
//! detected pose (17 COCO keypoints with confidence scores) is classified as
//! `unknown`, `normal`, or `fall` by comparing measured bearing angles
//! between configured keypoint pairs against a table of expected angles with
//! a fixed tolerance.
//!
//! The crate is the classification core only. Camera capture, image
//! conversion, rendering, and the keypoint detector itself are external
//! collaborators: the library consumes detector output ([`Pose`]) and
//! produces a verdict ([`BodyState`]) plus an optional diagnostic
//! ([`Violation`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use fall_detection::{ClassifierConfig, RuleMatrix, classify};
//! # use fall_detection::Pose;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the rule table once at startup.
//!     let rules = RuleMatrix::load("assets/fall_rules.csv")?;
//!     let config = ClassifierConfig::new()
//!         .with_confidence(0.5)
//!         .with_tolerance(40);
//!
//!     // One call per detector output.
//!     # let pose = Pose::new(vec![], 0.9);
//!     let result = classify(&pose, &rules, &config);
//!     println!("verdict: {}", result.state);
//!     if let Some(violation) = result.violation {
//!         println!("violated: {violation}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Rule Table Format
//!
//! Comma-separated UTF-8 text: a configurable number of leading non-data
//! lines (default 2: header plus units line), then one row per body part in
//! ordinal order. Each row carries leading metadata fields (default 2)
//! followed by one expected-bearing column per body part; an empty field or
//! 0 means the pair is unconstrained. See [`RuleFormat`].
//!
//! ## Concurrency
//!
//! Classification is synchronous, pure, and stateless per call. A fully
//! constructed [`RuleMatrix`] is never mutated, so one matrix can serve any
//! number of threads classifying different poses without locking.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`body_part`] | The 17 COCO keypoints ([`BodyPart`]) in ordinal order |
//! | [`pose`] | Detector output types ([`Pose`], [`KeyPoint`], [`Position`]) |
//! | [`rules`] | Rule table loading ([`RuleMatrix`], [`RuleFormat`]) |
//! | [`bearing`] | Bearing angle math between keypoint positions |
//! | [`classifier`] | Pose classification ([`classify`], [`BodyState`]) |
//! | [`error`] | Error types ([`FallDetectionError`], [`Result`]) |
//! | [`cli`] | Command-line interface for the binary |

// Modules
pub mod bearing;
pub mod body_part;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod pose;
pub mod rules;

// Re-export main types for convenience
pub use bearing::{bearing, circular_difference};
pub use body_part::{BodyPart, NUM_BODY_PARTS};
pub use classifier::{BodyState, Classification, ClassifierConfig, Violation, classify};
pub use error::{FallDetectionError, Result};
pub use pose::{KeyPoint, Pose, Position};
pub use rules::{Constraint, RuleFormat, RuleMatrix};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
