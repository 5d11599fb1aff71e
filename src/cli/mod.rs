// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for running classification.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `classify` and `check` command implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Classification and rule-check logic.
pub mod classify;

/// Logging helpers.
pub mod logging;
