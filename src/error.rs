// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the fall detection library.

use std::fmt;

/// Result type alias for fall detection operations.
pub type Result<T> = std::result::Result<T, FallDetectionError>;

/// Main error type for the fall detection library.
#[derive(Debug)]
pub enum FallDetectionError {
    /// Rule table missing, unreadable, or structurally invalid.
    RuleTableError(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
    /// Error reading or writing pose files.
    PoseFileError(String),
}

impl fmt::Display for FallDetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleTableError(msg) => write!(f, "Rule table error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::PoseFileError(msg) => write!(f, "Pose file error: {msg}"),
        }
    }
}

impl std::error::Error for FallDetectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FallDetectionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for FallDetectionError {
    fn from(err: serde_json::Error) -> Self {
        Self::PoseFileError(err.to_string())
    }
}
