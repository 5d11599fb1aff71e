// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose classification against the rule matrix.
//!
//! One call classifies one pose: the whole-pose confidence gate runs first,
//! then every configured constraint is checked in row-major order. The first
//! constraint whose measured bearing falls outside the tolerance condemns the
//! pose as a fall; a pose that survives every check is normal. The call is
//! pure: same pose, rules, and config always produce the same verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bearing::{bearing, circular_difference};
use crate::body_part::BodyPart;
use crate::pose::Pose;
use crate::rules::RuleMatrix;

/// Classification verdict for one pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyState {
    /// Detector confidence too low to judge the pose.
    Unknown,
    /// All configured constraints hold.
    Normal,
    /// At least one constraint violated.
    Fall,
}

impl BodyState {
    /// Returns the lowercase name of this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Normal => "normal",
            Self::Fall => "fall",
        }
    }
}

impl fmt::Display for BodyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The constraint that triggered a fall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The "from" body part of the violated cell.
    pub from: BodyPart,
    /// The "to" body part of the violated cell.
    pub to: BodyPart,
    /// Measured bearing in degrees.
    pub measured: u32,
    /// Expected bearing in degrees.
    pub expected: u32,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: measured {}°, expected {}°",
            self.from, self.to, self.measured, self.expected
        )
    }
}

/// Result of one classification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The verdict.
    pub state: BodyState,
    /// The first violated constraint, present only for fall verdicts.
    pub violation: Option<Violation>,
}

/// Configuration for pose classification.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use fall_detection::ClassifierConfig;
///
/// let config = ClassifierConfig::new()
///     .with_confidence(0.5)
///     .with_tolerance(40)
///     .with_model_input_height(257.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Confidence threshold (0.0 to 1.0) applied to the whole pose and to
    /// each keypoint pair. A pose below it is unknown; a keypoint at or
    /// below it skips the cells that reference it.
    pub confidence_threshold: f32,
    /// Maximum allowed circular difference in degrees between measured and
    /// expected bearings before a cell counts as violated.
    pub angle_tolerance: u32,
    /// Height of the model input in pixels, used for the y-axis flip in the
    /// bearing math. Must match the space the keypoints are reported in.
    pub model_input_height: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            angle_tolerance: 40,
            model_input_height: 257.0, // PoseNet model input size
        }
    }
}

impl ClassifierConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - The minimum confidence score (0.0 to 1.0).
    ///
    /// # Returns
    ///
    /// * The modified `ClassifierConfig`.
    #[must_use]
    pub const fn with_confidence(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set the angle tolerance in degrees.
    ///
    /// # Arguments
    ///
    /// * `degrees` - Maximum allowed deviation from an expected bearing.
    ///
    /// # Returns
    ///
    /// * The modified `ClassifierConfig`.
    #[must_use]
    pub const fn with_tolerance(mut self, degrees: u32) -> Self {
        self.angle_tolerance = degrees;
        self
    }

    /// Set the model input height in pixels.
    ///
    /// # Arguments
    ///
    /// * `height` - Height of the coordinate space the keypoints live in.
    ///
    /// # Returns
    ///
    /// * The modified `ClassifierConfig`.
    #[must_use]
    pub const fn with_model_input_height(mut self, height: f32) -> Self {
        self.model_input_height = height;
        self
    }
}

/// Classify one pose against the rule matrix.
///
/// A pose whose overall score is below the confidence threshold is unknown
/// without any per-joint checks. Otherwise every configured constraint is
/// evaluated in row-major order; a cell is skipped when either keypoint is
/// missing from the pose or scores at or below the threshold. The first
/// violated constraint short-circuits to a fall verdict carrying the
/// offending pair; if every cell passes or is skipped the pose is normal,
/// which is also the degraded behavior for an unconstrained matrix.
///
/// # Arguments
///
/// * `pose` - The detector output to classify.
/// * `rules` - The rule matrix, loaded once at startup.
/// * `config` - Thresholds and coordinate-space height.
///
/// # Returns
///
/// * The verdict plus the first violated constraint for fall verdicts.
#[must_use]
pub fn classify(pose: &Pose, rules: &RuleMatrix, config: &ClassifierConfig) -> Classification {
    if pose.score < config.confidence_threshold {
        return Classification {
            state: BodyState::Unknown,
            violation: None,
        };
    }

    for constraint in rules.constraints() {
        let (Some(from), Some(to)) = (pose.keypoint(constraint.from), pose.keypoint(constraint.to))
        else {
            // Detector output is partial for this pair; not an error.
            continue;
        };
        if from.score <= config.confidence_threshold || to.score <= config.confidence_threshold {
            continue;
        }

        let measured = bearing(from.position, to.position, config.model_input_height);
        if circular_difference(measured, constraint.expected) > config.angle_tolerance {
            return Classification {
                state: BodyState::Fall,
                violation: Some(Violation {
                    from: constraint.from,
                    to: constraint.to,
                    measured,
                    expected: constraint.expected,
                }),
            };
        }
    }

    Classification {
        state: BodyState::Normal,
        violation: None,
    }
}
