// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Body part definitions for pose keypoints.
//!
//! This module defines the 17 COCO-Pose keypoints tracked by the detector,
//! in the fixed ordinal order used to index the rule matrix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of tracked body parts.
pub const NUM_BODY_PARTS: usize = 17;

/// A named anatomical landmark produced by the pose detector.
///
/// The ordinal position of each variant is significant: it indexes both axes
/// of the rule matrix and matches the keypoint order of COCO-Pose models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Nose (keypoint 0).
    Nose,
    /// Left eye (keypoint 1).
    LeftEye,
    /// Right eye (keypoint 2).
    RightEye,
    /// Left ear (keypoint 3).
    LeftEar,
    /// Right ear (keypoint 4).
    RightEar,
    /// Left shoulder (keypoint 5).
    LeftShoulder,
    /// Right shoulder (keypoint 6).
    RightShoulder,
    /// Left elbow (keypoint 7).
    LeftElbow,
    /// Right elbow (keypoint 8).
    RightElbow,
    /// Left wrist (keypoint 9).
    LeftWrist,
    /// Right wrist (keypoint 10).
    RightWrist,
    /// Left hip (keypoint 11).
    LeftHip,
    /// Right hip (keypoint 12).
    RightHip,
    /// Left knee (keypoint 13).
    LeftKnee,
    /// Right knee (keypoint 14).
    RightKnee,
    /// Left ankle (keypoint 15).
    LeftAnkle,
    /// Right ankle (keypoint 16).
    RightAnkle,
}

/// All body parts in ordinal order.
const ALL: [BodyPart; NUM_BODY_PARTS] = [
    BodyPart::Nose,
    BodyPart::LeftEye,
    BodyPart::RightEye,
    BodyPart::LeftEar,
    BodyPart::RightEar,
    BodyPart::LeftShoulder,
    BodyPart::RightShoulder,
    BodyPart::LeftElbow,
    BodyPart::RightElbow,
    BodyPart::LeftWrist,
    BodyPart::RightWrist,
    BodyPart::LeftHip,
    BodyPart::RightHip,
    BodyPart::LeftKnee,
    BodyPart::RightKnee,
    BodyPart::LeftAnkle,
    BodyPart::RightAnkle,
];

impl BodyPart {
    /// Get all body parts in ordinal order.
    ///
    /// # Returns
    ///
    /// * A slice of all 17 body parts, ordinal ascending.
    #[must_use]
    pub const fn all() -> &'static [Self; NUM_BODY_PARTS] {
        &ALL
    }

    /// Get the ordinal index of this body part.
    ///
    /// # Returns
    ///
    /// * The index in 0..17 used for rule matrix rows and columns.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Get the body part for an ordinal index.
    ///
    /// # Arguments
    ///
    /// * `index` - The ordinal index.
    ///
    /// # Returns
    ///
    /// * `Some` body part if `index` is in 0..17, otherwise `None`.
    #[must_use]
    pub fn from_ordinal(index: usize) -> Option<Self> {
        ALL.get(index).copied()
    }

    /// Returns the snake_case name of this body part.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = BodyPartParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ALL.iter()
            .find(|part| part.as_str() == normalized)
            .copied()
            .ok_or_else(|| BodyPartParseError(s.to_string()))
    }
}

/// Error returned when parsing an invalid body part name.
#[derive(Debug, Clone)]
pub struct BodyPartParseError(String);

impl fmt::Display for BodyPartParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid body part '{}', expected a COCO keypoint name such as nose or left_shoulder",
            self.0
        )
    }
}

impl std::error::Error for BodyPartParseError {}
