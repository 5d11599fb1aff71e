// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose data types consumed by the classifier.
//!
//! One [`Pose`] is produced by the detector per frame: an overall confidence
//! score plus one [`KeyPoint`] per [`BodyPart`] in model-input pixel
//! coordinates. The classifier only consumes these types; it never calls the
//! detector itself.

use serde::{Deserialize, Serialize};

use crate::body_part::BodyPart;

/// A 2D point in model-input pixel space.
///
/// The y axis grows downward, image style; the bearing math transforms this
/// into an upward-y space before measuring angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate in pixels.
    pub x: f32,
    /// Vertical coordinate in pixels (grows downward).
    pub y: f32,
}

impl Position {
    /// Create a new position.
    ///
    /// # Arguments
    ///
    /// * `x` - Horizontal coordinate in pixels.
    /// * `y` - Vertical coordinate in pixels.
    ///
    /// # Returns
    ///
    /// * A new `Position` instance.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single detected keypoint: body part, position, and confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    /// Which body part this keypoint locates.
    pub body_part: BodyPart,
    /// Position in model-input pixel coordinates.
    #[serde(flatten)]
    pub position: Position,
    /// Per-part confidence score (0.0 to 1.0).
    pub score: f32,
}

impl KeyPoint {
    /// Create a new keypoint.
    ///
    /// # Arguments
    ///
    /// * `body_part` - The body part this keypoint locates.
    /// * `position` - Position in model-input pixel coordinates.
    /// * `score` - Per-part confidence score (0.0 to 1.0).
    ///
    /// # Returns
    ///
    /// * A new `KeyPoint` instance.
    #[must_use]
    pub const fn new(body_part: BodyPart, position: Position, score: f32) -> Self {
        Self {
            body_part,
            position,
            score,
        }
    }
}

/// One detector output: a full set of keypoints plus an overall confidence.
///
/// A well-formed pose carries exactly one keypoint per body part, but the
/// classifier tolerates partial output: a missing part simply skips the rule
/// cells that reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Detected keypoints, one per body part in a well-formed pose.
    pub keypoints: Vec<KeyPoint>,
    /// Overall pose confidence score (0.0 to 1.0).
    pub score: f32,
}

impl Pose {
    /// Create a new pose.
    ///
    /// # Arguments
    ///
    /// * `keypoints` - Detected keypoints.
    /// * `score` - Overall pose confidence score.
    ///
    /// # Returns
    ///
    /// * A new `Pose` instance.
    #[must_use]
    pub const fn new(keypoints: Vec<KeyPoint>, score: f32) -> Self {
        Self { keypoints, score }
    }

    /// Look up the keypoint for a body part.
    ///
    /// # Arguments
    ///
    /// * `part` - The body part to look up.
    ///
    /// # Returns
    ///
    /// * `Some` keypoint if the detector produced one for `part`, otherwise `None`.
    #[must_use]
    pub fn keypoint(&self, part: BodyPart) -> Option<&KeyPoint> {
        self.keypoints.iter().find(|kp| kp.body_part == part)
    }

    /// Get the number of keypoints in this pose.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// Check if this pose has no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypoint_lookup() {
        let pose = Pose::new(
            vec![
                KeyPoint::new(BodyPart::Nose, Position::new(10.0, 20.0), 0.9),
                KeyPoint::new(BodyPart::LeftShoulder, Position::new(30.0, 40.0), 0.8),
            ],
            0.85,
        );

        let nose = pose.keypoint(BodyPart::Nose).unwrap();
        assert!((nose.position.x - 10.0).abs() < f32::EPSILON);
        assert!((nose.position.y - 20.0).abs() < f32::EPSILON);
        assert!(pose.keypoint(BodyPart::RightAnkle).is_none());
    }

    #[test]
    fn test_pose_len() {
        let pose = Pose::new(Vec::new(), 0.0);
        assert!(pose.is_empty());
        assert_eq!(pose.len(), 0);
    }

    #[test]
    fn test_keypoint_json_shape() {
        let kp = KeyPoint::new(BodyPart::LeftKnee, Position::new(1.5, 2.5), 0.7);
        let json = serde_json::to_value(kp).unwrap();

        // Position is flattened so pose files stay [{body_part, x, y, score}].
        assert_eq!(json["body_part"], "left_knee");
        assert!((json["x"].as_f64().unwrap() - 1.5).abs() < 1e-6);
        assert!((json["y"].as_f64().unwrap() - 2.5).abs() < 1e-6);
    }
}
