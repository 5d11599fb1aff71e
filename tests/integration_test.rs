// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the fall detection library.

use std::io::Write;

use fall_detection::{
    BodyPart, BodyState, ClassifierConfig, KeyPoint, Pose, Position, RuleFormat, RuleMatrix,
    classify,
};

/// Build a pose with one keypoint per body part at the given positions.
fn full_pose(positions: &[(BodyPart, f32, f32)], score: f32) -> Pose {
    let keypoints = positions
        .iter()
        .map(|&(part, x, y)| KeyPoint::new(part, Position::new(x, y), 0.9))
        .collect();
    Pose::new(keypoints, score)
}

/// An upright figure in 257x257 model space: left side at x=118, right side
/// at x=138, head above shoulders above hips above knees above ankles.
fn standing_pose() -> Pose {
    full_pose(
        &[
            (BodyPart::Nose, 128.0, 40.0),
            (BodyPart::LeftEye, 124.0, 35.0),
            (BodyPart::RightEye, 132.0, 35.0),
            (BodyPart::LeftEar, 120.0, 38.0),
            (BodyPart::RightEar, 136.0, 38.0),
            (BodyPart::LeftShoulder, 118.0, 70.0),
            (BodyPart::RightShoulder, 138.0, 70.0),
            (BodyPart::LeftElbow, 112.0, 100.0),
            (BodyPart::RightElbow, 144.0, 100.0),
            (BodyPart::LeftWrist, 110.0, 130.0),
            (BodyPart::RightWrist, 146.0, 130.0),
            (BodyPart::LeftHip, 118.0, 140.0),
            (BodyPart::RightHip, 138.0, 140.0),
            (BodyPart::LeftKnee, 118.0, 190.0),
            (BodyPart::RightKnee, 138.0, 190.0),
            (BodyPart::LeftAnkle, 118.0, 240.0),
            (BodyPart::RightAnkle, 138.0, 240.0),
        ],
        0.9,
    )
}

/// The same figure lying horizontally along y=200.
fn prone_pose() -> Pose {
    full_pose(
        &[
            (BodyPart::Nose, 30.0, 200.0),
            (BodyPart::LeftEye, 34.0, 197.0),
            (BodyPart::RightEye, 34.0, 203.0),
            (BodyPart::LeftEar, 38.0, 196.0),
            (BodyPart::RightEar, 38.0, 204.0),
            (BodyPart::LeftShoulder, 60.0, 198.0),
            (BodyPart::RightShoulder, 60.0, 202.0),
            (BodyPart::LeftElbow, 90.0, 192.0),
            (BodyPart::RightElbow, 90.0, 208.0),
            (BodyPart::LeftWrist, 115.0, 190.0),
            (BodyPart::RightWrist, 115.0, 210.0),
            (BodyPart::LeftHip, 130.0, 198.0),
            (BodyPart::RightHip, 130.0, 202.0),
            (BodyPart::LeftKnee, 180.0, 198.0),
            (BodyPart::RightKnee, 180.0, 202.0),
            (BodyPart::LeftAnkle, 230.0, 198.0),
            (BodyPart::RightAnkle, 230.0, 202.0),
        ],
        0.9,
    )
}

#[test]
fn test_bundled_rules_classify_standing_as_normal() {
    let rules = RuleMatrix::load("assets/fall_rules.csv").unwrap();
    let config = ClassifierConfig::default();

    let result = classify(&standing_pose(), &rules, &config);
    assert_eq!(result.state, BodyState::Normal);
    assert!(result.violation.is_none());
}

#[test]
fn test_bundled_rules_classify_prone_as_fall() {
    let rules = RuleMatrix::load("assets/fall_rules.csv").unwrap();
    let config = ClassifierConfig::default();

    let result = classify(&prone_pose(), &rules, &config);
    assert_eq!(result.state, BodyState::Fall);

    // The first configured cell in row-major order is the violated one the
    // diagnostics report: left_shoulder -> left_hip.
    let violation = result.violation.unwrap();
    assert_eq!(violation.from, BodyPart::LeftShoulder);
    assert_eq!(violation.to, BodyPart::LeftHip);
    assert_eq!(violation.expected, 270);
    assert_eq!(violation.measured, 0);
}

#[test]
fn test_low_confidence_pose_is_unknown_under_any_rules() {
    let rules = RuleMatrix::load("assets/fall_rules.csv").unwrap();
    let config = ClassifierConfig::default();

    let mut pose = prone_pose();
    pose.score = 0.3;
    let result = classify(&pose, &rules, &config);
    assert_eq!(result.state, BodyState::Unknown);
}

#[test]
fn test_degraded_mode_without_rules() {
    let rules = RuleMatrix::unconstrained();
    let config = ClassifierConfig::default();

    assert_eq!(
        classify(&prone_pose(), &rules, &config).state,
        BodyState::Normal
    );
}

#[test]
fn test_load_from_temp_file_with_custom_format() {
    // One header line, no metadata columns, a single constraint
    // left_hip (11) -> left_knee (13) = 270.
    let mut table = String::from("header\n");
    for row in 0..17 {
        let mut cells = vec![String::new(); 17];
        if row == 11 {
            cells[13] = "270".to_string();
        }
        table.push_str(&cells.join(","));
        table.push('\n');
    }

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(table.as_bytes()).unwrap();

    let format = RuleFormat::new().with_skip_lines(1).with_metadata_columns(0);
    let rules = RuleMatrix::load_with(file.path(), &format).unwrap();
    assert_eq!(rules.constraints().len(), 1);
    assert_eq!(rules.expected(BodyPart::LeftHip, BodyPart::LeftKnee), 270);

    let config = ClassifierConfig::default();
    assert_eq!(
        classify(&standing_pose(), &rules, &config).state,
        BodyState::Normal
    );
    assert_eq!(
        classify(&prone_pose(), &rules, &config).state,
        BodyState::Fall
    );
}

#[test]
fn test_missing_rule_file_is_an_error() {
    let err = RuleMatrix::load("assets/no_such_rules.csv").unwrap_err();
    assert!(err.to_string().contains("cannot open"));
}

#[test]
fn test_pose_json_round_trip() {
    let json = serde_json::to_string(&vec![standing_pose(), prone_pose()]).unwrap();
    let poses: Vec<Pose> = serde_json::from_str(&json).unwrap();
    assert_eq!(poses.len(), 2);

    let rules = RuleMatrix::load("assets/fall_rules.csv").unwrap();
    let config = ClassifierConfig::default();
    assert_eq!(classify(&poses[0], &rules, &config).state, BodyState::Normal);
    assert_eq!(classify(&poses[1], &rules, &config).state, BodyState::Fall);
}
