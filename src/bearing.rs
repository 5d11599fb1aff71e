// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Bearing angle math between 2D keypoint positions.
//!
//! Keypoints arrive in image coordinates where y grows downward. The bearing
//! is measured in a bottom-left-origin space (y grows upward), so both points
//! are flipped with `y' = height - y` first. The result is a standard
//! mathematical bearing: 0° points right, angles increase counter-clockwise.

use std::f32::consts::PI;

use crate::pose::Position;

/// Compute the bearing angle in degrees from `from` to `to`.
///
/// Precondition: `from != to`. A zero-length vector has no direction; with
/// coincident points the degenerate-axis branches below return 270°, which is
/// arbitrary. Callers should not invoke this with identical positions.
///
/// # Arguments
///
/// * `from` - Start position in image coordinates (y grows downward).
/// * `to` - End position in image coordinates.
/// * `height` - Model input height used for the y-axis flip.
///
/// # Returns
///
/// * Integer degrees in [0, 359].
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bearing(from: Position, to: Position, height: f32) -> u32 {
    // Flip into upward-y space.
    let from_y = height - from.y;
    let to_y = height - to.y;

    // Degenerate axes are resolved explicitly rather than through the atan
    // path, which would divide by zero.
    if to.x == from.x {
        return if to_y > from_y { 90 } else { 270 };
    }
    if to_y == from_y {
        return if to.x > from.x { 0 } else { 180 };
    }

    let dx = to.x - from.x;
    let dy = to_y - from_y;
    let reference = (dy / dx).abs().atan();

    let angle = if dx > 0.0 {
        if dy > 0.0 {
            reference
        } else {
            2.0 * PI - reference
        }
    } else if dy > 0.0 {
        PI - reference
    } else {
        PI + reference
    };

    // Rounding an angle just under 2π can land on 360; wrap it back to 0.
    (angle.to_degrees().round() as u32) % 360
}

/// Compute the circular difference between two angles in degrees.
///
/// # Arguments
///
/// * `a` - First angle in [0, 359].
/// * `b` - Second angle in [0, 359].
///
/// # Returns
///
/// * The shorter arc between the two angles, in [0, 180].
#[must_use]
pub const fn circular_difference(a: u32, b: u32) -> u32 {
    let diff = a.abs_diff(b) % 360;
    if diff > 180 { 360 - diff } else { diff }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f32 = 100.0;

    #[test]
    fn test_cardinal_directions() {
        // "to" visually above "from" (smaller image y) points up.
        assert_eq!(
            bearing(Position::new(0.0, 10.0), Position::new(0.0, 0.0), HEIGHT),
            90
        );
        assert_eq!(
            bearing(Position::new(0.0, 0.0), Position::new(0.0, 10.0), HEIGHT),
            270
        );
        assert_eq!(
            bearing(Position::new(0.0, 0.0), Position::new(10.0, 0.0), HEIGHT),
            0
        );
        assert_eq!(
            bearing(Position::new(10.0, 0.0), Position::new(0.0, 0.0), HEIGHT),
            180
        );
    }

    #[test]
    fn test_diagonals() {
        // Right and visually up.
        assert_eq!(
            bearing(Position::new(0.0, 10.0), Position::new(10.0, 0.0), HEIGHT),
            45
        );
        // Left and visually up.
        assert_eq!(
            bearing(Position::new(10.0, 10.0), Position::new(0.0, 0.0), HEIGHT),
            135
        );
        // Left and visually down.
        assert_eq!(
            bearing(Position::new(10.0, 0.0), Position::new(0.0, 10.0), HEIGHT),
            225
        );
        // Right and visually down.
        assert_eq!(
            bearing(Position::new(0.0, 0.0), Position::new(10.0, 10.0), HEIGHT),
            315
        );
    }

    #[test]
    fn test_result_stays_in_range() {
        // Almost due right with a slight downward slope: the raw angle rounds
        // to 360 and must wrap to 0.
        let angle = bearing(Position::new(0.0, 0.0), Position::new(1000.0, 2.0), HEIGHT);
        assert_eq!(angle, 0);

        for (fx, fy, tx, ty) in [
            (3.0_f32, 7.0_f32, 91.0_f32, 13.0_f32),
            (50.0, 50.0, 12.0, 80.0),
            (0.0, 99.0, 1.0, 0.0),
        ] {
            let angle = bearing(Position::new(fx, fy), Position::new(tx, ty), HEIGHT);
            assert!(angle < 360, "bearing {angle} out of range");
        }
    }

    #[test]
    fn test_circular_difference() {
        assert_eq!(circular_difference(90, 95), 5);
        assert_eq!(circular_difference(95, 90), 5);
        assert_eq!(circular_difference(350, 10), 20);
        assert_eq!(circular_difference(0, 180), 180);
        assert_eq!(circular_difference(270, 270), 0);
    }
}
