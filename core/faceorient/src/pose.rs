use serde::{Deserialize, Serialize};

use crate::geometry::OrientationAngles;

/// Coarse head direction relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadPose {
    Forward,
    Left,
    Right,
    Up,
    Down,
}

impl HeadPose {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadPose::Forward => "forward",
            HeadPose::Left => "left",
            HeadPose::Right => "right",
            HeadPose::Up => "up",
            HeadPose::Down => "down",
        }
    }
}

/// Hand-measured top-bottom axis angles for each pose.
pub const POSE_SIGNATURES: [(HeadPose, OrientationAngles); 5] = [
    (HeadPose::Forward, OrientationAngles::new(90.0, 180.0, 90.0)),
    (HeadPose::Left, OrientationAngles::new(90.0, 160.0, 75.0)),
    (HeadPose::Right, OrientationAngles::new(75.0, 160.0, 90.0)),
    (HeadPose::Up, OrientationAngles::new(90.0, 140.0, 45.0)),
    (HeadPose::Down, OrientationAngles::new(90.0, 140.0, 135.0)),
];

/// The pose whose signature is closest to `angles`, which must be measured
/// on the top-bottom axis. Ties go to the earlier entry in
/// [`POSE_SIGNATURES`].
pub fn nearest_pose(angles: &OrientationAngles) -> HeadPose {
    let mut best = POSE_SIGNATURES[0];
    let mut best_distance = angles.distance(best.1);
    for candidate in &POSE_SIGNATURES[1..] {
        let distance = angles.distance(candidate.1);
        if distance < best_distance {
            best = *candidate;
            best_distance = distance;
        }
    }
    best.0
}
