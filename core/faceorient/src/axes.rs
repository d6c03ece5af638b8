use serde::{Deserialize, Serialize};

use crate::error::OrientationError;
use crate::geometry::{normalize, Vector3D};
use crate::landmarks::Corners;

/// The three face axes spanned by the corner landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceAxes {
    /// Right chin to left chin.
    pub left_right: Vector3D,
    /// Chin to forehead.
    pub top_bottom: Vector3D,
    /// `left_right × top_bottom`, perpendicular to the face plane.
    pub back_front: Vector3D,
}

/// Selects one of the [`FaceAxes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceAxis {
    #[default]
    BackFront,
    TopBottom,
    LeftRight,
}

impl ReferenceAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceAxis::BackFront => "back-front",
            ReferenceAxis::TopBottom => "top-bottom",
            ReferenceAxis::LeftRight => "left-right",
        }
    }
}

impl std::str::FromStr for ReferenceAxis {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back-front" => Ok(ReferenceAxis::BackFront),
            "top-bottom" => Ok(ReferenceAxis::TopBottom),
            "left-right" => Ok(ReferenceAxis::LeftRight),
            _ => Err(OrientationError::InvalidPolicy(format!(
                "unknown reference axis: {s}"
            ))),
        }
    }
}

impl FaceAxes {
    pub fn get(&self, axis: ReferenceAxis) -> Vector3D {
        match axis {
            ReferenceAxis::BackFront => self.back_front,
            ReferenceAxis::TopBottom => self.top_bottom,
            ReferenceAxis::LeftRight => self.left_right,
        }
    }

    /// All three axes scaled to length 100. Fails if any axis is degenerate.
    pub fn normalized(&self) -> Result<FaceAxes, OrientationError> {
        Ok(FaceAxes {
            left_right: normalize(self.left_right)?,
            top_bottom: normalize(self.top_bottom)?,
            back_front: normalize(self.back_front)?,
        })
    }
}

/// Build the face axes from the corner landmarks. Never fails; degenerate
/// corners give zero-length axes, which normalization rejects.
pub fn compute_axes(corners: &Corners) -> FaceAxes {
    let left_right = corners.left_chin - corners.right_chin;
    let top_bottom = corners.top - corners.bottom;
    FaceAxes {
        left_right,
        top_bottom,
        back_front: left_right.cross(top_bottom),
    }
}
