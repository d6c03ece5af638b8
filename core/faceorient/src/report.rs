use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axes::{FaceAxes, ReferenceAxis};
use crate::geometry::{OrientationAngles, Vector3D};
use crate::pose::HeadPose;

/// Outcome of classifying one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Forward,
    NotForward,
    NoFaceDetected,
    /// The landmarks span a degenerate face (coincident or collinear
    /// corners), so no orientation can be computed for this frame.
    Indeterminate,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Forward => "forward",
            Classification::NotForward => "not-forward",
            Classification::NoFaceDetected => "no-face-detected",
            Classification::Indeterminate => "indeterminate",
        }
    }

    /// Whether a display should switch from the live preview to the
    /// captured frame.
    pub fn shows_capture(&self) -> bool {
        matches!(self, Classification::Forward)
    }
}

/// Classification of a frame together with the geometry behind it.
///
/// Diagnostic fields are `None` when they could not be computed; they never
/// hold NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientationReport {
    pub classification: Classification,
    pub reference_axis: ReferenceAxis,
    /// Raw axes, present whenever a face was found.
    pub axes: Option<FaceAxes>,
    /// Axes scaled to length 100.
    pub normalized: Option<FaceAxes>,
    /// Angles of the reference axis.
    pub angles: Option<OrientationAngles>,
    /// Nearest calibrated head pose, from the top-bottom axis angles.
    pub pose: Option<HeadPose>,
}

impl OrientationReport {
    pub(crate) fn no_face(reference_axis: ReferenceAxis) -> Self {
        Self {
            classification: Classification::NoFaceDetected,
            reference_axis,
            axes: None,
            normalized: None,
            angles: None,
            pose: None,
        }
    }

    pub(crate) fn indeterminate(reference_axis: ReferenceAxis, axes: FaceAxes) -> Self {
        Self {
            classification: Classification::Indeterminate,
            reference_axis,
            axes: Some(axes),
            normalized: None,
            angles: None,
            pose: None,
        }
    }

    pub fn is_forward(&self) -> bool {
        self.classification == Classification::Forward
    }
}

struct Triple(f64, f64, f64);

impl From<Vector3D> for Triple {
    fn from(v: Vector3D) -> Self {
        Triple(v.x, v.y, v.z)
    }
}

impl From<OrientationAngles> for Triple {
    fn from(a: OrientationAngles) -> Self {
        Triple(a.x, a.y, a.z)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.0},\t{:.0},\t{:.0})", self.0, self.1, self.2)
    }
}

impl fmt::Display for OrientationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.classification, self.normalized, self.angles) {
            (Classification::NoFaceDetected, _, _) => f.write_str("No Face visible"),
            (Classification::Forward | Classification::NotForward, Some(n), Some(angles)) => {
                writeln!(f, "x = {}", Triple::from(n.back_front))?;
                writeln!(f, "y = {}", Triple::from(n.left_right))?;
                writeln!(f, "z = {}", Triple::from(n.top_bottom))?;
                write!(f, "angleZ = {}", Triple::from(angles))?;
                if self.is_forward() {
                    f.write_str("\n\n FORWARD!!")?;
                }
                Ok(())
            }
            _ => f.write_str("Orientation indeterminate"),
        }
    }
}
