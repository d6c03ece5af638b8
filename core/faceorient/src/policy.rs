use serde::{Deserialize, Serialize};

use crate::axes::ReferenceAxis;
use crate::error::OrientationError;
use crate::geometry::OrientationAngles;

/// Angle triple of a face looking straight at the camera, calibrated by hand.
pub const FORWARD_TARGET: OrientationAngles = OrientationAngles::new(90.0, 175.0, 90.0);

/// Allowed deviation from [`FORWARD_TARGET`] on each axis, in degrees.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Slack for rounding in the acos/degree conversion at the band edges.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Decides whether an angle triple counts as "forward".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardPolicy {
    pub target: OrientationAngles,
    pub tolerance: f64,
    /// Face axis whose angles are compared against `target`.
    pub reference_axis: ReferenceAxis,
}

impl Default for ForwardPolicy {
    fn default() -> Self {
        Self {
            target: FORWARD_TARGET,
            tolerance: DEFAULT_TOLERANCE,
            reference_axis: ReferenceAxis::default(),
        }
    }
}

impl ForwardPolicy {
    /// Parse a policy from JSON. Missing fields keep their defaults.
    ///
    /// ```
    /// use faceorient::{ForwardPolicy, ReferenceAxis};
    ///
    /// let policy = ForwardPolicy::from_json(r#"{"tolerance": 8.0, "reference_axis": "top-bottom"}"#).unwrap();
    /// assert_eq!(policy.tolerance, 8.0);
    /// assert_eq!(policy.reference_axis, ReferenceAxis::TopBottom);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, OrientationError> {
        let policy: ForwardPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn to_json(&self) -> Result<String, OrientationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), OrientationError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(OrientationError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }

    pub fn is_forward(&self, angles: &OrientationAngles) -> bool {
        is_forward(angles, self.target, self.tolerance)
    }
}

/// True when every component of `angles` is within `tolerance` degrees of
/// `target`, bounds inclusive.
pub fn is_forward(angles: &OrientationAngles, target: OrientationAngles, tolerance: f64) -> bool {
    let within = |value: f64, approx: f64| (value - approx).abs() <= tolerance + BOUNDARY_EPSILON;
    within(angles.x, target.x) && within(angles.y, target.y) && within(angles.z, target.z)
}
