use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::error::OrientationError;

/// Length that [`normalize`] scales vectors to.
///
/// Any positive length gives the same angles; 100 keeps the displayed
/// components readable as whole numbers.
pub const NORMALIZED_LENGTH: f64 = 100.0;

/// A single landmark position.
///
/// `x` and `y` are normalized image coordinates in `[0, 1]`, `z` is depth
/// relative to the face centre, as emitted by the face mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Point3D {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x as f64, y as f64, z as f64)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Sub for Point3D {
    type Output = Vector3D;

    fn sub(self, rhs: Point3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// A direction in landmark space. Not unit length unless produced by
/// [`normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product `self × rhs`.
    pub fn cross(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn scale(self, factor: f64) -> Vector3D {
        Vector3D::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Length of the vector, or `DegenerateVector` if it cannot be divided by.
    fn checked_norm(self) -> Result<f64, OrientationError> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(OrientationError::DegenerateVector);
        }
        Ok(norm)
    }
}

/// Angles in degrees between a direction and each of the standard basis
/// axes. Each component lies in `[0, 180]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrientationAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl OrientationAngles {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance between two angle triples, in degrees.
    pub fn distance(self, other: OrientationAngles) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Scale `vector` so its length equals [`NORMALIZED_LENGTH`].
///
/// Returns [`OrientationError::DegenerateVector`] for zero-length or
/// non-finite input instead of producing NaN.
pub fn normalize(vector: Vector3D) -> Result<Vector3D, OrientationError> {
    let norm = vector.checked_norm()?;
    Ok(vector.scale(NORMALIZED_LENGTH / norm))
}

/// Angle in degrees between `vector` and each basis axis.
///
/// Scale invariant: any positive multiple of `vector` yields the same angles.
pub fn to_angles(vector: Vector3D) -> Result<OrientationAngles, OrientationError> {
    let norm = vector.checked_norm()?;
    let angle = |component: f64| (component / norm).clamp(-1.0, 1.0).acos().to_degrees();
    Ok(OrientationAngles::new(
        angle(vector.x),
        angle(vector.y),
        angle(vector.z),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn point_difference_is_a_vector() {
        let v = Point3D::new(1.0, 0.5, 0.0) - Point3D::new(-1.0, 0.5, 0.0);
        assert_eq!(v, Vector3D::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        assert!(a.cross(a.scale(2.0)).is_zero());
    }

    #[test]
    fn normalize_scales_to_hundred() {
        let n = normalize(Vector3D::new(3.0, 4.0, 12.0)).unwrap();
        assert_close(n.norm(), NORMALIZED_LENGTH);
        // 3-4-12 has length 13
        assert_close(n.x, 300.0 / 13.0);
    }

    #[test]
    fn normalize_tiny_vector() {
        let n = normalize(Vector3D::new(1e-12, 0.0, 0.0)).unwrap();
        assert_close(n.x, 100.0);
    }

    #[test]
    fn normalize_zero_vector_is_degenerate() {
        assert_eq!(
            normalize(Vector3D::default()),
            Err(OrientationError::DegenerateVector)
        );
    }

    #[test]
    fn normalize_nan_is_degenerate() {
        assert_eq!(
            normalize(Vector3D::new(f64::NAN, 1.0, 0.0)),
            Err(OrientationError::DegenerateVector)
        );
    }

    #[test]
    fn angles_of_basis_vectors() {
        let a = to_angles(Vector3D::new(0.0, 0.0, -2.0)).unwrap();
        assert_close(a.x, 90.0);
        assert_close(a.y, 90.0);
        assert_close(a.z, 180.0);

        let a = to_angles(Vector3D::new(5.0, 0.0, 0.0)).unwrap();
        assert_close(a.x, 0.0);
        assert_close(a.y, 90.0);
        assert_close(a.z, 90.0);
    }

    #[test]
    fn angles_are_scale_invariant() {
        let v = Vector3D::new(0.3, -0.7, 0.2);
        let base = to_angles(v).unwrap();
        for factor in [1e-6, 0.5, 3.0, 100.0, 1e6] {
            let scaled = to_angles(v.scale(factor)).unwrap();
            assert_close(scaled.x, base.x);
            assert_close(scaled.y, base.y);
            assert_close(scaled.z, base.z);
        }
    }

    #[test]
    fn angles_stay_in_range() {
        let a = to_angles(Vector3D::new(-1.0, -1.0, -1.0)).unwrap();
        for angle in [a.x, a.y, a.z] {
            assert!((0.0..=180.0).contains(&angle));
        }
    }

    #[test]
    fn angles_of_zero_vector_are_degenerate() {
        assert_eq!(
            to_angles(Vector3D::default()),
            Err(OrientationError::DegenerateVector)
        );
    }

    #[test]
    fn point_from_f32_array() {
        let p = Point3D::from([0.5f32, 0.25, -0.125]);
        assert_eq!(p, Point3D::new(0.5, 0.25, -0.125));
    }
}
