use serde::{Deserialize, Serialize};

use crate::error::OrientationError;
use crate::geometry::Point3D;

/// Indices of the four landmarks the classifier reads.
///
/// These are a contract with the upstream mesh topology. Change them only
/// together with the model that produces the landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceTopology {
    /// Centre of the hairline, top of the forehead.
    pub top: usize,
    /// Tip of the chin.
    pub bottom: usize,
    /// Left jaw, below the cheek.
    pub left_chin: usize,
    /// Right jaw, mirror of `left_chin`.
    pub right_chin: usize,
}

impl FaceTopology {
    /// MediaPipe Face Mesh (468 points, and the 478-point variant with
    /// refined irises, which keeps the first 468 indices).
    pub const MEDIAPIPE_FACE_MESH: FaceTopology = FaceTopology {
        top: 10,
        bottom: 152,
        left_chin: 425,
        right_chin: 205,
    };

    /// Highest index this topology reads.
    pub fn max_index(&self) -> usize {
        self.top
            .max(self.bottom)
            .max(self.left_chin)
            .max(self.right_chin)
    }

    /// Smallest landmark count this topology can be applied to.
    pub fn required_len(&self) -> usize {
        self.max_index() + 1
    }
}

impl Default for FaceTopology {
    fn default() -> Self {
        Self::MEDIAPIPE_FACE_MESH
    }
}

/// Landmarks of a single detected face, in model index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Point3D>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point3D> {
        self.points
    }
}

impl From<Vec<Point3D>> for LandmarkSet {
    fn from(points: Vec<Point3D>) -> Self {
        Self::new(points)
    }
}

impl<P: Into<Point3D>> FromIterator<P> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl AsRef<[Point3D]> for LandmarkSet {
    fn as_ref(&self) -> &[Point3D] {
        &self.points
    }
}

/// The four landmarks that span the face axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub top: Point3D,
    pub bottom: Point3D,
    pub left_chin: Point3D,
    pub right_chin: Point3D,
}

/// Pick the four corner landmarks out of `landmarks`.
///
/// Fails with [`OrientationError::IndexOutOfRange`] naming the first index
/// the set is too short for.
pub fn extract_corners(
    landmarks: &[Point3D],
    topology: &FaceTopology,
) -> Result<Corners, OrientationError> {
    let at = |index: usize| {
        landmarks
            .get(index)
            .copied()
            .ok_or(OrientationError::IndexOutOfRange {
                index,
                len: landmarks.len(),
            })
    };

    Ok(Corners {
        top: at(topology.top)?,
        bottom: at(topology.bottom)?,
        left_chin: at(topology.left_chin)?,
        right_chin: at(topology.right_chin)?,
    })
}
