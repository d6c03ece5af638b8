//! Face orientation from face-mesh landmarks: decide whether a detected face
//! is looking straight at the camera.
//!
//! The classifier reads four landmarks (forehead, chin and both sides of the
//! jaw), builds the face's left-right, top-bottom and back-front axes, and
//! compares the angles of one axis against a calibrated target.
//!
//! # Example
//!
//! ```
//! use faceorient::{Classification, OrientationClassifier, Point3D};
//!
//! // Landmarks as delivered by the face mesh for the first detected face.
//! let mut landmarks = vec![Point3D::default(); 468];
//! landmarks[10] = Point3D::new(0.0, 0.0, 0.0);
//! landmarks[152] = Point3D::new(0.0, 1.0, 0.0);
//! landmarks[425] = Point3D::new(1.0, 0.5, 0.0);
//! landmarks[205] = Point3D::new(-1.0, 0.5, 0.0);
//!
//! let report = OrientationClassifier::new().classify(&landmarks).unwrap();
//! assert_eq!(report.classification, Classification::NotForward);
//! println!("{report}");
//! ```

/// Face axes built from the corner landmarks.
pub mod axes;
mod error;
/// Points, vectors, normalization and angle conversion.
pub mod geometry;
/// Landmark sets, mesh topology and corner extraction.
pub mod landmarks;
/// The forward tolerance band and its configuration.
pub mod policy;
/// Calibrated head pose signatures.
pub mod pose;
/// Classification outcome and its text rendering.
pub mod report;

/// Error type returned by faceorient operations.
pub use error::OrientationError;

pub use axes::{compute_axes, FaceAxes, ReferenceAxis};
pub use geometry::{normalize, to_angles, OrientationAngles, Point3D, Vector3D, NORMALIZED_LENGTH};
pub use landmarks::{extract_corners, Corners, FaceTopology, LandmarkSet};
pub use policy::{is_forward, ForwardPolicy, DEFAULT_TOLERANCE, FORWARD_TARGET};
pub use pose::{nearest_pose, HeadPose};
pub use report::{Classification, OrientationReport};

/// Builder-style classifier for face orientation.
///
/// Holds only configuration, so one instance can be shared across threads
/// and reused for every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationClassifier {
    policy: ForwardPolicy,
    topology: FaceTopology,
}

impl OrientationClassifier {
    /// Classifier with the default policy and the MediaPipe face-mesh topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole forward policy. Individual settings can be
    /// overridden after this call.
    pub fn policy(mut self, policy: ForwardPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Allowed deviation per axis in degrees (default: 5.0).
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.policy.tolerance = tolerance;
        self
    }

    /// Angle triple that counts as forward (default: 90, 175, 90).
    pub fn target(mut self, target: OrientationAngles) -> Self {
        self.policy.target = target;
        self
    }

    /// Axis whose angles are compared against the target
    /// (default: [`ReferenceAxis::BackFront`]).
    pub fn reference_axis(mut self, axis: ReferenceAxis) -> Self {
        self.policy.reference_axis = axis;
        self
    }

    /// Landmark indices to read (default: [`FaceTopology::MEDIAPIPE_FACE_MESH`]).
    pub fn topology(mut self, topology: FaceTopology) -> Self {
        self.topology = topology;
        self
    }

    /// The policy this classifier applies.
    pub fn forward_policy(&self) -> &ForwardPolicy {
        &self.policy
    }

    /// Classify the landmarks of one face.
    ///
    /// An empty set means no face was detected. A non-empty set shorter than
    /// the topology requires is a mismatch with the upstream model and fails
    /// with [`OrientationError::IndexOutOfRange`]. Degenerate geometry gives
    /// [`Classification::Indeterminate`].
    pub fn classify(&self, landmarks: &[Point3D]) -> Result<OrientationReport, OrientationError> {
        self.policy.validate()?;
        let reference_axis = self.policy.reference_axis;

        if landmarks.is_empty() {
            log::debug!("no face landmarks in frame");
            return Ok(OrientationReport::no_face(reference_axis));
        }

        let corners = extract_corners(landmarks, &self.topology).map_err(|e| {
            log::error!("landmark topology mismatch: {e}");
            e
        })?;
        let axes = compute_axes(&corners);

        let (normalized, angles, top_bottom_angles) = match measure(&axes, reference_axis) {
            Ok(measured) => measured,
            Err(e) => {
                log::warn!("cannot classify face orientation: {e}");
                return Ok(OrientationReport::indeterminate(reference_axis, axes));
            }
        };

        let classification = if self.policy.is_forward(&angles) {
            Classification::Forward
        } else {
            Classification::NotForward
        };
        let pose = nearest_pose(&top_bottom_angles);
        log::debug!(
            "face orientation {} (angles {:.1}, {:.1}, {:.1} on {}; pose {})",
            classification.as_str(),
            angles.x,
            angles.y,
            angles.z,
            reference_axis.as_str(),
            pose.as_str(),
        );

        Ok(OrientationReport {
            classification,
            reference_axis,
            axes: Some(axes),
            normalized: Some(normalized),
            angles: Some(angles),
            pose: Some(pose),
        })
    }

    /// Classify the first of the faces detected in a frame.
    pub fn classify_faces<F>(&self, faces: &[F]) -> Result<OrientationReport, OrientationError>
    where
        F: AsRef<[Point3D]>,
    {
        match faces.first() {
            Some(face) => self.classify(face.as_ref()),
            None => {
                self.policy.validate()?;
                log::debug!("no faces in frame");
                Ok(OrientationReport::no_face(self.policy.reference_axis))
            }
        }
    }
}

/// Normalized axes, reference-axis angles and top-bottom angles.
fn measure(
    axes: &FaceAxes,
    reference_axis: ReferenceAxis,
) -> Result<(FaceAxes, OrientationAngles, OrientationAngles), OrientationError> {
    let normalized = axes.normalized()?;
    let angles = to_angles(normalized.get(reference_axis))?;
    let top_bottom_angles = to_angles(normalized.top_bottom)?;
    Ok((normalized, angles, top_bottom_angles))
}

/// Classify one face with the default classifier.
pub fn classify(landmarks: &[Point3D]) -> Result<OrientationReport, OrientationError> {
    OrientationClassifier::new().classify(landmarks)
}

/// Classify the first detected face with the default classifier.
pub fn classify_faces<F>(faces: &[F]) -> Result<OrientationReport, OrientationError>
where
    F: AsRef<[Point3D]>,
{
    OrientationClassifier::new().classify_faces(faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn face(top: Point3D, bottom: Point3D, left_chin: Point3D, right_chin: Point3D) -> Vec<Point3D> {
        let mut points = vec![Point3D::new(0.5, 0.5, 0.0); 468];
        points[10] = top;
        points[152] = bottom;
        points[425] = left_chin;
        points[205] = right_chin;
        points
    }

    fn square_face() -> Vec<Point3D> {
        face(
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
            Point3D::new(1.0, 0.5, 0.0),
            Point3D::new(-1.0, 0.5, 0.0),
        )
    }

    #[test]
    fn classifier_defaults() {
        let classifier = OrientationClassifier::new();
        assert_eq!(classifier.forward_policy(), &ForwardPolicy::default());
        assert_eq!(classifier.forward_policy().tolerance, 5.0);
    }

    #[test]
    fn square_face_back_front_geometry() {
        let report = classify(&square_face()).unwrap();
        let axes = report.axes.unwrap();
        assert_eq!(axes.left_right, Vector3D::new(2.0, 0.0, 0.0));
        assert_eq!(axes.top_bottom, Vector3D::new(0.0, -1.0, 0.0));
        assert_eq!(axes.back_front, Vector3D::new(0.0, 0.0, -2.0));

        let normalized = report.normalized.unwrap();
        assert!((normalized.back_front.z + 100.0).abs() < EPS);

        let angles = report.angles.unwrap();
        assert!((angles.x - 90.0).abs() < EPS);
        assert!((angles.y - 90.0).abs() < EPS);
        assert!((angles.z - 180.0).abs() < EPS);
        assert_eq!(report.classification, Classification::NotForward);
    }

    #[test]
    fn square_face_is_forward_on_top_bottom_axis() {
        let report = OrientationClassifier::new()
            .reference_axis(ReferenceAxis::TopBottom)
            .classify(&square_face())
            .unwrap();
        let angles = report.angles.unwrap();
        assert!((angles.y - 180.0).abs() < EPS);
        assert_eq!(report.classification, Classification::Forward);
        assert_eq!(report.pose, Some(HeadPose::Forward));
    }

    #[test]
    fn target_can_be_overridden() {
        let report = OrientationClassifier::new()
            .target(OrientationAngles::new(90.0, 90.0, 180.0))
            .tolerance(1.0)
            .classify(&square_face())
            .unwrap();
        assert!(report.is_forward());
    }

    #[test]
    fn policy_then_override() {
        let policy = ForwardPolicy {
            reference_axis: ReferenceAxis::TopBottom,
            tolerance: 20.0,
            ..ForwardPolicy::default()
        };
        let classifier = OrientationClassifier::new().policy(policy).tolerance(2.0);
        assert_eq!(classifier.forward_policy().reference_axis, ReferenceAxis::TopBottom);
        assert_eq!(classifier.forward_policy().tolerance, 2.0);
    }

    #[test]
    fn empty_landmarks_mean_no_face() {
        let report = classify(&[]).unwrap();
        assert_eq!(report.classification, Classification::NoFaceDetected);
        assert!(report.axes.is_none());
    }

    #[test]
    fn no_faces_in_frame() {
        let faces: Vec<Vec<Point3D>> = Vec::new();
        let report = classify_faces(&faces).unwrap();
        assert_eq!(report.classification, Classification::NoFaceDetected);
    }

    #[test]
    fn only_first_face_is_classified() {
        let faces = vec![square_face(), vec![Point3D::default(); 3]];
        let report = classify_faces(&faces).unwrap();
        assert_eq!(report.classification, Classification::NotForward);
    }

    #[test]
    fn short_landmark_set_is_an_error() {
        let err = classify(&vec![Point3D::default(); 5]).unwrap_err();
        assert_eq!(err, OrientationError::IndexOutOfRange { index: 10, len: 5 });
    }

    #[test]
    fn coincident_chins_are_indeterminate() {
        let chin = Point3D::new(0.5, 0.7, 0.0);
        let landmarks = face(Point3D::new(0.5, 0.2, 0.0), Point3D::new(0.5, 0.8, 0.0), chin, chin);
        let report = classify(&landmarks).unwrap();
        assert_eq!(report.classification, Classification::Indeterminate);
        assert!(report.angles.is_none());
        assert!(report.normalized.is_none());
    }

    #[test]
    fn coincident_top_and_bottom_are_indeterminate() {
        let p = Point3D::new(0.5, 0.5, 0.0);
        let landmarks = face(p, p, Point3D::new(0.7, 0.6, 0.0), Point3D::new(0.3, 0.6, 0.0));
        let report = classify(&landmarks).unwrap();
        assert_eq!(report.classification, Classification::Indeterminate);
    }

    #[test]
    fn collinear_axes_are_indeterminate() {
        // left-right parallel to top-bottom: the cross product vanishes
        let landmarks = face(
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(0.0, 2.0, 0.0),
        );
        let report = classify(&landmarks).unwrap();
        assert_eq!(report.classification, Classification::Indeterminate);
    }

    #[test]
    fn nan_landmark_is_indeterminate() {
        let landmarks = face(
            Point3D::new(f64::NAN, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
            Point3D::new(1.0, 0.5, 0.0),
            Point3D::new(-1.0, 0.5, 0.0),
        );
        let report = classify(&landmarks).unwrap();
        assert_eq!(report.classification, Classification::Indeterminate);
    }

    #[test]
    fn invalid_tolerance_is_rejected() {
        let result = OrientationClassifier::new()
            .tolerance(-0.5)
            .classify(&square_face());
        assert_eq!(result, Err(OrientationError::InvalidTolerance(-0.5)));
    }

    #[test]
    fn invalid_tolerance_is_rejected_without_faces() {
        let faces: Vec<Vec<Point3D>> = Vec::new();
        let result = OrientationClassifier::new()
            .tolerance(f64::INFINITY)
            .classify_faces(&faces);
        assert!(result.is_err());
    }

    #[test]
    fn custom_topology_reads_other_indices() {
        let topology = FaceTopology {
            top: 0,
            bottom: 1,
            left_chin: 2,
            right_chin: 3,
        };
        let landmarks = vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
            Point3D::new(1.0, 0.5, 0.0),
            Point3D::new(-1.0, 0.5, 0.0),
        ];
        let report = OrientationClassifier::new()
            .topology(topology)
            .reference_axis(ReferenceAxis::TopBottom)
            .classify(&landmarks)
            .unwrap();
        assert!(report.is_forward());
    }

    #[test]
    fn classification_is_independent_per_call() {
        let classifier = OrientationClassifier::new().reference_axis(ReferenceAxis::TopBottom);
        let first = classifier.classify(&square_face()).unwrap();
        let _ = classifier.classify(&[]).unwrap();
        let again = classifier.classify(&square_face()).unwrap();
        assert_eq!(first, again);
    }
}
