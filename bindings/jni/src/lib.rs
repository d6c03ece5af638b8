uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum OrientationError {
    #[error("landmark index {index} out of range for a set of {len} landmarks")]
    IndexOutOfRange { index: u64, len: u64 },
    #[error("vector has zero or non-finite length")]
    DegenerateVector,
    #[error("invalid tolerance: {value}")]
    InvalidTolerance { value: f64 },
    #[error("invalid forward policy: {message}")]
    InvalidPolicy { message: String },
}

impl From<faceorient::OrientationError> for OrientationError {
    fn from(e: faceorient::OrientationError) -> Self {
        match e {
            faceorient::OrientationError::IndexOutOfRange { index, len } => {
                OrientationError::IndexOutOfRange {
                    index: index as u64,
                    len: len as u64,
                }
            }
            faceorient::OrientationError::DegenerateVector => OrientationError::DegenerateVector,
            faceorient::OrientationError::InvalidTolerance(value) => {
                OrientationError::InvalidTolerance { value }
            }
            faceorient::OrientationError::InvalidPolicy(message) => {
                OrientationError::InvalidPolicy { message }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Enum)]
pub enum Classification {
    Forward,
    NotForward,
    NoFaceDetected,
    Indeterminate,
}

impl From<faceorient::Classification> for Classification {
    fn from(c: faceorient::Classification) -> Self {
        match c {
            faceorient::Classification::Forward => Classification::Forward,
            faceorient::Classification::NotForward => Classification::NotForward,
            faceorient::Classification::NoFaceDetected => Classification::NoFaceDetected,
            faceorient::Classification::Indeterminate => Classification::Indeterminate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Enum)]
pub enum ReferenceAxis {
    BackFront,
    TopBottom,
    LeftRight,
}

impl From<ReferenceAxis> for faceorient::ReferenceAxis {
    fn from(axis: ReferenceAxis) -> Self {
        match axis {
            ReferenceAxis::BackFront => faceorient::ReferenceAxis::BackFront,
            ReferenceAxis::TopBottom => faceorient::ReferenceAxis::TopBottom,
            ReferenceAxis::LeftRight => faceorient::ReferenceAxis::LeftRight,
        }
    }
}

impl From<faceorient::ReferenceAxis> for ReferenceAxis {
    fn from(axis: faceorient::ReferenceAxis) -> Self {
        match axis {
            faceorient::ReferenceAxis::BackFront => ReferenceAxis::BackFront,
            faceorient::ReferenceAxis::TopBottom => ReferenceAxis::TopBottom,
            faceorient::ReferenceAxis::LeftRight => ReferenceAxis::LeftRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Enum)]
pub enum HeadPose {
    Forward,
    Left,
    Right,
    Up,
    Down,
}

impl From<faceorient::HeadPose> for HeadPose {
    fn from(pose: faceorient::HeadPose) -> Self {
        match pose {
            faceorient::HeadPose::Forward => HeadPose::Forward,
            faceorient::HeadPose::Left => HeadPose::Left,
            faceorient::HeadPose::Right => HeadPose::Right,
            faceorient::HeadPose::Up => HeadPose::Up,
            faceorient::HeadPose::Down => HeadPose::Down,
        }
    }
}

/// A `NormalizedLandmark` as delivered by the MediaPipe Android SDK.
#[derive(Debug, Clone, Copy, uniffi::Record)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, uniffi::Record)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FaceAxes {
    pub left_right: Vector,
    pub top_bottom: Vector,
    pub back_front: Vector,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct ClassifyOptions {
    pub tolerance: Option<f64>,
    pub reference_axis: Option<ReferenceAxis>,
    /// Full policy as JSON; `tolerance` and `reference_axis` override it.
    pub policy_json: Option<String>,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct OrientationReport {
    pub classification: Classification,
    pub reference_axis: ReferenceAxis,
    pub axes: Option<FaceAxes>,
    pub normalized: Option<FaceAxes>,
    /// Angles of the reference axis in degrees, packed as a vector.
    pub angles: Option<Vector>,
    pub pose: Option<HeadPose>,
    /// Whether the UI should swap the preview for the captured frame.
    pub shows_capture: bool,
    /// Text for the diagnostics view.
    pub text: String,
}

fn convert_vector(v: faceorient::Vector3D) -> Vector {
    Vector {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

fn convert_axes(axes: &faceorient::FaceAxes) -> FaceAxes {
    FaceAxes {
        left_right: convert_vector(axes.left_right),
        top_bottom: convert_vector(axes.top_bottom),
        back_front: convert_vector(axes.back_front),
    }
}

fn convert_report(report: faceorient::OrientationReport) -> OrientationReport {
    OrientationReport {
        classification: report.classification.into(),
        reference_axis: report.reference_axis.into(),
        axes: report.axes.as_ref().map(convert_axes),
        normalized: report.normalized.as_ref().map(convert_axes),
        angles: report.angles.map(|a| Vector {
            x: a.x,
            y: a.y,
            z: a.z,
        }),
        pose: report.pose.map(Into::into),
        shows_capture: report.classification.shows_capture(),
        text: report.to_string(),
    }
}

fn to_points(landmarks: Vec<Landmark>) -> Vec<faceorient::Point3D> {
    landmarks
        .into_iter()
        .map(|l| faceorient::Point3D::from([l.x, l.y, l.z]))
        .collect()
}

fn build_classifier(
    options: Option<ClassifyOptions>,
) -> Result<faceorient::OrientationClassifier, OrientationError> {
    let mut classifier = faceorient::OrientationClassifier::new();
    let Some(opts) = options else {
        return Ok(classifier);
    };

    if let Some(ref json) = opts.policy_json {
        classifier = classifier.policy(faceorient::ForwardPolicy::from_json(json)?);
    }
    if let Some(tolerance) = opts.tolerance {
        classifier = classifier.tolerance(tolerance);
    }
    if let Some(axis) = opts.reference_axis {
        classifier = classifier.reference_axis(axis.into());
    }
    Ok(classifier)
}

/// The options the classifier uses when none are given.
#[uniffi::export]
pub fn default_options() -> ClassifyOptions {
    let policy = faceorient::ForwardPolicy::default();
    ClassifyOptions {
        tolerance: Some(policy.tolerance),
        reference_axis: Some(policy.reference_axis.into()),
        policy_json: None,
    }
}

/// Classify the landmarks of a single face.
#[uniffi::export]
pub fn classify(
    landmarks: Vec<Landmark>,
    options: Option<ClassifyOptions>,
) -> Result<OrientationReport, OrientationError> {
    let classifier = build_classifier(options)?;
    let report = classifier.classify(&to_points(landmarks))?;
    Ok(convert_report(report))
}

/// Classify the first face of a `multi_face_landmarks` packet.
#[uniffi::export]
pub fn classify_faces(
    faces: Vec<Vec<Landmark>>,
    options: Option<ClassifyOptions>,
) -> Result<OrientationReport, OrientationError> {
    let classifier = build_classifier(options)?;
    let faces: Vec<Vec<faceorient::Point3D>> = faces.into_iter().take(1).map(to_points).collect();
    let report = classifier.classify_faces(&faces)?;
    Ok(convert_report(report))
}
