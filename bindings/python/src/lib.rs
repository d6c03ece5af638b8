use faceorient_core::{
    FaceAxes, ForwardPolicy, OrientationClassifier, OrientationError, OrientationReport, Point3D,
    ReferenceAxis,
};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn to_py_err(e: OrientationError) -> PyErr {
    match e {
        OrientationError::IndexOutOfRange { .. } => PyIndexError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn string_to_axis(axis: &str) -> PyResult<ReferenceAxis> {
    axis.parse()
        .map_err(|_| PyValueError::new_err(format!("unknown reference axis: {axis}")))
}

fn build_classifier(
    policy_json: Option<&str>,
    tolerance: Option<f64>,
    reference_axis: Option<&str>,
) -> PyResult<OrientationClassifier> {
    let mut classifier = OrientationClassifier::new();
    if let Some(json) = policy_json {
        classifier = classifier.policy(ForwardPolicy::from_json(json).map_err(to_py_err)?);
    }
    if let Some(t) = tolerance {
        classifier = classifier.tolerance(t);
    }
    if let Some(axis) = reference_axis {
        classifier = classifier.reference_axis(string_to_axis(axis)?);
    }
    Ok(classifier)
}

fn axes_to_dict<'py>(py: Python<'py>, axes: &FaceAxes) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for (name, v) in [
        ("left_right", axes.left_right),
        ("top_bottom", axes.top_bottom),
        ("back_front", axes.back_front),
    ] {
        dict.set_item(name, (v.x, v.y, v.z))?;
    }
    Ok(dict)
}

fn report_to_dict(py: Python<'_>, report: &OrientationReport) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("classification", report.classification.as_str())?;
    dict.set_item("reference_axis", report.reference_axis.as_str())?;
    match report.axes {
        Some(ref axes) => dict.set_item("axes", axes_to_dict(py, axes)?)?,
        None => dict.set_item("axes", py.None())?,
    }
    match report.normalized {
        Some(ref axes) => dict.set_item("normalized", axes_to_dict(py, axes)?)?,
        None => dict.set_item("normalized", py.None())?,
    }
    dict.set_item("angles", report.angles.map(|a| (a.x, a.y, a.z)))?;
    dict.set_item("pose", report.pose.map(|p| p.as_str()))?;
    dict.set_item("shows_capture", report.classification.shows_capture())?;
    dict.set_item("text", report.to_string())?;
    Ok(dict.into())
}

fn to_points(landmarks: Vec<(f64, f64, f64)>) -> Vec<Point3D> {
    landmarks.into_iter().map(Point3D::from).collect()
}

/// Classify the landmarks of one face.
///
/// Args:
///     landmarks: Sequence of (x, y, z) tuples in face-mesh index order
///     tolerance: Allowed deviation per axis in degrees (default: 5.0)
///     reference_axis: "back-front", "top-bottom" or "left-right"
///     policy_json: Full forward policy as JSON; the other options override it
///
/// Returns:
///     dict with keys: classification (str), reference_axis (str), axes, normalized,
///     angles (tuple or None), pose (str or None), shows_capture (bool), text (str)
///
/// Raises:
///     IndexError: the landmark list is too short for the face-mesh topology
///     ValueError: invalid options
#[pyfunction]
#[pyo3(signature = (landmarks, *, tolerance=None, reference_axis=None, policy_json=None))]
fn classify(
    py: Python<'_>,
    landmarks: Vec<(f64, f64, f64)>,
    tolerance: Option<f64>,
    reference_axis: Option<&str>,
    policy_json: Option<&str>,
) -> PyResult<Py<PyDict>> {
    let classifier = build_classifier(policy_json, tolerance, reference_axis)?;
    let report = classifier
        .classify(&to_points(landmarks))
        .map_err(to_py_err)?;
    report_to_dict(py, &report)
}

/// Classify the first face of a multi-face landmark result.
///
/// Args:
///     faces: Sequence of landmark sequences, one per detected face
///     tolerance, reference_axis, policy_json: as for `classify`
///
/// Returns:
///     dict, as for `classify`
#[pyfunction]
#[pyo3(signature = (faces, *, tolerance=None, reference_axis=None, policy_json=None))]
fn classify_faces(
    py: Python<'_>,
    faces: Vec<Vec<(f64, f64, f64)>>,
    tolerance: Option<f64>,
    reference_axis: Option<&str>,
    policy_json: Option<&str>,
) -> PyResult<Py<PyDict>> {
    let classifier = build_classifier(policy_json, tolerance, reference_axis)?;
    let faces: Vec<Vec<Point3D>> = faces.into_iter().take(1).map(to_points).collect();
    let report = classifier.classify_faces(&faces).map_err(to_py_err)?;
    report_to_dict(py, &report)
}

#[pymodule]
fn faceorient(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(classify_faces, m)?)?;
    Ok(())
}
