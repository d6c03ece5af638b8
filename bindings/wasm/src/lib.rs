use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Options for classification, passed as a JavaScript object.
///
/// All fields are optional. When `policyJson` is given it replaces the
/// default policy and the other fields override it.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifyOptions {
    pub tolerance: Option<f64>,
    pub reference_axis: Option<String>,
    pub policy_json: Option<String>,
}

/// Create a JS `Error` with a `code` property.
fn make_error(code: &str, message: &str) -> JsValue {
    let err = js_sys::Error::new(message);
    let _ = js_sys::Reflect::set(&err, &"code".into(), &JsValue::from_str(code));
    JsValue::from(err)
}

/// Convert an `OrientationError` into a JS `Error` with a machine-readable `code` property.
fn to_js_error(e: faceorient::OrientationError) -> JsValue {
    let code = match &e {
        faceorient::OrientationError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
        faceorient::OrientationError::DegenerateVector => "DEGENERATE_VECTOR",
        faceorient::OrientationError::InvalidTolerance(_) => "INVALID_TOLERANCE",
        faceorient::OrientationError::InvalidPolicy(_) => "INVALID_POLICY",
    };
    make_error(code, &e.to_string())
}

fn parse_options(options: JsValue) -> Result<ClassifyOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(ClassifyOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| make_error("INVALID_OPTIONS", &format!("invalid options: {e}")))
    }
}

fn parse_landmarks<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| make_error("INVALID_OPTIONS", &format!("invalid landmarks: {e}")))
}

/// Build a classifier from parsed `ClassifyOptions`.
fn build_classifier(opts: &ClassifyOptions) -> Result<faceorient::OrientationClassifier, JsValue> {
    let mut classifier = faceorient::OrientationClassifier::new();
    if let Some(ref json) = opts.policy_json {
        let policy = faceorient::ForwardPolicy::from_json(json).map_err(to_js_error)?;
        classifier = classifier.policy(policy);
    }
    if let Some(tolerance) = opts.tolerance {
        classifier = classifier.tolerance(tolerance);
    }
    if let Some(ref axis) = opts.reference_axis {
        let axis: faceorient::ReferenceAxis = axis.parse().map_err(|_| {
            make_error("INVALID_OPTIONS", &format!("unknown reference axis: {axis}"))
        })?;
        classifier = classifier.reference_axis(axis);
    }
    Ok(classifier)
}

fn build_vector_object(x: f64, y: f64, z: f64) -> Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"x".into(), &JsValue::from(x))?;
    js_sys::Reflect::set(&obj, &"y".into(), &JsValue::from(y))?;
    js_sys::Reflect::set(&obj, &"z".into(), &JsValue::from(z))?;
    Ok(JsValue::from(obj))
}

fn build_axes_object(axes: Option<&faceorient::FaceAxes>) -> Result<JsValue, JsValue> {
    let Some(axes) = axes else {
        return Ok(JsValue::NULL);
    };
    let obj = js_sys::Object::new();
    for (name, v) in [
        ("leftRight", axes.left_right),
        ("topBottom", axes.top_bottom),
        ("backFront", axes.back_front),
    ] {
        js_sys::Reflect::set(&obj, &name.into(), &build_vector_object(v.x, v.y, v.z)?)?;
    }
    Ok(JsValue::from(obj))
}

/// Build a plain JS object from an `OrientationReport`.
fn build_report_object(report: &faceorient::OrientationReport) -> Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(
        &obj,
        &"classification".into(),
        &JsValue::from_str(report.classification.as_str()),
    )?;
    js_sys::Reflect::set(
        &obj,
        &"referenceAxis".into(),
        &JsValue::from_str(report.reference_axis.as_str()),
    )?;
    js_sys::Reflect::set(&obj, &"axes".into(), &build_axes_object(report.axes.as_ref())?)?;
    js_sys::Reflect::set(
        &obj,
        &"normalized".into(),
        &build_axes_object(report.normalized.as_ref())?,
    )?;

    let angles = match report.angles {
        Some(a) => build_vector_object(a.x, a.y, a.z)?,
        None => JsValue::NULL,
    };
    js_sys::Reflect::set(&obj, &"angles".into(), &angles)?;

    let pose = match report.pose {
        Some(pose) => JsValue::from_str(pose.as_str()),
        None => JsValue::NULL,
    };
    js_sys::Reflect::set(&obj, &"pose".into(), &pose)?;
    js_sys::Reflect::set(
        &obj,
        &"showsCapture".into(),
        &JsValue::from(report.classification.shows_capture()),
    )?;
    js_sys::Reflect::set(&obj, &"text".into(), &JsValue::from_str(&report.to_string()))?;

    Ok(JsValue::from(obj))
}

/// Classify the landmarks of one face.
///
/// @param landmarks - Array of `{x, y, z}` objects in face-mesh index order
/// @param options - Optional object with fields: tolerance, referenceAxis
///   ("back-front", "top-bottom" or "left-right"), policyJson
#[wasm_bindgen]
pub fn classify(landmarks: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let opts = parse_options(options)?;
    let classifier = build_classifier(&opts)?;
    let points: Vec<faceorient::Point3D> = parse_landmarks(landmarks)?;

    let report = classifier.classify(&points).map_err(to_js_error)?;

    build_report_object(&report)
}

/// Classify the first face of a face-landmarker result.
///
/// @param faces - Array of landmark arrays, as in `FaceLandmarkerResult.faceLandmarks`
/// @param options - Same as for `classify`
#[wasm_bindgen(js_name = "classifyFaces")]
pub fn classify_faces(faces: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let opts = parse_options(options)?;
    let classifier = build_classifier(&opts)?;
    let faces: Vec<faceorient::LandmarkSet> = parse_landmarks(faces)?;

    let report = classifier.classify_faces(&faces).map_err(to_js_error)?;

    build_report_object(&report)
}
