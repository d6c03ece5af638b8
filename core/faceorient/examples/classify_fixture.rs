//! Classify the landmark fixtures and print the report text for each.
//!
//! Usage:
//!   cargo run --example classify_fixture [top-bottom|back-front|left-right]

use faceorient::{LandmarkSet, OrientationClassifier, ReferenceAxis};

const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures");

fn main() {
    env_logger::init();

    let axis: ReferenceAxis = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("unknown reference axis"))
        .unwrap_or(ReferenceAxis::TopBottom);
    let classifier = OrientationClassifier::new().reference_axis(axis);

    let samples = ["frontal_face.json", "turned_face.json", "no_faces.json"];

    for sample in &samples {
        let path = format!("{FIXTURE_DIR}/{sample}");
        let text = std::fs::read_to_string(&path).unwrap();
        let faces: Vec<LandmarkSet> = serde_json::from_str(&text).unwrap();

        println!("=== {sample} ({} face(s), axis {}) ===", faces.len(), axis.as_str());

        match classifier.classify_faces(&faces) {
            Ok(report) => {
                println!("{report}");
                if let Some(pose) = report.pose {
                    println!("  nearest pose: {}", pose.as_str());
                }
                println!(
                    "  display: {}",
                    if report.classification.shows_capture() {
                        "captured frame"
                    } else {
                        "live preview"
                    }
                );
            }
            Err(e) => println!("  ERROR: {e}"),
        }
        println!();
    }
}
