//! Feature extraction from a validated landmark set.
//!
//! Every measurement follows the 68-point convention via the named indices
//! in [`crate::engine::landmarks::idx`]. All divisions are guarded: a
//! denominator below [`GEOMETRY_EPSILON`] fails with `DegenerateGeometry`
//! instead of leaking NaN or infinity into the score.

use crate::engine::error::AnalysisError;
use crate::engine::landmarks::{idx, LandmarkSet, Point2D};
use crate::engine::types::FeatureSet;

/// Denominators at or below this magnitude are treated as zero.
const GEOMETRY_EPSILON: f64 = 1e-6;

pub fn extract_features(landmarks: &LandmarkSet) -> Result<FeatureSet, AnalysisError> {
    if landmarks.points().iter().any(|p| !p.is_finite()) {
        return Err(AnalysisError::DegenerateGeometry {
            reason: "non-finite landmark coordinate",
        });
    }

    // Jawline definition: jaw-angle width relative to full face width.
    let bigonial_width =
        (landmarks.point(idx::JAW_RIGHT)?.x - landmarks.point(idx::JAW_LEFT)?.x).abs();
    let bizygomatic_width =
        (landmarks.point(idx::FACE_RIGHT)?.x - landmarks.point(idx::FACE_LEFT)?.x).abs();
    let jaw_ratio = bigonial_width / nonzero(bizygomatic_width, "bizygomatic width")?;

    // Cheekbone prominence: how far the cheek contour sits above the nose
    // tip, normalized by chin-to-brow face height.
    let nose_tip_y = landmarks.point(idx::NOSE_TIP)?.y;
    let cheek_height = ((nose_tip_y - landmarks.point(idx::CHEEK_LEFT)?.y)
        + (nose_tip_y - landmarks.point(idx::CHEEK_RIGHT)?.y))
        / 2.0;
    let brow_line_y =
        (landmarks.point(idx::BROW_LEFT_MID)?.y + landmarks.point(idx::BROW_RIGHT_MID)?.y) / 2.0;
    let face_height = landmarks.point(idx::CHIN)?.y - brow_line_y;
    let cheekbone_ratio = cheek_height / nonzero(face_height, "face height")?;

    // Canthal tilt in raw pixels; y grows downward, so inner-minus-outer is
    // positive exactly when the outer corner sits higher.
    let left_tilt =
        landmarks.point(idx::EYE_LEFT_INNER)?.y - landmarks.point(idx::EYE_LEFT_OUTER)?.y;
    let right_tilt =
        landmarks.point(idx::EYE_RIGHT_INNER)?.y - landmarks.point(idx::EYE_RIGHT_OUTER)?.y;
    let canthal_tilt = (left_tilt + right_tilt) / 2.0;

    // Midface compactness: inter-pupillary distance against the vertical
    // span from the pupil line down to the mouth.
    let left_pupil = eye_centroid(landmarks, &idx::EYE_LEFT_CONTOUR)?;
    let right_pupil = eye_centroid(landmarks, &idx::EYE_RIGHT_CONTOUR)?;
    let ipd = left_pupil.distance(&right_pupil);
    let pupil_line_y = (left_pupil.y + right_pupil.y) / 2.0;
    let midface_height = (landmarks.point(idx::MOUTH_CENTER)?.y - pupil_line_y).abs();
    let midface_ratio = ipd / nonzero(midface_height, "midface height")?;

    let eye_height_asymmetry = (left_pupil.y - right_pupil.y).abs();

    Ok(FeatureSet {
        jaw_ratio,
        cheekbone_ratio,
        canthal_tilt,
        midface_ratio,
        eye_height_asymmetry,
    })
}

/// Pupil position approximated as the centroid of the four eye-contour
/// points between the corners.
fn eye_centroid(landmarks: &LandmarkSet, contour: &[usize]) -> Result<Point2D, AnalysisError> {
    let mut points = Vec::with_capacity(contour.len());
    for &i in contour {
        points.push(landmarks.point(i)?);
    }
    Ok(Point2D::centroid(&points))
}

fn nonzero(value: f64, quantity: &'static str) -> Result<f64, AnalysisError> {
    if value.abs() <= GEOMETRY_EPSILON {
        Err(AnalysisError::DegenerateGeometry { reason: quantity })
    } else {
        Ok(value)
    }
}
