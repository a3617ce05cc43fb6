//! Landmark-to-score analysis engine.
//!
//! Pure, synchronous and stateless: one call takes a validated 68-point
//! landmark set, derives geometric ratios, and returns a self-contained
//! result with a bounded score, categorical trait labels and advisory
//! text. Nothing persists between calls, so concurrent invocations need no
//! coordination.

pub mod advice;
pub mod error;
pub mod geometry;
pub mod landmarks;
pub mod scoring;
pub mod types;

pub use error::AnalysisError;
pub use landmarks::{LandmarkSet, Point2D, LANDMARK_COUNT};
pub use types::{AnalysisResult, FeatureSet, TraitLabels};

/// Runs the full analysis: geometry extraction, scoring, trait labeling
/// and advice generation.
pub fn analyze(landmarks: &LandmarkSet) -> Result<AnalysisResult, AnalysisError> {
    let features = geometry::extract_features(landmarks)?;

    tracing::debug!(
        jaw_ratio = features.jaw_ratio,
        cheekbone_ratio = features.cheekbone_ratio,
        canthal_tilt = features.canthal_tilt,
        midface_ratio = features.midface_ratio,
        eye_height_asymmetry = features.eye_height_asymmetry,
        "extracted facial measurements"
    );

    Ok(AnalysisResult {
        score: scoring::score(&features),
        potential: None,
        traits: scoring::label_traits(&features),
        advice: advice::advise(&features),
    })
}
