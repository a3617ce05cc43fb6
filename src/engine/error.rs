use thiserror::Error;

use crate::engine::landmarks::LANDMARK_COUNT;

/// Failure conditions of the analysis engine.
///
/// Neither variant is retryable from inside the engine: the caller must
/// supply a corrected (re-detected) landmark set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The input does not follow the 68-point landmark convention.
    #[error("expected exactly {LANDMARK_COUNT} landmarks, got {actual}")]
    InvalidLandmarkInput { actual: usize },

    /// A required denominator is zero or near zero, or a coordinate is not
    /// a finite number. Distinct from "no face detected", which is a
    /// detection-stage condition outside this engine.
    #[error("face geometry could not be evaluated: {reason}")]
    DegenerateGeometry { reason: &'static str },
}
