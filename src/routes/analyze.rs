use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::engine::{self, AnalysisResult, LandmarkSet, Point2D};
use crate::response::{ApiResponse, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(analyze_face))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Ordered 68-point landmark list in image pixel coordinates, as
    /// produced by an upstream face-landmark detector.
    pub landmarks: Vec<Point2D>,
}

/// Runs the landmark analysis engine over an already-detected landmark
/// set. The handler owns only deserialization and error mapping; the
/// engine call itself is pure and non-suspending.
async fn analyze_face(
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalysisResult>>, AppError> {
    let landmarks = LandmarkSet::new(payload.landmarks)?;
    let result = engine::analyze(&landmarks)?;

    tracing::info!(
        score = result.score,
        tier = result.tier(),
        advice_count = result.advice.len(),
        "analysis completed"
    );

    Ok(Json(ApiResponse::ok(result)))
}
