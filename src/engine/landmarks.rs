use serde::{Deserialize, Serialize};

use crate::engine::error::AnalysisError;

/// Number of points in the standard 68-point facial landmark scheme:
/// jaw 0-16, eyebrows 17-26, nose 27-35, eyes 36-47, mouth 48-67.
pub const LANDMARK_COUNT: usize = 68;

/// A point in image pixel coordinates. `y` increases downward, so a
/// smaller `y` is higher on the face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Arithmetic mean position of a small cluster of points.
    pub fn centroid(points: &[Point2D]) -> Point2D {
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point2D::new(sx / n, sy / n)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Named indices into the 68-point convention for every landmark the
/// extractor reads, so the geometry code never dereferences a bare number.
pub mod idx {
    /// Leftmost face contour point (left bizygomatic reference).
    pub const FACE_LEFT: usize = 0;
    /// Contour point just below the left eye (cheek reference).
    pub const CHEEK_LEFT: usize = 1;
    /// Left gonion (jaw angle).
    pub const JAW_LEFT: usize = 4;
    /// Chin tip.
    pub const CHIN: usize = 8;
    /// Right gonion (jaw angle).
    pub const JAW_RIGHT: usize = 12;
    /// Contour point just below the right eye (cheek reference).
    pub const CHEEK_RIGHT: usize = 15;
    /// Rightmost face contour point (right bizygomatic reference).
    pub const FACE_RIGHT: usize = 16;
    /// Middle of the left eyebrow.
    pub const BROW_LEFT_MID: usize = 19;
    /// Middle of the right eyebrow.
    pub const BROW_RIGHT_MID: usize = 24;
    /// Nose tip.
    pub const NOSE_TIP: usize = 30;
    /// Outer corner of the left eye.
    pub const EYE_LEFT_OUTER: usize = 36;
    /// Inner corner of the left eye.
    pub const EYE_LEFT_INNER: usize = 39;
    /// Inner corner of the right eye.
    pub const EYE_RIGHT_INNER: usize = 42;
    /// Outer corner of the right eye.
    pub const EYE_RIGHT_OUTER: usize = 45;
    /// Left eye contour points whose centroid approximates the pupil.
    pub const EYE_LEFT_CONTOUR: [usize; 4] = [37, 38, 40, 41];
    /// Right eye contour points whose centroid approximates the pupil.
    pub const EYE_RIGHT_CONTOUR: [usize; 4] = [43, 44, 46, 47];
    /// Lower edge of the upper lip, used as the mouth reference line.
    pub const MOUTH_CENTER: usize = 62;
}

/// An ordered, validated set of exactly 68 facial landmark points.
///
/// Construction is the only place the point-count contract is enforced;
/// once built, index access is still checked defensively so an index-drift
/// bug surfaces as a typed error rather than a panic.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point2D>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point2D>) -> Result<Self, AnalysisError> {
        if points.len() != LANDMARK_COUNT {
            return Err(AnalysisError::InvalidLandmarkInput {
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn point(&self, index: usize) -> Result<Point2D, AnalysisError> {
        self.points
            .get(index)
            .copied()
            .ok_or(AnalysisError::InvalidLandmarkInput {
                actual: self.points.len(),
            })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }
}
