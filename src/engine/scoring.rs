//! Heuristic scoring and trait labeling.
//!
//! The score starts from a neutral baseline and applies one additive delta
//! per feature, chosen by threshold band. There are no interaction terms.
//! All comparisons are strict: a value exactly on a threshold takes the
//! lower ("otherwise") branch. Trait labels use their own threshold bands,
//! deliberately distinct from the scoring bands.

use crate::engine::types::{CheekboneLabel, EyeLabel, FeatureSet, JawlineLabel, TraitLabels};

/// Neutral starting score before any feature delta.
pub const SCORE_BASELINE: i32 = 50;
/// Floor of the published score; output stays encouraging.
pub const SCORE_MIN: i32 = 60;
/// Ceiling of the published score; output never claims perfection.
pub const SCORE_MAX: i32 = 98;

// Scoring bands.
const JAW_STRONG: f64 = 0.82;
const CHEEKBONE_PROMINENT: f64 = 0.28;
const TILT_POSITIVE_PX: f64 = 2.0;
const TILT_NEGATIVE_PX: f64 = -2.0;
const MIDFACE_COMPACT: f64 = 0.95;
const EYE_SYMMETRY_TOLERANCE_PX: f64 = 4.0;

// Trait-label bands, layered over the same ratios as the scoring bands but
// calibrated separately.
const JAW_CHISELED: f64 = 0.8;
const JAW_DEFINED: f64 = 0.75;
const CHEEKBONE_HIGH: f64 = 0.3;
const TILT_HUNTER_PX: f64 = 3.0;
const TILT_PREY_PX: f64 = -1.0;

/// Maps a feature set to the bounded integer score.
///
/// Total and deterministic: every feature falls into exactly one band.
pub fn score(features: &FeatureSet) -> i32 {
    let mut score = SCORE_BASELINE;

    score += if features.jaw_ratio > JAW_STRONG { 15 } else { 5 };

    score += if features.cheekbone_ratio > CHEEKBONE_PROMINENT {
        10
    } else {
        5
    };

    score += if features.canthal_tilt > TILT_POSITIVE_PX {
        10
    } else if features.canthal_tilt < TILT_NEGATIVE_PX {
        -5
    } else {
        5
    };

    score += if features.midface_ratio > MIDFACE_COMPACT {
        10
    } else {
        2
    };

    if features.eye_height_asymmetry < EYE_SYMMETRY_TOLERANCE_PX {
        score += 5;
    }

    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Labels the three assessed regions from the raw ratios, independently of
/// the score.
pub fn label_traits(features: &FeatureSet) -> TraitLabels {
    let jawline = if features.jaw_ratio > JAW_CHISELED {
        JawlineLabel::Chiseled
    } else if features.jaw_ratio > JAW_DEFINED {
        JawlineLabel::Defined
    } else {
        JawlineLabel::Soft
    };

    let cheekbones = if features.cheekbone_ratio > CHEEKBONE_HIGH {
        CheekboneLabel::High
    } else {
        CheekboneLabel::Average
    };

    let eyes = if features.canthal_tilt > TILT_HUNTER_PX {
        EyeLabel::Hunter
    } else if features.canthal_tilt < TILT_PREY_PX {
        EyeLabel::Prey
    } else {
        EyeLabel::Neutral
    };

    TraitLabels {
        jawline,
        cheekbones,
        eyes,
    }
}
