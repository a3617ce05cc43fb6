use serde::{Deserialize, Serialize};

/// Geometric ratios derived once per analysis.
///
/// `jaw_ratio`, `cheekbone_ratio` and `midface_ratio` are dimensionless;
/// `canthal_tilt` and `eye_height_asymmetry` are in the pixel units of the
/// input and are therefore not scale-invariant. The source heuristic was
/// calibrated that way and the inconsistency is preserved on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSet {
    /// Bigonial width / bizygomatic width.
    pub jaw_ratio: f64,
    /// Average cheek-to-nose-tip vertical distance / face height.
    pub cheekbone_ratio: f64,
    /// Average inner-minus-outer eye-corner y offset; positive means the
    /// outer corner sits higher.
    pub canthal_tilt: f64,
    /// Inter-pupillary distance / pupil-midpoint-to-mouth vertical distance.
    pub midface_ratio: f64,
    /// Absolute difference of left/right pupil y coordinates.
    pub eye_height_asymmetry: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JawlineLabel {
    Chiseled,
    Defined,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheekboneLabel {
    High,
    Average,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EyeLabel {
    Hunter,
    Prey,
    Neutral,
}

impl JawlineLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chiseled => "Chiseled",
            Self::Defined => "Defined",
            Self::Soft => "Soft",
        }
    }
}

impl CheekboneLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Average => "Average",
        }
    }
}

impl EyeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hunter => "Hunter",
            Self::Prey => "Prey",
            Self::Neutral => "Neutral",
        }
    }
}

/// Categorical trait labels, one per assessed facial region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitLabels {
    pub jawline: JawlineLabel,
    pub cheekbones: CheekboneLabel,
    pub eyes: EyeLabel,
}

/// Immutable output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall score, clamped to [60, 98].
    pub score: i32,
    /// Reserved for a future "maximum potential" computation; the base
    /// heuristic never fills it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential: Option<i32>,
    pub traits: TraitLabels,
    /// At least one entry, emitted in rule order.
    pub advice: Vec<String>,
}

impl AnalysisResult {
    /// Display tier derived from the score. Presentation sugar only; it is
    /// never serialized.
    pub fn tier(&self) -> &'static str {
        match self.score {
            s if s >= 90 => "GOD TIER",
            s if s >= 80 => "MODEL TIER",
            s if s >= 70 => "ABOVE AVERAGE",
            _ => "AVERAGE",
        }
    }
}
