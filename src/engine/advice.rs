//! Advisory text generation.
//!
//! A second pass over the same ratios the scorer reads, with its own
//! threshold bands. Emission order is fixed (jaw, tilt, midface, asymmetry)
//! and observable, so callers can compare outputs deterministically.

use crate::engine::types::FeatureSet;

const JAW_SOFT: f64 = 0.76;
const TILT_NEGATIVE_PX: f64 = -2.0;
const MIDFACE_LONG: f64 = 0.85;
const EYE_ASYMMETRY_PX: f64 = 4.0;

pub const JAW_ADVICE: &str = "Jawline is soft. Lower body fat or mewing recommended.";
pub const TILT_ADVICE: &str = "Negative canthal tilt detected. Maximize sleep and hydration.";
pub const MIDFACE_ADVICE: &str = "Midface appears elongated. Consider hairstyle to add width.";
pub const ASYMMETRY_ADVICE: &str = "Slight facial asymmetry detected (normal).";
/// Emitted exactly when no threshold rule fired.
pub const FALLBACK_ADVICE: &str = "Great facial harmony detected.";

pub fn advise(features: &FeatureSet) -> Vec<String> {
    let mut advice = Vec::new();

    if features.jaw_ratio < JAW_SOFT {
        advice.push(JAW_ADVICE.to_string());
    }
    if features.canthal_tilt < TILT_NEGATIVE_PX {
        advice.push(TILT_ADVICE.to_string());
    }
    if features.midface_ratio < MIDFACE_LONG {
        advice.push(MIDFACE_ADVICE.to_string());
    }
    if features.eye_height_asymmetry >= EYE_ASYMMETRY_PX {
        advice.push(ASYMMETRY_ADVICE.to_string());
    }

    if advice.is_empty() {
        advice.push(FALLBACK_ADVICE.to_string());
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(
        jaw_ratio: f64,
        canthal_tilt: f64,
        midface_ratio: f64,
        eye_height_asymmetry: f64,
    ) -> FeatureSet {
        FeatureSet {
            jaw_ratio,
            cheekbone_ratio: 0.25,
            canthal_tilt,
            midface_ratio,
            eye_height_asymmetry,
        }
    }

    #[test]
    fn harmonious_face_gets_only_the_fallback() {
        let advice = advise(&features(0.9, 3.0, 1.0, 1.0));
        assert_eq!(advice, vec![FALLBACK_ADVICE.to_string()]);
    }

    #[test]
    fn all_rules_fire_in_fixed_order() {
        let advice = advise(&features(0.7, -3.0, 0.8, 5.0));
        assert_eq!(
            advice,
            vec![
                JAW_ADVICE.to_string(),
                TILT_ADVICE.to_string(),
                MIDFACE_ADVICE.to_string(),
                ASYMMETRY_ADVICE.to_string(),
            ]
        );
    }

    #[test]
    fn fallback_never_mixes_with_rule_output() {
        let advice = advise(&features(0.7, 3.0, 1.0, 1.0));
        assert_eq!(advice, vec![JAW_ADVICE.to_string()]);
    }

    #[test]
    fn rule_boundaries_are_strict() {
        // Values exactly on a rule threshold do not trigger the rule...
        assert_eq!(
            advise(&features(0.76, -2.0, 0.85, 3.9999999)),
            vec![FALLBACK_ADVICE.to_string()]
        );
        // ...except asymmetry, whose rule is inclusive at 4 px.
        assert_eq!(
            advise(&features(0.76, -2.0, 0.85, 4.0)),
            vec![ASYMMETRY_ADVICE.to_string()]
        );
    }

    #[test]
    fn single_rule_emission() {
        assert_eq!(
            advise(&features(0.9, -2.5, 1.0, 0.0)),
            vec![TILT_ADVICE.to_string()]
        );
        assert_eq!(
            advise(&features(0.9, 0.0, 0.84, 0.0)),
            vec![MIDFACE_ADVICE.to_string()]
        );
    }
}
