/// Number of features extracted per substitution. Fixed by the classifier
/// artifact's feature order.
pub const FEATURE_COUNT: usize = 4;

/// Feature names in their fixed order, matching the output-table headers.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["pLDDT", "Degree", "ΔΔG", "RSP"];

/// The fixed-order feature vector describing one substitution.
///
/// - `confidence` - structural confidence at the substituted position (0-100)
/// - `degree` - aggregated interaction weight (structural importance) at the position
/// - `ddg` - predicted stability change in kcal/mol; positive is destabilizing
/// - `rsp` - relative sequence position, in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub confidence: f64,
    pub degree: f64,
    pub ddg: f64,
    pub rsp: f64,
}

impl FeatureVector {
    pub fn to_array(self) -> [f64; FEATURE_COUNT] {
        [self.confidence, self.degree, self.ddg, self.rsp]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_array_preserves_the_fixed_feature_order() {
        let features = FeatureVector {
            confidence: 89.93,
            degree: 12.0,
            ddg: 2.254,
            rsp: 0.776,
        };
        assert_eq!(features.to_array(), [89.93, 12.0, 2.254, 0.776]);
    }

    #[test]
    fn feature_names_match_the_feature_count() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    }

    #[test]
    fn is_finite_rejects_nan_and_infinity() {
        let mut features = FeatureVector {
            confidence: 90.0,
            degree: 5.0,
            ddg: 0.0,
            rsp: 0.5,
        };
        assert!(features.is_finite());
        features.ddg = f64::NAN;
        assert!(!features.is_finite());
        features.ddg = f64::INFINITY;
        assert!(!features.is_finite());
    }
}
