use std::fmt;

/// Probabilities at or below this threshold are labelled [`Label::Neutral`].
pub const NEUTRAL_MAX_PROBABILITY: f64 = 0.2270;

/// Probabilities at or above this threshold are labelled [`Label::Deleterious`].
pub const DELETERIOUS_MIN_PROBABILITY: f64 = 0.2740;

/// Categorical pathogenicity label.
///
/// The gap between the two thresholds is an intentional uncertain band:
/// probabilities falling strictly between them are labelled ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Neutral,
    Ambiguous,
    Deleterious,
}

impl Label {
    pub fn from_probability(probability: f64) -> Self {
        if probability <= NEUTRAL_MAX_PROBABILITY {
            Self::Neutral
        } else if probability >= DELETERIOUS_MIN_PROBABILITY {
            Self::Deleterious
        } else {
            Self::Ambiguous
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Ambiguous => "Ambiguous",
            Self::Deleterious => "Deleterious",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_at_neutral_threshold_is_neutral() {
        assert_eq!(Label::from_probability(0.2270), Label::Neutral);
    }

    #[test]
    fn probability_just_above_neutral_threshold_is_ambiguous() {
        assert_eq!(Label::from_probability(0.2271), Label::Ambiguous);
    }

    #[test]
    fn probability_at_deleterious_threshold_is_deleterious() {
        assert_eq!(Label::from_probability(0.2740), Label::Deleterious);
    }

    #[test]
    fn probability_just_below_deleterious_threshold_is_ambiguous() {
        assert_eq!(Label::from_probability(0.2739), Label::Ambiguous);
    }

    #[test]
    fn extreme_probabilities_get_the_expected_labels() {
        assert_eq!(Label::from_probability(0.0), Label::Neutral);
        assert_eq!(Label::from_probability(1.0), Label::Deleterious);
    }

    #[test]
    fn labels_display_their_output_table_form() {
        assert_eq!(Label::Neutral.to_string(), "Neutral");
        assert_eq!(Label::Ambiguous.to_string(), "Ambiguous");
        assert_eq!(Label::Deleterious.to_string(), "Deleterious");
    }
}
