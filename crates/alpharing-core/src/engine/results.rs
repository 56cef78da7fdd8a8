use crate::core::models::features::FeatureVector;
use crate::core::models::score::ScoreRow;
use crate::core::models::substitution::Substitution;
use crate::engine::classify::Prediction;
use crate::engine::error::ScoringError;

/// Zips substitutions, feature vectors, and predictions into result rows.
///
/// Pure assembly: the only failure mode is a row-count disagreement between
/// the inputs, which indicates an upstream bug and fails the batch.
pub fn assemble(
    substitutions: &[Substitution],
    features: &[FeatureVector],
    predictions: &[Prediction],
) -> Result<Vec<ScoreRow>, ScoringError> {
    let expected = substitutions.len();
    if features.len() != expected {
        return Err(ScoringError::RowCountMismatch {
            what: "feature vectors",
            actual: features.len(),
            expected,
        });
    }
    if predictions.len() != expected {
        return Err(ScoringError::RowCountMismatch {
            what: "predictions",
            actual: predictions.len(),
            expected,
        });
    }

    Ok(substitutions
        .iter()
        .zip(features)
        .zip(predictions)
        .map(|((substitution, features), prediction)| ScoreRow {
            substitution: *substitution,
            features: *features,
            label: prediction.label,
            probability: prediction.probability,
            attributions: prediction.attributions,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::labels::Label;

    fn substitutions() -> Vec<Substitution> {
        vec!["YA229S".parse().unwrap(), "VA194A".parse().unwrap()]
    }

    fn features() -> Vec<FeatureVector> {
        vec![
            FeatureVector {
                confidence: 89.93,
                degree: 12.0,
                ddg: 2.254,
                rsp: 0.776,
            },
            FeatureVector {
                confidence: 85.72,
                degree: 6.0,
                ddg: 1.097,
                rsp: 0.658,
            },
        ]
    }

    fn predictions() -> Vec<Prediction> {
        vec![
            Prediction {
                probability: 0.721,
                label: Label::Deleterious,
                attributions: [0.1, 0.05, 0.12, -0.02],
            },
            Prediction {
                probability: 0.349,
                label: Label::Deleterious,
                attributions: [0.02, 0.01, 0.05, -0.01],
            },
        ]
    }

    #[test]
    fn assemble_zips_rows_in_order() {
        let rows = assemble(&substitutions(), &features(), &predictions()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].substitution.to_string(), "YA229S");
        assert_eq!(rows[0].probability, 0.721);
        assert_eq!(rows[1].substitution.to_string(), "VA194A");
        assert_eq!(rows[1].features.degree, 6.0);
        assert_eq!(rows[1].label, Label::Deleterious);
    }

    #[test]
    fn short_feature_list_is_a_row_count_mismatch() {
        let result = assemble(&substitutions(), &features()[..1], &predictions());
        assert!(matches!(
            result,
            Err(ScoringError::RowCountMismatch {
                what: "feature vectors",
                actual: 1,
                expected: 2,
            })
        ));
    }

    #[test]
    fn short_prediction_list_is_a_row_count_mismatch() {
        let result = assemble(&substitutions(), &features(), &predictions()[..1]);
        assert!(matches!(
            result,
            Err(ScoringError::RowCountMismatch {
                what: "predictions",
                actual: 1,
                expected: 2,
            })
        ));
    }
}
