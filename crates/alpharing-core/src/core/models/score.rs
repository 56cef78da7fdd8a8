use super::features::{FEATURE_COUNT, FeatureVector};
use super::substitution::Substitution;
use crate::core::classifier::labels::Label;

/// One assembled scoring result row.
///
/// Created once per substitution after classification and never mutated.
/// The attribution values follow the fixed feature order and sum to the
/// row's probability minus the background-expected probability.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub substitution: Substitution,
    pub features: FeatureVector,
    pub label: Label,
    pub probability: f64,
    pub attributions: [f64; FEATURE_COUNT],
}
