use super::model::LogisticModel;
use crate::core::models::features::FEATURE_COUNT;

/// Additive per-feature attribution of one prediction against a background
/// sample.
///
/// For each background row, the features are replaced one at a time, in the
/// fixed feature order, by the query vector's values, and each feature is
/// credited with the resulting change in predicted probability. Credits are
/// averaged over the background rows. The per-row credits telescope from the
/// background prediction to the query prediction, so the returned values sum
/// to `p(features) - mean(p(background))` exactly (up to float rounding).
pub fn attribute(
    model: &LogisticModel,
    background: &[[f64; FEATURE_COUNT]],
    features: &[f64; FEATURE_COUNT],
) -> [f64; FEATURE_COUNT] {
    let mut totals = [0.0; FEATURE_COUNT];
    for base in background {
        let mut current = *base;
        let mut previous = model.predict_proba(&current);
        for (index, total) in totals.iter_mut().enumerate() {
            current[index] = features[index];
            let next = model.predict_proba(&current);
            *total += next - previous;
            previous = next;
        }
    }
    let rows = background.len() as f64;
    totals.map(|total| total / rows)
}
