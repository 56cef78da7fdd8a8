use crate::core::models::features::FEATURE_COUNT;
use serde::Deserialize;

/// A trained binary logistic-regression model over standardized features.
///
/// Each feature is z-scored with the training means and scales before the
/// linear combination, so the coefficients are comparable across features:
/// `p = sigmoid(intercept + Σ coefficients[i] * (x[i] - means[i]) / scales[i])`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogisticModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

impl LogisticModel {
    /// Estimated probability of the deleterious class for one feature vector.
    ///
    /// The artifact loader guarantees that the parameter vectors all have
    /// [`FEATURE_COUNT`] entries.
    pub fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut z = self.intercept;
        for (((value, coefficient), mean), scale) in features
            .iter()
            .zip(&self.coefficients)
            .zip(&self.means)
            .zip(&self.scales)
        {
            z += coefficient * (value - mean) / scale;
        }
        sigmoid(z)
    }
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
