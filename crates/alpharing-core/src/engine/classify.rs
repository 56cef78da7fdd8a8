use crate::core::classifier::artifact::ClassifierArtifact;
use crate::core::classifier::explain;
use crate::core::classifier::labels::Label;
use crate::core::models::features::{FEATURE_COUNT, FeatureVector};
use crate::engine::error::ScoringError;
use std::path::Path;
use tracing::debug;

/// The classifier's verdict on one substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub probability: f64,
    pub label: Label,
    pub attributions: [f64; FEATURE_COUNT],
}

/// Loads the classifier artifact for a scoring run.
///
/// A missing or invalid artifact is fatal to the run; the loader's error is
/// carried inside [`ScoringError::ArtifactLoad`].
pub fn load_artifact(path: &Path) -> Result<ClassifierArtifact, ScoringError> {
    Ok(ClassifierArtifact::load(path)?)
}

/// Classifies each feature vector and attributes its probability to the
/// individual features against the artifact's background sample.
///
/// Feature vectors are validated for finiteness first; one bad row fails the
/// whole batch before any prediction is made.
pub fn run(
    artifact: &ClassifierArtifact,
    features: &[FeatureVector],
) -> Result<Vec<Prediction>, ScoringError> {
    for (row, vector) in features.iter().enumerate() {
        if !vector.is_finite() {
            return Err(ScoringError::InvalidFeatureVector {
                row,
                reason: "contains a non-finite value".to_string(),
            });
        }
    }

    let predictions = features
        .iter()
        .map(|vector| {
            let values = vector.to_array();
            let probability = artifact.model.predict_proba(&values);
            let label = Label::from_probability(probability);
            let attributions = explain::attribute(&artifact.model, &artifact.background, &values);
            debug!(probability, ?label, "Classified feature vector.");
            Prediction {
                probability,
                label,
                attributions,
            }
        })
        .collect();

    Ok(predictions)
}
