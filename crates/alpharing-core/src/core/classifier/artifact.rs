use super::model::LogisticModel;
use crate::core::models::features::{FEATURE_COUNT, FEATURE_NAMES};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// The artifact format version this build can load.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Unsupported artifact format version {found} (this build supports {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Artifact feature order {found:?} does not match the expected {expected:?}")]
    FeatureOrderMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },

    #[error("Artifact {field} has {found} entries, expected {expected}")]
    DimensionMismatch {
        field: &'static str,
        found: usize,
        expected: usize,
    },

    #[error("Artifact scale at index {index} is {value}, expected a positive value")]
    NonPositiveScale { index: usize, value: f64 },

    #[error("Artifact background sample is empty")]
    EmptyBackground,
}

#[derive(Debug, Deserialize)]
struct RawArtifact {
    version: u32,
    feature_order: Vec<String>,
    background: Vec<Vec<f64>>,
    model: LogisticModel,
}

/// The loaded classifier artifact: a trained probabilistic model plus the
/// background reference sample used as the attribution baseline.
///
/// Loaded once per run, validated against the schema at load time, and shared
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct ClassifierArtifact {
    pub model: LogisticModel,
    pub background: Vec<[f64; FEATURE_COUNT]>,
}

impl ClassifierArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let raw: RawArtifact = toml::from_str(&content).map_err(|e| ArtifactError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::validate(raw)
    }

    fn validate(raw: RawArtifact) -> Result<Self, ArtifactError> {
        if raw.version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: raw.version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }
        if raw.feature_order != FEATURE_NAMES {
            return Err(ArtifactError::FeatureOrderMismatch {
                found: raw.feature_order,
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            });
        }
        for (field, values) in [
            ("model coefficients", &raw.model.coefficients),
            ("model means", &raw.model.means),
            ("model scales", &raw.model.scales),
        ] {
            if values.len() != FEATURE_COUNT {
                return Err(ArtifactError::DimensionMismatch {
                    field,
                    found: values.len(),
                    expected: FEATURE_COUNT,
                });
            }
        }
        for (index, value) in raw.model.scales.iter().enumerate() {
            if *value <= 0.0 {
                return Err(ArtifactError::NonPositiveScale {
                    index,
                    value: *value,
                });
            }
        }
        if raw.background.is_empty() {
            return Err(ArtifactError::EmptyBackground);
        }
        let mut background = Vec::with_capacity(raw.background.len());
        for row in &raw.background {
            let row: [f64; FEATURE_COUNT] =
                row.as_slice()
                    .try_into()
                    .map_err(|_| ArtifactError::DimensionMismatch {
                        field: "background row",
                        found: row.len(),
                        expected: FEATURE_COUNT,
                    })?;
            background.push(row);
        }

        Ok(Self {
            model: raw.model,
            background,
        })
    }
}
