use crate::core::classifier::artifact::ArtifactError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Residue {chain}{position} not found in the {table}")]
    PositionNotFound {
        chain: char,
        position: isize,
        table: &'static str,
    },

    #[error("Position {position} exceeds the sequence length {length}")]
    PositionOutOfRange { position: isize, length: usize },

    #[error(
        "Stability scan has {actual} row(s) but {expected} were expected \
         for {substitutions} substitution(s)"
    )]
    MalformedScanOutput {
        actual: usize,
        expected: usize,
        substitutions: usize,
    },

    #[error("Invalid feature vector at row {row}: {reason}")]
    InvalidFeatureVector { row: usize, reason: String },

    #[error("Failed to load classifier artifact: {source}")]
    ArtifactLoad {
        #[from]
        source: ArtifactError,
    },

    #[error("Result assembly mismatch: {what} has {actual} row(s), expected {expected}")]
    RowCountMismatch {
        what: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
