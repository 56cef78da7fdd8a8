use alpharing::core::io::pdb::PdbError;
use alpharing::core::io::results::ResultsError;
use alpharing::core::io::ring::RingError;
use alpharing::core::io::scan::ScanError;
use alpharing::engine::error::ScoringError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("Failed to read structure model: {0}")]
    Pdb(#[from] PdbError),

    #[error("Failed to read interaction network: {0}")]
    Ring(#[from] RingError),

    #[error("Failed to read stability scan: {0}")]
    Scan(#[from] ScanError),

    #[error("Failed to write results: {0}")]
    Results(#[from] ResultsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
