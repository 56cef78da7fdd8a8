use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Scan row {row} has no ΔΔG column")]
    MissingDdg { row: usize },

    #[error("Invalid ΔΔG value '{value}' in scan row {row}")]
    InvalidDdg { row: usize, value: String },
}

/// One row of the stability-scan output.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub mutation: String,
    pub ddg: f64, // In kcal/mol; positive is destabilizing
}

/// The parsed output of the exhaustive stability-scan tool.
///
/// The tool writes a headerless tab-separated table with the mutation label
/// in column 1 and a ΔΔG value in column 2, and emits two consecutive rows
/// per requested mutation. All rows are retained here; selecting the
/// reported row of each pair is the feature extractor's responsibility.
#[derive(Debug, Clone, Default)]
pub struct StabilityScan {
    records: Vec<ScanRecord>,
}

impl StabilityScan {
    pub fn new(records: Vec<ScanRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| ScanError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row = index + 1;
            let record = result.map_err(|e| ScanError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            let mutation = record.get(0).unwrap_or("").to_string();
            let ddg_field = record.get(1).ok_or(ScanError::MissingDdg { row })?;
            let ddg = ddg_field
                .trim()
                .parse::<f64>()
                .map_err(|_| ScanError::InvalidDdg {
                    row,
                    value: ddg_field.to_string(),
                })?;
            records.push(ScanRecord { mutation, ddg });
        }

        Ok(Self::new(records))
    }
}
