use crate::core::models::features::FEATURE_NAMES;
use crate::core::models::score::ScoreRow;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the scores table: one tab-separated row per substitution with the
/// feature values, label, probability, and one attribution column per
/// feature.
///
/// The whole table is serialized in memory first and written in a single
/// operation, so a failed run never leaves a partially-written table behind.
pub fn save_scores(rows: &[ScoreRow], path: &Path) -> Result<(), ResultsError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());

    let mut header: Vec<String> = vec!["Substitution".to_string()];
    header.extend(FEATURE_NAMES.iter().map(|name| name.to_string()));
    header.push("label".to_string());
    header.push("Probability".to_string());
    header.extend(FEATURE_NAMES.iter().map(|name| format!("{name} SHAP")));
    writer.write_record(&header)?;

    for row in rows {
        let mut record: Vec<String> = vec![row.substitution.to_string()];
        record.extend(row.features.to_array().iter().map(|v| v.to_string()));
        record.push(row.label.to_string());
        record.push(row.probability.to_string());
        record.extend(row.attributions.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    let buffer = writer.into_inner().map_err(|e| ResultsError::Io {
        path: path.to_string_lossy().to_string(),
        source: e.into_error(),
    })?;
    std::fs::write(path, buffer).map_err(|e| ResultsError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    Ok(())
}
