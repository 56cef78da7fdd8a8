use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },

    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },

    #[error("Line is too short for an ATOM record (must be at least 66 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Per-residue structural confidence scores recovered from a structure model.
///
/// The structure-prediction tool stores its per-residue confidence estimate
/// in the B-factor slot of every atom; the first atom of each residue is the
/// one consulted, matching the upstream pipeline.
#[derive(Debug, Clone, Default)]
pub struct StructureConfidence {
    values: HashMap<(char, isize), f64>,
}

impl StructureConfidence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chain: char, position: isize, confidence: f64) {
        self.values.entry((chain, position)).or_insert(confidence);
    }

    pub fn get(&self, chain: char, position: isize) -> Option<f64> {
        self.values.get(&(chain, position)).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads the confidence map from PDB `ATOM` records.
    ///
    /// Non-`ATOM` lines are ignored. Within a residue, only the first atom's
    /// B-factor is kept.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, PdbError> {
        let mut confidence = Self::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if slice_and_trim(&line, 0, 6) != "ATOM" {
                continue;
            }
            if line.len() < 66 {
                return Err(PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::LineTooShort,
                });
            }

            let chain = line.chars().nth(21).unwrap_or(' ');
            let position_field = slice_and_trim(&line, 22, 26);
            let position =
                position_field
                    .parse::<isize>()
                    .map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "23-26".to_string(),
                            value: position_field.to_string(),
                        },
                    })?;
            let bfactor_field = slice_and_trim(&line, 60, 66);
            let bfactor = bfactor_field
                .parse::<f64>()
                .map_err(|_| PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::InvalidFloat {
                        columns: "61-66".to_string(),
                        value: bfactor_field.to_string(),
                    },
                })?;

            confidence.insert(chain, position, bfactor);
        }

        Ok(confidence)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, PdbError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
