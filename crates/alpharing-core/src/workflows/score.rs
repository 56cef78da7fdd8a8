use crate::core::classifier::artifact::ClassifierArtifact;
use crate::core::io::pdb::StructureConfidence;
use crate::core::io::scan::StabilityScan;
use crate::core::models::network::ResidueNetwork;
use crate::core::models::score::ScoreRow;
use crate::core::models::substitution::Substitution;
use crate::engine::error::ScoringError;
use crate::engine::{classify, features, results, weighting};
use tracing::{info, instrument};

/// Scores a batch of substitutions against one structure.
///
/// The network is mutated exactly once by each of the two weighting passes
/// and is left in its weighted state so the caller can persist the updated
/// tables. Any failure aborts the whole batch before any result row exists;
/// there are no partial results.
#[instrument(skip_all, name = "scoring_workflow")]
pub fn run(
    structure: &StructureConfidence,
    network: &mut ResidueNetwork,
    scan: &StabilityScan,
    artifact: &ClassifierArtifact,
    substitutions: &[Substitution],
) -> Result<Vec<ScoreRow>, ScoringError> {
    info!(
        substitutions = substitutions.len(),
        residues = network.sequence_length(),
        edges = network.edges().len(),
        "Starting scoring workflow."
    );

    // === Phase 1: Weight the interaction network ===
    weighting::assign_edge_weights(network);
    weighting::aggregate_node_weights(network);

    // === Phase 2: Extract per-substitution features ===
    let features = features::extract(structure, network, scan, substitutions)?;

    // === Phase 3: Classify and explain ===
    let predictions = classify::run(artifact, &features)?;

    // === Phase 4: Assemble the result rows ===
    let rows = results::assemble(substitutions, &features, &predictions)?;

    info!(rows = rows.len(), "Scoring workflow complete.");
    Ok(rows)
}
