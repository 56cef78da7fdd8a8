use crate::core::io::pdb::StructureConfidence;
use crate::core::io::scan::StabilityScan;
use crate::core::models::features::FeatureVector;
use crate::core::models::network::ResidueNetwork;
use crate::core::models::substitution::Substitution;
use crate::engine::error::ScoringError;
use tracing::debug;

/// Rows the stability-scan tool emits per requested mutation. The first of
/// each pair is an averaging artifact of the exhaustive scan; only the
/// second carries the reported ΔΔG.
pub const SCAN_ROWS_PER_SUBSTITUTION: usize = 2;

/// Extracts one feature vector per substitution, in request order.
///
/// Scan order corresponds one-to-one with request order, which is what makes
/// the second-of-each-pair ΔΔG selection valid; the row count is validated
/// up front so a truncated or reordered scan fails the whole batch before
/// any feature row is produced.
pub fn extract(
    structure: &StructureConfidence,
    network: &ResidueNetwork,
    scan: &StabilityScan,
    substitutions: &[Substitution],
) -> Result<Vec<FeatureVector>, ScoringError> {
    let expected = substitutions.len() * SCAN_ROWS_PER_SUBSTITUTION;
    if scan.len() != expected {
        return Err(ScoringError::MalformedScanOutput {
            actual: scan.len(),
            expected,
            substitutions: substitutions.len(),
        });
    }

    let length = network.sequence_length();
    let mut features = Vec::with_capacity(substitutions.len());
    for (index, substitution) in substitutions.iter().enumerate() {
        let confidence = structure
            .get(substitution.chain, substitution.position)
            .ok_or(ScoringError::PositionNotFound {
                chain: substitution.chain,
                position: substitution.position,
                table: "structure model",
            })?;

        let node = network
            .node_at(substitution.chain, substitution.position)
            .ok_or(ScoringError::PositionNotFound {
                chain: substitution.chain,
                position: substitution.position,
                table: "interaction network",
            })?;
        let degree = node.weight().ok_or_else(|| {
            ScoringError::Internal("node weights have not been aggregated".to_string())
        })?;

        let ddg = scan.records()[index * SCAN_ROWS_PER_SUBSTITUTION + 1].ddg;

        if substitution.position as usize > length {
            return Err(ScoringError::PositionOutOfRange {
                position: substitution.position,
                length,
            });
        }
        let rsp = substitution.position as f64 / length as f64;

        debug!(
            substitution = %substitution,
            confidence, degree, ddg, rsp,
            "Extracted feature vector."
        );
        features.push(FeatureVector {
            confidence,
            degree,
            ddg,
            rsp,
        });
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::scan::ScanRecord;
    use crate::core::models::interaction::InteractionEdge;
    use crate::core::models::residue::{AminoAcid, ResidueNode};
    use crate::engine::weighting::{aggregate_node_weights, assign_edge_weights};

    const TOLERANCE: f64 = 1e-9;

    fn structure(positions: &[(isize, f64)]) -> StructureConfidence {
        let mut structure = StructureConfidence::new();
        for &(position, confidence) in positions {
            structure.insert('A', position, confidence);
        }
        structure
    }

    fn weighted_network(length: isize) -> ResidueNetwork {
        let mut network = ResidueNetwork::new();
        for position in 1..=length {
            network.add_node(ResidueNode::new('A', position, AminoAcid::Alanine, 80.0));
        }
        let a = network.node_id_at('A', 1).unwrap();
        let b = network.node_id_at('A', 2).unwrap();
        network.add_edge(InteractionEdge::new(a, b, "IONIC", 6.0, 2.25, -999.9));
        assign_edge_weights(&mut network);
        aggregate_node_weights(&mut network);
        network
    }

    fn scan_rows(ddgs: &[f64]) -> StabilityScan {
        StabilityScan::new(
            ddgs.iter()
                .map(|&ddg| ScanRecord {
                    mutation: "X".to_string(),
                    ddg,
                })
                .collect(),
        )
    }

    fn subs(texts: &[&str]) -> Vec<Substitution> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn ddg_selection_takes_the_second_row_of_each_pair() {
        let structure = structure(&[(1, 90.0), (2, 85.0), (3, 70.0)]);
        let network = weighted_network(10);
        let scan = scan_rows(&[0.9, 2.254, 0.1, 1.097, 0.5, -0.238]);
        let substitutions = subs(&["AA1S", "AA2G", "AA3V"]);

        let features = extract(&structure, &network, &scan, &substitutions).unwrap();
        assert_eq!(features.len(), 3);
        assert!((features[0].ddg - 2.254).abs() < TOLERANCE);
        assert!((features[1].ddg - 1.097).abs() < TOLERANCE);
        assert!((features[2].ddg - (-0.238)).abs() < TOLERANCE);
    }

    #[test]
    fn features_come_back_in_request_order() {
        let structure = structure(&[(1, 90.0), (2, 85.0)]);
        let network = weighted_network(10);
        let scan = scan_rows(&[0.0, 1.0, 0.0, 2.0]);
        let substitutions = subs(&["AA2G", "AA1S"]);

        let features = extract(&structure, &network, &scan, &substitutions).unwrap();
        assert!((features[0].confidence - 85.0).abs() < TOLERANCE);
        assert!((features[1].confidence - 90.0).abs() < TOLERANCE);
        assert!((features[0].rsp - 0.2).abs() < TOLERANCE);
        assert!((features[1].rsp - 0.1).abs() < TOLERANCE);
    }

    #[test]
    fn degree_comes_from_the_aggregated_node_weight() {
        let structure = structure(&[(1, 90.0), (3, 70.0)]);
        let network = weighted_network(10);
        let scan = scan_rows(&[0.0, 1.0, 0.0, 2.0]);
        let substitutions = subs(&["AA1S", "AA3V"]);

        let features = extract(&structure, &network, &scan, &substitutions).unwrap();
        assert!((features[0].degree - 6.0).abs() < TOLERANCE);
        assert!((features[1].degree - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn wrong_scan_row_count_is_malformed() {
        let structure = structure(&[(1, 90.0)]);
        let network = weighted_network(10);
        let scan = scan_rows(&[0.0, 1.0, 0.5]);
        let substitutions = subs(&["AA1S"]);

        let result = extract(&structure, &network, &scan, &substitutions);
        assert!(matches!(
            result,
            Err(ScoringError::MalformedScanOutput {
                actual: 3,
                expected: 2,
                substitutions: 1,
            })
        ));
    }

    #[test]
    fn missing_structure_position_fails() {
        let structure = structure(&[(1, 90.0)]);
        let network = weighted_network(10);
        let scan = scan_rows(&[0.0, 1.0]);
        let substitutions = subs(&["AA2G"]);

        let result = extract(&structure, &network, &scan, &substitutions);
        assert!(matches!(
            result,
            Err(ScoringError::PositionNotFound {
                table: "structure model",
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn missing_network_position_fails() {
        let structure = structure(&[(42, 90.0)]);
        let network = weighted_network(10);
        let scan = scan_rows(&[0.0, 1.0]);
        let substitutions = subs(&["AA42G"]);

        let result = extract(&structure, &network, &scan, &substitutions);
        assert!(matches!(
            result,
            Err(ScoringError::PositionNotFound {
                table: "interaction network",
                position: 42,
                ..
            })
        ));
    }

    #[test]
    fn position_beyond_sequence_length_is_out_of_range() {
        // A sparse network: positions 1 and 30 resolved, so the sequence
        // length is 2 while position 30 still exists in the network.
        let structure = structure(&[(30, 90.0)]);
        let mut network = ResidueNetwork::new();
        network.add_node(ResidueNode::new('A', 1, AminoAcid::Alanine, 80.0));
        network.add_node(ResidueNode::new('A', 30, AminoAcid::Alanine, 80.0));
        assign_edge_weights(&mut network);
        aggregate_node_weights(&mut network);
        let scan = scan_rows(&[0.0, 1.0]);
        let substitutions = subs(&["AA30G"]);

        let result = extract(&structure, &network, &scan, &substitutions);
        assert!(matches!(
            result,
            Err(ScoringError::PositionOutOfRange {
                position: 30,
                length: 2,
            })
        ));
    }

    #[test]
    fn rsp_is_position_over_network_length() {
        let structure = structure(&[(5, 88.0)]);
        let network = weighted_network(10);
        let scan = scan_rows(&[0.0, 1.0]);
        let substitutions = subs(&["AA5G"]);

        let features = extract(&structure, &network, &scan, &substitutions).unwrap();
        assert!((features[0].rsp - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn unaggregated_network_is_an_internal_error() {
        let structure = structure(&[(1, 90.0)]);
        let mut network = ResidueNetwork::new();
        network.add_node(ResidueNode::new('A', 1, AminoAcid::Alanine, 80.0));
        let scan = scan_rows(&[0.0, 1.0]);
        let substitutions = subs(&["AA1S"]);

        let result = extract(&structure, &network, &scan, &substitutions);
        assert!(matches!(result, Err(ScoringError::Internal(_))));
    }
}
