use crate::core::models::interaction::InteractionEdge;
use crate::core::models::network::ResidueNetwork;
use crate::core::models::residue::{AminoAcid, ResidueNode};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RingError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Malformed node identifier '{0}' (expected 'chain:position:insertion:residue')")]
    MalformedNodeId(String),

    #[error("Unknown residue type in node identifier '{0}'")]
    UnknownResidueType(String),

    #[error("Edge references node '{0}' absent from the node table")]
    UnknownEdgeNode(String),

    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    #[serde(rename = "NodeId")]
    node_id: String,
    #[serde(rename = "Bfactor_CA")]
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    #[serde(rename = "NodeId1")]
    node_id1: String,
    #[serde(rename = "Interaction")]
    interaction: String,
    #[serde(rename = "NodeId2")]
    node_id2: String,
    #[serde(rename = "Distance")]
    distance: f64,
    #[serde(rename = "Angle")]
    angle: f64,
    #[serde(rename = "Energy")]
    energy: f64,
}

// Node identifiers are colon-delimited: chain, 1-based position, insertion
// code (unused), three-letter residue type, e.g. "A:229:_:TYR".
fn parse_node_id(value: &str) -> Result<(char, isize, AminoAcid), RingError> {
    let fields: Vec<&str> = value.split(':').collect();
    if fields.len() < 4 {
        return Err(RingError::MalformedNodeId(value.to_string()));
    }
    let mut chain_chars = fields[0].chars();
    let chain = match (chain_chars.next(), chain_chars.next()) {
        (Some(c), None) => c,
        _ => return Err(RingError::MalformedNodeId(value.to_string())),
    };
    let position = fields[1]
        .parse::<isize>()
        .map_err(|_| RingError::MalformedNodeId(value.to_string()))?;
    let amino_acid = AminoAcid::from_three_letter(fields[3])
        .ok_or_else(|| RingError::UnknownResidueType(value.to_string()))?;
    Ok((chain, position, amino_acid))
}

fn node_id_string(node: &ResidueNode) -> String {
    format!(
        "{}:{}:_:{}",
        node.chain,
        node.position,
        node.amino_acid.three_letter()
    )
}

fn tsv_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, RingError> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| RingError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
}

/// Loads a residue-interaction network from the contact-detection tool's
/// tab-separated node and edge tables.
///
/// Nodes are read first so that edges can be resolved against the
/// `(chain, position)` index; an edge endpoint missing from the node table
/// is an error.
pub fn load_network(nodes_path: &Path, edges_path: &Path) -> Result<ResidueNetwork, RingError> {
    let mut network = ResidueNetwork::new();

    let mut nodes_reader = tsv_reader(nodes_path)?;
    for result in nodes_reader.deserialize::<NodeRecord>() {
        let record = result.map_err(|e| RingError::Csv {
            path: nodes_path.to_string_lossy().to_string(),
            source: e,
        })?;
        let (chain, position, amino_acid) = parse_node_id(&record.node_id)?;
        network.add_node(ResidueNode::new(
            chain,
            position,
            amino_acid,
            record.confidence,
        ));
    }

    let mut edges_reader = tsv_reader(edges_path)?;
    for result in edges_reader.deserialize::<EdgeRecord>() {
        let record = result.map_err(|e| RingError::Csv {
            path: edges_path.to_string_lossy().to_string(),
            source: e,
        })?;
        let (chain_a, position_a, _) = parse_node_id(&record.node_id1)?;
        let (chain_b, position_b, _) = parse_node_id(&record.node_id2)?;
        let node_a = network
            .node_id_at(chain_a, position_a)
            .ok_or_else(|| RingError::UnknownEdgeNode(record.node_id1.clone()))?;
        let node_b = network
            .node_id_at(chain_b, position_b)
            .ok_or_else(|| RingError::UnknownEdgeNode(record.node_id2.clone()))?;
        network.add_edge(InteractionEdge::new(
            node_a,
            node_b,
            &record.interaction,
            record.energy,
            record.distance,
            record.angle,
        ));
    }

    Ok(network)
}

fn tsv_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, RingError> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| RingError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
}

fn format_weight(weight: Option<f64>) -> String {
    weight.map(|w| w.to_string()).unwrap_or_default()
}

/// Persists the weighted node and edge tables.
///
/// The output schema is the modeled columns plus a trailing `Weight` column.
/// Input columns the reader does not model (such as the source tool's own
/// `Degree` count, which the computed weight supersedes) are not carried
/// through. Edges of unclassified kind get an empty weight field, not a
/// zero.
pub fn save_network(
    network: &ResidueNetwork,
    nodes_path: &Path,
    edges_path: &Path,
) -> Result<(), RingError> {
    let csv_error = |path: &Path, e: csv::Error| RingError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    };

    let mut nodes_writer = tsv_writer(nodes_path)?;
    nodes_writer
        .write_record(["NodeId", "Chain", "Position", "Residue", "Bfactor_CA", "Weight"])
        .map_err(|e| csv_error(nodes_path, e))?;
    let mut nodes: Vec<&ResidueNode> = network.nodes().map(|(_, node)| node).collect();
    nodes.sort_by_key(|node| (node.chain, node.position));
    for node in nodes {
        nodes_writer
            .write_record([
                node_id_string(node),
                node.chain.to_string(),
                node.position.to_string(),
                node.amino_acid.three_letter().to_string(),
                node.confidence.to_string(),
                format_weight(node.weight()),
            ])
            .map_err(|e| csv_error(nodes_path, e))?;
    }
    nodes_writer.flush().map_err(|e| RingError::Io {
        path: nodes_path.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut edges_writer = tsv_writer(edges_path)?;
    edges_writer
        .write_record([
            "NodeId1",
            "Interaction",
            "NodeId2",
            "Distance",
            "Angle",
            "Energy",
            "Weight",
        ])
        .map_err(|e| csv_error(edges_path, e))?;
    for edge in network.edges() {
        let node_a = network
            .node(edge.node_a)
            .ok_or_else(|| RingError::Inconsistency("edge endpoint missing from network".into()))?;
        let node_b = network
            .node(edge.node_b)
            .ok_or_else(|| RingError::Inconsistency("edge endpoint missing from network".into()))?;
        edges_writer
            .write_record([
                node_id_string(node_a),
                edge.label.clone(),
                node_id_string(node_b),
                edge.distance.to_string(),
                edge.angle.to_string(),
                edge.energy.to_string(),
                format_weight(edge.weight()),
            ])
            .map_err(|e| csv_error(edges_path, e))?;
    }
    edges_writer.flush().map_err(|e| RingError::Io {
        path: edges_path.to_string_lossy().to_string(),
        source: e,
    })?;

    Ok(())
}
