use crate::core::models::ids::NodeId;
use crate::core::models::network::ResidueNetwork;
use std::collections::HashMap;
use tracing::debug;

/// Populates the weight of every edge from its interaction kind's formula.
///
/// Edges of unclassified kind keep an undefined weight; that is distinct
/// from a weight of zero and survives into the persisted edge table.
pub fn assign_edge_weights(network: &mut ResidueNetwork) {
    let mut weighted = 0usize;
    let mut unclassified = 0usize;
    for edge in network.edges_mut() {
        let weight = edge.kind.weight(edge.energy, edge.distance, edge.angle);
        match weight {
            Some(_) => weighted += 1,
            None => unclassified += 1,
        }
        edge.set_weight(weight);
    }
    debug!(weighted, unclassified, "Assigned edge weights.");
}

/// Aggregates edge weights into a per-residue structural-importance weight.
///
/// Each node's weight is the sum of the weights of all edges it terminates,
/// with undefined edge weights contributing zero; a node with no incident
/// edges gets a weight of exactly 0. Summation is endpoint-keyed, so the
/// result does not depend on edge ordering beyond float rounding.
pub fn aggregate_node_weights(network: &mut ResidueNetwork) {
    let mut totals: HashMap<NodeId, f64> = HashMap::new();
    for edge in network.edges() {
        let weight = edge.weight().unwrap_or(0.0);
        *totals.entry(edge.node_a).or_insert(0.0) += weight;
        *totals.entry(edge.node_b).or_insert(0.0) += weight;
    }
    for (id, node) in network.nodes_mut() {
        node.set_weight(totals.get(&id).copied().unwrap_or(0.0));
    }
    debug!(nodes = network.sequence_length(), "Aggregated node weights.");
}
