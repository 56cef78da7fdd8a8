use super::ids::NodeId;
use super::interaction::InteractionEdge;
use super::residue::ResidueNode;
use slotmap::SlotMap;
use std::collections::HashMap;

/// A weighted residue-interaction network for one folded structure.
///
/// Nodes are keyed by stable [`NodeId`]s and indexed by `(chain, position)`;
/// edges reference nodes by their keys. The network is built once from the
/// collaborator tables, then mutated exactly once by each of the two
/// weighting passes.
#[derive(Debug, Clone, Default)]
pub struct ResidueNetwork {
    nodes: SlotMap<NodeId, ResidueNode>,
    edges: Vec<InteractionEdge>,
    position_index: HashMap<(char, isize), NodeId>,
}

impl ResidueNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and indexes it by `(chain, position)`.
    ///
    /// A later node at an already-indexed position replaces the earlier one
    /// in the index; the upstream tables list each residue once.
    pub fn add_node(&mut self, node: ResidueNode) -> NodeId {
        let key = (node.chain, node.position);
        let id = self.nodes.insert(node);
        self.position_index.insert(key, id);
        id
    }

    pub fn add_edge(&mut self, edge: InteractionEdge) {
        self.edges.push(edge);
    }

    pub fn node(&self, id: NodeId) -> Option<&ResidueNode> {
        self.nodes.get(id)
    }

    pub fn node_id_at(&self, chain: char, position: isize) -> Option<NodeId> {
        self.position_index.get(&(chain, position)).copied()
    }

    pub fn node_at(&self, chain: char, position: isize) -> Option<&ResidueNode> {
        self.node_id_at(chain, position).and_then(|id| self.node(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &ResidueNode)> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> &[InteractionEdge] {
        &self.edges
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut ResidueNode)> {
        self.nodes.iter_mut()
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut InteractionEdge> {
        self.edges.iter_mut()
    }

    /// Number of residues present in the network, which is the sequence
    /// length used as the relative-sequence-position denominator.
    pub fn sequence_length(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
