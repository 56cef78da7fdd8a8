use super::ids::NodeId;
use crate::core::weighting;

/// The closed set of residue-residue interaction kinds recognized by the
/// weighting scheme.
///
/// Contact labels produced by the network-extraction tool may carry
/// colon-separated subtypes (e.g. `HBOND:SC_SC`); only the prefix before the
/// first colon determines the kind. Anything outside the recognized set maps
/// to [`InteractionKind::Unclassified`], which carries no weight formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    HydrogenBond,
    Ionic,
    PiCation,
    PiPiStack,
    PiHydrogenBond,
    Unclassified,
}

impl InteractionKind {
    pub fn from_label(label: &str) -> Self {
        match label.split(':').next().unwrap_or("") {
            "HBOND" => Self::HydrogenBond,
            "IONIC" => Self::Ionic,
            "PICATION" => Self::PiCation,
            "PIPISTACK" => Self::PiPiStack,
            "PIHBOND" => Self::PiHydrogenBond,
            _ => Self::Unclassified,
        }
    }

    /// Computes the interaction weight for this kind.
    ///
    /// Returns `None` for [`InteractionKind::Unclassified`]: an unrecognized
    /// contact has no weight, which is distinct from a weight of zero.
    pub fn weight(&self, energy: f64, distance: f64, angle: f64) -> Option<f64> {
        match self {
            Self::HydrogenBond => Some(weighting::hydrogen_bond(energy, distance, angle)),
            Self::Ionic => Some(weighting::ionic(energy, distance)),
            Self::PiCation => Some(weighting::pi_cation(energy, distance, angle)),
            Self::PiPiStack => Some(weighting::pi_pi_stack(energy, distance, angle)),
            Self::PiHydrogenBond => Some(weighting::pi_hydrogen_bond(energy, distance)),
            Self::Unclassified => None,
        }
    }
}

/// A residue-residue contact edge of the interaction network.
///
/// Created once per detected contact and never deleted within a run. The
/// weight starts out undefined and is populated exactly once by the
/// edge-weighting pass; edges of unclassified kind keep an undefined weight.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionEdge {
    pub node_a: NodeId,
    pub node_b: NodeId,
    pub kind: InteractionKind,
    pub label: String, // Full colon-delimited interaction label from the source table
    pub energy: f64,
    pub distance: f64, // In Å
    pub angle: f64,    // In degrees; the source tool emits a sentinel for kinds without one
    weight: Option<f64>,
}

impl InteractionEdge {
    pub fn new(
        node_a: NodeId,
        node_b: NodeId,
        label: &str,
        energy: f64,
        distance: f64,
        angle: f64,
    ) -> Self {
        Self {
            node_a,
            node_b,
            kind: InteractionKind::from_label(label),
            label: label.to_string(),
            energy,
            distance,
            angle,
            weight: None,
        }
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: Option<f64>) {
        self.weight = weight;
    }
}
