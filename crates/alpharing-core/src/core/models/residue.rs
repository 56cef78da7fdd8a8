use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // Alanine (ALA)
    Glycine,    // Glycine (GLY)
    Isoleucine, // Isoleucine (ILE)
    Leucine,    // Leucine (LEU)
    Proline,    // Proline (PRO)
    Valine,     // Valine (VAL)

    // --- Aromatic ---
    Phenylalanine, // Phenylalanine (PHE)
    Tryptophan,    // Tryptophan (TRP)
    Tyrosine,      // Tyrosine (TYR)

    // --- Polar, Uncharged ---
    Asparagine, // Asparagine (ASN)
    Cysteine,   // Cysteine (CYS)
    Glutamine,  // Glutamine (GLN)
    Serine,     // Serine (SER)
    Threonine,  // Threonine (THR)
    Methionine, // Methionine (MET)

    // --- Positively Charged (Basic) ---
    Arginine,  // Arginine (ARG)
    Histidine, // Histidine (HIS)
    Lysine,    // Lysine (LYS)

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // Aspartic Acid (ASP)
    GlutamicAcid, // Glutamic Acid (GLU)
}

static THREE_LETTER_CODES: Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Alanine,
    "ARG" => AminoAcid::Arginine,
    "ASN" => AminoAcid::Asparagine,
    "ASP" => AminoAcid::AsparticAcid,
    "CYS" => AminoAcid::Cysteine,
    "GLN" => AminoAcid::Glutamine,
    "GLU" => AminoAcid::GlutamicAcid,
    "GLY" => AminoAcid::Glycine,
    "HIS" => AminoAcid::Histidine,
    "ILE" => AminoAcid::Isoleucine,
    "LEU" => AminoAcid::Leucine,
    "LYS" => AminoAcid::Lysine,
    "MET" => AminoAcid::Methionine,
    "PHE" => AminoAcid::Phenylalanine,
    "PRO" => AminoAcid::Proline,
    "SER" => AminoAcid::Serine,
    "THR" => AminoAcid::Threonine,
    "TRP" => AminoAcid::Tryptophan,
    "TYR" => AminoAcid::Tyrosine,
    "VAL" => AminoAcid::Valine,
};

impl AminoAcid {
    pub fn from_three_letter(code: &str) -> Option<Self> {
        THREE_LETTER_CODES
            .get(code.trim().to_ascii_uppercase().as_str())
            .copied()
    }

    pub fn from_one_letter(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'A' => Some(Self::Alanine),
            'R' => Some(Self::Arginine),
            'N' => Some(Self::Asparagine),
            'D' => Some(Self::AsparticAcid),
            'C' => Some(Self::Cysteine),
            'Q' => Some(Self::Glutamine),
            'E' => Some(Self::GlutamicAcid),
            'G' => Some(Self::Glycine),
            'H' => Some(Self::Histidine),
            'I' => Some(Self::Isoleucine),
            'L' => Some(Self::Leucine),
            'K' => Some(Self::Lysine),
            'M' => Some(Self::Methionine),
            'F' => Some(Self::Phenylalanine),
            'P' => Some(Self::Proline),
            'S' => Some(Self::Serine),
            'T' => Some(Self::Threonine),
            'W' => Some(Self::Tryptophan),
            'Y' => Some(Self::Tyrosine),
            'V' => Some(Self::Valine),
            _ => None,
        }
    }

    pub fn one_letter(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Arginine => 'R',
            Self::Asparagine => 'N',
            Self::AsparticAcid => 'D',
            Self::Cysteine => 'C',
            Self::Glutamine => 'Q',
            Self::GlutamicAcid => 'E',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Lysine => 'K',
            Self::Methionine => 'M',
            Self::Phenylalanine => 'F',
            Self::Proline => 'P',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Valine => 'V',
        }
    }

    pub fn three_letter(&self) -> &'static str {
        match self {
            Self::Alanine => "ALA",
            Self::Arginine => "ARG",
            Self::Asparagine => "ASN",
            Self::AsparticAcid => "ASP",
            Self::Cysteine => "CYS",
            Self::Glutamine => "GLN",
            Self::GlutamicAcid => "GLU",
            Self::Glycine => "GLY",
            Self::Histidine => "HIS",
            Self::Isoleucine => "ILE",
            Self::Leucine => "LEU",
            Self::Lysine => "LYS",
            Self::Methionine => "MET",
            Self::Phenylalanine => "PHE",
            Self::Proline => "PRO",
            Self::Serine => "SER",
            Self::Threonine => "THR",
            Self::Tryptophan => "TRP",
            Self::Tyrosine => "TYR",
            Self::Valine => "VAL",
        }
    }
}

/// A residue node of the interaction network.
///
/// One node exists per residue of the folded structure. The structural-importance
/// weight starts out undefined and is populated exactly once by the node-weight
/// aggregation pass; it is immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueNode {
    pub chain: char,
    pub position: isize, // 1-based residue sequence position from the source file
    pub amino_acid: AminoAcid,
    pub confidence: f64, // Per-residue structural confidence estimate (0-100)
    weight: Option<f64>,
}

impl ResidueNode {
    pub fn new(chain: char, position: isize, amino_acid: AminoAcid, confidence: f64) -> Self {
        Self {
            chain,
            position,
            amino_acid,
            confidence,
            weight: None,
        }
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = Some(weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_letter_and_three_letter_codes_are_consistent() {
        for code in THREE_LETTER_CODES.keys() {
            let amino_acid = AminoAcid::from_three_letter(code).unwrap();
            assert_eq!(
                AminoAcid::from_one_letter(amino_acid.one_letter()),
                Some(amino_acid)
            );
            assert_eq!(amino_acid.three_letter(), *code);
        }
    }

    #[test]
    fn from_three_letter_trims_and_ignores_case() {
        assert_eq!(
            AminoAcid::from_three_letter(" tyr "),
            Some(AminoAcid::Tyrosine)
        );
    }

    #[test]
    fn from_three_letter_rejects_unknown_codes() {
        assert_eq!(AminoAcid::from_three_letter("XXX"), None);
        assert_eq!(AminoAcid::from_three_letter(""), None);
    }

    #[test]
    fn from_one_letter_rejects_unknown_codes() {
        assert_eq!(AminoAcid::from_one_letter('X'), None);
        assert_eq!(AminoAcid::from_one_letter('1'), None);
    }

    #[test]
    fn new_node_has_undefined_weight() {
        let node = ResidueNode::new('A', 229, AminoAcid::Tyrosine, 89.93);
        assert_eq!(node.weight(), None);
    }

    #[test]
    fn set_weight_defines_the_weight() {
        let mut node = ResidueNode::new('A', 1, AminoAcid::Alanine, 75.0);
        node.set_weight(12.5);
        assert_eq!(node.weight(), Some(12.5));
    }
}
