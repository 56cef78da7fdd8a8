use super::residue::AminoAcid;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A requested single-residue substitution.
///
/// The textual form follows the stability tool's convention: wild-type
/// one-letter code, chain identifier, 1-based position, variant one-letter
/// code (e.g. `YA229S`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Substitution {
    pub wild_type: AminoAcid,
    pub chain: char,
    pub position: isize,
    pub variant: AminoAcid,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubstitutionParseError {
    #[error("Substitution '{0}' is too short (expected e.g. 'YA229S')")]
    TooShort(String),

    #[error("Invalid wild-type amino-acid code '{0}'")]
    InvalidWildType(char),

    #[error("Invalid chain identifier '{0}'")]
    InvalidChain(char),

    #[error("Invalid substitution position '{0}' (must be a positive integer)")]
    InvalidPosition(String),

    #[error("Invalid variant amino-acid code '{0}'")]
    InvalidVariant(char),
}

impl FromStr for Substitution {
    type Err = SubstitutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 4 {
            return Err(SubstitutionParseError::TooShort(s.to_string()));
        }

        let wild_type = AminoAcid::from_one_letter(chars[0])
            .ok_or(SubstitutionParseError::InvalidWildType(chars[0]))?;
        let chain = chars[1];
        if !chain.is_ascii_alphanumeric() {
            return Err(SubstitutionParseError::InvalidChain(chain));
        }
        let variant_char = chars[chars.len() - 1];
        let variant = AminoAcid::from_one_letter(variant_char)
            .ok_or(SubstitutionParseError::InvalidVariant(variant_char))?;

        let digits: String = chars[2..chars.len() - 1].iter().collect();
        let position = digits
            .parse::<isize>()
            .ok()
            .filter(|&p| p >= 1)
            .ok_or_else(|| SubstitutionParseError::InvalidPosition(digits.clone()))?;

        Ok(Self {
            wild_type,
            chain,
            position,
            variant,
        })
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.wild_type.one_letter(),
            self.chain,
            self.position,
            self.variant.one_letter()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_reference_form() {
        let substitution: Substitution = "YA229S".parse().unwrap();
        assert_eq!(substitution.wild_type, AminoAcid::Tyrosine);
        assert_eq!(substitution.chain, 'A');
        assert_eq!(substitution.position, 229);
        assert_eq!(substitution.variant, AminoAcid::Serine);
    }

    #[test]
    fn display_round_trips_the_textual_form() {
        for text in ["YA229S", "VA194A", "TA188Q", "WB7F"] {
            let substitution: Substitution = text.parse().unwrap();
            assert_eq!(substitution.to_string(), text);
        }
    }

    #[test]
    fn rejects_too_short_input() {
        assert_eq!(
            "YA2".parse::<Substitution>(),
            Err(SubstitutionParseError::TooShort("YA2".to_string()))
        );
        assert!(matches!(
            "".parse::<Substitution>(),
            Err(SubstitutionParseError::TooShort(_))
        ));
    }

    #[test]
    fn rejects_unknown_amino_acid_codes() {
        assert_eq!(
            "XA229S".parse::<Substitution>(),
            Err(SubstitutionParseError::InvalidWildType('X'))
        );
        assert_eq!(
            "YA229X".parse::<Substitution>(),
            Err(SubstitutionParseError::InvalidVariant('X'))
        );
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_positions() {
        assert_eq!(
            "YA0S".parse::<Substitution>(),
            Err(SubstitutionParseError::InvalidPosition("0".to_string()))
        );
        assert_eq!(
            "YAxyS".parse::<Substitution>(),
            Err(SubstitutionParseError::InvalidPosition("xy".to_string()))
        );
    }

    #[test]
    fn rejects_invalid_chain_identifier() {
        assert_eq!(
            "Y*229S".parse::<Substitution>(),
            Err(SubstitutionParseError::InvalidChain('*'))
        );
    }
}
