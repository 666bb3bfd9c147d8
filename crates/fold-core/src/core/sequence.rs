use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Sequence is empty after trimming surrounding whitespace")]
    Empty,
    #[error("Invalid residue character '{found}' at position {position}")]
    InvalidResidue { position: usize, found: char },
}

/// A validated amino-acid sequence in single-letter codes.
///
/// Immutable once constructed. Surrounding whitespace is stripped at parse
/// time; case and content are otherwise preserved exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    /// Normalizes and validates a candidate sequence string.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if nothing remains after trimming,
    /// and [`SequenceError::InvalidResidue`] for any non-alphabetic
    /// character. Non-standard residue letters (e.g. `X`) are accepted and
    /// forwarded downstream.
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SequenceError::Empty);
        }
        for (position, found) in trimmed.chars().enumerate() {
            if !found.is_ascii_alphabetic() {
                return Err(SequenceError::InvalidResidue { position, found });
            }
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of residues in the sequence. Never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Sequence::parse(""), Err(SequenceError::Empty));
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        assert_eq!(Sequence::parse("   "), Err(SequenceError::Empty));
        assert_eq!(Sequence::parse("\n\t "), Err(SequenceError::Empty));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let seq = Sequence::parse(" ACDE ").unwrap();
        assert_eq!(seq.as_str(), "ACDE");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn case_is_preserved() {
        let seq = Sequence::parse("acDE").unwrap();
        assert_eq!(seq.as_str(), "acDE");
    }

    #[test]
    fn nonstandard_residue_letters_are_forwarded() {
        assert!(Sequence::parse("ACXZB").is_ok());
    }

    #[test]
    fn non_alphabetic_characters_are_rejected() {
        assert_eq!(
            Sequence::parse("AC DE"),
            Err(SequenceError::InvalidResidue {
                position: 2,
                found: ' '
            })
        );
        assert_eq!(
            Sequence::parse("ACD3"),
            Err(SequenceError::InvalidResidue {
                position: 3,
                found: '3'
            })
        );
    }
}
