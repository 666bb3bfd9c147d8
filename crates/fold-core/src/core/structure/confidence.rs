use super::Structure;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfidenceError {
    #[error("Structure contains no residues; mean confidence is undefined")]
    EmptyStructure,
}

/// Arithmetic mean of the per-residue pLDDT confidence values, rounded to
/// 4 decimal places. Values live on the 0-100 scale.
///
/// # Errors
///
/// Returns [`ConfidenceError::EmptyStructure`] if the structure holds no
/// residues.
pub fn mean_plddt(structure: &Structure) -> Result<f64, ConfidenceError> {
    if structure.residues.is_empty() {
        return Err(ConfidenceError::EmptyStructure);
    }
    let sum: f64 = structure.residues.iter().map(|r| r.confidence()).sum();
    Ok(round4(sum / structure.residues.len() as f64))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Interpretation bands for a mean pLDDT score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceBand {
    /// 90-100
    VeryHigh,
    /// 70-90
    Good,
    /// 50-70
    Low,
    /// 0-50
    VeryUncertain,
}

impl ConfidenceBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ConfidenceBand::VeryHigh
        } else if score >= 70.0 {
            ConfidenceBand::Good
        } else if score >= 50.0 {
            ConfidenceBand::Low
        } else {
            ConfidenceBand::VeryUncertain
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBand::VeryHigh => "Very high confidence",
            ConfidenceBand::Good => "Good reliability",
            ConfidenceBand::Low => "Low confidence, flexible regions",
            ConfidenceBand::VeryUncertain => "Very uncertain, unstructured",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::structure::{Atom, Residue};
    use nalgebra::Point3;

    fn residue(seq_number: isize, b_factors: &[f64]) -> Residue {
        Residue {
            name: "GLY".to_string(),
            chain_id: 'A',
            seq_number,
            atoms: b_factors
                .iter()
                .enumerate()
                .map(|(i, &b)| Atom {
                    serial: i + 1,
                    name: "CA".to_string(),
                    position: Point3::origin(),
                    occupancy: 1.0,
                    b_factor: b,
                })
                .collect(),
        }
    }

    fn structure(residues: Vec<Residue>) -> Structure {
        Structure { residues }
    }

    #[test]
    fn single_residue_mean_is_its_confidence() {
        let s = structure(vec![residue(1, &[72.5])]);
        assert_eq!(mean_plddt(&s), Ok(72.5));
    }

    #[test]
    fn mean_over_four_residues() {
        let s = structure(vec![
            residue(1, &[90.0]),
            residue(2, &[80.0]),
            residue(3, &[70.0]),
            residue(4, &[60.0]),
        ]);
        assert_eq!(mean_plddt(&s), Ok(75.0));
    }

    #[test]
    fn residue_confidence_averages_its_atoms() {
        let s = structure(vec![residue(1, &[80.0, 90.0]), residue(2, &[50.0])]);
        // (85 + 50) / 2
        assert_eq!(mean_plddt(&s), Ok(67.5));
    }

    #[test]
    fn mean_is_rounded_to_four_decimals() {
        let s = structure(vec![
            residue(1, &[50.0]),
            residue(2, &[50.0]),
            residue(3, &[50.0001]),
        ]);
        assert_eq!(mean_plddt(&s), Ok(50.0));
    }

    #[test]
    fn empty_structure_is_an_error() {
        let s = Structure::default();
        assert_eq!(mean_plddt(&s), Err(ConfidenceError::EmptyStructure));
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(ConfidenceBand::from_score(100.0), ConfidenceBand::VeryHigh);
        assert_eq!(ConfidenceBand::from_score(90.0), ConfidenceBand::VeryHigh);
        assert_eq!(ConfidenceBand::from_score(89.9999), ConfidenceBand::Good);
        assert_eq!(ConfidenceBand::from_score(70.0), ConfidenceBand::Good);
        assert_eq!(ConfidenceBand::from_score(50.0), ConfidenceBand::Low);
        assert_eq!(
            ConfidenceBand::from_score(49.9999),
            ConfidenceBand::VeryUncertain
        );
        assert_eq!(ConfidenceBand::from_score(0.0), ConfidenceBand::VeryUncertain);
    }
}
