use crate::core::sequence::Sequence;
use phf::{Map, Set, phf_map, phf_set};
use serde::Serialize;

/// Average mass of one water molecule in Daltons, added once per chain for
/// the terminal H and OH.
const WATER_MASS: f64 = 18.0153;

/// Average residue masses (amino acid minus water) in Daltons, keyed by the
/// uppercase single-letter code. Unknown letters contribute zero mass.
static RESIDUE_MASSES: Map<char, f64> = phf_map! {
    'A' => 71.0788,
    'R' => 156.1875,
    'N' => 114.1038,
    'D' => 115.0886,
    'C' => 103.1388,
    'E' => 129.1155,
    'Q' => 128.1307,
    'G' => 57.0519,
    'H' => 137.1411,
    'I' => 113.1594,
    'L' => 113.1594,
    'K' => 128.1741,
    'M' => 131.1926,
    'F' => 147.1766,
    'P' => 97.1167,
    'S' => 87.0782,
    'T' => 101.1051,
    'W' => 186.2132,
    'Y' => 163.1760,
    'V' => 99.1326,
};

static HYDROPHOBIC: Set<char> = phf_set! {'A', 'I', 'L', 'M', 'F', 'W', 'Y', 'V'};
static BASIC: Set<char> = phf_set! {'K', 'R', 'H'};
static ACIDIC: Set<char> = phf_set! {'D', 'E'};

/// Summary metrics derived purely from the amino-acid sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionMetrics {
    /// Number of residues.
    pub length: usize,
    /// Additive molecular weight in Daltons, rounded to 2 decimals.
    pub molecular_weight: f64,
    /// Residues in the hydrophobic set {A,I,L,M,F,W,Y,V}.
    pub hydrophobic_residues: usize,
    /// Basic {K,R,H} minus acidic {D,E} residue counts. A coarse pH-7
    /// approximation, not a pKa-based titration model.
    pub net_charge: i64,
}

/// Computes composition metrics for a sequence, case-insensitively.
///
/// Pure function: no hidden state, identical output for identical input.
pub fn analyze(sequence: &Sequence) -> CompositionMetrics {
    let mut mass = 0.0;
    let mut hydrophobic = 0usize;
    let mut basic = 0i64;
    let mut acidic = 0i64;
    let mut length = 0usize;

    for residue in sequence.as_str().chars() {
        let residue = residue.to_ascii_uppercase();
        length += 1;
        mass += RESIDUE_MASSES.get(&residue).copied().unwrap_or(0.0);
        if HYDROPHOBIC.contains(&residue) {
            hydrophobic += 1;
        }
        if BASIC.contains(&residue) {
            basic += 1;
        } else if ACIDIC.contains(&residue) {
            acidic += 1;
        }
    }

    CompositionMetrics {
        length,
        molecular_weight: round2(mass + WATER_MASS),
        hydrophobic_residues: hydrophobic,
        net_charge: basic - acidic,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        Sequence::parse(s).unwrap()
    }

    #[test]
    fn length_matches_residue_count() {
        for s in ["G", "ACDE", "MGSSHHHHHH"] {
            assert_eq!(analyze(&seq(s)).length, s.len());
        }
    }

    #[test]
    fn hydrophobic_count_never_exceeds_length() {
        let metrics = analyze(&seq("AILMFWYVGGSS"));
        assert_eq!(metrics.hydrophobic_residues, 8);
        assert!(metrics.hydrophobic_residues <= metrics.length);
    }

    #[test]
    fn metrics_are_case_insensitive() {
        let upper = analyze(&seq("ACDEFGHIK"));
        let lower = analyze(&seq("acdefghik"));
        assert_eq!(upper, lower);
    }

    #[test]
    fn analyze_is_idempotent() {
        let sequence = seq("MKTAYIAKQR");
        assert_eq!(analyze(&sequence), analyze(&sequence));
    }

    #[test]
    fn single_glycine_weight_is_residue_plus_water() {
        // 57.0519 + 18.0153 = 75.0672
        let metrics = analyze(&seq("G"));
        assert_eq!(metrics.molecular_weight, 75.07);
    }

    #[test]
    fn reference_peptide_metrics() {
        // ACDEFGHIK: hydrophobic A, F, I; basic H, K; acidic D, E.
        let metrics = analyze(&seq("ACDEFGHIK"));
        assert_eq!(metrics.length, 9);
        assert_eq!(metrics.hydrophobic_residues, 3);
        assert_eq!(metrics.net_charge, 0);
        assert_eq!(metrics.molecular_weight, 1019.14);
    }

    #[test]
    fn unknown_letters_contribute_no_mass() {
        let with_x = analyze(&seq("GX"));
        let without = analyze(&seq("G"));
        assert_eq!(with_x.molecular_weight, without.molecular_weight);
        assert_eq!(with_x.length, 2);
    }

    #[test]
    fn charged_peptides() {
        assert_eq!(analyze(&seq("KRH")).net_charge, 3);
        assert_eq!(analyze(&seq("DDEE")).net_charge, -4);
        assert_eq!(analyze(&seq("KDRE")).net_charge, 0);
    }
}
