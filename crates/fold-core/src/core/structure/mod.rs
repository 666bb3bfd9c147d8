pub mod confidence;
pub mod pdb;

use nalgebra::Point3;

/// A single atom record from a structure payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub serial: usize,
    pub name: String,
    pub position: Point3<f64>,
    pub occupancy: f64,
    /// The B-factor column. Predicted models store the per-residue pLDDT
    /// confidence here.
    pub b_factor: f64,
}

/// One residue with its atoms, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub name: String,
    pub chain_id: char,
    pub seq_number: isize,
    pub atoms: Vec<Atom>,
}

impl Residue {
    /// Mean B-factor over the residue's atoms. For predicted models every
    /// atom of a residue carries the same pLDDT, so this is the residue's
    /// confidence value.
    pub fn confidence(&self) -> f64 {
        if self.atoms.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.atoms.iter().map(|a| a.b_factor).sum();
        sum / self.atoms.len() as f64
    }
}

/// A parsed structure payload: residues in file order across all chains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub residues: Vec<Residue>,
}

impl Structure {
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn atom_count(&self) -> usize {
        self.residues.iter().map(|r| r.atoms.len()).sum()
    }
}
