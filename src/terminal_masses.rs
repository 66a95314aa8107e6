use std::ops::Deref;

use crate::masses::{ResidueMasses, PLACEHOLDER_RESIDUE_MASS};

/// A mass change at a single position of a peptide.
///
/// `mass` replaces whatever mass the position had, it is not added on top of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Modification {
    /// 0-based residue index, `-1` for the N-terminus, sequence length for the C-terminus
    pub position: isize,
    /// Absolute replacement mass
    pub mass: f64,
}

impl Modification {
    pub fn new(position: isize, mass: f64) -> Self {
        Self { position, mass }
    }

    /// Modification of the N-terminal slot.
    pub fn n_term(mass: f64) -> Self {
        Self::new(-1, mass)
    }

    /// Modification of the C-terminal slot of a sequence with `sequence_len` residues.
    pub fn c_term(sequence_len: usize, mass: f64) -> Self {
        Self::new(sequence_len as isize, mass)
    }
}

/// Per position masses of a peptide, framed by an N-terminal and a C-terminal slot.
///
/// Index 0 is the N-terminus, indices `1..=n` are the residues in order and index
/// `n + 1` is the C-terminus.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalMasses(Vec<f64>);

impl TerminalMasses {
    /// Resolves the masses of a sequence and applies the modifications.
    ///
    /// Modifications are applied in the given order, so if two target the same position the
    /// last one wins. Modifications outside of the array or with a non finite mass are
    /// skipped with a warning.
    ///
    /// # Arguments
    /// * `sequence` - Peptide sequence in single letter amino acid codes.
    /// * `modifications` - Positional replacement masses.
    /// * `residues` - Residue mass table.
    ///
    pub fn resolve<R>(sequence: &str, modifications: &[Modification], residues: &R) -> Self
    where
        R: ResidueMasses + ?Sized,
    {
        let mut masses = Vec::with_capacity(sequence.len() + 2);
        masses.push(0.0);
        for code in sequence.bytes() {
            let mass = residues.residue_mass(code).unwrap_or_else(|| {
                log::warn!(
                    "unknown residue {:?} in {}, using placeholder mass",
                    code as char,
                    sequence
                );
                PLACEHOLDER_RESIDUE_MASS
            });
            masses.push(mass);
        }
        masses.push(0.0);

        for modification in modifications {
            let shifted = modification.position + 1;
            if shifted < 0 || shifted as usize >= masses.len() {
                log::warn!(
                    "modification at position {} out of range for {}, skipping",
                    modification.position,
                    sequence
                );
                continue;
            }
            if !modification.mass.is_finite() {
                log::warn!(
                    "modification at position {} of {} has non finite mass {}, skipping",
                    modification.position,
                    sequence,
                    modification.mass
                );
                continue;
            }
            masses[shifted as usize] = modification.mass;
        }

        Self(masses)
    }

    /// Number of residues, without the terminal slots.
    pub fn sequence_len(&self) -> usize {
        self.0.len().saturating_sub(2)
    }

    pub fn n_term(&self) -> f64 {
        self.0.first().copied().unwrap_or_default()
    }

    pub fn c_term(&self) -> f64 {
        self.0.last().copied().unwrap_or_default()
    }

    /// Residue masses without the terminal slots.
    pub fn residues(&self) -> &[f64] {
        match self.0.len() {
            0 | 1 => &[],
            len => &self.0[1..len - 1],
        }
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for TerminalMasses {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
