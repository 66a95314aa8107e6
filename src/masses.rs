use std::collections::HashMap;

use rustyms::{Element, MassMode};

/// Mass used for ambiguous or unknown residue codes (B, J, O, U, X, Z and anything
/// not found in a residue table). This is an approximation, not a real residue mass.
pub const PLACEHOLDER_RESIDUE_MASS: f64 = 110.0;

/// Monoisotopic atomic masses used for the fixed ion series additions and the proton.
const MONOISOTOPIC_H: f64 = 1.007825032;
const MONOISOTOPIC_O: f64 = 15.994914622;

/// Average atomic masses.
const AVERAGE_H: f64 = 1.00794;
const AVERAGE_O: f64 = 15.9994;

/// Returns the mass of an element under the given mass mode.
///
/// Hydrogen and oxygen use fixed reference values; any other element is looked up in
/// the elemental data of `rustyms`. `MassMode::MostAbundant` is treated as monoisotopic.
///
/// # Arguments
/// * `element` - The element to look up.
/// * `mode` - Monoisotopic or average masses.
///
pub fn atom_mass(element: Element, mode: MassMode) -> f64 {
    let average = matches!(mode, MassMode::Average);
    match (element, average) {
        (Element::H, false) => MONOISOTOPIC_H,
        (Element::O, false) => MONOISOTOPIC_O,
        (Element::H, true) => AVERAGE_H,
        (Element::O, true) => AVERAGE_O,
        (other, average) => {
            let mass = if average {
                other.average_weight(None)
            } else {
                other.mass(None)
            };
            match mass {
                Some(mass) => mass.value,
                None => {
                    log::warn!("no mass known for element {:?}, using 0.0", other);
                    0.0
                }
            }
        }
    }
}

/// Monoisotopic residue masses by single letter amino acid code.
pub fn monoisotopic_residue_mass(code: u8) -> Option<f64> {
    Some(match code {
        b'A' => 71.037114,
        b'C' => 103.009184,
        b'D' => 115.026943,
        b'E' => 129.042593,
        b'F' => 147.068414,
        b'G' => 57.021464,
        b'H' => 137.058912,
        b'I' => 113.084064,
        b'K' => 128.094963,
        b'L' => 113.084064,
        b'M' => 131.040485,
        b'N' => 114.042927,
        b'P' => 97.052764,
        b'Q' => 128.058578,
        b'R' => 156.101111,
        b'S' => 87.032028,
        b'T' => 101.047678,
        b'V' => 99.068414,
        b'W' => 186.079313,
        b'Y' => 163.063329,
        b'B' | b'J' | b'O' | b'U' | b'X' | b'Z' => PLACEHOLDER_RESIDUE_MASS,
        _ => return None,
    })
}

/// Average residue masses by single letter amino acid code.
pub fn average_residue_mass(code: u8) -> Option<f64> {
    Some(match code {
        b'A' => 71.0788,
        b'C' => 103.1388,
        b'D' => 115.0886,
        b'E' => 129.1155,
        b'F' => 147.1766,
        b'G' => 57.0519,
        b'H' => 137.1411,
        b'I' => 113.1594,
        b'K' => 128.1741,
        b'L' => 113.1594,
        b'M' => 131.1926,
        b'N' => 114.1038,
        b'P' => 97.1167,
        b'Q' => 128.1307,
        b'R' => 156.1875,
        b'S' => 87.0782,
        b'T' => 101.1051,
        b'V' => 99.1326,
        b'W' => 186.2132,
        b'Y' => 163.1760,
        b'B' | b'J' | b'O' | b'U' | b'X' | b'Z' => PLACEHOLDER_RESIDUE_MASS,
        _ => return None,
    })
}

/// A lookup from residue code to residue mass.
///
/// The built-in tables are selected through [`MassMode`]; callers with their own
/// residue masses can pass a `HashMap<char, f64>`.
pub trait ResidueMasses {
    /// Mass of the residue, `None` if the code is not part of the table.
    fn residue_mass(&self, code: u8) -> Option<f64>;

    /// Mass mode used for the atoms added on top of the residues.
    fn mass_mode(&self) -> MassMode {
        MassMode::Monoisotopic
    }
}

impl ResidueMasses for MassMode {
    fn residue_mass(&self, code: u8) -> Option<f64> {
        match self {
            MassMode::Average => average_residue_mass(code),
            _ => monoisotopic_residue_mass(code),
        }
    }

    fn mass_mode(&self) -> MassMode {
        *self
    }
}

impl ResidueMasses for HashMap<char, f64> {
    fn residue_mass(&self, code: u8) -> Option<f64> {
        self.get(&(code as char)).copied()
    }
}
