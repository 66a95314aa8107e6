use std::{fmt, str::FromStr};

use rustyms::{Element, MassMode};

use crate::{
    error::Error, labels::format_label, masses::atom_mass, terminal_masses::TerminalMasses,
    utils::round_mz,
};

/// Which terminus a fragment keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// b-type, anchored at the N-terminus
    NTerminal,
    /// y-type, anchored at the C-terminus
    CTerminal,
}

/// A requested fragment ion series: direction, charge and the atoms added to or
/// removed from every fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IonSeriesSpec {
    pub direction: Direction,
    pub charge: usize,
    pub additions: Vec<Element>,
    pub subtractions: Vec<Element>,
}

impl IonSeriesSpec {
    /// Creates a series with the default atoms of its direction.
    ///
    /// b-ions add nothing, y-ions add `H2O` for the free C-terminus.
    ///
    /// # Arguments
    /// * `direction` - N- or C-terminal anchoring
    /// * `charge` - Fragment charge, at least 1
    ///
    pub fn new(direction: Direction, charge: usize) -> Result<Self, Error> {
        if charge == 0 {
            return Err(Error::InvalidCharge(charge));
        }
        Ok(Self::with_charge(direction, charge))
    }

    pub fn b(charge: usize) -> Result<Self, Error> {
        Self::new(Direction::NTerminal, charge)
    }

    pub fn y(charge: usize) -> Result<Self, Error> {
        Self::new(Direction::CTerminal, charge)
    }

    /// Unchecked constructor, `charge` must not be 0.
    pub(crate) fn with_charge(direction: Direction, charge: usize) -> Self {
        let additions = match direction {
            Direction::NTerminal => Vec::new(),
            Direction::CTerminal => vec![Element::H, Element::H, Element::O],
        };
        Self {
            direction,
            charge,
            additions,
            subtractions: Vec::new(),
        }
    }

    /// Replaces the atoms added to and removed from every fragment.
    pub fn atoms(mut self, additions: Vec<Element>, subtractions: Vec<Element>) -> Self {
        self.additions = additions;
        self.subtractions = subtractions;
        self
    }

    /// Series letter used in labels.
    pub fn letter(&self) -> char {
        match self.direction {
            Direction::NTerminal => 'b',
            Direction::CTerminal => 'y',
        }
    }

    /// Sort key of the annotation order `b(3+), b(2+), b, y, y(2+), y(3+)`: b series by
    /// falling charge, then y series by rising charge.
    pub fn annotation_rank(&self) -> (u8, isize) {
        match self.direction {
            Direction::NTerminal => (0, -(self.charge as isize)),
            Direction::CTerminal => (1, self.charge as isize),
        }
    }

    /// Parses a series token the lenient way: anything not starting with `b` is a y series,
    /// the charge is the number in front of `+` inside the parentheses and defaults to 1.
    /// Tokens that strict parsing would reject are logged.
    ///
    /// # Arguments
    /// * `token` - Series token like `b`, `y` or `y(2+)`
    ///
    pub fn parse_permissive(token: &str) -> Self {
        let direction = if token.starts_with('b') {
            Direction::NTerminal
        } else {
            Direction::CTerminal
        };

        let charge = token
            .split_once('(')
            .map(|(_, rest)| {
                rest.chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect::<String>()
            })
            .and_then(|digits| digits.parse::<usize>().ok())
            .filter(|charge| *charge > 0)
            .unwrap_or(1);

        let series = Self::with_charge(direction, charge);
        if token.parse::<Self>().ok().as_ref() != Some(&series) {
            log::warn!("lenient parse of ion series token {:?} as {}", token, series);
        }
        series
    }
}

impl FromStr for IonSeriesSpec {
    type Err = Error;

    /// Strict parsing, only `b`, `y`, `b(N+)` and `y(N+)` with `N >= 1` are accepted.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSeriesToken(token.to_string());

        let (letter, charge) = match token.split_once('(') {
            Some((letter, rest)) => {
                let digits = rest.strip_suffix("+)").ok_or_else(invalid)?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                (letter, digits.parse::<usize>().map_err(|_| invalid())?)
            }
            None => (token, 1),
        };

        let direction = match letter {
            "b" => Direction::NTerminal,
            "y" => Direction::CTerminal,
            _ => return Err(invalid()),
        };
        if charge == 0 {
            return Err(invalid());
        }
        Ok(Self::with_charge(direction, charge))
    }
}

impl fmt::Display for IonSeriesSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.charge == 1 {
            write!(f, "{}", self.letter())
        } else {
            write!(f, "{}({}+)", self.letter(), self.charge)
        }
    }
}

/// Theoretical fragment ion.
#[derive(Clone, Debug, PartialEq)]
pub struct TheoreticalPeak {
    /// m/z rounded to three decimals
    pub mz: f64,
    pub label: String,
}

/// Calculates the m/z of a fragment.
///
/// Sums the fragment masses, adds and subtracts the given atoms and adds one hydrogen per
/// charge. For charges above 1 the total is divided by the charge.
///
/// # Arguments
/// * `masses` - Masses of the fragment, including its terminal slot.
/// * `charge` - Fragment charge.
/// * `additions` - Atoms added once per fragment.
/// * `subtractions` - Atoms removed once per fragment.
/// * `mode` - Mass mode of the atoms.
///
pub fn compute_fragment_mz(
    masses: &[f64],
    charge: usize,
    additions: &[Element],
    subtractions: &[Element],
    mode: MassMode,
) -> f64 {
    let mut mass: f64 = masses.iter().sum();
    for element in additions {
        mass += atom_mass(*element, mode);
    }
    for element in subtractions {
        mass -= atom_mass(*element, mode);
    }
    mass += atom_mass(Element::H, mode) * charge as f64;
    if charge == 1 {
        return mass;
    }
    mass / charge as f64
}

/// Lazily generates the theoretical peaks of an ion series, one per cleavage site, in
/// increasing cleavage index.
///
/// For b-ions the fragments grow from the N-terminus (b1, b2, ...), for y-ions the first
/// fragment is the longest one (yn, ..., y1).
#[derive(Clone, Debug)]
pub struct Fragments<'a> {
    masses: &'a TerminalMasses,
    series: &'a IonSeriesSpec,
    mode: MassMode,
    cleavage: usize,
}

/// Enumerates the theoretical fragments of a peptide for one ion series.
///
/// # Arguments
/// * `masses` - Resolved terminal masses of the peptide.
/// * `series` - The ion series.
/// * `mode` - Mass mode of the added atoms.
///
pub fn enumerate_fragments<'a>(
    masses: &'a TerminalMasses,
    series: &'a IonSeriesSpec,
    mode: MassMode,
) -> Fragments<'a> {
    Fragments {
        masses,
        series,
        mode,
        cleavage: 0,
    }
}

impl Iterator for Fragments<'_> {
    type Item = TheoreticalPeak;

    fn next(&mut self) -> Option<Self::Item> {
        let n_all = self.masses.len();
        let n_seq = self.masses.sequence_len();

        while self.cleavage < n_seq {
            let cleavage = self.cleavage;
            self.cleavage += 1;

            let fragment = match self.series.direction {
                Direction::NTerminal => &self.masses[0..cleavage + 2],
                Direction::CTerminal => &self.masses[cleavage + 1..n_all],
            };
            let fragment_length = fragment.len().saturating_sub(1);
            if fragment_length == 0 {
                continue;
            }

            let mz = compute_fragment_mz(
                fragment,
                self.series.charge,
                &self.series.additions,
                &self.series.subtractions,
                self.mode,
            );
            return Some(TheoreticalPeak {
                mz: round_mz(mz),
                label: format_label(fragment_length, self.series.charge, self.series.letter()),
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.masses.sequence_len().saturating_sub(self.cleavage);
        (0, Some(remaining))
    }
}
