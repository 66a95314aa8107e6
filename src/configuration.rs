use rustyms::MassMode;

use crate::{
    error::Error,
    ion_series::{Direction, IonSeriesSpec},
};

/// Default m/z tolerance in Thompson.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub tolerance: f64,
    pub mass_mode: MassMode,
    /// Ion series to annotate, kept in [`IonSeriesSpec::annotation_rank`] order since matches
    /// of earlier series are offered as peaks to later ones
    pub ion_series: Vec<IonSeriesSpec>,
}

impl Configuration {
    pub fn new(
        tolerance: f64,
        mass_mode: MassMode,
        mut ion_series: Vec<IonSeriesSpec>,
    ) -> Result<Self, Error> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::InvalidTolerance(tolerance));
        }
        ion_series.sort_by_key(IonSeriesSpec::annotation_rank);

        Ok(Self {
            tolerance,
            mass_mode,
            ion_series,
        })
    }

    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, Error> {
        Self::new(tolerance, self.mass_mode, self.ion_series)
    }

    pub fn with_mass_mode(mut self, mass_mode: MassMode) -> Self {
        self.mass_mode = mass_mode;
        self
    }

    /// Adds a series unless an identical one is already requested. The series is placed by
    /// its annotation rank, after any series of equal rank.
    pub fn with_series(mut self, series: IonSeriesSpec) -> Self {
        if !self.ion_series.contains(&series) {
            let rank = series.annotation_rank();
            let index = self
                .ion_series
                .partition_point(|existing| existing.annotation_rank() <= rank);
            self.ion_series.insert(index, series);
        }
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            mass_mode: MassMode::Monoisotopic,
            ion_series: vec![
                IonSeriesSpec::with_charge(Direction::NTerminal, 1),
                IonSeriesSpec::with_charge(Direction::CTerminal, 1),
            ],
        }
    }
}
