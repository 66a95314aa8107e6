use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid ion series token: {0:?}")]
    InvalidSeriesToken(String),
    #[error("Invalid charge state: {0}")]
    InvalidCharge(usize),
    #[error("Invalid m/z tolerance: {0}")]
    InvalidTolerance(f64),
    #[error("m/z ({0}) and intensities ({1}) arrays must have the same length")]
    ExperimentalSpectrumShape(usize, usize),
}
