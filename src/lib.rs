pub mod annotation;
pub mod configuration;
pub mod error;
/// Fragment ion series and their theoretical m/z
pub mod ion_series;
pub mod labels;
/// Atomic and residue mass tables
pub mod masses;
pub mod matched_peak;
/// First-match peak matching
pub mod matching;
pub mod spectrum;
pub mod terminal_masses;
// Various utilities
pub mod utils;
