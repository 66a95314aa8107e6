/// A theoretical fragment ion matched to an observed peak.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedPeak {
    pub theoretical_mz: f64,
    /// Intensity of the observed peak
    pub intensity: f64,
    pub label: String,
    /// Theoretical minus observed m/z
    pub delta_mz: f64,
    pub error_ppm: i64,
}
