/// Rounds an m/z value to three decimal places (half away from zero).
///
/// # Arguments
/// * `mz` - Mass to charge ratio (Thompson)
///
pub fn round_mz(mz: f64) -> f64 {
    (mz * 1000.0).round() / 1000.0
}

/// Parts-per-million error of a mass difference, rounded half away from zero.
///
/// The error is undefined for a theoretical m/z of 0.0, in that case 0 is returned and a
/// warning is logged.
///
/// # Arguments
/// * `delta_mz` - Theoretical minus observed m/z
/// * `theoretical_mz` - Theoretical m/z the error is relative to
///
pub fn ppm_error(delta_mz: f64, theoretical_mz: f64) -> i64 {
    if theoretical_mz == 0.0 {
        log::warn!("ppm error relative to m/z 0.0 is undefined, using 0");
        return 0;
    }
    (1_000_000.0 * delta_mz / theoretical_mz).round() as i64
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::spectrum::ObservedSpectrum;

    pub const SAMPLE_SEQUENCE: &str = "MSAFLLTKR";

    /// Observed peaks of a `MSAFLLTKR` spectrum, in descending intensity order.
    pub const SAMPLE_PEAKS: [(f64, f64); 50] = [
        (622.494, 2192.0),
        (615.666, 1811.0),
        (619.456, 1810.0),
        (628.245, 1772.0),
        (616.511, 1016.0),
        (614.583, 780.0),
        (629.003, 673.0),
        (490.215, 563.0),
        (606.378, 533.0),
        (563.797, 430.0),
        (610.871, 421.0),
        (472.861, 376.0),
        (607.103, 346.0),
        (584.56, 341.0),
        (605.67, 334.0),
        (620.333, 310.0),
        (375.222, 299.0),
        (625.311, 263.0),
        (488.298, 254.0),
        (786.349, 223.0),
        (899.377, 221.0),
        (506.51, 215.0),
        (881.571, 215.0),
        (601.8, 207.0),
        (514.999, 202.0),
        (598.419, 201.0),
        (608.138, 199.0),
        (593.698, 196.0),
        (759.359, 196.0),
        (530.555, 186.0),
        (623.222, 186.0),
        (602.825, 184.0),
        (542.091, 180.0),
        (261.063, 169.0),
        (627.002, 160.0),
        (913.689, 160.0),
        (592.707, 157.0),
        (825.581, 157.0),
        (471.826, 156.0),
        (505.835, 155.0),
        (609.168, 154.0),
        (768.284, 151.0),
        (563.027, 146.0),
        (570.712, 146.0),
        (580.803, 145.0),
        (979.473, 137.0),
        (596.779, 130.0),
        (541.113, 129.0),
        (777.839, 186.0),
        (550.083, 159.0),
    ];

    pub fn sample_spectrum() -> ObservedSpectrum {
        ObservedSpectrum::from_pairs(SAMPLE_PEAKS.iter().copied())
    }

    pub fn assert_close(actual: f64, expected: f64, epsilon: f64) {
        assert!(
            (actual - expected).abs() <= epsilon,
            "{actual} != {expected} (epsilon {epsilon})"
        );
    }

    #[test]
    fn test_round_mz() {
        assert_eq!(round_mz(175.119500718), 175.12);
        assert_eq!(round_mz(98.0604), 98.06);
        assert_eq!(round_mz(1066.6077), 1066.608);
    }

    #[test]
    fn test_ppm_error() {
        assert_eq!(ppm_error(0.187, 550.27), 340);
        assert_eq!(ppm_error(-0.34, 777.499), -437);
        assert_eq!(ppm_error(0.0, 100.0), 0);
        // half away from zero
        assert_eq!(ppm_error(0.5, 1_000_000.0), 1);
        assert_eq!(ppm_error(-0.5, 1_000_000.0), -1);
    }

    #[test]
    fn test_ppm_error_of_zero_mz() {
        assert_eq!(ppm_error(0.0, 0.0), 0);
        assert_eq!(ppm_error(-1.5, 0.0), 0);
        assert_eq!(ppm_error(1.5, -0.0), 0);
    }
}
