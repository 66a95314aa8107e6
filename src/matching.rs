use rustyms::MassMode;

use crate::{
    ion_series::{enumerate_fragments, IonSeriesSpec},
    masses::ResidueMasses,
    matched_peak::MatchedPeak,
    spectrum::ObservedSpectrum,
    terminal_masses::{Modification, TerminalMasses},
    utils::ppm_error,
};

/// Matches one ion series of a peptide against an observed spectrum.
///
/// Every theoretical peak takes the first observed peak, in spectrum order, that lies within
/// `tolerance`. It is not the closest peak. Theoretical peaks without such a peak are left out
/// and the same observed peak may be matched by several theoretical peaks. The result keeps the
/// order of the theoretical peaks.
///
/// # Arguments
/// * `masses` - Resolved terminal masses of the peptide.
/// * `sequence` - The peptide sequence `masses` was resolved from.
/// * `series` - The ion series to match.
/// * `spectrum` - Observed peaks.
/// * `tolerance` - Maximum absolute m/z difference.
/// * `mode` - Mass mode of the atoms added to the fragments.
///
pub fn match_series(
    masses: &TerminalMasses,
    sequence: &str,
    series: &IonSeriesSpec,
    spectrum: &ObservedSpectrum,
    tolerance: f64,
    mode: MassMode,
) -> Vec<MatchedPeak> {
    if masses.sequence_len() != sequence.len() {
        log::warn!(
            "{} resolved to {} residue masses, expected {}",
            sequence,
            masses.sequence_len(),
            sequence.len()
        );
    }

    enumerate_fragments(masses, series, mode)
        .filter_map(|theoretical| {
            spectrum
                .iter()
                .map(|observed| (observed, theoretical.mz - observed.mz))
                .find(|(_, delta_mz)| delta_mz.abs() <= tolerance)
                .map(|(observed, delta_mz)| MatchedPeak {
                    theoretical_mz: theoretical.mz,
                    intensity: observed.intensity,
                    error_ppm: ppm_error(delta_mz, theoretical.mz),
                    label: theoretical.label,
                    delta_mz,
                })
        })
        .collect()
}

/// Matches the ion series named by `token` against an observed spectrum.
///
/// The token is parsed leniently, see [`IonSeriesSpec::parse_permissive`]: anything not
/// starting with `b` is treated as a y series.
///
/// # Arguments
/// * `token` - Series token like `b`, `y` or `b(2+)`.
/// * `sequence` - Peptide sequence.
/// * `spectrum` - Observed peaks.
/// * `tolerance` - Maximum absolute m/z difference.
/// * `modifications` - Positional replacement masses.
/// * `residues` - Residue mass table, its mass mode is used for the added atoms.
///
pub fn match_token<R>(
    token: &str,
    sequence: &str,
    spectrum: &ObservedSpectrum,
    tolerance: f64,
    modifications: &[Modification],
    residues: &R,
) -> Vec<MatchedPeak>
where
    R: ResidueMasses + ?Sized,
{
    let masses = TerminalMasses::resolve(sequence, modifications, residues);
    let series = IonSeriesSpec::parse_permissive(token);
    match_series(
        &masses,
        sequence,
        &series,
        spectrum,
        tolerance,
        residues.mass_mode(),
    )
}
