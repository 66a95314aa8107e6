use crate::{
    configuration::Configuration,
    matched_peak::MatchedPeak,
    matching::match_series,
    spectrum::{ObservedPeak, ObservedSpectrum},
    terminal_masses::{Modification, TerminalMasses},
};

/// An observed spectrum together with the fragment ions matched against it.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledSpectrum {
    /// Input peaks in their original order, followed by one labeled peak per match
    pub spectrum: ObservedSpectrum,
    /// Matches of all requested series, grouped by series in configuration order
    pub matches: Vec<MatchedPeak>,
}

impl LabeledSpectrum {
    /// First match carrying `label`, e.g. `y4(2+)`.
    pub fn find_label(&self, label: &str) -> Option<&MatchedPeak> {
        self.matches.iter().find(|matched| matched.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchedPeak> {
        self.matches.iter()
    }
}

/// Annotates a spectrum with every ion series of the configuration.
///
/// The masses of the peptide are resolved once. Every match is appended to the working
/// spectrum as a labeled peak at its theoretical m/z, so later series are matched against the
/// input peaks and the matches of all earlier series.
///
/// # Arguments
/// * `sequence` - Peptide sequence.
/// * `modifications` - Positional replacement masses.
/// * `spectrum` - Observed peaks.
/// * `config` - Tolerance, mass mode and the requested series.
///
pub fn annotate(
    sequence: &str,
    modifications: &[Modification],
    spectrum: &ObservedSpectrum,
    config: &Configuration,
) -> LabeledSpectrum {
    let masses = TerminalMasses::resolve(sequence, modifications, &config.mass_mode);

    let mut working = spectrum.clone();
    let mut matches = Vec::new();
    for series in &config.ion_series {
        let matched = match_series(
            &masses,
            sequence,
            series,
            &working,
            config.tolerance,
            config.mass_mode,
        );
        log::trace!("{}: {} {} ions matched", sequence, matched.len(), series);
        for peak in &matched {
            working.push(ObservedPeak::labeled(
                peak.theoretical_mz,
                peak.intensity,
                peak.label.clone(),
            ));
        }
        matches.extend(matched);
    }

    LabeledSpectrum {
        spectrum: working,
        matches,
    }
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;
    use rustyms::MassMode;

    use super::*;
    use crate::{
        ion_series::IonSeriesSpec,
        utils::tests::{assert_close, sample_spectrum, SAMPLE_SEQUENCE},
    };

    #[test]
    fn test_default_series() {
        let labeled = annotate(
            SAMPLE_SEQUENCE,
            &[],
            &sample_spectrum(),
            &Configuration::default(),
        );
        let labels = labeled.iter().map(|m| m.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["b5", "y6"]);
        assert_eq!(labeled.find_label("y6").unwrap().theoretical_mz, 777.499);
        assert!(labeled.find_label("y1").is_none());

        let input = sample_spectrum();
        assert_eq!(labeled.spectrum.len(), input.len() + 2);
        assert_eq!(&labeled.spectrum.peaks()[..input.len()], input.peaks());
        let appended = labeled.spectrum.labeled_peaks().cloned().collect::<Vec<_>>();
        assert_eq!(
            appended,
            vec![
                ObservedPeak::labeled(550.27, 159.0, "b5"),
                ObservedPeak::labeled(777.499, 186.0, "y6"),
            ]
        );
    }

    #[test]
    fn test_matches_are_offered_to_later_series() {
        // b1 of G at 58.029 is matched to the peak at 40.0, y1 at 76.04 is only within
        // tolerance of the labeled b1 peak
        let spectrum = ObservedSpectrum::from_pairs([(40.0, 5.0)]);
        let config = Configuration::default().with_tolerance(20.0).unwrap();
        let labeled = annotate("G", &[], &spectrum, &config);

        let labels = labeled.iter().map(|m| m.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["b1", "y1"]);
        let y1 = labeled.find_label("y1").unwrap();
        assert_eq!(y1.intensity, 5.0);
        assert_close(y1.delta_mz, 76.04 - 58.029, 1e-9);

        let mz = labeled.spectrum.iter().map(|peak| peak.mz).collect::<Vec<_>>();
        assert_eq!(mz, vec![40.0, 58.029, 76.04]);
    }

    #[test]
    fn test_series_are_chained_in_annotation_order() {
        let config = Configuration::default()
            .with_series(IonSeriesSpec::y(2).unwrap())
            .with_series(IonSeriesSpec::b(2).unwrap())
            .with_tolerance(2.0)
            .unwrap();
        let labeled = annotate(SAMPLE_SEQUENCE, &[], &sample_spectrum(), &config);

        let masses = TerminalMasses::resolve(SAMPLE_SEQUENCE, &[], &MassMode::Monoisotopic);
        let mut working = sample_spectrum();
        let mut expected = Vec::new();
        for token in ["b(2+)", "b", "y", "y(2+)"] {
            let matched = match_series(
                &masses,
                SAMPLE_SEQUENCE,
                &token.parse().unwrap(),
                &working,
                2.0,
                MassMode::Monoisotopic,
            );
            for peak in &matched {
                working.push(ObservedPeak::labeled(
                    peak.theoretical_mz,
                    peak.intensity,
                    peak.label.clone(),
                ));
            }
            expected.extend(matched);
        }
        assert_eq!(labeled.matches, expected);
        assert_eq!(labeled.spectrum, working);
    }

    #[test]
    fn test_empty_spectrum() {
        let labeled = annotate(
            SAMPLE_SEQUENCE,
            &[],
            &ObservedSpectrum::default(),
            &Configuration::default(),
        );
        assert!(labeled.matches.is_empty());
        assert!(labeled.spectrum.is_empty());
    }

    #[test]
    fn test_parallel_annotation_is_deterministic() {
        let spectrum = sample_spectrum();
        let config = Configuration::default()
            .with_series(IonSeriesSpec::b(2).unwrap())
            .with_series(IonSeriesSpec::y(3).unwrap())
            .with_tolerance(1.0)
            .unwrap();
        let reference = annotate(SAMPLE_SEQUENCE, &[], &spectrum, &config);

        let results = (0..64)
            .into_par_iter()
            .map(|_| annotate(SAMPLE_SEQUENCE, &[], &spectrum, &config))
            .collect::<Vec<_>>();

        for result in results {
            assert_eq!(result.matches.len(), reference.matches.len());
            for (a, b) in result.matches.iter().zip(reference.matches.iter()) {
                assert_eq!(a.label, b.label);
                assert_eq!(a.theoretical_mz.to_bits(), b.theoretical_mz.to_bits());
                assert_eq!(a.delta_mz.to_bits(), b.delta_mz.to_bits());
                assert_eq!(a.error_ppm, b.error_ppm);
            }
        }
    }
}
