use ndarray::Array1;

use crate::error::Error;

/// A single peak of an experimental spectrum.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservedPeak {
    pub mz: f64,
    pub intensity: f64,
    /// Label carried over from an earlier annotation, if any
    pub label: Option<String>,
}

impl ObservedPeak {
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self {
            mz,
            intensity,
            label: None,
        }
    }

    /// A peak that was annotated by an earlier matching pass.
    pub fn labeled(mz: f64, intensity: f64, label: impl Into<String>) -> Self {
        Self {
            mz,
            intensity,
            label: Some(label.into()),
        }
    }
}

/// Experimental peaks in a stable order. The order decides which peak wins when more than one
/// falls inside the tolerance of a theoretical peak.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObservedSpectrum {
    peaks: Vec<ObservedPeak>,
}

impl ObservedSpectrum {
    pub fn new(peaks: Vec<ObservedPeak>) -> Self {
        Self { peaks }
    }

    /// Creates a spectrum from m/z and intensity arrays.
    ///
    /// # Arguments
    /// * `mz` - m/z values
    /// * `intensities` - Intensities, same length as `mz`
    ///
    pub fn from_arrays(mz: &Array1<f64>, intensities: &Array1<f64>) -> Result<Self, Error> {
        if mz.len() != intensities.len() {
            return Err(Error::ExperimentalSpectrumShape(
                mz.len(),
                intensities.len(),
            ));
        }

        Ok(Self::from_pairs(
            mz.iter().copied().zip(intensities.iter().copied()),
        ))
    }

    /// Creates a spectrum from `(mz, intensity)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            peaks: pairs
                .into_iter()
                .map(|(mz, intensity)| ObservedPeak::new(mz, intensity))
                .collect(),
        }
    }

    pub fn peaks(&self) -> &[ObservedPeak] {
        &self.peaks
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObservedPeak> {
        self.peaks.iter()
    }

    /// Appends a peak after all existing ones, so it loses first-match ties to them.
    pub fn push(&mut self, peak: ObservedPeak) {
        self.peaks.push(peak);
    }

    /// Peaks carrying a label from an earlier matching pass.
    pub fn labeled_peaks(&self) -> impl Iterator<Item = &ObservedPeak> {
        self.peaks.iter().filter(|peak| peak.label.is_some())
    }
}

impl From<Vec<ObservedPeak>> for ObservedSpectrum {
    fn from(peaks: Vec<ObservedPeak>) -> Self {
        Self::new(peaks)
    }
}

impl<'a> IntoIterator for &'a ObservedSpectrum {
    type Item = &'a ObservedPeak;
    type IntoIter = std::slice::Iter<'a, ObservedPeak>;

    fn into_iter(self) -> Self::IntoIter {
        self.peaks.iter()
    }
}
