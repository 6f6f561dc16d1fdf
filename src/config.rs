//! Fixed analysis parameters.
//!
//! The defaults are the values the classifier was tuned with. They are kept in
//! an immutable [ClassifierConfig] handed to the classifier at construction so
//! tests can run the pipeline with other sizes without touching global state.

use crate::error::ConfigError;

/// Samples per analysis frame.
pub const WINDOW_SIZE: usize = 2048;

/// Stride between consecutive frame starts (50% overlap).
pub const HOP_SIZE: usize = WINDOW_SIZE / 2;

/// Highest harmonic folded into the Harmonic Product Spectrum.
pub const HARMONIC_FACTOR: usize = 4;

/// Typical fundamental range of adult male voices.
pub const MALE_BAND: FrequencyBand = FrequencyBand::new(85.0, 180.0);

/// Typical fundamental range of adult female voices. Overlaps [MALE_BAND] in 165-180 Hz.
pub const FEMALE_BAND: FrequencyBand = FrequencyBand::new(165.0, 255.0);

/// A closed frequency interval `[low_hz, high_hz]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    pub low_hz: f64,
    pub high_hz: f64,
}

impl FrequencyBand {
    pub const fn new(low_hz: f64, high_hz: f64) -> Self {
        FrequencyBand { low_hz, high_hz }
    }

    /// Both edges are inclusive.
    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.low_hz && freq <= self.high_hz
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Frame length and FFT size (default: 2048)
    pub window_size: usize,

    /// Frame stride (default: 1024)
    pub hop_size: usize,

    /// Harmonics 2..=harmonic_factor are multiplied into the spectrum (default: 4)
    pub harmonic_factor: usize,

    /// Band whose energy votes for [Label::Male][crate::Label::Male] (default: 85-180 Hz)
    pub male_band: FrequencyBand,

    /// Band whose energy votes for [Label::Female][crate::Label::Female] (default: 165-255 Hz)
    pub female_band: FrequencyBand,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            hop_size: HOP_SIZE,
            harmonic_factor: HARMONIC_FACTOR,
            male_band: MALE_BAND,
            female_band: FEMALE_BAND,
        }
    }
}

impl ClassifierConfig {
    /// Number of bins in the one-sided spectrum of a frame.
    pub fn spectrum_len(&self) -> usize {
        self.window_size / 2 + 1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 || self.window_size % 2 != 0 {
            return Err(ConfigError::InvalidWindowSize(self.window_size));
        }
        if self.hop_size == 0 {
            return Err(ConfigError::ZeroHop);
        }
        if self.harmonic_factor == 0 {
            return Err(ConfigError::ZeroHarmonicFactor);
        }
        for (name, band) in [("male", &self.male_band), ("female", &self.female_band)] {
            if band.low_hz > band.high_hz {
                return Err(ConfigError::InvertedBand {
                    name,
                    low_hz: band.low_hz,
                    high_hz: band.high_hz,
                });
            }
        }
        Ok(())
    }
}
