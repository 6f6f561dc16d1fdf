//! Voice gender classification from the Harmonic Product Spectrum (HPS).
//!
//! The recording is cut into overlapping frames of `window_size` samples. Each frame is
//! tapered with a periodic Hamming window and transformed to a one-sided power spectrum
//! $P$. The spectrum is then compressed harmonically,
//! $$ \mathrm{hps}(k) = \prod_{h=1}^{F} P(hk), $$
//! which reinforces the bin of the fundamental frequency, since the harmonics of a voiced
//! sound line up under decimation while noise does not.
//!
//! HPS energy is summed over two bands, one typical of male fundamentals and one of female
//! fundamentals, and accumulated over every frame. The label goes to the band holding
//! strictly more energy, with ties going to [Label::Female].
//!
//! The bands overlap, so energy in the shared range counts for both sides and only the
//! energy outside the overlap decides the result.

use log::{debug, trace};

use crate::classifier::internals::{
    fill_frame, frame_count, harmonic_product_spectrum, BandEnergy, BandMasks,
    ClassifierInternals,
};
use crate::classifier::{GenderClassifier, Label};
use crate::config::ClassifierConfig;
use crate::error::ConfigError;
use crate::float::Float;
use crate::utils::window::apply_window;

pub struct HpsClassifier<T>
where
    T: Float,
{
    internals: ClassifierInternals<T>,
}

impl<T> HpsClassifier<T>
where
    T: Float,
{
    /// Classifier with the default 2048-sample window, 1024-sample hop, four harmonics
    /// and 85-180 Hz / 165-255 Hz bands.
    pub fn new() -> Self {
        HpsClassifier {
            internals: ClassifierInternals::new(ClassifierConfig::default()),
        }
    }

    pub fn with_config(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(HpsClassifier {
            internals: ClassifierInternals::new(config),
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.internals.config
    }

    /// Run the whole pipeline and return the accumulated band totals rather than the label.
    pub fn band_energy(&mut self, signal: &[T], sample_rate: usize) -> BandEnergy<T> {
        let internals = &mut self.internals;
        let window_size = internals.config.window_size;
        let hop_size = internals.config.hop_size;
        let harmonic_factor = internals.config.harmonic_factor;

        let masks = BandMasks::new(&internals.config, sample_rate);
        let frames = frame_count(signal.len(), window_size, hop_size);
        let mut energy = BandEnergy::default();

        for index in 0..frames {
            fill_frame(signal, index, hop_size, &mut internals.frame);
            apply_window(&mut internals.frame, &internals.window);
            internals.power_spectrum();
            harmonic_product_spectrum(&internals.spectrum, harmonic_factor, &mut internals.hps);

            let (male, female) = energy.accumulate(&internals.hps, &masks);
            trace!("frame {}: male {} female {}", index, male, female);
        }

        debug!(
            "{} samples at {} Hz in {} frames: male {} female {}",
            signal.len(),
            sample_rate,
            frames,
            energy.male,
            energy.female
        );
        energy
    }
}

impl<T> Default for HpsClassifier<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GenderClassifier<T> for HpsClassifier<T>
where
    T: Float,
{
    fn classify(&mut self, signal: &[T], sample_rate: usize) -> Label {
        self.band_energy(signal, sample_rate).decide()
    }
}
