use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::config::{ClassifierConfig, FrequencyBand};
use crate::float::Float;
use crate::utils::buffer::{
    copy_real_to_complex, copy_zero_padded, modulus_squared, new_complex_buffer, new_real_buffer,
};
use crate::utils::window::periodic_hamming;
use crate::Label;

/// Everything a classifier needs to process one frame: the FFT plan, the analysis
/// window and scratch buffers. Buffers are sized once from the window size and reused
/// for every frame and every call.
pub struct ClassifierInternals<T>
where
    T: Float,
{
    pub config: ClassifierConfig,
    pub window: Vec<T>,
    pub frame: Vec<T>,
    pub spectrum: Vec<T>,
    pub hps: Vec<T>,
    fft: Arc<dyn Fft<T>>,
    fft_buffer: Vec<Complex<T>>,
    fft_scratch: Vec<Complex<T>>,
}

impl<T> ClassifierInternals<T>
where
    T: Float,
{
    /// `config` must already have passed [ClassifierConfig::validate].
    pub fn new(config: ClassifierConfig) -> Self {
        let size = config.window_size;
        let bins = config.spectrum_len();

        let mut planner = FftPlanner::<T>::new();
        let fft = planner.plan_fft_forward(size);
        let fft_scratch = new_complex_buffer(fft.get_inplace_scratch_len());

        ClassifierInternals {
            window: periodic_hamming(size),
            frame: new_real_buffer(size),
            spectrum: new_real_buffer(bins),
            hps: new_real_buffer(bins),
            fft,
            fft_buffer: new_complex_buffer(size),
            fft_scratch,
            config,
        }
    }

    /// Compute the one-sided power spectrum of `self.frame` into `self.spectrum`.
    pub fn power_spectrum(&mut self) {
        power_spectrum(
            &self.frame,
            self.fft.as_ref(),
            &mut self.fft_buffer,
            &mut self.fft_scratch,
            &mut self.spectrum,
        );
    }
}

/// Number of frames needed to cover a buffer of `len` samples. Buffers shorter
/// than one window are treated as zero-padded to a full window, so the count is
/// never less than one.
pub fn frame_count(len: usize, window_size: usize, hop_size: usize) -> usize {
    if len < window_size {
        return 1;
    }
    ((len - window_size) / hop_size + 1).max(1)
}

/// Copy frame `index` of `signal` into `frame`. Samples past the end of `signal`
/// are zero.
pub fn fill_frame<T: Float>(signal: &[T], index: usize, hop_size: usize, frame: &mut [T]) {
    let start = (index * hop_size).min(signal.len());
    let stop = (start + frame.len()).min(signal.len());
    copy_zero_padded(&signal[start..stop], frame);
}

/// Squared magnitude of the forward FFT of `frame`, bins `0..=frame.len() / 2`.
/// rustfft does not normalize, and neither do we.
pub fn power_spectrum<T: Float>(
    frame: &[T],
    fft: &dyn Fft<T>,
    buffer: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    result: &mut [T],
) {
    assert_eq!(buffer.len(), fft.len());
    assert_eq!(result.len(), fft.len() / 2 + 1);

    copy_real_to_complex(frame, buffer);
    fft.process_with_scratch(buffer, scratch);
    modulus_squared(buffer, result);
}

/// Length of the decimated spectrum `P[0], P[h], P[2h], ...` taken from `len` bins.
pub fn decimated_len(len: usize, harmonic: usize) -> usize {
    (len + harmonic - 1) / harmonic
}

/// Compute the Harmonic Product Spectrum of `spectrum` into `result`:
///
/// > hps(k) = P(k) * P(2k) * ... * P(Fk)
///
/// where a factor `P(hk)` is only applied while `hk` is still a bin of `spectrum`.
/// Bins past the end of a decimated copy keep the product of the lower harmonics.
pub fn harmonic_product_spectrum<T: Float>(spectrum: &[T], harmonic_factor: usize, result: &mut [T]) {
    assert_eq!(spectrum.len(), result.len());
    result.copy_from_slice(spectrum);

    for h in 2..=harmonic_factor {
        let len = decimated_len(spectrum.len(), h).min(result.len());
        let decimated = spectrum.iter().step_by(h);
        result[..len]
            .iter_mut()
            .zip(decimated)
            .for_each(|(r, &p)| *r = *r * p);
    }
}

/// Which spectrum bins fall in the male and female bands for a given sample rate.
/// The masks only depend on the sample rate and window size, so they are built
/// once per classification call.
#[derive(Debug, Clone, PartialEq)]
pub struct BandMasks {
    pub male: Vec<bool>,
    pub female: Vec<bool>,
}

impl BandMasks {
    pub fn new(config: &ClassifierConfig, sample_rate: usize) -> Self {
        let bins = config.spectrum_len();
        let mask = |band: &FrequencyBand| -> Vec<bool> {
            (0..bins)
                .map(|k| band.contains(bin_frequency(k, sample_rate, config.window_size)))
                .collect()
        };
        BandMasks {
            male: mask(&config.male_band),
            female: mask(&config.female_band),
        }
    }
}

/// Centre frequency of FFT bin `bin` in Hz.
pub fn bin_frequency(bin: usize, sample_rate: usize, window_size: usize) -> f64 {
    bin as f64 * sample_rate as f64 / window_size as f64
}

/// Running male and female band totals for one classification call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandEnergy<T>
where
    T: Float,
{
    pub male: T,
    pub female: T,
}

impl<T> Default for BandEnergy<T>
where
    T: Float,
{
    fn default() -> Self {
        BandEnergy {
            male: T::zero(),
            female: T::zero(),
        }
    }
}

impl<T> BandEnergy<T>
where
    T: Float,
{
    /// Add the masked sums of one frame's `hps` to the totals and return that
    /// frame's contribution.
    pub fn accumulate(&mut self, hps: &[T], masks: &BandMasks) -> (T, T) {
        let male = masked_sum(hps, &masks.male);
        let female = masked_sum(hps, &masks.female);
        self.male = self.male + male;
        self.female = self.female + female;
        (male, female)
    }

    /// Male needs strictly more energy than female. Ties, including the all-zero
    /// case, resolve to [Label::Female].
    pub fn decide(&self) -> Label {
        if self.male > self.female {
            Label::Male
        } else {
            Label::Female
        }
    }
}

fn masked_sum<T: Float>(values: &[T], mask: &[bool]) -> T {
    values
        .iter()
        .zip(mask)
        .filter(|(_, m)| **m)
        .map(|(&v, _)| v)
        .sum()
}
