//! `.wav` decoding with [hound].
//!
//! The classifier wants a single channel scaled to [-1, 1]. Multi-channel files keep
//! only their first channel, and [normalize_peak] divides by the loudest sample so the
//! source bit depth does not matter.

use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::debug;

use crate::error::DecodeError;
use crate::float::Float;

/// First channel of a decoded file, in the file's own sample units.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f64>,
    pub sample_rate: usize,
    /// Channel count of the source file. Only channel 0 is in `samples`.
    pub channels: u16,
}

pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<DecodedAudio, DecodeError> {
    let path = path.as_ref();
    let wav_error = |source| DecodeError::Wav {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = WavReader::open(path).map_err(wav_error)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(DecodeError::NoChannels {
            path: path.to_path_buf(),
        });
    }

    let samples: Vec<f64> = match spec.sample_format {
        SampleFormat::Int => reader
            .samples::<i32>()
            .step_by(channels)
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<f64>, _>>(),
        SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<f64>, _>>(),
    }
    .map_err(wav_error)?;

    debug!(
        "decoded {}: {} Hz, {} channel(s), {} bits {:?}, {} frames",
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format,
        samples.len()
    );

    Ok(DecodedAudio {
        samples,
        sample_rate: spec.sample_rate as usize,
        channels: spec.channels,
    })
}

/// Scale `samples` so the largest magnitude becomes 1. A buffer whose peak is
/// exactly zero is left untouched. Returns the peak found before scaling.
pub fn normalize_peak<T: Float>(samples: &mut [T]) -> T {
    let peak = samples.iter().fold(T::zero(), |max, &s| {
        let magnitude = if s < T::zero() { -s } else { s };
        if magnitude > max {
            magnitude
        } else {
            max
        }
    });
    if peak != T::zero() {
        samples.iter_mut().for_each(|s| *s = *s / peak);
    }
    peak
}

/// [read_wav] followed by [normalize_peak]: what the classifier expects as input.
pub fn load_normalized<P: AsRef<Path>>(path: P) -> Result<DecodedAudio, DecodeError> {
    let mut audio = read_wav(path)?;
    normalize_peak(&mut audio.samples);
    Ok(audio)
}
