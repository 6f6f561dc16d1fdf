//! # Voice Gender
//! *voice_gender* classifies the perceived gender of a recorded voice from its
//! fundamental-pitch content.
//!
//! The recording is framed, windowed and transformed to a power spectrum, which is
//! sharpened with a Harmonic Product Spectrum. HPS energy in a male band (85-180 Hz)
//! and a female band (165-255 Hz) is accumulated over all frames, and the band with
//! strictly more energy wins. See [HpsClassifier][classifier::hps::HpsClassifier].
//!
//! Around the classifier sit the pieces the `voice-gender` binary uses: WAV decoding
//! and peak normalization in [io], and labelled directory scans with an accuracy
//! report in [batch].
//!
//! # Examples
//! ```
//! use voice_gender::classifier::hps::HpsClassifier;
//! use voice_gender::classifier::{GenderClassifier, Label};
//!
//! fn main() {
//!     const SAMPLE_RATE: usize = 16000;
//!
//!     // One second of a 120 Hz tone, already mono and normalized to [-1, 1].
//!     let dt = 1.0 / SAMPLE_RATE as f64;
//!     let freq = 120.0;
//!     let signal: Vec<f64> = (0..SAMPLE_RATE)
//!         .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!         .collect();
//!
//!     let mut classifier = HpsClassifier::new();
//!     let label = classifier.classify(&signal, SAMPLE_RATE);
//!
//!     assert_eq!(label, Label::Male);
//!     println!("Label: {}", label);
//! }
//! ```

pub use classifier::Label;

use classifier::hps::HpsClassifier;
use classifier::GenderClassifier;

pub mod batch;
pub mod classifier;
pub mod config;
pub mod error;
pub mod float;
pub mod io;
pub mod utils;

/// Classify `samples` with the default configuration.
///
/// Builds a fresh [HpsClassifier] on every call; keep one around and use
/// [GenderClassifier::classify] when classifying many recordings.
pub fn classify(samples: &[f64], sample_rate: usize) -> Label {
    HpsClassifier::new().classify(samples, sample_rate)
}
