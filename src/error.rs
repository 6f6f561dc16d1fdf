//! Error types for configuration, decoding and batch scanning.
//!
//! The classification pipeline itself never fails; these errors only come from
//! building a classifier with a bad [ClassifierConfig][crate::config::ClassifierConfig]
//! and from the I/O around it.

use std::path::PathBuf;

use thiserror::Error;

/// A [ClassifierConfig][crate::config::ClassifierConfig] that the pipeline cannot run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("window size must be a positive even number, got {0}")]
    InvalidWindowSize(usize),

    #[error("hop size must be positive")]
    ZeroHop,

    #[error("harmonic factor must be at least 1")]
    ZeroHarmonicFactor,

    #[error("{name} band is inverted: {low_hz} Hz > {high_hz} Hz")]
    InvertedBand {
        name: &'static str,
        low_hz: f64,
        high_hz: f64,
    },
}

/// Failure while reading a `.wav` file.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to decode {path}: {source}")]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("{path} has no channels")]
    NoChannels { path: PathBuf },
}

/// Failure while scanning a directory of recordings.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
