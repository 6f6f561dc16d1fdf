//! Audio input for the classifier.
pub mod wav;

pub use wav::{load_normalized, normalize_peak, read_wav, DecodedAudio};
