use std::fmt;

use crate::float::Float;

pub mod hps;
pub mod internals;

/// Perceived gender of a voice. Displayed with the single-letter codes used in
/// recording filenames: `M` for male, `K` for female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Male,
    Female,
}

impl Label {
    pub fn code(&self) -> char {
        match self {
            Label::Male => 'M',
            Label::Female => 'K',
        }
    }

    /// Parse a filename marker. Case-insensitive; anything but `M` or `K` is `None`.
    pub fn from_code(code: char) -> Option<Label> {
        match code.to_ascii_uppercase() {
            'M' => Some(Label::Male),
            'K' => Some(Label::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

pub trait GenderClassifier<T>
where
    T: Float,
{
    /// Classify a mono, peak-normalized recording sampled at `sample_rate` Hz.
    fn classify(&mut self, signal: &[T], sample_rate: usize) -> Label;
}
