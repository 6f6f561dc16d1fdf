//! Generic [Float] type which acts as a stand-in for `f32` or `f64`.
use rustfft::num_traits::float::FloatCore as NumFloatCore;
use rustfft::FftNum;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Sample buffers, spectra and band totals are arrays of [Float]s. A [Float] is
/// normally `f32` or `f64`. Band totals are products of four power values, so
/// `f64` leaves far more headroom on loud input.
pub trait Float: Display + Debug + NumFloatCore + FftNum + Sum {}

impl Float for f64 {}
impl Float for f32 {}
