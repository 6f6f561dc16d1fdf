//! Tapering windows applied to frames before the FFT.
use crate::float::Float;

const HAMMING_ALPHA: f64 = 0.54;
const HAMMING_BETA: f64 = 0.46;

/// Periodic (DFT-even) Hamming window of length `size`:
///
/// > w(n) = 0.54 - 0.46 cos(2πn / size), n = 0..size
///
/// This is the symmetric window of length `size + 1` with its last point dropped,
/// which is the right choice for spectral analysis.
pub fn periodic_hamming<T: Float>(size: usize) -> Vec<T> {
    let two_pi = 2.0 * std::f64::consts::PI;
    (0..size)
        .map(|n| {
            let w = HAMMING_ALPHA - HAMMING_BETA * (two_pi * n as f64 / size as f64).cos();
            T::from_f64(w).unwrap_or_else(T::zero)
        })
        .collect()
}

/// Multiply `frame` by `window` elementwise, in place.
pub fn apply_window<T: Float>(frame: &mut [T], window: &[T]) {
    assert_eq!(frame.len(), window.len());
    frame
        .iter_mut()
        .zip(window)
        .for_each(|(s, &w)| *s = *s * w);
}
