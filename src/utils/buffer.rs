use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;

use crate::float::Float;

pub fn new_real_buffer<T: Float>(size: usize) -> Vec<T> {
    vec![T::zero(); size]
}

pub fn new_complex_buffer<T: Float>(size: usize) -> Vec<Complex<T>> {
    vec![Complex::zero(); size]
}

/// Copy `input` into the real part of `output`, zeroing the imaginary part and
/// any trailing elements of `output` past `input.len()`.
pub fn copy_real_to_complex<T: Float>(input: &[T], output: &mut [Complex<T>]) {
    assert!(input.len() <= output.len());
    input.iter().zip(output.iter_mut()).for_each(|(i, o)| {
        o.re = *i;
        o.im = T::zero();
    });
    output[input.len()..]
        .iter_mut()
        .for_each(|o| *o = Complex::zero())
}

/// Writes |x|^2 of the first `output.len()` values of `input` into `output`.
pub fn modulus_squared<T: Float>(input: &[Complex<T>], output: &mut [T]) {
    assert!(output.len() <= input.len());
    output
        .iter_mut()
        .zip(input)
        .for_each(|(o, c)| *o = c.re * c.re + c.im * c.im);
}

/// Copy as much of `input` as fits into `output` and fill the remainder with zeros.
pub fn copy_zero_padded<T: Float>(input: &[T], output: &mut [T]) {
    let n = input.len().min(output.len());
    output[..n].copy_from_slice(&input[..n]);
    output[n..].iter_mut().for_each(|o| *o = T::zero());
}
