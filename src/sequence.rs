//! Deterministic initial signals.

use alloc::{vec, vec::Vec};

use crate::Complex64;

/// Returns `len` samples where sample `k` is `k + 0i`.
pub fn ramp(len: usize) -> Vec<Complex64> {
    (0..len).map(|k| Complex64::new(k as f64, 0.0)).collect()
}

/// Returns `len` samples with `1 + 0i` at index 0 and zero elsewhere.
pub fn impulse(len: usize) -> Vec<Complex64> {
    let mut samples = vec![Complex64::zero(); len];
    if let Some(first) = samples.first_mut() {
        *first = Complex64::new(1.0, 0.0);
    }
    samples
}

/// Returns `len` copies of `value`.
pub fn constant(len: usize, value: Complex64) -> Vec<Complex64> {
    vec![value; len]
}

/// Returns the unit complex exponential `exp(2πi·bin·k / len)`, whose transform is `len` at
/// `bin` and zero elsewhere.
pub fn tone(len: usize, bin: usize) -> Vec<Complex64> {
    (0..len)
        .map(|k| {
            let phase = (bin * k) % len.max(1);
            let angle = 2.0 * core::f64::consts::PI * phase as f64 / len as f64;
            Complex64::from_polar(1.0, angle)
        })
        .collect()
}
