use alloc::{vec, vec::Vec};

use crate::{
    Complex64, Forward, Inverse, Radix2FFT, Strategy, WaveConfig, WaveError, sequence,
};

/// Transform engine owning a power-of-two sequence of complex samples.
///
/// The sequence is transformed in place. Plans and scratch space are created once, at
/// construction, so [`transform`](Wave::transform) and
/// [`inverse_transform`](Wave::inverse_transform) never allocate.
pub struct Wave {
    samples: Vec<Complex64>,
    scratchpad: Vec<Complex64>,
    forward: Radix2FFT<Forward>,
    inverse: Radix2FFT<Inverse>,
}

impl Wave {
    /// Creates an engine holding the ramp `0, 1, ..., N - 1` with `N = 2^exponent`.
    pub fn new(config: &WaveConfig) -> Self {
        let samples = sequence::ramp(config.sample_count());

        match Self::from_samples(samples, config.strategy()) {
            Ok(wave) => wave,
            // A validated config always describes a non-zero power of two.
            Err(_) => unreachable!("invalid sample count {}", config.sample_count()),
        }
    }

    /// Creates an engine from caller-supplied samples.
    ///
    /// Returns [`WaveError::BufferLength`] if the length is zero or not a power of two.
    pub fn from_samples(samples: Vec<Complex64>, strategy: Strategy) -> Result<Self, WaveError> {
        let len = samples.len();

        let forward = Radix2FFT::<Forward>::new(len, strategy)?;
        let inverse = forward.inverse();
        let scratchpad = vec![Complex64::zero(); forward.scratchpad_size()];

        tracing::debug!(len, %strategy, kernel = forward.kernel_name(), "created wave");

        Ok(Self {
            samples,
            scratchpad,
            forward,
            inverse,
        })
    }

    /// Replaces the samples with their discrete Fourier transform
    /// `X[k] = Σ x[j]·exp(-2πi·jk/N)`.
    pub fn transform(&mut self) {
        self.forward.process(&mut self.samples, &mut self.scratchpad);
    }

    /// Replaces the samples with their normalized inverse transform
    /// `x[j] = 1/N · Σ X[k]·exp(2πi·jk/N)`, undoing [`transform`](Wave::transform).
    pub fn inverse_transform(&mut self) {
        self.inverse.process(&mut self.samples, &mut self.scratchpad);

        let scale = 1.0 / self.samples.len() as f64;
        for x in self.samples.iter_mut() {
            *x = x.scale(scale);
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`, an engine holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `log2` of the sequence length.
    pub fn exponent(&self) -> u32 {
        self.samples.len().trailing_zeros()
    }

    pub fn strategy(&self) -> Strategy {
        self.forward.strategy()
    }

    /// Name of the kernel the transform runs, e.g. `"avx+fma"`.
    pub fn kernel_name(&self) -> &'static str {
        self.forward.kernel_name()
    }

    /// Samples in index order.
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Complex64> {
        self.samples
    }
}
