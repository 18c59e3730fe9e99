//! Radix-2 Cooley-Tukey FFT over double-precision complex samples.
//!
//! The [`Wave`] engine owns a power-of-two sample buffer and transforms it in place with one of
//! three interchangeable strategies:
//!
//! - [`Strategy::Recursive`]: even/odd split decimation in time
//! - [`Strategy::Iterative`]: bit-reversal permutation followed by `log2(N)` butterfly passes
//! - [`Strategy::Vectorized`]: the iterative passes with SIMD butterflies (AVX+FMA, AVX, SSE2 or
//!   NEON, chosen once when the transform is planned)
//!
//! All strategies compute the same transform and agree within floating-point rounding.
//!
//! ```
//! use wavefft::{Strategy, Wave, WaveConfig};
//!
//! let config = WaveConfig::new(2, Strategy::Vectorized).unwrap();
//! let mut wave = Wave::new(&config);
//! wave.transform();
//!
//! let dc = wave.samples()[0];
//! assert!((dc.re - 6.0).abs() < 1e-12);
//! ```
#![cfg_attr(feature = "no_std", no_std)]

extern crate alloc;

mod config;
mod error;
mod fft;
pub mod sequence;
mod wave;

pub use config::{MAX_SIZE_EXPONENT, WaveConfig};
pub use error::{FftError, WaveError};
pub use fft::*;
pub use wave::Wave;

/// The algorithm used to compute a transform.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Recursive even/odd split (decimation in time).
    Recursive,
    /// Bit-reversal permutation followed by iterative scalar butterfly passes.
    #[default]
    Iterative,
    /// Iterative butterfly passes using SIMD registers where the CPU supports them.
    Vectorized,
}

impl Strategy {
    /// The default scalar strategy.
    pub const fn scalar() -> Self {
        Strategy::Iterative
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Strategy::Recursive => "recursive".fmt(f),
            Strategy::Iterative => "iterative".fmt(f),
            Strategy::Vectorized => "vectorized".fmt(f),
        }
    }
}
