//! Complex lane operations shared by the SIMD butterflies.
//!
//! Every register holds whole complex numbers in interleaved `[re, im, re, im, ...]` layout.

#[cfg(all(
    target_arch = "x86_64",
    any(not(feature = "no_std"), target_feature = "avx")
))]
pub(crate) mod avx;

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;

#[cfg(target_arch = "x86_64")]
pub(crate) mod sse2;
