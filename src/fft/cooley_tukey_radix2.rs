use crate::Complex64;

/// Performs bit-reversal permutation on the input data using the inductive XOR method.
///
/// Based on "Practically efficient methods for performing bit-reversed permutation in C++11 on
/// the x86-64 architecture" by Knauth et al. (2017)
pub(crate) fn bit_reverse_radix2(data: &mut [Complex64], log2n: usize) {
    let n = data.len();
    if n <= 2 {
        return;
    }

    let mut reversed = 0usize;

    for index in 0..(n - 1) {
        // Only swap if index < reversed to avoid double-swapping.
        if index < reversed {
            data.swap(index, reversed);
        }

        // Compute the next reversed index using the inductive XOR method.
        let diff = index ^ (index + 1);

        // Count leading zeros and shift to reverse the diff pattern.
        let leading_zeros = diff.leading_zeros() as usize;
        let reversed_diff = diff << (leading_zeros - (usize::BITS as usize - log2n));

        // Update reversed index by flipping the bits that changed.
        reversed ^= reversed_diff;
    }
}

/// Computes the twiddle factors of all stages of a radix-2 FFT of length `n`.
///
/// Stage `s` contributes `2^s` factors `exp(-2πi·k / 2^(s+1))`, stored contiguously after the
/// factors of the previous stages, `n - 1` factors in total. The factors of a block of size `m`
/// therefore start at offset `m / 2 - 1`.
pub(crate) fn compute_radix2_twiddles(n: usize) -> alloc::vec::Vec<Complex64> {
    assert!(n.is_power_of_two() && n > 0);

    let log2n = n.trailing_zeros() as usize;
    let mut twiddles = alloc::vec::Vec::with_capacity(n - 1);

    for stage in 0..log2n {
        let num_twiddles = 1 << stage;
        let fft_size = 1 << (stage + 1);

        for k in 0..num_twiddles {
            let angle = -2.0 * core::f64::consts::PI * (k as f64) / (fft_size as f64);
            twiddles.push(Complex64::from_polar(1.0, angle));
        }
    }

    twiddles
}

/// Returns the twiddle factors of a block of `block_size` values.
#[inline(always)]
pub(crate) fn block_twiddles(twiddles: &[Complex64], block_size: usize) -> &[Complex64] {
    let half = block_size >> 1;
    &twiddles[half - 1..block_size - 1]
}

/// Performs an in-place pure radix-2 FFT using the Cooley-Tukey DIT algorithm.
pub(crate) fn cooley_tukey_radix2(data: &mut [Complex64], twiddles: &[Complex64]) {
    let n = data.len();
    assert!(n.is_power_of_two() && n > 0);
    assert_eq!(twiddles.len(), n - 1);

    let log2n = n.trailing_zeros() as usize;

    bit_reverse_radix2(data, log2n);

    for stage in 0..log2n {
        let stage_size = 1 << (stage + 1);
        let half_stage = stage_size >> 1;

        let stage_twiddles = block_twiddles(twiddles, stage_size);

        for group in data.chunks_exact_mut(stage_size) {
            super::butterflies::butterfly_2(group, stage_twiddles, half_stage);
        }
    }
}

macro_rules! define_cooley_tukey_radix2 {
    ($fn_name:ident, $dispatch_fn:ident, cfg = $cfg:meta) => {
        /// Performs an in-place pure radix-2 FFT using the Cooley-Tukey DIT algorithm with SIMD
        /// butterflies.
        #[cfg($cfg)]
        pub(crate) fn $fn_name(data: &mut [Complex64], twiddles: &[Complex64]) {
            let n = data.len();
            assert!(n.is_power_of_two() && n > 0);
            assert_eq!(twiddles.len(), n - 1);

            let log2n = n.trailing_zeros() as usize;

            bit_reverse_radix2(data, log2n);

            for stage in 0..log2n {
                let stage_size = 1 << (stage + 1);
                let half_stage = stage_size >> 1;

                let stage_twiddles = block_twiddles(twiddles, stage_size);

                for group in data.chunks_exact_mut(stage_size) {
                    super::butterflies::$dispatch_fn(group, stage_twiddles, half_stage);
                }
            }
        }
    };
}

define_cooley_tukey_radix2!(
    cooley_tukey_radix2_avx_fma,
    butterfly_2_dispatch_avx_fma,
    cfg = all(target_arch = "x86_64", not(feature = "no_std"))
);
define_cooley_tukey_radix2!(
    cooley_tukey_radix2_avx,
    butterfly_2_dispatch_avx,
    cfg = all(target_arch = "x86_64", not(feature = "no_std"))
);
define_cooley_tukey_radix2!(
    cooley_tukey_radix2_sse2,
    butterfly_2_dispatch_sse2,
    cfg = all(target_arch = "x86_64", any(test, not(feature = "no_std")))
);
define_cooley_tukey_radix2!(
    cooley_tukey_radix2_simd,
    butterfly_2_dispatch,
    cfg = any(test, feature = "no_std", not(target_arch = "x86_64"))
);
