use super::cooley_tukey_radix2::block_twiddles;
use crate::Complex64;

/// Performs an in-place radix-2 FFT by recursive even/odd decimation in time.
///
/// Each level copies the even-indexed samples to the front of `scratch` and the odd-indexed
/// samples behind them, transforms both halves, and combines them back into `data`. The two
/// halves of `data` serve as scratch space for the next level, so `scratch` must hold at least
/// `data.len()` values and nothing is allocated.
pub(crate) fn cooley_tukey_recursive(
    data: &mut [Complex64],
    scratch: &mut [Complex64],
    twiddles: &[Complex64],
) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    let half = n >> 1;

    let scratch = &mut scratch[..n];
    let (even, odd) = scratch.split_at_mut(half);

    for (i, pair) in data.chunks_exact(2).enumerate() {
        even[i] = pair[0];
        odd[i] = pair[1];
    }

    let (lower, upper) = data.split_at_mut(half);

    cooley_tukey_recursive(even, lower, twiddles);
    cooley_tukey_recursive(odd, upper, twiddles);

    let stage_twiddles = block_twiddles(twiddles, n);

    for k in 0..half {
        let t = stage_twiddles[k].mul(&odd[k]);
        lower[k] = even[k].add(&t);
        upper[k] = even[k].sub(&t);
    }
}
