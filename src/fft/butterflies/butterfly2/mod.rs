use crate::fft::Complex64;

#[cfg(all(
    target_arch = "x86_64",
    any(not(feature = "no_std"), target_feature = "avx")
))]
mod avx;

#[cfg(target_arch = "x86_64")]
mod sse2;

#[cfg(target_arch = "aarch64")]
mod neon;

/// Processes radix-2 butterflies for the columns `start_col..num_columns` using scalar operations.
///
/// `data` holds one block of `2 * num_columns` values: the even half-transform followed by the
/// odd half-transform.
#[inline(always)]
pub(super) fn butterfly_2_columns(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    start_col: usize,
    num_columns: usize,
) {
    let (even, odd) = data.split_at_mut(num_columns);

    for idx in start_col..num_columns {
        let t = stage_twiddles[idx].mul(&odd[idx]);
        let u = even[idx];
        even[idx] = u.add(&t);
        odd[idx] = u.sub(&t);
    }
}

/// Processes a single radix-2 butterfly block using scalar operations.
#[inline(always)]
pub(crate) fn butterfly_2(data: &mut [Complex64], stage_twiddles: &[Complex64], num_columns: usize) {
    butterfly_2_columns(data, stage_twiddles, 0, num_columns);
}

/// AVX+FMA butterfly block. Only reachable after the CPU reported AVX and FMA support.
#[cfg(all(target_arch = "x86_64", not(feature = "no_std")))]
#[inline(always)]
pub(crate) fn butterfly_2_dispatch_avx_fma(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    num_columns: usize,
) {
    // Safety: The planner only selects this kernel after runtime detection of avx and fma.
    unsafe { avx::butterfly_2_avx_fma(data, stage_twiddles, num_columns) }
}

/// AVX butterfly block. Only reachable after the CPU reported AVX support.
#[cfg(all(target_arch = "x86_64", not(feature = "no_std")))]
#[inline(always)]
pub(crate) fn butterfly_2_dispatch_avx(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    num_columns: usize,
) {
    // Safety: The planner only selects this kernel after runtime detection of avx.
    unsafe { avx::butterfly_2_avx(data, stage_twiddles, num_columns) }
}

/// SSE2 butterfly block.
#[cfg(all(target_arch = "x86_64", any(test, not(feature = "no_std"))))]
#[inline(always)]
pub(crate) fn butterfly_2_dispatch_sse2(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    num_columns: usize,
) {
    // Safety: SSE2 is part of the x86_64 baseline.
    unsafe { sse2::butterfly_2_sse2(data, stage_twiddles, num_columns) }
}

/// Butterfly block with compile-time SIMD selection.
///
/// Used when runtime feature detection is not available:
///
/// - **AVX+FMA**: 2 complex values per register with fused multiply-add (x86_64)
/// - **AVX**: 2 complex values per register (x86_64, no FMA)
/// - **SSE2**: 1 complex value per register (x86_64 baseline)
/// - **NEON**: 1 complex value per register (aarch64, always available)
/// - **Scalar**: Fallback for all other architectures
#[cfg(any(test, feature = "no_std", not(target_arch = "x86_64")))]
#[inline(always)]
pub(crate) fn butterfly_2_dispatch(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    num_columns: usize,
) {
    #[cfg(all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma"))]
    {
        // Safety: We've checked that avx and fma features are enabled at compile time.
        unsafe { avx::butterfly_2_avx_fma(data, stage_twiddles, num_columns) }
    }

    #[cfg(all(
        target_arch = "x86_64",
        target_feature = "avx",
        not(target_feature = "fma")
    ))]
    {
        // Safety: We've checked that avx feature is enabled at compile time.
        unsafe { avx::butterfly_2_avx(data, stage_twiddles, num_columns) }
    }

    #[cfg(all(target_arch = "x86_64", not(target_feature = "avx")))]
    {
        // Safety: SSE2 is part of the x86_64 baseline.
        unsafe { sse2::butterfly_2_sse2(data, stage_twiddles, num_columns) }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // Safety: NEON is mandatory on aarch64, so it's always available.
        unsafe { neon::butterfly_2_neon(data, stage_twiddles, num_columns) }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    butterfly_2(data, stage_twiddles, num_columns)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::test_butterfly_against_scalar, *};

    #[test]
    fn test_butterfly_2_scalar_block_of_two() {
        let mut data = [Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)];
        butterfly_2(&mut data, &[Complex64::new(1.0, 0.0)], 1);
        assert_eq!(data[0], Complex64::new(2.0, 0.0));
        assert_eq!(data[1], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_butterfly_2_dispatch_vs_scalar() {
        test_butterfly_against_scalar(butterfly_2_dispatch, "butterfly_2_dispatch");
    }

    #[test]
    #[cfg(all(target_arch = "x86_64", not(feature = "no_std")))]
    fn test_butterfly_2_avx_fma_vs_scalar() {
        if !(std::arch::is_x86_feature_detected!("avx")
            && std::arch::is_x86_feature_detected!("fma"))
        {
            return;
        }
        test_butterfly_against_scalar(butterfly_2_dispatch_avx_fma, "butterfly_2_avx_fma");
    }

    #[test]
    #[cfg(all(target_arch = "x86_64", not(feature = "no_std")))]
    fn test_butterfly_2_avx_vs_scalar() {
        if !std::arch::is_x86_feature_detected!("avx") {
            return;
        }
        test_butterfly_against_scalar(butterfly_2_dispatch_avx, "butterfly_2_avx");
    }

    #[test]
    #[cfg(target_arch = "x86_64")]
    fn test_butterfly_2_sse2_vs_scalar() {
        test_butterfly_against_scalar(butterfly_2_dispatch_sse2, "butterfly_2_sse2");
    }

    #[test]
    #[cfg(target_arch = "aarch64")]
    fn test_butterfly_2_neon_vs_scalar() {
        test_butterfly_against_scalar(
            |data, twiddles, columns| unsafe { neon::butterfly_2_neon(data, twiddles, columns) },
            "butterfly_2_neon",
        );
    }
}
