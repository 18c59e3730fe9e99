use core::arch::x86_64::*;

use super::super::ops::avx::{
    LANES, complex_mul_avx, complex_mul_avx_fma, load_complex_avx, store_complex_avx,
};
use crate::fft::Complex64;

/// AVX implementation: processes 2 columns at once.
#[target_feature(enable = "avx")]
pub(super) unsafe fn butterfly_2_avx(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    num_columns: usize,
) {
    assert!(data.len() >= num_columns * 2 && stage_twiddles.len() >= num_columns);

    let simd_cols = (num_columns / LANES) * LANES;

    for idx in (0..simd_cols).step_by(LANES) {
        unsafe {
            // Layout: [u0.re, u0.im, u1.re, u1.im]
            let u = load_complex_avx(data.as_ptr().add(idx) as *const f64);
            let d = load_complex_avx(data.as_ptr().add(idx + num_columns) as *const f64);
            let tw = load_complex_avx(stage_twiddles.as_ptr().add(idx) as *const f64);

            let t = complex_mul_avx(d, tw);

            // Butterfly: data[idx] = u + t, data[idx + num_columns] = u - t
            let out_top = _mm256_add_pd(u, t);
            let out_bot = _mm256_sub_pd(u, t);

            store_complex_avx(data.as_mut_ptr().add(idx) as *mut f64, out_top);
            store_complex_avx(data.as_mut_ptr().add(idx + num_columns) as *mut f64, out_bot);
        }
    }

    super::butterfly_2_columns(data, stage_twiddles, simd_cols, num_columns);
}

/// AVX+FMA implementation: processes 2 columns at once using fused multiply-add.
#[target_feature(enable = "avx,fma")]
pub(super) unsafe fn butterfly_2_avx_fma(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    num_columns: usize,
) {
    assert!(data.len() >= num_columns * 2 && stage_twiddles.len() >= num_columns);

    let simd_cols = (num_columns / LANES) * LANES;

    for idx in (0..simd_cols).step_by(LANES) {
        unsafe {
            let u = load_complex_avx(data.as_ptr().add(idx) as *const f64);
            let d = load_complex_avx(data.as_ptr().add(idx + num_columns) as *const f64);
            let tw = load_complex_avx(stage_twiddles.as_ptr().add(idx) as *const f64);

            let t = complex_mul_avx_fma(d, tw);

            let out_top = _mm256_add_pd(u, t);
            let out_bot = _mm256_sub_pd(u, t);

            store_complex_avx(data.as_mut_ptr().add(idx) as *mut f64, out_top);
            store_complex_avx(data.as_mut_ptr().add(idx + num_columns) as *mut f64, out_bot);
        }
    }

    super::butterfly_2_columns(data, stage_twiddles, simd_cols, num_columns);
}
