use core::arch::x86_64::*;

use super::super::ops::sse2::{
    LANES, complex_mul_sse2, load_complex_sse2, load_neg_real_mask_sse2, store_complex_sse2,
};
use crate::fft::Complex64;

/// SSE2 implementation: processes 1 column per register.
#[target_feature(enable = "sse2")]
pub(super) unsafe fn butterfly_2_sse2(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    num_columns: usize,
) {
    assert!(data.len() >= num_columns * 2 && stage_twiddles.len() >= num_columns);

    let neg_real_mask = load_neg_real_mask_sse2();

    for idx in (0..num_columns).step_by(LANES) {
        unsafe {
            // Layout: [u.re, u.im]
            let u = load_complex_sse2(data.as_ptr().add(idx) as *const f64);
            let d = load_complex_sse2(data.as_ptr().add(idx + num_columns) as *const f64);
            let tw = load_complex_sse2(stage_twiddles.as_ptr().add(idx) as *const f64);

            let t = complex_mul_sse2(d, tw, neg_real_mask);

            let out_top = _mm_add_pd(u, t);
            let out_bot = _mm_sub_pd(u, t);

            store_complex_sse2(data.as_mut_ptr().add(idx) as *mut f64, out_top);
            store_complex_sse2(data.as_mut_ptr().add(idx + num_columns) as *mut f64, out_bot);
        }
    }
}
