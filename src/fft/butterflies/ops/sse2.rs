use core::arch::x86_64::*;

/// Number of complex values in one 128-bit register.
pub(crate) const LANES: usize = 1;

/// Loads one complex value from `ptr`.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn load_complex_sse2(ptr: *const f64) -> __m128d {
    unsafe { _mm_loadu_pd(ptr) }
}

/// Stores one complex value to `ptr`.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn store_complex_sse2(ptr: *mut f64, value: __m128d) {
    unsafe { _mm_storeu_pd(ptr, value) }
}

/// Returns a mask for negating real parts: [-0.0, 0.0].
#[target_feature(enable = "sse2")]
pub(crate) fn load_neg_real_mask_sse2() -> __m128d {
    _mm_set_pd(0.0, -0.0)
}

/// Complex multiplication.
#[target_feature(enable = "sse2")]
pub(crate) fn complex_mul_sse2(left: __m128d, right: __m128d, neg_real_mask: __m128d) -> __m128d {
    let right_re = _mm_unpacklo_pd(right, right);
    let right_im = _mm_unpackhi_pd(right, right);
    let left_swap = _mm_shuffle_pd(left, left, 0b01);

    let prod_re = _mm_mul_pd(left, right_re);
    let prod_im = _mm_mul_pd(left_swap, right_im);

    // Emulate addsub: [prod_re[0] - prod_im[0], prod_re[1] + prod_im[1]]
    _mm_add_pd(prod_re, _mm_xor_pd(prod_im, neg_real_mask))
}
