use core::arch::x86_64::*;

/// Number of complex values in one 256-bit register.
pub(crate) const LANES: usize = 2;

/// Loads two complex values starting at `ptr`.
#[target_feature(enable = "avx")]
pub(crate) unsafe fn load_complex_avx(ptr: *const f64) -> __m256d {
    unsafe { _mm256_loadu_pd(ptr) }
}

/// Stores two complex values starting at `ptr`.
#[target_feature(enable = "avx")]
pub(crate) unsafe fn store_complex_avx(ptr: *mut f64, value: __m256d) {
    unsafe { _mm256_storeu_pd(ptr, value) }
}

/// Complex multiplication.
#[target_feature(enable = "avx")]
pub(crate) fn complex_mul_avx(left: __m256d, right: __m256d) -> __m256d {
    // [right.re, right.re, ...] and [right.im, right.im, ...]
    let right_re = _mm256_movedup_pd(right);
    let right_im = _mm256_permute_pd(right, 0b1111);
    // [left.im, left.re, ...]
    let left_swap = _mm256_permute_pd(left, 0b0101);
    let prod_re = _mm256_mul_pd(left, right_re);
    let prod_im = _mm256_mul_pd(left_swap, right_im);
    // [a0-b0, a1+b1, a2-b2, a3+b3]
    _mm256_addsub_pd(prod_re, prod_im)
}

/// Complex multiplication using fused multiply-add.
#[target_feature(enable = "avx,fma")]
pub(crate) fn complex_mul_avx_fma(left: __m256d, right: __m256d) -> __m256d {
    let right_re = _mm256_movedup_pd(right);
    let right_im = _mm256_permute_pd(right, 0b1111);
    let left_swap = _mm256_permute_pd(left, 0b0101);
    let prod_im = _mm256_mul_pd(left_swap, right_im);
    _mm256_fmaddsub_pd(left, right_re, prod_im)
}
