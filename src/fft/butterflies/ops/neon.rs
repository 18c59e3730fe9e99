use core::arch::aarch64::*;

/// Number of complex values in one 128-bit register.
pub(crate) const LANES: usize = 1;

/// Loads one complex value from `ptr`.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn load_complex(ptr: *const f64) -> float64x2_t {
    unsafe { vld1q_f64(ptr) }
}

/// Stores one complex value to `ptr`.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn store_complex(ptr: *mut f64, value: float64x2_t) {
    unsafe { vst1q_f64(ptr, value) }
}

/// Returns the sign pattern for the imaginary cross products: [-1.0, 1.0].
#[target_feature(enable = "neon")]
pub(crate) fn load_cross_sign() -> float64x2_t {
    const CROSS_SIGN: [f64; 2] = [-1.0, 1.0];
    unsafe { vld1q_f64(CROSS_SIGN.as_ptr()) }
}

/// Complex multiplication.
#[target_feature(enable = "neon")]
pub(crate) fn complex_mul(left: float64x2_t, right: float64x2_t, cross_sign: float64x2_t) -> float64x2_t {
    let right_re = vdupq_laneq_f64::<0>(right);
    let right_im = vdupq_laneq_f64::<1>(right);
    let left_swap = vextq_f64::<1>(left, left);
    let prod_im = vmulq_f64(vmulq_f64(left_swap, right_im), cross_sign);
    vfmaq_f64(prod_im, left, right_re)
}
