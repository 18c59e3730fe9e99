use core::arch::aarch64::*;

use super::super::ops::neon::{LANES, complex_mul, load_complex, load_cross_sign, store_complex};
use crate::fft::Complex64;

/// NEON implementation: processes 1 column per register.
#[target_feature(enable = "neon")]
pub(super) unsafe fn butterfly_2_neon(
    data: &mut [Complex64],
    stage_twiddles: &[Complex64],
    num_columns: usize,
) {
    assert!(data.len() >= num_columns * 2 && stage_twiddles.len() >= num_columns);

    let cross_sign = load_cross_sign();

    for idx in (0..num_columns).step_by(LANES) {
        unsafe {
            let u = load_complex(data.as_ptr().add(idx) as *const f64);
            let d = load_complex(data.as_ptr().add(idx + num_columns) as *const f64);
            let tw = load_complex(stage_twiddles.as_ptr().add(idx) as *const f64);

            let t = complex_mul(d, tw, cross_sign);

            let out_top = vaddq_f64(u, t);
            let out_bot = vsubq_f64(u, t);

            store_complex(data.as_mut_ptr().add(idx) as *mut f64, out_top);
            store_complex(data.as_mut_ptr().add(idx + num_columns) as *mut f64, out_bot);
        }
    }
}
