mod butterflies;
pub(crate) mod cooley_tukey_radix2;
pub(crate) mod cooley_tukey_recursive;
mod radix2_fft;

pub use radix2_fft::{Forward, Inverse, Radix2FFT};

/// Double-precision complex sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    /// Returns `exp(i * angle)` scaled by `radius`.
    #[inline(always)]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = sin_cos(angle);
        Self {
            re: radius * cos,
            im: radius * sin,
        }
    }

    #[inline(always)]
    pub const fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline(always)]
    pub const fn add(&self, o: &Self) -> Self {
        Self {
            re: self.re + o.re,
            im: self.im + o.im,
        }
    }

    #[inline(always)]
    pub const fn sub(&self, o: &Self) -> Self {
        Self {
            re: self.re - o.re,
            im: self.im - o.im,
        }
    }

    #[inline(always)]
    pub const fn mul(&self, o: &Self) -> Self {
        Self {
            re: self.re * o.re - self.im * o.im,
            im: self.re * o.im + self.im * o.re,
        }
    }

    #[inline(always)]
    pub const fn scale(&self, f: f64) -> Self {
        Self {
            re: self.re * f,
            im: self.im * f,
        }
    }

    /// Magnitude.
    #[inline(always)]
    pub fn norm(&self) -> f64 {
        let sqr = self.re * self.re + self.im * self.im;
        #[cfg(not(feature = "no_std"))]
        let norm = sqr.sqrt();
        #[cfg(feature = "no_std")]
        let norm = libm::sqrt(sqr);
        norm
    }
}

impl From<f64> for Complex64 {
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

/// Formats as `(re,im)`.
impl core::fmt::Display for Complex64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}

#[inline(always)]
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(not(feature = "no_std"))]
    return angle.sin_cos();

    #[cfg(feature = "no_std")]
    return (libm::sin(angle), libm::cos(angle));
}

#[cfg(test)]
pub(crate) mod test_utils {
    use alloc::{vec, vec::Vec};

    use super::Complex64;

    /// Naive O(N²) DFT used as a reference.
    pub(crate) fn naive_dft(input: &[Complex64]) -> Vec<Complex64> {
        let n = input.len();
        let mut output = vec![Complex64::zero(); n];
        for (k, out) in output.iter_mut().enumerate() {
            for (j, x) in input.iter().enumerate() {
                let angle = -2.0 * core::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
                *out = out.add(&Complex64::from_polar(1.0, angle).mul(x));
            }
        }
        output
    }

    /// Deterministic non-trivial test signal.
    pub(crate) fn test_signal(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| {
                let x = i as f64;
                #[cfg(not(feature = "no_std"))]
                let value = Complex64::new((x * 0.5).sin() + 0.25 * x, (x * 0.3).cos());
                #[cfg(feature = "no_std")]
                let value = Complex64::new(libm::sin(x * 0.5) + 0.25 * x, libm::cos(x * 0.3));
                value
            })
            .collect()
    }

    /// Asserts element-wise equality within `epsilon`, relative to the peak magnitude of
    /// `expected` once that exceeds 1.
    pub(crate) fn assert_complex_arrays_approx_eq(
        actual: &[Complex64],
        expected: &[Complex64],
        epsilon: f64,
        context: &str,
    ) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "{context}: Array lengths differ",
        );

        let peak = expected.iter().map(Complex64::norm).fold(1.0, f64::max);
        let tolerance = epsilon * peak;

        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!(
                a.re.is_finite() && a.im.is_finite(),
                "{context}: Non-finite value at index {i}: ({}, {})",
                a.re,
                a.im
            );

            let re_diff = (a.re - e.re).abs();
            let im_diff = (a.im - e.im).abs();

            assert!(
                re_diff <= tolerance && im_diff <= tolerance,
                "{context}: Mismatch at index {i}: actual = ({}, {}), expected = ({}, {}), diff = ({re_diff}, {im_diff})",
                a.re,
                a.im,
                e.re,
                e.im,
            );
        }
    }
}
