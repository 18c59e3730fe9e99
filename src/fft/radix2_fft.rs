use alloc::sync::Arc;
use core::marker::PhantomData;

use super::{
    cooley_tukey_radix2::{compute_radix2_twiddles, cooley_tukey_radix2},
    cooley_tukey_recursive::cooley_tukey_recursive,
};
use crate::{Complex64, FftError, Strategy};

/// Marker type for forward FFT direction.
pub struct Forward;

/// Marker type for inverse FFT direction.
pub struct Inverse;

type IterativeFn = fn(data: &mut [Complex64], twiddles: &[Complex64]);

/// The kernel a plan runs.
#[derive(Clone, Copy)]
enum Kernel {
    Recursive,
    Iterative { name: &'static str, run: IterativeFn },
}

/// Radix-2 FFT plan for complex values.
///
/// Generic over direction type (`Forward` or `Inverse`).
///
/// # Normalization
///
/// This FFT implementation does **not** normalize outputs:
///  - Forward FFT produces raw DFT values (no scaling applied)
///  - Inverse FFT produces raw IDFT values (no `1/N` scaling applied)
///  - A forward+inverse round-trip produces `N * input` (where `N` is the FFT length)
///
/// # Kernels
///
/// The kernel is chosen once, when the plan is created:
///  - [`Strategy::Recursive`]: even/odd split recursion, needs a scratchpad of `len()` values
///  - [`Strategy::Iterative`]: bit-reversal plus scalar butterfly passes
///  - [`Strategy::Vectorized`]: bit-reversal plus SIMD butterfly passes. With the standard
///    library the widest instruction set the CPU reports is used; with the `no_std` feature the
///    instruction set is fixed by the compile-time target features.
pub struct Radix2FFT<D> {
    len: usize,
    twiddles: Arc<[Complex64]>,
    strategy: Strategy,
    kernel: Kernel,
    _direction: PhantomData<D>,
}

impl<D> Radix2FFT<D> {
    /// Constructs a new [`Radix2FFT`] instance.
    ///
    /// # Arguments
    /// * `len` - Transform length, must be a non-zero power of two
    /// * `strategy` - Algorithm used by [`process`](Radix2FFT::process)
    pub fn new(len: usize, strategy: Strategy) -> Result<Self, FftError> {
        if len == 0 || !len.is_power_of_two() {
            return Err(FftError::Length(len));
        }

        let twiddles: Arc<[Complex64]> = compute_radix2_twiddles(len).into();
        let kernel = select_kernel(strategy);

        tracing::debug!(
            len,
            %strategy,
            kernel = kernel_name(&kernel),
            "planned radix-2 FFT"
        );

        Ok(Self {
            len,
            twiddles,
            strategy,
            kernel,
            _direction: PhantomData,
        })
    }

    /// Returns the transform length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, plans have at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the strategy the plan was created with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the name of the selected kernel, e.g. `"avx+fma"` or `"scalar"`.
    pub fn kernel_name(&self) -> &'static str {
        kernel_name(&self.kernel)
    }

    /// Returns the required scratchpad size for FFT processing.
    ///
    /// Only the recursive kernel needs scratch space. Callers must allocate a buffer of at least
    /// this size.
    pub fn scratchpad_size(&self) -> usize {
        match self.kernel {
            Kernel::Recursive => self.len,
            Kernel::Iterative { .. } => 0,
        }
    }

    /// Returns `true` if both plans read the same twiddle table.
    #[cfg(test)]
    pub(crate) fn shares_twiddles_with<E>(&self, other: &Radix2FFT<E>) -> bool {
        Arc::ptr_eq(&self.twiddles, &other.twiddles)
    }

    fn process_forward_complex(&self, data: &mut [Complex64], scratchpad: &mut [Complex64]) {
        assert_eq!(data.len(), self.len, "Data length must be {}", self.len);
        assert!(
            scratchpad.len() >= self.scratchpad_size(),
            "Scratchpad size must be at least {}",
            self.scratchpad_size()
        );

        match self.kernel {
            Kernel::Recursive => cooley_tukey_recursive(data, scratchpad, &self.twiddles),
            Kernel::Iterative { run, .. } => run(data, &self.twiddles),
        }
    }
}

impl Radix2FFT<Forward> {
    /// Returns the inverse plan of the same length and kernel.
    ///
    /// The inverse runs the forward kernel between two conjugations, so both plans share one
    /// twiddle table instead of holding `len() - 1` factors each.
    pub fn inverse(&self) -> Radix2FFT<Inverse> {
        Radix2FFT {
            len: self.len,
            twiddles: Arc::clone(&self.twiddles),
            strategy: self.strategy,
            kernel: self.kernel,
            _direction: PhantomData,
        }
    }

    /// Forward complex FFT, in place.
    ///
    /// **Note:** Output is unnormalized. No scaling is applied to the result.
    ///
    /// # Arguments
    /// * `data` - Complex samples (length == len)
    /// * `scratchpad` - Workspace for intermediate calculations (length >= scratchpad_size)
    pub fn process(&self, data: &mut [Complex64], scratchpad: &mut [Complex64]) {
        self.process_forward_complex(data, scratchpad);
    }
}

impl Radix2FFT<Inverse> {
    /// Inverse complex FFT, in place.
    ///
    /// **Note:** Output is unnormalized (no `1/N` scaling applied).
    ///
    /// # Arguments
    /// * `data` - Complex spectrum (length == len)
    /// * `scratchpad` - Workspace for intermediate calculations (length >= scratchpad_size)
    pub fn process(&self, data: &mut [Complex64], scratchpad: &mut [Complex64]) {
        // Conjugate input.
        for x in data.iter_mut() {
            x.im = -x.im;
        }

        self.process_forward_complex(data, scratchpad);

        // Conjugate output.
        for x in data.iter_mut() {
            x.im = -x.im;
        }
    }
}

fn kernel_name(kernel: &Kernel) -> &'static str {
    match kernel {
        Kernel::Recursive => "recursive",
        Kernel::Iterative { name, .. } => *name,
    }
}

fn select_kernel(strategy: Strategy) -> Kernel {
    match strategy {
        Strategy::Recursive => Kernel::Recursive,
        Strategy::Iterative => Kernel::Iterative {
            name: "scalar",
            run: cooley_tukey_radix2,
        },
        Strategy::Vectorized => select_simd_kernel(),
    }
}

#[cfg(all(target_arch = "x86_64", not(feature = "no_std")))]
fn select_simd_kernel() -> Kernel {
    use super::cooley_tukey_radix2::{
        cooley_tukey_radix2_avx, cooley_tukey_radix2_avx_fma, cooley_tukey_radix2_sse2,
    };

    if std::arch::is_x86_feature_detected!("avx") && std::arch::is_x86_feature_detected!("fma") {
        Kernel::Iterative {
            name: "avx+fma",
            run: cooley_tukey_radix2_avx_fma,
        }
    } else if std::arch::is_x86_feature_detected!("avx") {
        Kernel::Iterative {
            name: "avx",
            run: cooley_tukey_radix2_avx,
        }
    } else {
        // SSE2 is always available.
        Kernel::Iterative {
            name: "sse2",
            run: cooley_tukey_radix2_sse2,
        }
    }
}

#[cfg(any(not(target_arch = "x86_64"), feature = "no_std"))]
fn select_simd_kernel() -> Kernel {
    use super::cooley_tukey_radix2::cooley_tukey_radix2_simd;

    #[cfg(all(target_arch = "x86_64", target_feature = "avx", target_feature = "fma"))]
    let name = "avx+fma";
    #[cfg(all(
        target_arch = "x86_64",
        target_feature = "avx",
        not(target_feature = "fma")
    ))]
    let name = "avx";
    #[cfg(all(target_arch = "x86_64", not(target_feature = "avx")))]
    let name = "sse2";
    #[cfg(target_arch = "aarch64")]
    let name = "neon";
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    let name = "scalar";

    Kernel::Iterative {
        name,
        run: cooley_tukey_radix2_simd,
    }
}
