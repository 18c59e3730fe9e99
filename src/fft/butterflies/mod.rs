mod butterfly2;
mod ops;

#[cfg(any(test, feature = "no_std", not(target_arch = "x86_64")))]
pub(crate) use butterfly2::butterfly_2_dispatch;
#[cfg(all(target_arch = "x86_64", any(test, not(feature = "no_std"))))]
pub(crate) use butterfly2::butterfly_2_dispatch_sse2;
#[cfg(all(target_arch = "x86_64", not(feature = "no_std")))]
pub(crate) use butterfly2::{butterfly_2_dispatch_avx, butterfly_2_dispatch_avx_fma};
pub(crate) use butterfly2::butterfly_2;
