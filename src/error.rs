use crate::MAX_SIZE_EXPONENT;

/// Errors raised while configuring a [`Wave`](crate::Wave).
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum WaveError {
    /// Size exponent is zero or larger than [`MAX_SIZE_EXPONENT`].
    SizeExponent(u32),
    /// Sample buffer length is zero or not a power of two.
    BufferLength(usize),
}

impl core::fmt::Display for WaveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SizeExponent(exponent) => write!(
                f,
                "Size exponent {exponent} is out of range (expected 1..={MAX_SIZE_EXPONENT})"
            ),
            Self::BufferLength(len) => {
                write!(f, "Buffer length {len} is not a non-zero power of two")
            }
        }
    }
}

impl core::fmt::Debug for WaveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

#[cfg(not(feature = "no_std"))]
impl std::error::Error for WaveError {}

/// Errors raised while planning a transform.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FftError {
    /// Transform length is zero or not a power of two.
    Length(usize),
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Length(len) => {
                write!(f, "Transform length {len} is not a non-zero power of two")
            }
        }
    }
}

impl core::fmt::Debug for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

#[cfg(not(feature = "no_std"))]
impl std::error::Error for FftError {}

impl From<FftError> for WaveError {
    fn from(value: FftError) -> Self {
        match value {
            FftError::Length(len) => WaveError::BufferLength(len),
        }
    }
}
