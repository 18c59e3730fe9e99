use crate::{Strategy, WaveError};

/// Largest accepted size exponent. `2^30` samples occupy 16 GiB.
pub const MAX_SIZE_EXPONENT: u32 = 30;

/// Validated, immutable configuration of a [`Wave`](crate::Wave).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WaveConfig {
    exponent: u32,
    strategy: Strategy,
    print: bool,
    time: bool,
}

impl WaveConfig {
    /// Creates a configuration for a sequence of `2^exponent` samples.
    ///
    /// Returns [`WaveError::SizeExponent`] unless `1 <= exponent <= MAX_SIZE_EXPONENT`.
    pub fn new(exponent: u32, strategy: Strategy) -> Result<Self, WaveError> {
        if exponent == 0 || exponent > MAX_SIZE_EXPONENT {
            return Err(WaveError::SizeExponent(exponent));
        }

        Ok(Self {
            exponent,
            strategy,
            print: false,
            time: false,
        })
    }

    /// Requests printing of the transformed sequence.
    pub const fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Requests timing of the transform.
    pub const fn with_time(mut self, time: bool) -> Self {
        self.time = time;
        self
    }

    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Sequence length `2^exponent`.
    pub const fn sample_count(&self) -> usize {
        1 << self.exponent
    }

    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub const fn print(&self) -> bool {
        self.print
    }

    pub const fn time(&self) -> bool {
        self.time
    }
}
