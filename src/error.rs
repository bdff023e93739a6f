use thiserror::Error;

/// Everything that can go wrong.
///
/// Arithmetic itself is total: sums grow, and an underflowing subtraction
/// reports through the [`carry`](crate::Unsigned::carry) flag instead of
/// failing. Only division and radix conversion have failure modes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Division or modulus with a zero divisor.
    #[error("attempt to divide by zero")]
    DivideByZero,

    /// Parse or format with a base outside `2..=36` and `256`.
    #[error("base must be in the range [2, 36] or 256, got {base}")]
    InvalidBase { base: u32 },

    /// Parse ran into a character whose value is not below the base.
    #[error("not a digit in base {base}: {chr:?}")]
    InvalidDigit { chr: char, base: u32 },
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
