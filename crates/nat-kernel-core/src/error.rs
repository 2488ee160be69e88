//! Error types for natural number operations.

use thiserror::Error;

/// Precondition violations reported by natural number operations.
///
/// An operation that returns one of these has left its receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NaturalError {
    /// Subtraction or decrement would produce a negative magnitude.
    #[error("result would be negative")]
    NegativeResult,

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Root index below 2.
    #[error("root index must be at least 2, got {0}")]
    InvalidRootIndex(u32),

    /// String outside the `0|[1-9][0-9]*` grammar.
    #[error("malformed digit string: {0:?}")]
    MalformedString(String),

    /// Negative machine integer where a natural number was expected.
    #[error("negative value {0} is not a natural number")]
    NegativeValue(i64),

    /// Magnitude does not fit in a machine integer.
    #[error("value does not fit in a machine integer")]
    Overflow,

    /// Digit outside `0..RADIX`.
    #[error("digit {0} is out of range for radix 10")]
    InvalidDigit(u8),
}

/// Result type for natural number operations.
pub type Result<T> = std::result::Result<T, NaturalError>;
