// ============================================================================
// Quantity Errors
// Failures of the checked quantity operations
// ============================================================================

use std::fmt;

/// Why a `checked_*` or `try_*` quantity operation produced no value.
///
/// The plain operators never produce these: they follow primitive integer
/// semantics, and every dimension, prefix and width mismatch is rejected at
/// compile time instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Raw value would exceed the storage type's maximum
    Overflow,
    /// Raw value would fall below the storage type's minimum
    Underflow,
    /// Divisor quantity (or remainder operand) is zero
    DivisionByZero,
    /// Input has digits finer than the base prefix resolves
    PrecisionLoss,
    /// Floating-point input is NaN or infinite
    InvalidInput,
}

impl NumericError {
    /// Classify an out-of-range result by the sign it would have had.
    #[inline]
    pub(crate) fn out_of_range(negative: bool) -> Self {
        if negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            NumericError::Overflow => "quantity overflow: raw value above the storage maximum",
            NumericError::Underflow => "quantity underflow: raw value below the storage minimum",
            NumericError::DivisionByZero => "division by a zero quantity",
            NumericError::PrecisionLoss => {
                "precision loss: value is finer than the base prefix resolution"
            },
            NumericError::InvalidInput => "invalid input: value is not finite",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for NumericError {}

/// Result of a checked quantity operation
pub type NumericResult<T> = Result<T, NumericError>;
