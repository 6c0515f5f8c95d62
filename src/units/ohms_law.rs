// ============================================================================
// Ohm's Law
// U = I·R and its rearrangements between Ampere, Volt and Ohm
// ============================================================================

use super::current::Ampere;
use super::resistance::Ohm;
use super::system::IntegralValueSystem;
use super::voltage::Volt;
use crate::numeric::{checked_divide, checked_multiply, divide, multiply, NumericResult};
use std::ops::{Div, Mul};

impl Mul<Ohm> for Ampere {
    type Output = Volt;

    #[inline]
    fn mul(self, rhs: Ohm) -> Volt {
        multiply::<IntegralValueSystem, Volt, _, _>(self, rhs)
    }
}

impl Mul<Ampere> for Ohm {
    type Output = Volt;

    #[inline]
    fn mul(self, rhs: Ampere) -> Volt {
        rhs * self
    }
}

impl Div<Ohm> for Volt {
    type Output = Ampere;

    #[inline]
    fn div(self, rhs: Ohm) -> Ampere {
        divide::<IntegralValueSystem, Ampere, _, _>(self, rhs)
    }
}

impl Div<Ampere> for Volt {
    type Output = Ohm;

    #[inline]
    fn div(self, rhs: Ampere) -> Ohm {
        divide::<IntegralValueSystem, Ohm, _, _>(self, rhs)
    }
}

/// Voltage across `resistance` carrying `current`.
///
/// # Errors
/// Returns `Overflow` or `Underflow` if the voltage exceeds the range of [`Volt`].
pub fn voltage_drop(current: Ampere, resistance: Ohm) -> NumericResult<Volt> {
    checked_multiply::<IntegralValueSystem, Volt, _, _>(current, resistance)
}

/// Current through `resistance` at `voltage`.
///
/// # Errors
/// - `DivisionByZero` if `resistance` is zero
/// - `Overflow` or `Underflow` if the current exceeds the range of [`Ampere`]
pub fn current_through(voltage: Volt, resistance: Ohm) -> NumericResult<Ampere> {
    checked_divide::<IntegralValueSystem, Ampere, _, _>(voltage, resistance)
}

/// Resistance that draws `current` at `voltage`.
///
/// # Errors
/// - `DivisionByZero` if `current` is zero
/// - `Overflow` or `Underflow` if the resistance exceeds the range of [`Ohm`]
pub fn resistance_of(voltage: Volt, current: Ampere) -> NumericResult<Ohm> {
    checked_divide::<IntegralValueSystem, Ohm, _, _>(voltage, current)
}
