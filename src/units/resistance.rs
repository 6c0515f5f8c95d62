// ============================================================================
// Ohm
// Electrical resistance stored as i32 milli-ohms
// ============================================================================

use super::system::{IntegralValueSystem, Resistance};
use crate::numeric::{parallel, Prefix, Quantity, Representation};
use std::ops::BitOr;

/// `i32` raw value denominated in mΩ. Covers roughly 2.1 MΩ.
pub enum MilliOhm32 {}

impl Representation for MilliOhm32 {
    type Storage = i32;
    const BASE_PREFIX: Prefix = Prefix::Milli;
}

/// Electrical resistance
pub type Ohm = Quantity<Resistance, MilliOhm32>;

/// Resistance of `value` mΩ.
#[inline]
pub fn milliohms(value: i32) -> Ohm {
    Ohm::from_prefix(Prefix::Milli, value)
}

/// Resistance of `value` Ω.
#[inline]
pub fn ohms(value: i32) -> Ohm {
    Ohm::from_prefix(Prefix::One, value)
}

/// Resistance of `value` kΩ.
#[inline]
pub fn kiloohms(value: i32) -> Ohm {
    Ohm::from_prefix(Prefix::Kilo, value)
}

/// Two resistors in parallel, `r1·r2 / (r1+r2)`.
///
/// # Panics
/// If both resistances sum to zero.
impl BitOr for Ohm {
    type Output = Ohm;

    #[inline]
    fn bitor(self, rhs: Ohm) -> Ohm {
        parallel::<IntegralValueSystem, Ohm>(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_agree() {
        assert_eq!(kiloohms(1), ohms(1_000));
        assert_eq!(ohms(1), milliohms(1_000));
    }

    #[test]
    fn test_parallel_resistance() {
        assert_eq!(ohms(2) | ohms(2), ohms(1));
        assert_eq!(ohms(30) | ohms(60), ohms(20));
        assert_eq!(ohms(100) | milliohms(0), milliohms(0));
    }

    #[test]
    fn test_parallel_does_not_overflow_i32() {
        // 10^7 · 10^7 needs i64.
        assert_eq!(kiloohms(10) | kiloohms(10), kiloohms(5));
        assert_eq!(kiloohms(2_000) | kiloohms(2_000), kiloohms(1_000));
    }

    #[test]
    fn test_parallel_truncates() {
        assert_eq!(milliohms(1) | milliohms(2), milliohms(0));
        assert_eq!(milliohms(10) | milliohms(20), milliohms(6));
    }
}
