// ============================================================================
// Ampere
// Electric current stored as i32 micro-amperes
// ============================================================================

use super::system::Current;
use crate::numeric::{Prefix, Quantity, Representation};

/// `i32` raw value denominated in µA. Covers roughly ±2147 A.
pub enum MicroAmpere32 {}

impl Representation for MicroAmpere32 {
    type Storage = i32;
    const BASE_PREFIX: Prefix = Prefix::Micro;
}

/// Electric current
pub type Ampere = Quantity<Current, MicroAmpere32>;

/// Current of `value` µA.
#[inline]
pub fn microamps(value: i32) -> Ampere {
    Ampere::from_prefix(Prefix::Micro, value)
}

/// Current of `value` mA.
#[inline]
pub fn milliamps(value: i32) -> Ampere {
    Ampere::from_prefix(Prefix::Milli, value)
}

/// Current of `value` A.
#[inline]
pub fn amps(value: i32) -> Ampere {
    Ampere::from_prefix(Prefix::One, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_agree() {
        assert_eq!(amps(1), milliamps(1_000));
        assert_eq!(milliamps(1), microamps(1_000));
        assert_eq!(amps(2).raw(), 2_000_000);
    }

    #[test]
    fn test_readback() {
        let i = microamps(1_500_250);
        assert_eq!(i.to_prefix(Prefix::Milli), 1_500);
        assert_eq!(i.to_prefix(Prefix::One), 1);
        assert!((i.to_f64() - 1.50025).abs() < 1e-12);
    }

    #[test]
    fn test_kiloampere_range() {
        // i32 µA tops out near 2147 A, so only single kA values fit.
        assert_eq!(Ampere::from_prefix(Prefix::Kilo, 1).raw(), 1_000_000_000);
        assert_eq!(Ampere::from_prefix(Prefix::Kilo, -2).raw(), -2_000_000_000);
        assert_eq!(
            Ampere::checked_from_prefix(Prefix::Kilo, 1_234),
            Err(crate::numeric::NumericError::Overflow)
        );
    }
}
