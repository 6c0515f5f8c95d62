// ============================================================================
// Scale Prefixes
// Decimal prefixes and the decade arithmetic between them
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal scale prefix, based on the SI prefixes.
///
/// The discriminant is the power-of-ten exponent relative to the unprefixed
/// magnitude. Variants are declared in ascending order, so the derived
/// ordering is the numeric one: a smaller prefix resolves finer steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum Prefix {
    /// 10^-6
    Micro = -6,
    /// 10^-3
    Milli = -3,
    /// 10^0
    One = 0,
    /// 10^3
    Kilo = 3,
}

impl Prefix {
    /// Every supported prefix, finest first.
    pub const ALL: [Prefix; 4] = [Prefix::Micro, Prefix::Milli, Prefix::One, Prefix::Kilo];

    /// Power-of-ten exponent of this prefix.
    #[inline]
    pub const fn exponent(self) -> i32 {
        self as i8 as i32
    }
}

/// Difference between two prefixes in decimal decades.
///
/// A raw value denominated in `source` has to be multiplied by
/// `10^decades_diff(source, target)` to be denominated in `target`.
///
/// # Example
/// Milli to Micro: `(-3) - (-6) = 3`, i.e. 1 mA is 1000 µA.
#[inline]
pub const fn decades_diff(source: Prefix, target: Prefix) -> i32 {
    source.exponent() - target.exponent()
}

/// Decade correction left over after multiplying two raw values.
///
/// # Example
/// U = I·R with I in µA, R in mΩ and U in mV: `(-6) + (-3) - (-3) = -6`.
/// The raw product is 10^6 too large for a value denominated in mV.
#[inline]
pub const fn mult_correction(target: Prefix, lhs: Prefix, rhs: Prefix) -> i32 {
    lhs.exponent() + rhs.exponent() - target.exponent()
}

/// Decade correction for `target = lhs / rhs`.
///
/// # Example
/// I = U/R with U in mV, R in mΩ and I in µA: `(-3) - (-3) - (-6) = 6`.
/// The dividend has to be scaled up by 10^6 before dividing.
#[inline]
pub const fn div_correction(target: Prefix, lhs: Prefix, rhs: Prefix) -> i32 {
    lhs.exponent() - rhs.exponent() - target.exponent()
}

/// The prefix with the finer resolution (smaller exponent).
#[inline]
pub const fn finer_resolution(a: Prefix, b: Prefix) -> Prefix {
    if a.exponent() < b.exponent() {
        a
    } else {
        b
    }
}
