// ============================================================================
// Volt
// Electric potential stored as i32 milli-volts
// ============================================================================

use super::system::Voltage;
use crate::numeric::{Prefix, Quantity, Representation};

/// `i32` raw value denominated in mV.
pub enum MilliVolt32 {}

impl Representation for MilliVolt32 {
    type Storage = i32;
    const BASE_PREFIX: Prefix = Prefix::Milli;
}

/// Electric potential difference
pub type Volt = Quantity<Voltage, MilliVolt32>;

/// Voltage of `value` mV.
#[inline]
pub fn millivolts(value: i32) -> Volt {
    Volt::from_prefix(Prefix::Milli, value)
}

/// Voltage of `value` V.
#[inline]
pub fn volts(value: i32) -> Volt {
    Volt::from_prefix(Prefix::One, value)
}
