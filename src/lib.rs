// ============================================================================
// Light Units Library
// Compile-time checked physical units on plain integers
// ============================================================================

//! # Light Units
//!
//! Physical quantities stored as scaled integers, for targets where floating
//! point is slow or unavailable.
//!
//! ## Features
//!
//! - **Dimension safety**: adding a current to a voltage does not compile
//! - **Fixed base prefix** per unit: the raw integer is denominated in e.g. µA
//! - **Overflow-free products** through value systems that promote
//!   intermediates to the next wider integer
//! - **Zero cost**: a quantity is exactly its raw integer
//! - **Checked variants** for every lossy or overflowing operation
//!
//! ## Example
//!
//! ```rust
//! use light_units::prelude::*;
//!
//! // U = I·R with I in µA, R in mΩ and U in mV
//! let current = microamps(1);
//! let resistance = kiloohms(10);
//! let voltage: Volt = current * resistance;
//! assert_eq!(voltage, millivolts(10));
//!
//! // I = U/R
//! assert_eq!(volts(4) / ohms(200), milliamps(20));
//!
//! // Two resistors in parallel
//! assert_eq!(ohms(30) | ohms(60), ohms(20));
//!
//! // Readback at any prefix
//! assert_eq!(milliamps(20).to_prefix(Prefix::Micro), 20_000);
//! ```

pub mod numeric;
pub mod units;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        divide, multiply, parallel, Dimension, Measure, NumericError, NumericResult, Prefix,
        Quantity, Representation, Storage, ValueSystem,
    };
    pub use crate::units::ohms_law::{current_through, resistance_of, voltage_drop};
    pub use crate::units::{
        amps, kiloohms, microamps, milliamps, milliohms, millivolts, ohms, volts, Ampere,
        IntegralValueSystem, Ohm, Volt,
    };
    pub use crate::value_system;
}
