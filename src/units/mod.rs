// ============================================================================
// Units Module
// Electrical units over a signed integer value system
// ============================================================================

pub mod current;
pub mod ohms_law;
pub mod resistance;
pub mod system;
pub mod voltage;

pub use current::{amps, microamps, milliamps, Ampere, MicroAmpere32};
pub use resistance::{kiloohms, milliohms, ohms, MilliOhm32, Ohm};
pub use system::{Current, IntegralValueSystem, Resistance, Voltage};
pub use voltage::{millivolts, volts, MilliVolt32, Volt};
