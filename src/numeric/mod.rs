// ============================================================================
// Numeric Module
// Scaled-integer quantities with compile-time dimension and prefix checks
// ============================================================================
//
// This module provides:
// - Quantity<D, R>: raw integer tagged by dimension and base prefix
// - Prefix: decimal scale prefixes and the decade arithmetic between them
// - Storage / value_system!: integer widths and their promotion order
// - multiply / divide / parallel: cross-dimension combinators
// - NumericError: Error types for the checked operations
//
// Design principles:
// - Dimension, prefix and width mismatches fail to compile
// - Plain operators follow primitive integer semantics
// - checked_* variants return Result instead of wrapping
// - Zero-cost wrapper over the raw integer

mod conversions;
mod errors;
mod exponent;
mod prefix;
mod quantity;
mod storage;
mod value_system;

pub use conversions::{checked_divide, checked_multiply, divide, multiply, parallel};
pub use errors::{NumericError, NumericResult};
pub use exponent::{checked_scale_by, scale_by};
pub use prefix::{decades_diff, div_correction, finer_resolution, mult_correction, Prefix};
pub use quantity::{Dimension, Measure, Quantity, Representation};
pub use storage::{Storage, Width};
pub use value_system::{
    contains, is_well_formed, position, Contains, NextWider, Product, Promote, ValueSystem,
    Wider, WiderOf,
};
