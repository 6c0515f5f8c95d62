// ============================================================================
// Exponent-Scaled Multiply
// Power-of-ten scaling of raw values by a signed decade exponent
// ============================================================================

use super::storage::Storage;

/// Multiply `value` by `10^exponent`.
///
/// A non-negative exponent multiplies, a negative one divides with integer
/// semantics (truncation toward zero), dropping digits below the new
/// resolution. The factor comes from the storage type's power table. Every
/// value of `T` is below `10^(max_decade + 1)`, so dividing by a power beyond
/// the table yields zero.
///
/// # Panics
/// If `exponent` exceeds [`Storage::max_decade`] for `T`. Overflow of the
/// multiplication follows primitive integer semantics. Keeping both in range
/// is up to the caller, which picks the (possibly widened) type `T`.
#[inline]
pub fn scale_by<T: Storage>(exponent: i32, value: T) -> T {
    let decades = exponent.unsigned_abs() as usize;
    if exponent >= 0 {
        value * T::POW10[decades]
    } else {
        match T::POW10.get(decades) {
            Some(&factor) => value / factor,
            None => T::ZERO,
        }
    }
}

/// [`scale_by`] that returns `None` instead of overflowing or panicking.
#[inline]
pub fn checked_scale_by<T: Storage>(exponent: i32, value: T) -> Option<T> {
    let decades = exponent.unsigned_abs() as usize;
    if exponent >= 0 {
        value.checked_mul(T::POW10.get(decades)?)
    } else {
        Some(T::POW10.get(decades).map_or(T::ZERO, |&factor| value / factor))
    }
}
