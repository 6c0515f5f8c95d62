// ============================================================================
// Quantity
// Scaled-integer physical quantity tagged by dimension and base prefix
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::exponent::{checked_scale_by, scale_by};
use super::prefix::{decades_diff, Prefix};
use super::storage::Storage;
use super::value_system::WiderOf;
use num_traits::{Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, NumCast, ToPrimitive};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker for a physical dimension (current, voltage, ...).
///
/// Model each dimension as an empty enum; it is never constructed and only
/// keeps quantities of different kinds apart at compile time.
///
/// ```rust
/// use light_units::numeric::Dimension;
///
/// pub enum Temperature {}
/// impl Dimension for Temperature {}
/// ```
pub trait Dimension: 'static {}

/// How a quantity is stored: the integer type and the prefix its raw value
/// is denominated in.
pub trait Representation: 'static {
    /// Raw integer type
    type Storage: Storage;

    /// Prefix the raw value is denominated in
    const BASE_PREFIX: Prefix;
}

/// Fixed-point quantity of dimension `D` stored as `R`.
///
/// The raw integer is the physical magnitude times `10^-BASE_PREFIX`; the
/// base prefix is baked in and only changes through an explicit rescale.
/// Arithmetic and comparison are defined between identical quantity types
/// only, so mixing dimensions or base prefixes does not compile.
///
/// # Example
/// ```rust
/// use light_units::numeric::{Dimension, Prefix, Quantity, Representation};
///
/// pub enum Length {}
/// impl Dimension for Length {}
///
/// pub enum MilliMeters32 {}
/// impl Representation for MilliMeters32 {
///     type Storage = i32;
///     const BASE_PREFIX: Prefix = Prefix::Milli;
/// }
///
/// type Meter = Quantity<Length, MilliMeters32>;
///
/// let a = Meter::from_prefix(Prefix::One, 2);
/// let b = Meter::from_prefix(Prefix::Milli, 500);
/// assert_eq!((a + b).to_prefix(Prefix::Milli), 2_500);
/// assert_eq!((a + b).to_prefix(Prefix::One), 2);
/// ```
#[repr(transparent)]
pub struct Quantity<D: Dimension, R: Representation> {
    raw: R::Storage,
    _marker: PhantomData<fn() -> (D, R)>,
}

/// A quantity type seen through its descriptor, independent of how it
/// was declared. The cross-dimension operations are written against it.
pub trait Measure: Copy + 'static {
    /// Dimension tag
    type Dim: Dimension;

    /// Raw integer type
    type Storage: Storage;

    /// Prefix the raw value is denominated in
    const BASE_PREFIX: Prefix;

    /// Wrap a raw value already denominated in `BASE_PREFIX`.
    fn from_raw(raw: Self::Storage) -> Self;

    /// Raw value, denominated in `BASE_PREFIX`.
    fn raw(self) -> Self::Storage;
}

impl<D: Dimension, R: Representation> Measure for Quantity<D, R> {
    type Dim = D;
    type Storage = R::Storage;
    const BASE_PREFIX: Prefix = R::BASE_PREFIX;

    #[inline]
    fn from_raw(raw: R::Storage) -> Self {
        Quantity::from_raw(raw)
    }

    #[inline]
    fn raw(self) -> R::Storage {
        self.raw
    }
}

/// `value × 10^exponent` in floating point, dividing for negative exponents
/// so that decimal prefixes stay exact where `f64` allows.
#[inline]
fn scale_f64(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}

impl<D: Dimension, R: Representation> Quantity<D, R> {
    /// Prefix the raw value is denominated in
    pub const BASE_PREFIX: Prefix = R::BASE_PREFIX;

    /// Zero value
    pub const ZERO: Self = Self::from_raw(R::Storage::ZERO);

    /// Largest representable quantity
    pub const MAX: Self = Self::from_raw(R::Storage::MAX);

    /// Smallest representable quantity
    pub const MIN: Self = Self::from_raw(R::Storage::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw value already denominated in the base prefix.
    #[inline]
    pub const fn from_raw(raw: R::Storage) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Create from a value denominated in `prefix`.
    ///
    /// Converting from a finer prefix than the base truncates toward zero;
    /// converting from a coarser one may overflow the storage type.
    #[inline]
    pub fn from_prefix(prefix: Prefix, value: R::Storage) -> Self {
        Self::from_raw(scale_by(decades_diff(prefix, R::BASE_PREFIX), value))
    }

    /// Create from a value in micro-units.
    #[inline]
    pub fn from_micro(value: R::Storage) -> Self {
        Self::from_prefix(Prefix::Micro, value)
    }

    /// Create from a value in milli-units.
    #[inline]
    pub fn from_milli(value: R::Storage) -> Self {
        Self::from_prefix(Prefix::Milli, value)
    }

    /// Create from a value in unprefixed units.
    #[inline]
    pub fn from_units(value: R::Storage) -> Self {
        Self::from_prefix(Prefix::One, value)
    }

    /// Create from a value in kilo-units.
    #[inline]
    pub fn from_kilo(value: R::Storage) -> Self {
        Self::from_prefix(Prefix::Kilo, value)
    }

    /// [`from_prefix`](Self::from_prefix) that reports overflow instead of
    /// wrapping.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the rescaled value does not fit.
    pub fn checked_from_prefix(prefix: Prefix, value: R::Storage) -> NumericResult<Self> {
        checked_scale_by(decades_diff(prefix, R::BASE_PREFIX), value)
            .map(Self::from_raw)
            .ok_or_else(|| {
                tracing::debug!(%value, ?prefix, base = ?R::BASE_PREFIX, "rescale out of range");
                NumericError::out_of_range(value < R::Storage::ZERO)
            })
    }

    /// Create from a real magnitude in unprefixed units, rounded to the
    /// nearest step of the base prefix (halfway cases away from zero).
    ///
    /// Out-of-range values saturate at the storage bounds, NaN becomes zero.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        let scaled = scale_f64(value, -R::BASE_PREFIX.exponent());
        Self::from_raw(R::Storage::from_f64_saturating(scaled.round()))
    }

    /// [`from_f64`](Self::from_f64) that rejects unrepresentable input.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinite values
    /// - `Overflow` or `Underflow` if the rounded value does not fit
    pub fn try_from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            tracing::debug!(value, "non-finite magnitude");
            return Err(NumericError::InvalidInput);
        }

        let rounded = scale_f64(value, -R::BASE_PREFIX.exponent()).round();
        <R::Storage as NumCast>::from(rounded)
            .map(Self::from_raw)
            .ok_or_else(|| {
                tracing::debug!(value, base = ?R::BASE_PREFIX, "magnitude out of range");
                NumericError::out_of_range(rounded < 0.0)
            })
    }

    /// Create from an exact decimal magnitude in unprefixed units.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the decimal has digits finer than the base prefix
    /// - `Overflow` or `Underflow` if the value does not fit
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        let exponent = -R::BASE_PREFIX.exponent();
        let factor = if exponent >= 0 {
            Decimal::from(10i64.pow(exponent.unsigned_abs()))
        } else {
            Decimal::new(1, exponent.unsigned_abs())
        };
        let out_of_range = NumericError::out_of_range(value.is_sign_negative());

        let scaled = value.checked_mul(factor).ok_or(out_of_range)?;
        if !scaled.fract().is_zero() {
            tracing::debug!(%value, base = ?R::BASE_PREFIX, "decimal finer than base prefix");
            return Err(NumericError::PrecisionLoss);
        }

        scaled
            .to_i128()
            .and_then(<R::Storage as NumCast>::from)
            .map(Self::from_raw)
            .ok_or(out_of_range)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw value, denominated in the base prefix.
    #[inline]
    pub fn raw(self) -> R::Storage {
        self.raw
    }

    /// Value denominated in `prefix`.
    ///
    /// Reading at a coarser prefix than the base truncates toward zero.
    #[inline]
    pub fn to_prefix(self, prefix: Prefix) -> R::Storage {
        scale_by(decades_diff(R::BASE_PREFIX, prefix), self.raw)
    }

    /// [`to_prefix`](Self::to_prefix) that reports overflow instead of wrapping.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the rescaled value does not fit.
    pub fn checked_to_prefix(self, prefix: Prefix) -> NumericResult<R::Storage> {
        checked_scale_by(decades_diff(R::BASE_PREFIX, prefix), self.raw).ok_or_else(|| {
            tracing::debug!(
                raw = %self.raw,
                ?prefix,
                base = ?R::BASE_PREFIX,
                "rescale out of range"
            );
            NumericError::out_of_range(self.is_negative())
        })
    }

    /// Real magnitude in unprefixed units.
    #[inline]
    pub fn to_f64(self) -> f64 {
        scale_f64(self.raw.as_f64(), R::BASE_PREFIX.exponent())
    }

    /// Exact decimal magnitude in unprefixed units.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value exceeds the range of
    /// `Decimal`.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let out_of_range = NumericError::out_of_range(self.is_negative());
        let raw = self.raw.to_i128().ok_or(out_of_range)?;
        let exponent = R::BASE_PREFIX.exponent();

        let decimal = if exponent < 0 {
            Decimal::try_from_i128_with_scale(raw, exponent.unsigned_abs())
        } else {
            let scaled = raw
                .checked_mul(10i128.pow(exponent.unsigned_abs()))
                .ok_or(out_of_range)?;
            Decimal::try_from_i128_with_scale(scaled, 0)
        };
        decimal.map_err(|_| out_of_range)
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.raw == R::Storage::ZERO
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.raw > R::Storage::ZERO
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.raw < R::Storage::ZERO
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for the minimum of a signed storage type.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.is_negative() {
            R::Storage::ZERO
                .checked_sub(&self.raw)
                .map(Self::from_raw)
                .ok_or(NumericError::Overflow)
        } else {
            Ok(self)
        }
    }

    /// Real-valued ratio `self / rhs`.
    #[inline]
    pub fn ratio(self, rhs: Self) -> f64 {
        self.raw.as_f64() / rhs.raw.as_f64()
    }

    // ========================================================================
    // Rescaling
    // ========================================================================

    /// Convert to another representation of the same dimension.
    ///
    /// The rescale runs in the wider of both storage types, as registered
    /// in value system `S`, and is then narrowed into `R2::Storage`.
    /// Converting to a coarser prefix truncates toward zero.
    #[inline]
    pub fn convert<S, R2>(self) -> Quantity<D, R2>
    where
        R2: Representation,
        S: WiderOf<R::Storage, R2::Storage>,
    {
        let wide: <S as WiderOf<R::Storage, R2::Storage>>::Wider = self.raw.cast();
        let rescaled = scale_by(decades_diff(R::BASE_PREFIX, R2::BASE_PREFIX), wide);
        Quantity::from_raw(rescaled.cast())
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.raw
            .checked_add(&rhs.raw)
            .map(Self::from_raw)
            .ok_or_else(|| NumericError::out_of_range(rhs.is_negative()))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.raw
            .checked_sub(&rhs.raw)
            .map(Self::from_raw)
            .ok_or_else(|| NumericError::out_of_range(!rhs.is_negative()))
    }

    /// Multiply by a dimensionless integer.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul_int(self, rhs: R::Storage) -> NumericResult<Self> {
        self.raw
            .checked_mul(&rhs)
            .map(Self::from_raw)
            .ok_or_else(|| {
                NumericError::out_of_range(self.is_negative() != (rhs < R::Storage::ZERO))
            })
    }

    /// Checked remainder.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero and `Overflow` for
    /// `MIN % -1` on signed storage.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        // The quotient overflows exactly when the remainder does.
        self.raw
            .checked_div(&rhs.raw)
            .map(|_| Self::from_raw(self.raw % rhs.raw))
            .ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<D: Dimension, R: Representation> Clone for Quantity<D, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension, R: Representation> Copy for Quantity<D, R> {}

impl<D: Dimension, R: Representation> Default for Quantity<D, R> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension, R: Representation> PartialEq for Quantity<D, R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<D: Dimension, R: Representation> Eq for Quantity<D, R> {}

impl<D: Dimension, R: Representation> PartialOrd for Quantity<D, R> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Dimension, R: Representation> Ord for Quantity<D, R> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<D: Dimension, R: Representation> Hash for Quantity<D, R> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<D: Dimension, R: Representation> Bounded for Quantity<D, R> {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<D: Dimension, R: Representation> fmt::Debug for Quantity<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("raw", &self.raw)
            .field("prefix", &R::BASE_PREFIX)
            .finish()
    }
}

// ============================================================================
// Operators
// ============================================================================
//
// Same-type operands share dimension and base prefix, so every operator
// works on the raw values directly. Overflow follows the storage type.

impl<D: Dimension, R: Representation> Add for Quantity<D, R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_raw(self.raw + rhs.raw)
    }
}

impl<D: Dimension, R: Representation> Sub for Quantity<D, R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_raw(self.raw - rhs.raw)
    }
}

impl<D: Dimension, R: Representation> AddAssign for Quantity<D, R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.raw = self.raw + rhs.raw;
    }
}

impl<D: Dimension, R: Representation> SubAssign for Quantity<D, R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.raw = self.raw - rhs.raw;
    }
}

impl<D: Dimension, R: Representation> Neg for Quantity<D, R>
where
    R::Storage: Neg<Output = R::Storage>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_raw(-self.raw)
    }
}

impl<D: Dimension, R: Representation> Rem for Quantity<D, R> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        Self::from_raw(self.raw % rhs.raw)
    }
}

/// Integer quotient of two quantities of the same type, truncated toward
/// zero. Together with `%` this satisfies `(a / b) * b + a % b == a`; use
/// [`Quantity::ratio`] for the real-valued ratio.
impl<D: Dimension, R: Representation> Div for Quantity<D, R> {
    type Output = R::Storage;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.raw / rhs.raw
    }
}

// Integer scalars: plain multiplication, truncating division.
macro_rules! impl_int_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<D: Dimension, R: Representation<Storage = $t>> Mul<$t> for Quantity<D, R> {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $t) -> Self::Output {
                    Self::from_raw(self.raw * rhs)
                }
            }

            impl<D: Dimension, R: Representation<Storage = $t>> Mul<Quantity<D, R>> for $t {
                type Output = Quantity<D, R>;

                #[inline]
                fn mul(self, rhs: Quantity<D, R>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D: Dimension, R: Representation<Storage = $t>> Div<$t> for Quantity<D, R> {
                type Output = Self;

                #[inline]
                fn div(self, rhs: $t) -> Self::Output {
                    Self::from_raw(self.raw / rhs)
                }
            }
        )*
    };
}

impl_int_scalar_ops!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// Real scalars: computed in f64 and rounded to the nearest raw step.
macro_rules! impl_float_scalar_ops {
    ($($f:ty),* $(,)?) => {
        $(
            impl<D: Dimension, R: Representation> Mul<$f> for Quantity<D, R> {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $f) -> Self::Output {
                    let scaled = (self.raw.as_f64() * <f64 as From<$f>>::from(rhs)).round();
                    Self::from_raw(R::Storage::from_f64_saturating(scaled))
                }
            }

            impl<D: Dimension, R: Representation> Mul<Quantity<D, R>> for $f {
                type Output = Quantity<D, R>;

                #[inline]
                fn mul(self, rhs: Quantity<D, R>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D: Dimension, R: Representation> Div<$f> for Quantity<D, R> {
                type Output = Self;

                #[inline]
                fn div(self, rhs: $f) -> Self::Output {
                    let scaled = (self.raw.as_f64() / <f64 as From<$f>>::from(rhs)).round();
                    Self::from_raw(R::Storage::from_f64_saturating(scaled))
                }
            }
        )*
    };
}

impl_float_scalar_ops!(f32, f64);

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl<D: Dimension, R: Representation> Serialize for Quantity<D, R>
where
    R::Storage: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, R: Representation> Deserialize<'de> for Quantity<D, R>
where
    R::Storage: Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        R::Storage::deserialize(deserializer).map(Self::from_raw)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    enum Dummy {}
    impl Dimension for Dummy {}

    enum DummyMilli16 {}
    impl Representation for DummyMilli16 {
        type Storage = i16;
        const BASE_PREFIX: Prefix = Prefix::Milli;
    }

    enum DummyMicro64 {}
    impl Representation for DummyMicro64 {
        type Storage = i64;
        const BASE_PREFIX: Prefix = Prefix::Micro;
    }

    enum DummyKilo32 {}
    impl Representation for DummyKilo32 {
        type Storage = i32;
        const BASE_PREFIX: Prefix = Prefix::Kilo;
    }

    type TestUnit = Quantity<Dummy, DummyMilli16>;
    type Fine = Quantity<Dummy, DummyMicro64>;
    type Coarse = Quantity<Dummy, DummyKilo32>;

    crate::value_system! { struct TestSystem[i8, i16, i32, i64]; }

    const A: i16 = 1;
    const B: i16 = 2;

    fn create(value: i16) -> TestUnit {
        TestUnit::from_prefix(Prefix::Milli, value)
    }

    #[test]
    fn test_created_by_from_raw_matches_argument() {
        let x = create(A);
        assert_eq!(x.to_prefix(TestUnit::BASE_PREFIX), A);
        assert_eq!(x.raw(), A);
    }

    #[test]
    fn test_assignment_replaces_value() {
        let mut x = create(A);
        assert_eq!(x.raw(), A);
        x = create(B);
        assert_eq!(x.to_prefix(Prefix::Milli), B);
    }

    #[test]
    fn test_compound_assignment_matches_primitive() {
        let mut x = create(A);
        x += create(B);
        let mut expected = A;
        expected += B;
        assert_eq!(x, create(expected));

        let mut y = create(A);
        y -= create(B);
        let mut expected = A;
        expected -= B;
        assert_eq!(y, create(expected));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(-create(A), create(-A));
        assert_eq!(-create(-A), create(A));
    }

    #[test]
    fn test_addition_and_subtraction() {
        assert_eq!(create(A) + create(B), create(A + B));
        assert_eq!(create(A) - create(B), create(A - B));
    }

    #[test]
    fn test_modulo_is_same_unit() {
        let res: TestUnit = create(5) % create(3);
        assert_eq!(res, create(2));
    }

    #[test]
    fn test_quotient_and_ratio() {
        assert_eq!(create(7) / create(2), 3);
        assert_eq!(create(-7) / create(2), -3);
        assert!((create(7).ratio(create(2)) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_equality() {
        assert_eq!(create(A), create(A));
        assert_ne!(create(A), create(B));
    }

    #[test]
    fn test_ordering() {
        let small = create(10);
        let large = create(20);
        let epsilon = create(1);

        assert!(small < large);
        assert!(small < small + epsilon);
        assert!(small - epsilon < small);
        assert!(!(large < small));
        assert!(!(small < small));

        assert!(large > small);
        assert!(large + epsilon > large);
        assert!(large > large - epsilon);
        assert!(!(large > large));
        assert!(!(small > large));

        assert!(small <= small);
        assert!(!(large <= small));
        assert!(large >= large);
        assert!(!(small >= large));
    }

    #[test]
    fn test_unit_times_float_rounds() {
        assert_eq!(create(2) * 0.5f32, create(1));
        assert_eq!(create(100) * 0.4f32, create(40));
        assert_eq!(create(10) * 4.0f32, create(40));
        assert_eq!(create(100) * -0.4f32, create(-40));
        assert_eq!(create(3) * 0.5f64, create(2));
    }

    #[test]
    fn test_float_times_unit() {
        assert_eq!(0.5f32 * create(2), create(1));
        assert_eq!(0.4f32 * create(100), create(40));
        assert_eq!(4.0f32 * create(10), create(40));
        assert_eq!(-0.4f32 * create(100), create(-40));
    }

    #[test]
    fn test_unit_divided_by_float_rounds() {
        assert_eq!(create(100) / 0.4f32, create(250));
        assert_eq!(create(5) / 2.0f64, create(3));
        assert_eq!(create(-5) / 2.0f64, create(-3));
    }

    #[test]
    fn test_integer_scalar_ops() {
        assert_eq!(create(7) * 3i16, create(21));
        assert_eq!(3i16 * create(7), create(21));
        assert_eq!(create(7) / 2i16, create(3));
        assert_eq!(create(-7) / 2i16, create(-3));
    }

    #[test]
    fn test_numeric_limits() {
        assert_eq!(TestUnit::max_value().to_prefix(TestUnit::BASE_PREFIX), i16::MAX);
        assert_eq!(TestUnit::min_value().to_prefix(TestUnit::BASE_PREFIX), i16::MIN);
        assert_eq!(TestUnit::MAX.raw(), i16::MAX);
        assert_eq!(TestUnit::MIN.raw(), i16::MIN);
    }

    #[test]
    fn test_prefix_conversions() {
        let x = TestUnit::from_prefix(Prefix::One, 2);
        assert_eq!(x.raw(), 2_000);
        assert_eq!(x.to_prefix(Prefix::One), 2);
        assert_eq!(TestUnit::from_units(3), TestUnit::from_milli(3_000));

        // Finer input truncates toward zero.
        assert_eq!(TestUnit::from_micro(1_999).raw(), 1);
        assert_eq!(TestUnit::from_micro(-1_999).raw(), -1);

        // Coarser readback truncates toward zero.
        assert_eq!(create(1_999).to_prefix(Prefix::One), 1);
        assert_eq!(create(5).to_prefix(Prefix::Micro), 5_000);

        assert_eq!(Fine::from_kilo(2).raw(), 2_000_000_000);
        assert_eq!(Coarse::from_units(12_345).raw(), 12);
    }

    #[test]
    fn test_checked_prefix_conversions() {
        assert_eq!(
            TestUnit::checked_from_prefix(Prefix::One, 32),
            Ok(create(32_000))
        );
        assert_eq!(
            TestUnit::checked_from_prefix(Prefix::One, 33),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            TestUnit::checked_from_prefix(Prefix::One, -33),
            Err(NumericError::Underflow)
        );
        assert_eq!(
            TestUnit::checked_from_prefix(Prefix::Kilo, 1),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            TestUnit::checked_from_prefix(Prefix::Micro, 1_500),
            Ok(create(1))
        );

        assert_eq!(create(32).checked_to_prefix(Prefix::Micro), Ok(32_000));
        assert_eq!(
            create(33).checked_to_prefix(Prefix::Micro),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            create(-33).checked_to_prefix(Prefix::Micro),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(TestUnit::from_f64(1.5), create(1_500));
        assert_eq!(TestUnit::from_f64(-0.25), create(-250));
        assert_eq!(TestUnit::from_f64(0.0014), create(1));
        assert_eq!(TestUnit::from_f64(0.0016), create(2));
        assert_eq!(TestUnit::from_f64(1e9), TestUnit::MAX);
        assert_eq!(TestUnit::from_f64(f64::NAN), TestUnit::ZERO);
        assert_eq!(Fine::from_f64(1.23).raw(), 1_230_000);
        assert_eq!(Coarse::from_f64(2_600.0).raw(), 3);
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(TestUnit::try_from_f64(2.0), Ok(create(2_000)));
        assert_eq!(
            TestUnit::try_from_f64(f64::NAN),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            TestUnit::try_from_f64(f64::INFINITY),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(TestUnit::try_from_f64(40.0), Err(NumericError::Overflow));
        assert_eq!(TestUnit::try_from_f64(-40.0), Err(NumericError::Underflow));
    }

    #[test]
    fn test_to_f64() {
        assert!((create(1_500).to_f64() - 1.5).abs() < 1e-12);
        assert!((Fine::from_raw(-250).to_f64() + 0.000_25).abs() < 1e-15);
        assert!((Coarse::from_raw(7).to_f64() - 7_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_decimal_round_trip() {
        let d = Decimal::new(12345, 3); // 12.345
        let x = TestUnit::from_decimal(d).unwrap();
        assert_eq!(x.raw(), 12_345);
        assert_eq!(x.to_decimal().unwrap(), d);

        let k = Coarse::from_decimal(Decimal::from(42_000)).unwrap();
        assert_eq!(k.raw(), 42);
        assert_eq!(k.to_decimal().unwrap(), Decimal::from(42_000));
    }

    #[test]
    fn test_from_decimal_errors() {
        assert_eq!(
            TestUnit::from_decimal(Decimal::new(12345, 4)),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(
            TestUnit::from_decimal(Decimal::from(100)),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            TestUnit::from_decimal(Decimal::from(-100)),
            Err(NumericError::Underflow)
        );
        assert_eq!(
            Coarse::from_decimal(Decimal::from(1_500)),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_convert_between_representations() {
        let x = create(1_234);
        let fine: Fine = x.convert::<TestSystem, DummyMicro64>();
        assert_eq!(fine.raw(), 1_234_000);

        let back: TestUnit = fine.convert::<TestSystem, DummyMilli16>();
        assert_eq!(back, x);

        let coarse: Coarse = Fine::from_kilo(7).convert::<TestSystem, DummyKilo32>();
        assert_eq!(coarse.raw(), 7);

        // Coarser target truncates toward zero.
        let truncated: Coarse = Fine::from_units(1_999).convert::<TestSystem, DummyKilo32>();
        assert_eq!(truncated.raw(), 1);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(create(1).checked_add(create(2)), Ok(create(3)));
        assert_eq!(
            TestUnit::MAX.checked_add(create(1)),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            TestUnit::MIN.checked_sub(create(1)),
            Err(NumericError::Underflow)
        );
        assert_eq!(
            TestUnit::MIN.checked_add(create(-1)),
            Err(NumericError::Underflow)
        );
        assert_eq!(create(100).checked_mul_int(3), Ok(create(300)));
        assert_eq!(
            create(-20_000).checked_mul_int(2),
            Err(NumericError::Underflow)
        );
        assert_eq!(
            create(-20_000).checked_mul_int(-2),
            Err(NumericError::Overflow)
        );
        assert_eq!(create(5).checked_rem(create(3)), Ok(create(2)));
        assert_eq!(
            create(5).checked_rem(TestUnit::ZERO),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_sign_helpers() {
        assert!(TestUnit::ZERO.is_zero());
        assert!(create(1).is_positive());
        assert!(create(-1).is_negative());
        assert_eq!(create(-5).abs(), Ok(create(5)));
        assert_eq!(create(5).abs(), Ok(create(5)));
        assert_eq!(TestUnit::MIN.abs(), Err(NumericError::Overflow));
        assert_eq!(TestUnit::default(), TestUnit::ZERO);
    }

    #[test]
    fn test_debug_shows_raw_and_prefix() {
        assert_eq!(
            format!("{:?}", create(42)),
            "Quantity { raw: 42, prefix: Milli }"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_raw_value() {
        let json = serde_json::to_string(&create(1_500)).unwrap();
        assert_eq!(json, "1500");
        let back: TestUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, create(1_500));
    }

    fn prefix_strategy() -> impl Strategy<Value = Prefix> {
        prop::sample::select(Prefix::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_round_trip_at_base(v in any::<i16>()) {
            prop_assert_eq!(create(v).to_prefix(Prefix::Milli), v);
        }

        #[test]
        fn prop_round_trip_at_any_prefix(
            v in -1_000_000i64..1_000_000,
            prefix in prefix_strategy(),
        ) {
            // Micro storage resolves every prefix exactly and holds 10^9 × 10^6.
            let x = Fine::from_prefix(prefix, v);
            prop_assert_eq!(x.to_prefix(prefix), v);
        }

        #[test]
        fn prop_rescale_composes(
            v in -1_000_000i64..1_000_000,
            s1 in prefix_strategy(),
            s2 in prefix_strategy(),
        ) {
            let direct = Fine::from_prefix(s1, v).to_prefix(s2);
            prop_assert_eq!(direct, scale_by(decades_diff(s1, s2), v));
        }

        #[test]
        fn prop_compound_assignment_matches_raw_sum(
            a in -10_000i16..10_000,
            b in -10_000i16..10_000,
        ) {
            let mut x = create(a);
            x += create(b);
            prop_assert_eq!(x, TestUnit::from_raw(a + b));

            let mut y = create(a);
            y -= create(b);
            prop_assert_eq!(y, TestUnit::from_raw(a - b));
        }

        #[test]
        fn prop_modulo_identity(a in -10_000i16..10_000, b in -100i16..100) {
            prop_assume!(b != 0);
            let x = create(a);
            let y = create(b);
            prop_assert_eq!((x / y) * y + x % y, x);
        }

        #[test]
        fn prop_decimal_round_trip(v in any::<i16>()) {
            let x = create(v);
            prop_assert_eq!(TestUnit::from_decimal(x.to_decimal().unwrap()), Ok(x));
        }
    }

    quickcheck! {
        fn qc_ordering_matches_raw(a: i16, b: i16) -> bool {
            let (x, y) = (create(a), create(b));
            let exactly_one = [x < y, x == y, x > y].iter().filter(|&&held| held).count() == 1;
            exactly_one && x.cmp(&y) == a.cmp(&b)
        }
    }
}
