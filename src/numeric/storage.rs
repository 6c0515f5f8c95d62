// ============================================================================
// Storage Types
// Primitive integers usable as the raw representation of a quantity
// ============================================================================

use num_traits::{NumCast, PrimInt};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptor of an integer storage type: its bit width and signedness.
///
/// Widths are ordered by bit count first, then unsigned before signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Width {
    /// Number of bits of the type
    pub bits: u32,
    /// Whether the type is signed
    pub signed: bool,
}

impl Width {
    /// Create a width descriptor.
    #[inline]
    pub const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }

    /// The descriptor of storage type `T`.
    #[inline]
    pub const fn of<T: Storage>() -> Self {
        T::WIDTH
    }

    /// Whether two descriptors name the same type.
    #[inline]
    pub const fn same_as(self, other: Width) -> bool {
        self.bits == other.bits && self.signed == other.signed
    }

    /// Whether this width can hold the full product of two `narrower` values,
    /// i.e. has at least twice its bits and the same signedness.
    #[inline]
    pub const fn holds_product_of(self, narrower: Width) -> bool {
        self.signed == narrower.signed && self.bits >= 2 * narrower.bits
    }
}

impl PartialOrd for Width {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Width {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits
            .cmp(&other.bits)
            .then(self.signed.cmp(&other.signed))
    }
}

/// A primitive integer that can carry the raw value of a quantity.
///
/// Besides the `num_traits` integer vocabulary this exposes the type's
/// [`Width`], a power-of-ten table, and `as`-cast semantics between any two
/// storage types so generic code can widen and narrow without per-pair impls.
pub trait Storage: PrimInt + Hash + Debug + Display + Default + Send + Sync + 'static {
    /// Width descriptor of this type
    const WIDTH: Width;

    /// Smallest representable value
    const MIN: Self;

    /// Largest representable value
    const MAX: Self;

    /// Zero
    const ZERO: Self;

    /// `10^0, 10^1, ...` up to the largest power of ten the type holds.
    const POW10: &'static [Self];

    /// Two's complement bits of `self`, sign- or zero-extended to 128 bits.
    fn to_i128_bits(self) -> i128;

    /// Low bits of `bits`, reinterpreted as `Self` (primitive `as` semantics).
    fn from_i128_bits(bits: i128) -> Self;

    /// Nearest `f64` to `self`.
    fn as_f64(self) -> f64;

    /// `value` truncated toward zero, saturating at the bounds; NaN maps to zero.
    fn from_f64_saturating(value: f64) -> Self;

    /// Largest exponent `n` such that `10^n` is representable.
    #[inline]
    fn max_decade() -> u32 {
        (Self::POW10.len() - 1) as u32
    }

    /// Convert to another storage type with primitive `as` semantics:
    /// widening sign- or zero-extends, narrowing keeps the low bits.
    #[inline]
    fn cast<T: Storage>(self) -> T {
        T::from_i128_bits(self.to_i128_bits())
    }

    /// Convert to another storage type, `None` if the value does not fit.
    #[inline]
    fn checked_cast<T: Storage>(self) -> Option<T> {
        <T as NumCast>::from(self)
    }
}

macro_rules! impl_storage {
    ($t:ty, $table:ident, $signed:expr, $decades:expr) => {
        const $table: [$t; $decades + 1] = {
            let mut table: [$t; $decades + 1] = [1; $decades + 1];
            let mut i = 1;
            while i < table.len() {
                table[i] = table[i - 1] * 10;
                i += 1;
            }
            table
        };

        impl Storage for $t {
            const WIDTH: Width = Width::new(<$t>::BITS, $signed);
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const POW10: &'static [Self] = &$table;

            #[inline(always)]
            fn to_i128_bits(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn from_i128_bits(bits: i128) -> Self {
                bits as $t
            }

            #[inline(always)]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_f64_saturating(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_storage!(i8, POW10_I8, true, 2);
impl_storage!(i16, POW10_I16, true, 4);
impl_storage!(i32, POW10_I32, true, 9);
impl_storage!(i64, POW10_I64, true, 18);
impl_storage!(i128, POW10_I128, true, 38);

impl_storage!(u8, POW10_U8, false, 2);
impl_storage!(u16, POW10_U16, false, 4);
impl_storage!(u32, POW10_U32, false, 9);
impl_storage!(u64, POW10_U64, false, 19);
impl_storage!(u128, POW10_U128, false, 38);
