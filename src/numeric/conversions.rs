// ============================================================================
// Cross-Dimension Conversions
// Products and quotients of quantities of different dimensions
// ============================================================================
//
// Physical units relate to each other (U = I·R), and their base prefixes
// rarely line up. Both operations work on the raw values:
// - multiply: widen both operands to the promoted product width, multiply,
//   apply the decade correction, narrow into the result.
// - divide: widen the dividend one step (and at least to the divisor's
//   width), apply the decade correction, divide (truncating toward zero),
//   narrow into the result.
//
// The output prefix is fixed by the result type. A negative correction
// drops digits below the result's resolution.

use num_traits::{CheckedDiv, CheckedMul};

use super::errors::{NumericError, NumericResult};
use super::exponent::{checked_scale_by, scale_by};
use super::prefix::{div_correction, mult_correction};
use super::quantity::Measure;
use super::storage::Storage;
use super::value_system::{NextWider, Product, Promote, Wider, WiderOf};

/// Width a quotient is computed in: the dividend's successor, or the divisor's
/// type if that is wider still.
type Quotient<S, L, R> = <S as WiderOf<Wider<S, L>, R>>::Wider;

/// Product of two quantities of (usually) different dimensions.
///
/// The raw product is computed in the promoted width of value system `S`,
/// so it cannot overflow when `S` is well formed. Narrowing into `Out`
/// keeps the low bits if the corrected value does not fit.
///
/// # Example
/// ```rust
/// use light_units::numeric::multiply;
/// use light_units::units::{microamps, kiloohms, millivolts, IntegralValueSystem, Volt};
///
/// let u: Volt = multiply::<IntegralValueSystem, Volt, _, _>(microamps(1), kiloohms(10));
/// assert_eq!(u, millivolts(10));
/// ```
#[inline]
pub fn multiply<S, Out, Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> Out
where
    Out: Measure,
    Lhs: Measure,
    Rhs: Measure,
    S: Promote<Lhs::Storage, Rhs::Storage>,
{
    let product: Product<S, Lhs::Storage, Rhs::Storage> =
        lhs.raw().cast::<Product<S, Lhs::Storage, Rhs::Storage>>() * rhs.raw().cast();

    let correction = mult_correction(Out::BASE_PREFIX, Lhs::BASE_PREFIX, Rhs::BASE_PREFIX);
    if correction < 0 {
        tracing::trace!(correction, %product, "product truncated to result resolution");
    }

    Out::from_raw(scale_by(correction, product).cast())
}

/// Quotient of two quantities of (usually) different dimensions.
///
/// The dividend is widened to its successor in value system `S` (or to the
/// divisor's type, whichever is wider) before the decade correction is
/// applied, then divided by the raw divisor. The quotient truncates toward
/// zero.
///
/// # Panics
/// If `rhs` is zero.
///
/// # Example
/// ```rust
/// use light_units::numeric::divide;
/// use light_units::units::{microamps, ohms, millivolts, Ampere, IntegralValueSystem};
///
/// let i: Ampere = divide::<IntegralValueSystem, Ampere, _, _>(millivolts(1), ohms(2));
/// assert_eq!(i, microamps(500));
/// ```
#[inline]
pub fn divide<S, Out, Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> Out
where
    Out: Measure,
    Lhs: Measure,
    Rhs: Measure,
    S: NextWider<Lhs::Storage> + WiderOf<Wider<S, Lhs::Storage>, Rhs::Storage>,
{
    let correction = div_correction(Out::BASE_PREFIX, Lhs::BASE_PREFIX, Rhs::BASE_PREFIX);
    let dividend = scale_by(
        correction,
        lhs.raw().cast::<Quotient<S, Lhs::Storage, Rhs::Storage>>(),
    );
    let divisor: Quotient<S, Lhs::Storage, Rhs::Storage> = rhs.raw().cast();

    tracing::trace!(correction, %dividend, %divisor, "truncating quotient");

    Out::from_raw((dividend / divisor).cast())
}

/// Combined value of two same-type quantities in parallel: `a·b / (a+b)`.
///
/// Product and sum are both computed in the promoted width of `S`.
///
/// # Panics
/// If `a + b` is zero.
#[inline]
pub fn parallel<S, Q>(a: Q, b: Q) -> Q
where
    Q: Measure,
    S: Promote<Q::Storage, Q::Storage>,
{
    let a_wide: Product<S, Q::Storage, Q::Storage> = a.raw().cast();
    let b_wide: Product<S, Q::Storage, Q::Storage> = b.raw().cast();

    Q::from_raw(((a_wide * b_wide) / (a_wide + b_wide)).cast())
}

/// [`multiply`] that reports out-of-range results.
///
/// # Errors
/// Returns `Overflow` or `Underflow` if the product, its decade correction,
/// or the narrowing into `Out` leaves the representable range.
pub fn checked_multiply<S, Out, Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> NumericResult<Out>
where
    Out: Measure,
    Lhs: Measure,
    Rhs: Measure,
    S: Promote<Lhs::Storage, Rhs::Storage>,
{
    let negative = (lhs.raw() < Lhs::Storage::ZERO) != (rhs.raw() < Rhs::Storage::ZERO);
    let correction = mult_correction(Out::BASE_PREFIX, Lhs::BASE_PREFIX, Rhs::BASE_PREFIX);

    let lhs_wide: Product<S, Lhs::Storage, Rhs::Storage> = lhs.raw().cast();
    let rhs_wide: Product<S, Lhs::Storage, Rhs::Storage> = rhs.raw().cast();

    lhs_wide
        .checked_mul(&rhs_wide)
        .and_then(|product| checked_scale_by(correction, product))
        .and_then(|corrected| corrected.checked_cast::<Out::Storage>())
        .map(Out::from_raw)
        .ok_or_else(|| {
            tracing::debug!(
                lhs = %lhs.raw(),
                rhs = %rhs.raw(),
                correction,
                "product out of range"
            );
            NumericError::out_of_range(negative)
        })
}

/// [`divide`] that reports division by zero and out-of-range results.
///
/// # Errors
/// - `DivisionByZero` if `rhs` is zero
/// - `Overflow` or `Underflow` if the corrected dividend or the narrowing
///   into `Out` leaves the representable range
pub fn checked_divide<S, Out, Lhs, Rhs>(lhs: Lhs, rhs: Rhs) -> NumericResult<Out>
where
    Out: Measure,
    Lhs: Measure,
    Rhs: Measure,
    S: NextWider<Lhs::Storage> + WiderOf<Wider<S, Lhs::Storage>, Rhs::Storage>,
{
    if rhs.raw() == Rhs::Storage::ZERO {
        tracing::debug!(lhs = %lhs.raw(), "division by zero quantity");
        return Err(NumericError::DivisionByZero);
    }

    let negative = (lhs.raw() < Lhs::Storage::ZERO) != (rhs.raw() < Rhs::Storage::ZERO);
    let correction = div_correction(Out::BASE_PREFIX, Lhs::BASE_PREFIX, Rhs::BASE_PREFIX);

    let out_of_range = || {
        tracing::debug!(
            lhs = %lhs.raw(),
            rhs = %rhs.raw(),
            correction,
            "quotient out of range"
        );
        NumericError::out_of_range(negative)
    };

    let divisor: Quotient<S, Lhs::Storage, Rhs::Storage> = rhs.raw().cast();

    checked_scale_by(correction, lhs.raw().cast::<Quotient<S, Lhs::Storage, Rhs::Storage>>())
        .and_then(|dividend| dividend.checked_div(&divisor))
        .and_then(|quotient| quotient.checked_cast::<Out::Storage>())
        .map(Out::from_raw)
        .ok_or_else(out_of_range)
}
