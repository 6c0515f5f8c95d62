// ============================================================================
// Value Systems
// Ordered registries of integer widths used to promote intermediates
// ============================================================================
//
// A value system is a strictly ascending list of storage types in which every
// entry has at least twice the bits of its predecessor and all entries share
// signedness. Multiplying two values of width W can need 2W bits, so products
// are computed in the entry after the wider operand; the doubling invariant
// guarantees that entry is wide enough.
//
// Lookups exist twice:
// - as const functions over `Width` descriptors (`position`, `contains`), and
// - as traits over types (`Contains`, `NextWider`, `WiderOf`, `Promote`),
//   where a miss is an unsatisfied trait bound, i.e. a build error.

use super::storage::{Storage, Width};

/// An ordered registry of storage widths.
///
/// Declare one with [`value_system!`](crate::value_system), which also
/// generates the type-level lookups and checks the ordering invariant.
pub trait ValueSystem: 'static {
    /// Widths of the registered types, narrowest first.
    const WIDTHS: &'static [Width];

    /// Number of registered types.
    #[inline]
    fn len() -> usize {
        Self::WIDTHS.len()
    }

    /// Whether the registry is empty.
    #[inline]
    fn is_empty() -> bool {
        Self::WIDTHS.is_empty()
    }

    /// Whether `width` is registered.
    #[inline]
    fn contains(width: Width) -> bool {
        contains(Self::WIDTHS, width)
    }

    /// Index of `width` in the registry.
    #[inline]
    fn position(width: Width) -> Option<usize> {
        position(Self::WIDTHS, width)
    }

    /// Width registered at `index`.
    #[inline]
    fn element(index: usize) -> Option<Width> {
        Self::WIDTHS.get(index).copied()
    }
}

/// Index of `width` within `widths`.
pub const fn position(widths: &[Width], width: Width) -> Option<usize> {
    let mut i = 0;
    while i < widths.len() {
        if widths[i].same_as(width) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Whether `widths` lists `width`.
pub const fn contains(widths: &[Width], width: Width) -> bool {
    position(widths, width).is_some()
}

/// Whether `widths` satisfies the registry invariant: each entry has the
/// signedness of its predecessor and at least twice its bits.
pub const fn is_well_formed(widths: &[Width]) -> bool {
    let mut i = 1;
    while i < widths.len() {
        if !widths[i].holds_product_of(widths[i - 1]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Storage type `T` is registered in this value system.
///
/// Requiring `S: Contains<T>` for a `T` that is absent is a build error:
///
/// ```compile_fail
/// use light_units::numeric::Contains;
///
/// light_units::value_system! { struct Small[i8, i16]; }
///
/// let _ = <Small as Contains<i32>>::POSITION;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{T}` is not contained in value system `{Self}`",
    label = "item not contained in list"
)]
pub trait Contains<T: Storage>: ValueSystem {
    /// Index of `T` in the registry.
    const POSITION: usize;
}

/// The registered type directly after `T`.
///
/// The widest entry has no successor:
///
/// ```compile_fail
/// use light_units::numeric::NextWider;
///
/// light_units::value_system! { struct Small[i8, i16]; }
///
/// let _: <Small as NextWider<i16>>::Wider = 0;
/// ```
#[diagnostic::on_unimplemented(
    message = "value system `{Self}` has no type wider than `{T}`",
    label = "no entry beyond the end of the list"
)]
pub trait NextWider<T: Storage>: Contains<T> {
    /// Successor of `T`.
    type Wider: Storage;
}

/// The wider of two registered types.
#[diagnostic::on_unimplemented(
    message = "`{A}` and `{B}` are not both contained in value system `{Self}`"
)]
pub trait WiderOf<A: Storage, B: Storage>: Contains<A> + Contains<B> {
    /// Registered type at the larger of both positions.
    type Wider: Storage;
}

/// Width used for the product of an `A` and a `B`: the successor of the wider
/// operand type.
pub trait Promote<A: Storage, B: Storage>: WiderOf<A, B> {
    /// Type the product is computed in.
    type Product: Storage;
}

impl<S, A, B> Promote<A, B> for S
where
    A: Storage,
    B: Storage,
    S: WiderOf<A, B> + NextWider<<S as WiderOf<A, B>>::Wider>,
{
    type Product = <S as NextWider<<S as WiderOf<A, B>>::Wider>>::Wider;
}

/// Successor of `T` in value system `S`.
pub type Wider<S, T> = <S as NextWider<T>>::Wider;

/// Product type of `A` and `B` in value system `S`.
pub type Product<S, A, B> = <S as Promote<A, B>>::Product;

/// Declare a value system.
///
/// ```
/// use light_units::numeric::{Contains, Product, ValueSystem, Width};
///
/// light_units::value_system! {
///     /// Signed types for 32-bit targets.
///     pub struct Signed[i8, i16, i32, i64];
/// }
///
/// assert_eq!(<Signed as Contains<i32>>::POSITION, 2);
/// assert_eq!(Signed::position(Width::of::<i64>()), Some(3));
/// let product: Product<Signed, i16, i8> = 1_000_000;
/// assert_eq!(product, 1_000_000i32);
/// ```
///
/// Lists that are not strictly ascending by at least a factor of two, or
/// that mix signedness, are rejected at compile time:
///
/// ```compile_fail
/// light_units::value_system! { struct Mixed[i8, u16]; }
/// ```
#[macro_export]
macro_rules! value_system {
    (@contains $name:ident; $pos:expr; ) => {};
    (@contains $name:ident; $pos:expr; $head:ty $(, $tail:ty)*) => {
        impl $crate::numeric::Contains<$head> for $name {
            const POSITION: usize = $pos;
        }
        $crate::value_system!(@contains $name; $pos + 1; $($tail),*);
    };

    (@next $name:ident; $a:ty, $b:ty $(, $rest:ty)*) => {
        impl $crate::numeric::NextWider<$a> for $name {
            type Wider = $b;
        }
        $crate::value_system!(@next $name; $b $(, $rest)*);
    };
    (@next $name:ident; $($last:ty)?) => {};

    (@wider $name:ident; [$($seen:ty),*]; ) => {};
    (@wider $name:ident; [$($seen:ty),*]; $cur:ty $(, $rest:ty)*) => {
        impl $crate::numeric::WiderOf<$cur, $cur> for $name {
            type Wider = $cur;
        }
        $(
            impl $crate::numeric::WiderOf<$seen, $cur> for $name {
                type Wider = $cur;
            }
            impl $crate::numeric::WiderOf<$cur, $seen> for $name {
                type Wider = $cur;
            }
        )*
        $crate::value_system!(@wider $name; [$($seen,)* $cur]; $($rest),*);
    };

    ($(#[$meta:meta])* $vis:vis struct $name:ident [$($t:ty),* $(,)?];) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::numeric::ValueSystem for $name {
            const WIDTHS: &'static [$crate::numeric::Width] =
                &[$(<$t as $crate::numeric::Storage>::WIDTH),*];
        }

        const _: () = assert!(
            $crate::numeric::is_well_formed(<$name as $crate::numeric::ValueSystem>::WIDTHS),
            "value system entries must share signedness and at least double in width"
        );

        $crate::value_system!(@contains $name; 0usize; $($t),*);
        $crate::value_system!(@next $name; $($t),*);
        $crate::value_system!(@wider $name; []; $($t),*);
    };
}
