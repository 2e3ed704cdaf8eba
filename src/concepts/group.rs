//! Group contract: identity, composition, relative element and inverse.
//!
//! Every group has a flavor that fixes the operator syntax it is written with:
//!
//! Flavor            | compose(g, h) | between(g, h)       | inverse(g)      | identity
//! ----------------- | ------------- | ------------------- | --------------- | ----------------
//! [`Additive`]      | `g + h`       | `h - g`             | `-g`            | `T::identity()`
//! [`Multiplicative`]| `g * h`       | `g.inverse() * h`   | `g.inverse()`   | `T::identity()`
//!
//! The [`additive_group!`](crate::additive_group) and
//! [`multiplicative_group!`](crate::multiplicative_group) macros generate the
//! [`Group`] impl from those operators. A multiplicative type with a closed-form
//! relative element can hand it to the macro in place of `g.inverse() * h`.

use super::{GroupStructure, StructureCategory, Testable};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::debug;

mod sealed {
    pub trait Sealed {}
}

/// Operator syntax of a group.
///
/// `Additive` is only a valid flavor for types with `+`, binary `-` and unary `-`;
/// `Multiplicative` requires `*`. Declaring the wrong flavor fails the build.
pub trait GroupFlavor<T>: sealed::Sealed {}

/// Groups written with `+`, `-` and unary `-`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive;

/// Groups written with `*` and `inverse()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiplicative;

impl sealed::Sealed for Additive {}
impl sealed::Sealed for Multiplicative {}

impl<T> GroupFlavor<T> for Additive where T: Add<Output = T> + Sub<Output = T> + Neg<Output = T> {}

impl<T> GroupFlavor<T> for Multiplicative where T: Mul<Output = T> {}

/// A group.
pub trait Group: StructureCategory + Clone {
    /// Additive or multiplicative operator syntax.
    type Flavor: GroupFlavor<Self>;

    /// The neutral element e with `compose(e, g) = compose(g, e) = g`.
    fn identity() -> Self;

    /// Group operation g ∘ h.
    fn compose(&self, other: &Self) -> Self;

    /// Relative element g⁻¹ ∘ h.
    fn between(&self, other: &Self) -> Self;

    /// Inverse g⁻¹.
    fn inverse(&self) -> Self;
}

/// Free-function form of [`Group::compose`].
pub fn compose<T: Group>(g: &T, h: &T) -> T {
    g.compose(h)
}

/// Free-function form of [`Group::between`].
pub fn between<T: Group>(g: &T, h: &T) -> T {
    g.between(h)
}

/// Free-function form of [`Group::inverse`].
pub fn inverse<T: Group>(g: &T) -> T {
    g.inverse()
}

/// Free-function form of [`Group::identity`].
pub fn identity<T: Group>() -> T {
    T::identity()
}

/// Concept check for groups.
///
/// Only exists for types whose tag derives from [`GroupStructure`]; the flavor
/// bound on [`Group::Flavor`] has already checked the operator syntax.
pub struct IsGroup<T>(PhantomData<T>);

impl<T> IsGroup<T>
where
    T: Group,
    <T as StructureCategory>::Category: GroupStructure,
{
    /// Evaluates to `()` for a conforming type.
    pub const VALID: () = ();
}

/// Group axioms.
///
/// Checks, within `tolerance`:
/// - `compose(a, inverse(a)) == identity`
/// - `between(a, b) == compose(inverse(a), b)`
/// - `compose(a, between(a, b)) == b`
pub fn check_invariants<T>(a: &T, b: &T, tolerance: f64) -> bool
where
    T: Group + Testable,
{
    let e = T::identity();

    if !a.compose(&a.inverse()).equals(&e, tolerance) {
        debug!("group axiom violated: compose(a, inverse(a)) != identity");
        return false;
    }

    if !a.between(b).equals(&a.inverse().compose(b), tolerance) {
        debug!("group axiom violated: between(a, b) != compose(inverse(a), b)");
        return false;
    }

    if !a.compose(&a.between(b)).equals(b, tolerance) {
        debug!("group axiom violated: compose(a, between(a, b)) != b");
        return false;
    }

    true
}

/// Implements [`Group`](crate::concepts::Group) for an additive group.
///
/// The type needs `+`, `-`, unary `-` (by value) and either an inherent
/// `identity()` or an explicit identity expression:
///
/// ```ignore
/// additive_group!(Point2);                               // uses Point2::identity()
/// additive_group!(f64, 0.0);
/// additive_group!([const N: usize] SVector<f64, N>, SVector::<f64, N>::zeros());
/// ```
#[macro_export]
macro_rules! additive_group {
    ([$($generics:tt)*] $t:ty, $identity:expr) => {
        impl<$($generics)*> $crate::concepts::Group for $t {
            type Flavor = $crate::concepts::Additive;

            fn identity() -> Self {
                $identity
            }

            fn compose(&self, other: &Self) -> Self {
                self.clone() + other.clone()
            }

            fn between(&self, other: &Self) -> Self {
                other.clone() - self.clone()
            }

            fn inverse(&self) -> Self {
                -self.clone()
            }
        }
    };
    ($t:ty, $identity:expr) => {
        $crate::additive_group!([] $t, $identity);
    };
    ($t:ty) => {
        $crate::additive_group!([] $t, <$t>::identity());
    };
}

/// Implements [`Group`](crate::concepts::Group) for a multiplicative group.
///
/// The type needs `*` (by value) plus inherent `inverse(&self) -> Self` and
/// `identity() -> Self`. `between` defaults to `g.inverse() * h`; types with a
/// cheaper closed form pass it as `between = |g, h| expr`:
///
/// ```ignore
/// multiplicative_group!(Rot2, between = |g, h| Rot2::between(g, h));
/// ```
#[macro_export]
macro_rules! multiplicative_group {
    ($t:ty, between = |$g:ident, $h:ident| $between:expr) => {
        impl $crate::concepts::Group for $t {
            type Flavor = $crate::concepts::Multiplicative;

            fn identity() -> Self {
                <$t>::identity()
            }

            fn compose(&self, other: &Self) -> Self {
                self.clone() * other.clone()
            }

            fn between(&self, other: &Self) -> Self {
                let ($g, $h): (&$t, &$t) = (self, other);
                $between
            }

            fn inverse(&self) -> Self {
                <$t>::inverse(self)
            }
        }
    };
    ($t:ty) => {
        $crate::multiplicative_group!($t, between = |g, h| <$t>::inverse(g) * h.clone());
    };
}

/// Fails the build unless the type satisfies [`IsGroup`].
#[macro_export]
macro_rules! assert_group {
    ($t:ty) => {
        const _: () = $crate::concepts::IsGroup::<$t>::VALID;
    };
}
