//! Vector space contract: an additive Lie group with ordinary vector arithmetic.

use super::{
    Additive, Group, IsLieGroup, LieGroup, StructureCategory, Testable, VectorSpaceStructure,
};
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};
use tracing::debug;

/// A Lie group whose group operation is vector addition.
///
/// Implemented automatically for every additive Lie group tagged with a
/// [`VectorSpaceStructure`] tag.
pub trait VectorSpace:
    LieGroup + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self>
{
}

impl<T> VectorSpace for T
where
    T: LieGroup
        + Group<Flavor = Additive>
        + Add<Output = T>
        + Sub<Output = T>
        + Neg<Output = T>,
    <T as StructureCategory>::Category: VectorSpaceStructure,
{
}

/// Concept check for vector spaces.
pub struct IsVectorSpace<T>(PhantomData<T>);

impl<T> IsVectorSpace<T>
where
    T: VectorSpace + Group<Flavor = Additive>,
    <T as StructureCategory>::Category: VectorSpaceStructure,
{
    /// Evaluates to `()` for a conforming type, fails the build otherwise.
    pub const VALID: () = IsLieGroup::<T>::VALID;
}

/// Vector space invariants.
///
/// Checks that the group operations agree with the arithmetic:
/// `compose(a, b) == a + b`, `between(a, b) == b - a`, `inverse(a) == -a`.
pub fn check_invariants<T>(a: &T, b: &T, tolerance: f64) -> bool
where
    T: VectorSpace + Testable,
{
    if !a.compose(b).equals(&(a.clone() + b.clone()), tolerance) {
        debug!("vector space invariant violated: compose(a, b) != a + b");
        return false;
    }

    if !a.between(b).equals(&(b.clone() - a.clone()), tolerance) {
        debug!("vector space invariant violated: between(a, b) != b - a");
        return false;
    }

    if !a.inverse().equals(&(-a.clone()), tolerance) {
        debug!("vector space invariant violated: inverse(a) != -a");
        return false;
    }

    true
}

/// Fails the build unless the type satisfies [`IsVectorSpace`].
#[macro_export]
macro_rules! assert_vector_space {
    ($t:ty) => {
        const _: () = $crate::concepts::IsVectorSpace::<$t>::VALID;
    };
}
