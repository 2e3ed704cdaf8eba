//! Lie group contract: a manifold and a group at the same time.
//!
//! A type is a [`LieGroup`] exactly when it implements [`Manifold`] and [`Group`]
//! and its structure tag derives from [`LieGroupStructure`]. There is nothing to
//! implement by hand.
//!
//! The group operations and the default chart are expected to agree to first
//! order, i.e. `retract(g, v) ≈ compose(g, exp(v))` for small `v`. This is not
//! checked here; the analytic Jacobians of concrete types are validated against
//! numerical differentiation instead.

use super::{Group, IsGroup, IsManifold, LieGroupStructure, Manifold, StructureCategory};
use std::marker::PhantomData;

/// A smooth manifold with a compatible group structure.
pub trait LieGroup: Manifold + Group {}

impl<T> LieGroup for T
where
    T: Manifold + Group,
    <T as StructureCategory>::Category: LieGroupStructure,
{
}

/// Concept check for Lie groups.
pub struct IsLieGroup<T>(PhantomData<T>);

impl<T> IsLieGroup<T>
where
    T: LieGroup,
    <T as StructureCategory>::Category: LieGroupStructure,
{
    /// Evaluates to `()` for a conforming type, fails the build otherwise.
    pub const VALID: () = {
        let () = IsManifold::<T>::VALID;
        let () = IsGroup::<T>::VALID;
    };
}

/// Fails the build unless the type satisfies [`IsLieGroup`].
#[macro_export]
macro_rules! assert_lie_group {
    ($t:ty) => {
        const _: () = $crate::concepts::IsLieGroup::<$t>::VALID;
    };
}
