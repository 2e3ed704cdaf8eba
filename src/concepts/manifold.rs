//! Manifold contract: dimension, tangent vectors and charts.
//!
//! A chart maps the neighbourhood of a point `a` to a flat tangent space:
//!
//! ```text
//! local(a, b)   : M × M   → T_a M    (offset of b as seen from a)
//! retract(a, v) : M × T_a M → M      (point reached from a along v)
//! ```
//!
//! An optimizer linearizes around `a`, solves for a tangent step `v` and applies it
//! with `retract`. The two maps must be mutually inverse near `a`.
//!
//! A manifold whose tangent vector does not match its dimension is rejected when
//! checked:
//!
//! ```compile_fail
//! use nalgebra::Vector3;
//! use planar_pose::assert_manifold;
//! use planar_pose::concepts::{Chart, Manifold, ManifoldTag, StructureCategory};
//!
//! #[derive(Clone)]
//! struct Plane;
//! struct PlaneChart;
//!
//! impl StructureCategory for Plane {
//!     type Category = ManifoldTag;
//! }
//!
//! impl Chart for PlaneChart {
//!     type Manifold = Plane;
//!     fn local(_: &Plane, _: &Plane) -> Vector3<f64> { Vector3::zeros() }
//!     fn retract(_: &Plane, _: &Vector3<f64>) -> Plane { Plane }
//! }
//!
//! impl Manifold for Plane {
//!     const DIM: usize = 2;
//!     type TangentVector = Vector3<f64>;
//!     type DefaultChart = PlaneChart;
//! }
//!
//! assert_manifold!(Plane);
//! ```

use super::{ManifoldStructure, StructureCategory, Testable};
use nalgebra::SVector;
use std::marker::PhantomData;
use tracing::debug;

/// Flat coordinates of a tangent space.
pub trait TangentVector: Clone {
    /// Number of coordinates, fixed at compile time.
    const SIZE: usize;

    /// The zero vector.
    fn zero() -> Self;

    /// View the coordinates as a slice of length [`Self::SIZE`].
    fn coords(&self) -> &[f64];

    /// Build a vector from exactly [`Self::SIZE`] coordinates.
    ///
    /// # Panics
    /// Panics if `coords.len() != Self::SIZE`.
    fn from_coords(coords: &[f64]) -> Self;
}

impl<const N: usize> TangentVector for SVector<f64, N> {
    const SIZE: usize = N;

    fn zero() -> Self {
        SVector::<f64, N>::zeros()
    }

    fn coords(&self) -> &[f64] {
        self.as_slice()
    }

    fn from_coords(coords: &[f64]) -> Self {
        SVector::<f64, N>::from_column_slice(coords)
    }
}

/// A smooth manifold of fixed dimension with a default chart.
pub trait Manifold: StructureCategory + Clone {
    /// Intrinsic dimension, equal to the size of the tangent vector.
    const DIM: usize;

    /// Tangent space coordinates.
    type TangentVector: TangentVector;

    /// Chart used by optimizers and numerical differentiation.
    type DefaultChart: Chart<Manifold = Self>;
}

/// A pair of maps between a manifold and its tangent space around a point.
pub trait Chart {
    /// The manifold this chart covers.
    type Manifold: Manifold;

    /// Tangent vector taking `origin` to `other`.
    fn local(
        origin: &Self::Manifold,
        other: &Self::Manifold,
    ) -> <Self::Manifold as Manifold>::TangentVector;

    /// Point reached by moving from `origin` along `tangent`.
    fn retract(
        origin: &Self::Manifold,
        tangent: &<Self::Manifold as Manifold>::TangentVector,
    ) -> Self::Manifold;
}

/// Concept check for charts.
pub struct IsChart<C>(PhantomData<C>);

impl<C: Chart> IsChart<C> {
    /// Exercises both maps: returns `retract(p, local(p, q))`, which should be `q`.
    pub fn round_trip(p: &C::Manifold, q: &C::Manifold) -> C::Manifold {
        let v = C::local(p, q);
        C::retract(p, &v)
    }
}

/// Concept check for manifolds.
///
/// The impl only exists for types whose structure tag derives from
/// [`ManifoldStructure`]; referencing [`IsManifold::VALID`] additionally fails
/// const evaluation when the tangent size disagrees with the dimension.
pub struct IsManifold<T>(PhantomData<T>);

impl<T> IsManifold<T>
where
    T: Manifold,
    <T as StructureCategory>::Category: ManifoldStructure,
{
    /// Evaluates to `()` for a conforming type, fails the build otherwise.
    pub const VALID: () = assert!(
        T::DIM == <T::TangentVector as TangentVector>::SIZE,
        "tangent vector size must equal the manifold dimension"
    );

    /// Intrinsic dimension of the checked type.
    pub const fn dim() -> usize {
        let () = Self::VALID;
        T::DIM
    }
}

/// Fails the build unless the type satisfies [`IsManifold`].
#[macro_export]
macro_rules! assert_manifold {
    ($t:ty) => {
        const _: () = $crate::concepts::IsManifold::<$t>::VALID;
    };
}

/// Manifold invariants.
///
/// Checks that the default chart is consistent:
/// `retract(a, local(a, b)) ≈ b` and `local(a, a) ≈ 0`.
pub fn check_invariants<T>(a: &T, b: &T, tolerance: f64) -> bool
where
    T: Manifold + Testable,
{
    let round_trip = IsChart::<T::DefaultChart>::round_trip(a, b);
    if !round_trip.equals(b, tolerance) {
        debug!("manifold invariant violated: retract(a, local(a, b)) != b");
        return false;
    }

    let self_local = <T::DefaultChart as Chart>::local(a, a);
    if self_local.coords().iter().any(|c| c.abs() > tolerance) {
        debug!("manifold invariant violated: local(a, a) != 0");
        return false;
    }

    true
}
