//! Algebraic structure contracts for optimization variables.
//!
//! Any type that wants to take part in nonlinear least squares optimization declares
//! which algebraic structure it has and implements the operations that structure
//! requires:
//!
//! Structure     | Tag              | Required traits                    | Concept check
//! ------------- | ---------------- | ---------------------------------- | ---------------
//! Manifold      | `ManifoldTag`    | [`Manifold`] + [`Chart`]           | [`IsManifold`]
//! Group         | `GroupTag`       | [`Group`]                          | [`IsGroup`]
//! Lie group     | `LieGroupTag`    | [`Manifold`] + [`Group`]           | [`IsLieGroup`]
//! Vector space  | `VectorSpaceTag` | Lie group + `Add`/`Sub`/`Neg`      | [`IsVectorSpace`]
//!
//! The tags form a lattice: a vector space is a Lie group, and a Lie group is both a
//! manifold and a group. The lattice is encoded with marker-trait supertraits, so
//! a type tagged [`LieGroupTag`] satisfies every bound that asks for
//! [`ManifoldStructure`] or [`GroupStructure`], while a type tagged [`GroupTag`]
//! does not satisfy [`ManifoldStructure`].
//!
//! Structural mismatches are build errors. The `assert_*` macros turn a concept
//! check into a `const` item:
//!
//! ```
//! use planar_pose::{Pose2, assert_lie_group};
//!
//! assert_lie_group!(Pose2);
//! ```
//!
//! The tag alone decides which checks a type passes. `Offset` below implements
//! [`Manifold`], [`Chart`] and [`Group`] (the impls are hidden), and tagged as a
//! Lie group it passes:
//!
//! ```
//! # use nalgebra::Vector1;
//! # use planar_pose::concepts::{Chart, Manifold, StructureCategory};
//! # use planar_pose::additive_group;
//! #[derive(Clone, Copy)]
//! struct Offset(f64);
//! # impl Offset { fn identity() -> Self { Offset(0.0) } }
//! # impl std::ops::Add for Offset { type Output = Offset; fn add(self, o: Offset) -> Offset { Offset(self.0 + o.0) } }
//! # impl std::ops::Sub for Offset { type Output = Offset; fn sub(self, o: Offset) -> Offset { Offset(self.0 - o.0) } }
//! # impl std::ops::Neg for Offset { type Output = Offset; fn neg(self) -> Offset { Offset(-self.0) } }
//! # struct OffsetChart;
//! # impl Chart for OffsetChart {
//! #     type Manifold = Offset;
//! #     fn local(a: &Offset, b: &Offset) -> Vector1<f64> { Vector1::new(b.0 - a.0) }
//! #     fn retract(a: &Offset, v: &Vector1<f64>) -> Offset { Offset(a.0 + v[0]) }
//! # }
//! # impl Manifold for Offset {
//! #     const DIM: usize = 1;
//! #     type TangentVector = Vector1<f64>;
//! #     type DefaultChart = OffsetChart;
//! # }
//! # additive_group!(Offset);
//! use planar_pose::{assert_lie_group, concepts::LieGroupTag};
//!
//! impl StructureCategory for Offset { type Category = LieGroupTag; }
//! assert_lie_group!(Offset);
//! ```
//!
//! The same type tagged as a plain group cannot be used where a Lie group is
//! required:
//!
//! ```compile_fail
//! # use nalgebra::Vector1;
//! # use planar_pose::concepts::{Chart, Manifold, StructureCategory};
//! # use planar_pose::additive_group;
//! #[derive(Clone, Copy)]
//! struct Offset(f64);
//! # impl Offset { fn identity() -> Self { Offset(0.0) } }
//! # impl std::ops::Add for Offset { type Output = Offset; fn add(self, o: Offset) -> Offset { Offset(self.0 + o.0) } }
//! # impl std::ops::Sub for Offset { type Output = Offset; fn sub(self, o: Offset) -> Offset { Offset(self.0 - o.0) } }
//! # impl std::ops::Neg for Offset { type Output = Offset; fn neg(self) -> Offset { Offset(-self.0) } }
//! # struct OffsetChart;
//! # impl Chart for OffsetChart {
//! #     type Manifold = Offset;
//! #     fn local(a: &Offset, b: &Offset) -> Vector1<f64> { Vector1::new(b.0 - a.0) }
//! #     fn retract(a: &Offset, v: &Vector1<f64>) -> Offset { Offset(a.0 + v[0]) }
//! # }
//! # impl Manifold for Offset {
//! #     const DIM: usize = 1;
//! #     type TangentVector = Vector1<f64>;
//! #     type DefaultChart = OffsetChart;
//! # }
//! # additive_group!(Offset);
//! use planar_pose::{assert_lie_group, concepts::GroupTag};
//!
//! impl StructureCategory for Offset { type Category = GroupTag; }
//! assert_lie_group!(Offset);
//! ```
//!
//! and tagged as a plain manifold it is not accepted as a group:
//!
//! ```compile_fail
//! # use nalgebra::Vector1;
//! # use planar_pose::concepts::{Chart, Manifold, StructureCategory};
//! # use planar_pose::additive_group;
//! #[derive(Clone, Copy)]
//! struct Offset(f64);
//! # impl Offset { fn identity() -> Self { Offset(0.0) } }
//! # impl std::ops::Add for Offset { type Output = Offset; fn add(self, o: Offset) -> Offset { Offset(self.0 + o.0) } }
//! # impl std::ops::Sub for Offset { type Output = Offset; fn sub(self, o: Offset) -> Offset { Offset(self.0 - o.0) } }
//! # impl std::ops::Neg for Offset { type Output = Offset; fn neg(self) -> Offset { Offset(-self.0) } }
//! # struct OffsetChart;
//! # impl Chart for OffsetChart {
//! #     type Manifold = Offset;
//! #     fn local(a: &Offset, b: &Offset) -> Vector1<f64> { Vector1::new(b.0 - a.0) }
//! #     fn retract(a: &Offset, v: &Vector1<f64>) -> Offset { Offset(a.0 + v[0]) }
//! # }
//! # impl Manifold for Offset {
//! #     const DIM: usize = 1;
//! #     type TangentVector = Vector1<f64>;
//! #     type DefaultChart = OffsetChart;
//! # }
//! # additive_group!(Offset);
//! use planar_pose::{assert_group, concepts::ManifoldTag};
//!
//! impl StructureCategory for Offset { type Category = ManifoldTag; }
//! assert_group!(Offset);
//! ```
//!
//! Algebraic laws cannot be proven by the type system. They are verified at test
//! time by the boolean `check_invariants` functions in [`manifold`], [`group`] and
//! [`vector_space`].

pub mod group;
pub mod lie_group;
pub mod manifold;
pub mod vector_space;

pub use group::{Additive, Group, GroupFlavor, IsGroup, Multiplicative};
pub use lie_group::{IsLieGroup, LieGroup};
pub use manifold::{Chart, IsChart, IsManifold, Manifold, TangentVector};
pub use vector_space::{IsVectorSpace, VectorSpace};

mod sealed {
    pub trait Sealed {}
}

/// Marker for the four structure tags.
pub trait StructureTag: sealed::Sealed + 'static {}

/// Tags that assert (at least) manifold structure.
pub trait ManifoldStructure: StructureTag {}

/// Tags that assert (at least) group structure.
pub trait GroupStructure: StructureTag {}

/// Tags that assert Lie group structure: smooth manifold and group at once.
pub trait LieGroupStructure: ManifoldStructure + GroupStructure {}

/// Tags that assert vector space structure.
pub trait VectorSpaceStructure: LieGroupStructure {}

/// A smooth manifold without a group operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifoldTag;

/// A group without a differentiable structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupTag;

/// A Lie group, e.g. SO(2) or SE(2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LieGroupTag;

/// A vector space, e.g. ℝⁿ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorSpaceTag;

impl sealed::Sealed for ManifoldTag {}
impl sealed::Sealed for GroupTag {}
impl sealed::Sealed for LieGroupTag {}
impl sealed::Sealed for VectorSpaceTag {}

impl StructureTag for ManifoldTag {}
impl StructureTag for GroupTag {}
impl StructureTag for LieGroupTag {}
impl StructureTag for VectorSpaceTag {}

impl ManifoldStructure for ManifoldTag {}
impl ManifoldStructure for LieGroupTag {}
impl ManifoldStructure for VectorSpaceTag {}

impl GroupStructure for GroupTag {}
impl GroupStructure for LieGroupTag {}
impl GroupStructure for VectorSpaceTag {}

impl LieGroupStructure for LieGroupTag {}
impl LieGroupStructure for VectorSpaceTag {}

impl VectorSpaceStructure for VectorSpaceTag {}

/// Associates a type with exactly one structure tag.
pub trait StructureCategory {
    /// The tag describing the most specific structure this type has.
    type Category: StructureTag;
}

/// Approximate equality with an absolute tolerance.
///
/// Used by the invariant checks and by convergence tests in a consuming optimizer.
/// A mismatch is a `false` result, never an error.
pub trait Testable {
    /// Returns true when every component differs from `other` by at most `tolerance`.
    fn equals(&self, other: &Self, tolerance: f64) -> bool;
}
