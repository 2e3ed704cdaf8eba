//! # Planar Pose
//!
//! SE(2) geometry with analytic Jacobians and compile-time algebraic structure
//! contracts, for use as variables and measurements inside a nonlinear least
//! squares (factor graph) optimizer.
//!
//! ## Features
//!
//! - **Pose2 / Rot2 / Point2**: rigid transforms, rotations and points in the plane
//! - **Analytic Jacobians**: `compose`, `inverse`, `between`, `transform_from`,
//!   `transform_to`, `bearing` and `range`, each with optional derivative outputs
//!   that cost nothing when not requested
//! - **Structure contracts**: `Manifold`, `Group`, `LieGroup` and `VectorSpace`
//!   traits with a tag lattice and `assert_*!` macros that reject non-conforming
//!   types at build time
//! - **Numerical differentiation**: central differences in the default charts, for
//!   validating hand-written Jacobians
//!
//! ## Example
//!
//! ```
//! use nalgebra::Matrix3;
//! use planar_pose::{Pose2, Testable, between};
//!
//! let p1 = Pose2::from_xy_angle(1.0, 0.0, std::f64::consts::FRAC_PI_2);
//! let p2 = Pose2::from_xy_angle(1.0, 2.0, 0.0);
//!
//! let mut h1 = Matrix3::zeros();
//! let relative = between(&p1, &p2, Some(&mut h1), None);
//!
//! assert!(p1.compose(&relative).equals(&p2, 1e-9));
//! ```
//!
//! Pose tangent vectors are ordered `[dx, dy, dθ]` and perturbations are applied
//! in the body frame; see [`geometry`] for the full convention.

pub mod concepts;
pub mod error;
pub mod geometry;
#[cfg(feature = "logging")]
pub mod logger;
pub mod numerical;

pub use concepts::{
    Chart, Group, LieGroup, Manifold, StructureCategory, TangentVector, Testable, VectorSpace,
};
pub use error::{PlanarPoseError, PlanarPoseResult};
pub use geometry::{
    ManifoldError, ManifoldResult, Point2, Pose2, Rot2, between, bearing, bearing_with_jacobians,
    compose, inverse, range, range_with_jacobians, relative_bearing,
    relative_bearing_with_jacobian, transform_from, transform_to,
};
#[cfg(feature = "logging")]
pub use logger::{init_logger, init_logger_with_level, try_init_logger_with_level};
pub use numerical::{
    NumericalDerivativeConfig, NumericalError, NumericalResult, numerical_derivative11,
    numerical_derivative21, numerical_derivative22,
};
