//! Planar geometry types for pose-graph optimization.
//!
//! Type     | Structure    | dim | Representation           | Tangent (order)      | Chart
//! -------- | ------------ | --- | ------------------------ | -------------------- | ------------------------
//! `f64`    | vector space | 1   | scalar                   | `[d]`                | `a + d`
//! `SVector`| vector space | N   | `SVector<f64, N>`        | `[d₀ … d_N]`         | `a + d`
//! `Point2` | vector space | 2   | `Vector2<f64>`           | `[dx, dy]`           | `a + d`
//! `Rot2`   | Lie group    | 1   | unit complex `(c, s)`    | `[dθ]`               | `R ∘ R(dθ)`
//! `Pose2`  | Lie group    | 3   | `(Rot2, Point2)`         | `[dx, dy, dθ]`       | `p ∘ Exp([dx, dy, dθ])`
//!
//! # Jacobian conventions
//!
//! Every Jacobian is expressed in the tangent coordinates of the argument and of
//! the result, using the default chart of each. Perturbations of a `Pose2` are
//! applied in its body frame (right perturbation), and the tangent vector is
//! ordered translation first, rotation last: `(δx, δy, δθ)`. A Jacobian with
//! respect to a pose therefore always has the rotation column last.
//!
//! Jacobians are optional outputs. Passing `None` skips the derivative computation
//! entirely; passing `Some(&mut m)` overwrites `m`.

use thiserror::Error;
use tracing::error;

pub mod point2;
pub mod pose2;
pub mod rot2;
pub mod vector;

pub use point2::{Point2, Point2Chart};
pub use pose2::{
    Pose2, Pose2Chart, between, bearing, bearing_with_jacobians, compose, inverse, range,
    range_with_jacobians, transform_from, transform_to,
};
pub use rot2::{Rot2, Rot2Chart, relative_bearing, relative_bearing_with_jacobian};
pub use vector::{ScalarChart, VectorChart};

/// Distances at or below this are treated as coincident points.
pub const ZERO_DISTANCE_THRESHOLD: f64 = f64::EPSILON;

/// Errors raised by geometric operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManifoldError {
    /// A Jacobian was requested where the operation is singular (coincident points)
    #[error("{operation} is singular at zero distance")]
    ZeroDistance { operation: &'static str },

    /// NaN or Inf detected in a manifold element
    #[error("Invalid number: NaN or Inf detected")]
    InvalidNumber,

    /// Normalization failed for a manifold element
    #[error("Normalization failed: {0}")]
    NormalizationFailed(String),
}

impl ManifoldError {
    /// Log the error with tracing::error and return self for chaining
    ///
    /// # Example
    /// ```ignore
    /// return Err(ManifoldError::InvalidNumber.log());
    /// ```
    #[must_use]
    pub fn log(self) -> Self {
        error!("{}", self);
        self
    }
}

/// Result type for geometric operations.
pub type ManifoldResult<T> = Result<T, ManifoldError>;
