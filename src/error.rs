//! Error types for the planar-pose library
//!
//! Each module owns a small `thiserror` enum:
//! - [`ManifoldError`] for geometric operations (zero-distance singularities, bad rotations)
//! - [`NumericalError`] for numerical differentiation settings
//!
//! [`PlanarPoseError`] wraps both so applications can use a single error type
//! with `?`, while the module error stays reachable as the source:
//!
//! ```text
//! PlanarPoseError::Manifold(
//!     ManifoldError::ZeroDistance { operation: "range" }
//! )
//! ```

use crate::{geometry::ManifoldError, numerical::NumericalError};
use std::error::Error as StdError;
use thiserror::Error;

/// Result type for fallible operations across the library
pub type PlanarPoseResult<T> = Result<T, PlanarPoseError>;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanarPoseError {
    /// Geometric operation errors
    #[error("Geometry error")]
    Manifold(#[from] ManifoldError),

    /// Numerical differentiation errors
    #[error("Numerical differentiation error")]
    Numerical(#[from] NumericalError),
}

impl PlanarPoseError {
    /// Full error chain, one error per line.
    ///
    /// ```
    /// use planar_pose::{ManifoldError, PlanarPoseError};
    ///
    /// let err = PlanarPoseError::from(ManifoldError::ZeroDistance { operation: "range" });
    /// assert_eq!(err.chain(), "Geometry error\n  → range is singular at zero distance");
    /// ```
    pub fn chain(&self) -> String {
        let mut chain = vec![self.to_string()];
        let mut source = self.source();

        while let Some(err) = source {
            chain.push(format!("  → {}", err));
            source = err.source();
        }

        chain.join("\n")
    }

    /// Single-line error chain for log messages.
    pub fn chain_compact(&self) -> String {
        let mut chain = vec![self.to_string()];
        let mut source = self.source();

        while let Some(err) = source {
            chain.push(err.to_string());
            source = err.source();
        }

        chain.join(" → ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point2, Pose2, range_with_jacobians};
    use nalgebra::Matrix1x3;

    fn range_from_origin(point: &Point2) -> PlanarPoseResult<f64> {
        let mut h1 = Matrix1x3::zeros();
        let r = range_with_jacobians(&Pose2::identity(), point, Some(&mut h1), None)?;
        Ok(r)
    }

    #[test]
    fn test_question_mark_conversion() {
        assert_eq!(range_from_origin(&Point2::new(3.0, 4.0)), Ok(5.0));

        match range_from_origin(&Point2::identity()) {
            Err(PlanarPoseError::Manifold(ManifoldError::ZeroDistance { operation })) => {
                assert_eq!(operation, "range");
            }
            other => panic!("Expected ZeroDistance, got {:?}", other),
        }
    }

    #[test]
    fn test_chain_compact() {
        let error = PlanarPoseError::from(NumericalError::InvalidStep(-1.0));
        let chain = error.chain_compact();
        assert!(chain.starts_with("Numerical differentiation error → "));
        assert!(chain.contains("-1"));
    }

    #[test]
    fn test_source_is_module_error() {
        let error = PlanarPoseError::from(ManifoldError::InvalidNumber);
        let source = error.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("Invalid number: NaN or Inf detected"));
    }
}
