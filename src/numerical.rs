//! Numerical differentiation on manifolds
//!
//! Central-difference Jacobians expressed in the default charts of the input and
//! output types. For `f: X → Y` the column for tangent direction `j` is
//!
//! ```text
//! (local(f(x), f(retract(x, +δ·e_j))) − local(f(x), f(retract(x, −δ·e_j)))) / 2δ
//! ```
//!
//! These are used to validate the analytic Jacobians of the geometry module.
//! The result is a dense `Y::DIM × X::DIM` matrix.

use crate::concepts::{Chart, Manifold, TangentVector};
use nalgebra::DMatrix;
use thiserror::Error;
use tracing::error;

/// Numerical differentiation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericalError {
    /// The finite-difference step is not a positive finite number
    #[error("Invalid finite-difference step: {0} (must be finite and > 0)")]
    InvalidStep(f64),
}

impl NumericalError {
    /// Log the error with tracing::error and return self for chaining
    #[must_use]
    pub fn log(self) -> Self {
        error!("{}", self);
        self
    }
}

/// Result type for numerical differentiation
pub type NumericalResult<T> = Result<T, NumericalError>;

/// Configuration for central differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericalDerivativeConfig {
    /// Step taken along each tangent direction
    pub delta: f64,
}

impl Default for NumericalDerivativeConfig {
    fn default() -> Self {
        Self { delta: 1e-5 }
    }
}

impl NumericalDerivativeConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the finite-difference step
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Check that the step is usable.
    pub fn validate(&self) -> NumericalResult<()> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(NumericalError::InvalidStep(self.delta).log());
        }
        Ok(())
    }
}

/// Tangent vector with `value` at coordinate `index` and zero elsewhere.
fn basis_vector<T: TangentVector>(index: usize, value: f64) -> T {
    let mut coords = vec![0.0; T::SIZE];
    coords[index] = value;
    T::from_coords(&coords)
}

/// Jacobian of a unary function `f: X → Y`.
pub fn numerical_derivative11<Y, X, F>(
    f: F,
    x: &X,
    config: &NumericalDerivativeConfig,
) -> NumericalResult<DMatrix<f64>>
where
    X: Manifold,
    Y: Manifold,
    F: Fn(&X) -> Y,
{
    config.validate()?;

    let delta = config.delta;
    let y0 = f(x);
    let mut jacobian = DMatrix::zeros(Y::DIM, X::DIM);

    for j in 0..X::DIM {
        let step_plus = basis_vector::<X::TangentVector>(j, delta);
        let step_minus = basis_vector::<X::TangentVector>(j, -delta);

        let y_plus = f(&<X::DefaultChart as Chart>::retract(x, &step_plus));
        let y_minus = f(&<X::DefaultChart as Chart>::retract(x, &step_minus));

        let d_plus = <Y::DefaultChart as Chart>::local(&y0, &y_plus);
        let d_minus = <Y::DefaultChart as Chart>::local(&y0, &y_minus);

        for (i, (p, m)) in d_plus.coords().iter().zip(d_minus.coords()).enumerate() {
            jacobian[(i, j)] = (p - m) / (2.0 * delta);
        }
    }

    Ok(jacobian)
}

/// Jacobian of a binary function `f: X1 × X2 → Y` with respect to its first argument.
pub fn numerical_derivative21<Y, X1, X2, F>(
    f: F,
    x1: &X1,
    x2: &X2,
    config: &NumericalDerivativeConfig,
) -> NumericalResult<DMatrix<f64>>
where
    X1: Manifold,
    X2: Manifold,
    Y: Manifold,
    F: Fn(&X1, &X2) -> Y,
{
    numerical_derivative11(|a: &X1| f(a, x2), x1, config)
}

/// Jacobian of a binary function `f: X1 × X2 → Y` with respect to its second argument.
pub fn numerical_derivative22<Y, X1, X2, F>(
    f: F,
    x1: &X1,
    x2: &X2,
    config: &NumericalDerivativeConfig,
) -> NumericalResult<DMatrix<f64>>
where
    X1: Manifold,
    X2: Manifold,
    Y: Manifold,
    F: Fn(&X1, &X2) -> Y,
{
    numerical_derivative11(|b: &X2| f(x1, b), x2, config)
}
