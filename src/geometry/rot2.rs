//! Rot2 - rotations in the plane
//!
//! Rot2 is SO(2) stored as a unit complex number `c + i·s` with `c = cos θ`,
//! `s = sin θ`. Every constructor either normalizes its input or takes a pair the
//! caller guarantees to be unit norm, so `c² + s² = 1` holds at all times.
//!
//! The tangent space is the scalar angle `dθ`; the default chart is
//! `retract(R, dθ) = R ∘ R(dθ)`.

use crate::concepts::{Chart, LieGroupTag, Manifold, StructureCategory, Testable};
use crate::geometry::{ManifoldError, ManifoldResult, Point2, ZERO_DISTANCE_THRESHOLD};
use nalgebra::{Complex, Matrix1x2, Matrix2, UnitComplex, Vector1};
use std::{
    fmt,
    fmt::{Display, Formatter},
    ops::Mul,
};
use tracing::warn;

/// A planar rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rot2 {
    /// Unit complex number (c, s)
    complex: UnitComplex<f64>,
}

impl Display for Rot2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rot2(theta: {:.4})", self.theta())
    }
}

impl Default for Rot2 {
    fn default() -> Self {
        Rot2::identity()
    }
}

impl Rot2 {
    /// The zero rotation.
    pub fn identity() -> Self {
        Rot2 {
            complex: UnitComplex::identity(),
        }
    }

    /// Wrap a unit complex number.
    pub fn new(complex: UnitComplex<f64>) -> Self {
        Rot2 { complex }
    }

    /// Create a rotation from an angle in radians.
    pub fn from_angle(theta: f64) -> Self {
        Rot2::new(UnitComplex::from_angle(theta))
    }

    /// Create a rotation from a (cos, sin) pair, normalizing it.
    ///
    /// # Errors
    /// `InvalidNumber` if either component is NaN or infinite,
    /// `NormalizationFailed` if the pair has zero norm.
    pub fn from_cos_sin(c: f64, s: f64) -> ManifoldResult<Self> {
        if !c.is_finite() || !s.is_finite() {
            return Err(ManifoldError::InvalidNumber.log());
        }

        let norm = c.hypot(s);
        if norm <= f64::EPSILON {
            return Err(ManifoldError::NormalizationFailed(format!(
                "cannot normalize (c, s) = ({c}, {s})"
            ))
            .log());
        }

        Ok(Rot2::from_cos_sin_unchecked(c / norm, s / norm))
    }

    /// Create a rotation from a (cos, sin) pair already known to be unit norm.
    pub fn from_cos_sin_unchecked(c: f64, s: f64) -> Self {
        Rot2::new(UnitComplex::from_cos_sin_unchecked(c, s))
    }

    /// Get the underlying unit complex number.
    pub fn complex(&self) -> UnitComplex<f64> {
        self.complex
    }

    /// cos θ
    pub fn c(&self) -> f64 {
        self.complex.re
    }

    /// sin θ
    pub fn s(&self) -> f64 {
        self.complex.im
    }

    /// Rotation angle in (-π, π].
    pub fn theta(&self) -> f64 {
        self.complex.angle()
    }

    /// Rotation matrix `[[c, -s], [s, c]]`.
    pub fn matrix(&self) -> Matrix2<f64> {
        let (c, s) = (self.c(), self.s());
        Matrix2::new(c, -s, s, c)
    }

    /// Transposed rotation matrix `[[c, s], [-s, c]]`.
    pub fn transpose(&self) -> Matrix2<f64> {
        let (c, s) = (self.c(), self.s());
        Matrix2::new(c, s, -s, c)
    }

    /// Inverse rotation (-θ).
    pub fn inverse(&self) -> Self {
        Rot2::from_cos_sin_unchecked(self.c(), -self.s())
    }

    /// Composition R₁ ∘ R₂ = (c₁c₂ − s₁s₂, s₁c₂ + c₁s₂).
    pub fn compose(&self, other: &Rot2) -> Self {
        let (c1, s1, c2, s2) = (self.c(), self.s(), other.c(), other.s());
        Rot2::from_cos_sin_unchecked(c1 * c2 - s1 * s2, s1 * c2 + c1 * s2)
    }

    /// Relative rotation R₁⁻¹ ∘ R₂ = (c₁c₂ + s₁s₂, −s₁c₂ + c₁s₂).
    pub fn between(&self, other: &Rot2) -> Self {
        let (c1, s1, c2, s2) = (self.c(), self.s(), other.c(), other.s());
        Rot2::from_cos_sin_unchecked(c1 * c2 + s1 * s2, -s1 * c2 + c1 * s2)
    }

    /// Apply the rotation to a vector: R·v.
    pub fn rotate(&self, v: &Point2) -> Point2 {
        let (c, s) = (self.c(), self.s());
        Point2::new(c * v.x() - s * v.y(), s * v.x() + c * v.y())
    }

    /// Apply the inverse rotation to a vector: Rᵀ·v = (c·x + s·y, −s·x + c·y).
    pub fn unrotate(&self, v: &Point2) -> Point2 {
        let (c, s) = (self.c(), self.s());
        Point2::new(c * v.x() + s * v.y(), -s * v.x() + c * v.y())
    }

    /// Generate a random rotation.
    pub fn random() -> Self {
        Rot2::from_angle(rand::random::<f64>() * 2.0 * std::f64::consts::PI)
    }

    /// Renormalize the underlying complex number.
    pub fn normalize(&mut self) {
        let drift = (self.complex.norm() - 1.0).abs();
        if drift > 1e-9 {
            warn!("renormalizing Rot2 with norm drift {:.3e}", drift);
        }
        self.complex.renormalize();
    }

    /// Check if the (c, s) pair is unit norm within `tolerance`.
    pub fn is_valid(&self, tolerance: f64) -> bool {
        let norm_diff = (self.complex.norm() - 1.0).abs();
        norm_diff < tolerance
    }
}

impl Mul for Rot2 {
    type Output = Rot2;

    fn mul(self, rhs: Rot2) -> Rot2 {
        self.compose(&rhs)
    }
}

impl Testable for Rot2 {
    fn equals(&self, other: &Self, tolerance: f64) -> bool {
        (self.c() - other.c()).abs() <= tolerance && (self.s() - other.s()).abs() <= tolerance
    }
}

impl StructureCategory for Rot2 {
    type Category = LieGroupTag;
}

crate::multiplicative_group!(Rot2, between = |g, h| Rot2::between(g, h));

/// Angle chart for [`Rot2`]: `local(R₁, R₂) = θ(R₁⁻¹R₂)`, `retract(R, dθ) = R ∘ R(dθ)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rot2Chart;

impl Chart for Rot2Chart {
    type Manifold = Rot2;

    fn local(origin: &Rot2, other: &Rot2) -> Vector1<f64> {
        Vector1::new(origin.between(other).theta())
    }

    fn retract(origin: &Rot2, tangent: &Vector1<f64>) -> Rot2 {
        origin.compose(&Rot2::from_angle(tangent[0]))
    }
}

impl Manifold for Rot2 {
    const DIM: usize = 1;
    type TangentVector = Vector1<f64>;
    type DefaultChart = Rot2Chart;
}

crate::assert_lie_group!(Rot2);

/// Direction of a vector as a rotation.
///
/// The zero vector has no direction; it maps to the identity.
pub fn relative_bearing(d: &Point2) -> Rot2 {
    let n = d.norm();
    if n > ZERO_DISTANCE_THRESHOLD {
        Rot2::from_cos_sin_unchecked(d.x() / n, d.y() / n)
    } else {
        Rot2::identity()
    }
}

/// Direction of a vector as a rotation, with its 1×2 Jacobian `[−y/n², x/n²]`.
///
/// # Errors
/// `ZeroDistance` if the Jacobian is requested for the zero vector.
pub fn relative_bearing_with_jacobian(
    d: &Point2,
    jacobian: Option<&mut Matrix1x2<f64>>,
) -> ManifoldResult<Rot2> {
    let Some(jac) = jacobian else {
        return Ok(relative_bearing(d));
    };

    let n = d.norm();
    if n <= ZERO_DISTANCE_THRESHOLD {
        return Err(ManifoldError::ZeroDistance {
            operation: "relative bearing",
        }
        .log());
    }

    // Divide twice so n² cannot overflow
    let (c, s) = (d.x() / n, d.y() / n);
    *jac = Matrix1x2::new(-s / n, c / n);
    Ok(relative_bearing(d))
}

impl TryFrom<Complex<f64>> for Rot2 {
    type Error = ManifoldError;

    /// Normalizes the complex number, see [`Rot2::from_cos_sin`].
    fn try_from(complex: Complex<f64>) -> ManifoldResult<Self> {
        Rot2::from_cos_sin(complex.re, complex.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{group, manifold};
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_rot2_identity() {
        let r = Rot2::identity();
        assert!((r.theta() - 0.0).abs() < TOLERANCE);
        assert_eq!(r.c(), 1.0);
        assert_eq!(r.s(), 0.0);
    }

    #[test]
    fn test_rot2_inverse() {
        let r = Rot2::from_angle(PI / 4.0);
        let r_inv = r.inverse();
        assert!((r_inv.theta() + PI / 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_rot2_compose() {
        let a = Rot2::from_angle(PI / 4.0);
        let b = Rot2::from_angle(PI / 2.0);
        let composed = a.compose(&b);
        assert!((composed.theta() - (3.0 * PI / 4.0)).abs() < TOLERANCE);
        assert!((a * b).equals(&composed, TOLERANCE));
    }

    #[test]
    fn test_rot2_between_matches_inverse_compose() {
        let a = Rot2::from_angle(0.3);
        let b = Rot2::from_angle(-2.1);
        let expected = a.inverse().compose(&b);
        assert!(a.between(&b).equals(&expected, TOLERANCE));
        assert!((a.between(&b).theta() - (-2.4)).abs() < 1e-12);
    }

    #[test]
    fn test_rot2_unrotate_inverts_rotate() {
        let r = Rot2::from_angle(1.1);
        let v = Point2::new(0.4, -2.0);
        let back = r.unrotate(&r.rotate(&v));
        assert!(back.equals(&v, TOLERANCE));
    }

    #[test]
    fn test_rot2_unrotate_formula() {
        let r = Rot2::from_angle(PI / 2.0);
        let v = Point2::new(1.0, 0.0);
        assert!(r.unrotate(&v).equals(&Point2::new(0.0, -1.0), TOLERANCE));
    }

    #[test]
    fn test_rot2_matrix() {
        let r = Rot2::from_angle(0.7);
        let expected = UnitComplex::from_angle(0.7).to_rotation_matrix().into_inner();
        assert!((r.matrix() - expected).norm() < TOLERANCE);
        assert!((r.transpose() - expected.transpose()).norm() < TOLERANCE);
    }

    #[test]
    fn test_rot2_unit_norm_after_many_operations() {
        let step = Rot2::from_angle(0.1234);
        let mut r = Rot2::identity();
        for i in 0..10_000 {
            r = if i % 3 == 0 {
                r.compose(&step).inverse()
            } else {
                r * step
            };
        }
        assert!((r.c() * r.c() + r.s() * r.s() - 1.0).abs() < 1e-9);
        assert!(r.is_valid(1e-9));
    }

    #[test]
    fn test_rot2_from_cos_sin_normalizes() {
        let r = Rot2::from_cos_sin(3.0, 4.0).unwrap();
        assert!((r.c() - 0.6).abs() < TOLERANCE);
        assert!((r.s() - 0.8).abs() < TOLERANCE);
        assert!(r.is_valid(TOLERANCE));
    }

    #[test]
    fn test_rot2_from_cos_sin_rejects_bad_input() {
        assert!(matches!(
            Rot2::from_cos_sin(0.0, 0.0),
            Err(ManifoldError::NormalizationFailed(_))
        ));
        assert_eq!(
            Rot2::from_cos_sin(f64::NAN, 1.0),
            Err(ManifoldError::InvalidNumber)
        );
        assert_eq!(
            Rot2::from_cos_sin(1.0, f64::INFINITY),
            Err(ManifoldError::InvalidNumber)
        );
    }

    #[test]
    fn test_rot2_normalize() {
        let mut r = Rot2::new(UnitComplex::new_unchecked(Complex::new(0.5, 0.5)));
        assert!(!r.is_valid(1e-6));
        r.normalize();
        assert!(r.is_valid(TOLERANCE));
    }

    #[test]
    fn test_relative_bearing() {
        let r = relative_bearing(&Point2::new(0.0, 2.0));
        assert!((r.theta() - PI / 2.0).abs() < TOLERANCE);

        let r = relative_bearing(&Point2::new(-1.0, -1.0));
        assert!((r.theta() + 3.0 * PI / 4.0).abs() < TOLERANCE);

        assert!(relative_bearing(&Point2::identity()).equals(&Rot2::identity(), TOLERANCE));
    }

    #[test]
    fn test_relative_bearing_jacobian() {
        let d = Point2::new(2.0, 1.0);
        let mut jac = Matrix1x2::zeros();
        let r = relative_bearing_with_jacobian(&d, Some(&mut jac)).unwrap();

        assert!(r.equals(&relative_bearing(&d), TOLERANCE));
        assert!((jac[(0, 0)] - (-1.0 / 5.0)).abs() < TOLERANCE);
        assert!((jac[(0, 1)] - (2.0 / 5.0)).abs() < TOLERANCE);
    }

    #[test]
    fn test_relative_bearing_of_large_vector_is_unit() {
        for d in [Point2::new(1e155, 1e155), Point2::new(-2e300, 1e300)] {
            let r = relative_bearing(&d);
            assert!(r.is_valid(1e-12));
            assert!((r.theta() - d.y().atan2(d.x())).abs() < 1e-12);

            let mut jac = Matrix1x2::zeros();
            let r = relative_bearing_with_jacobian(&d, Some(&mut jac)).unwrap();
            assert!(r.is_valid(1e-12));
            assert!(jac.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_group_between_matches_closed_form() {
        let a = Rot2::from_angle(2.9);
        let b = Rot2::from_angle(-3.0);
        assert_eq!(group::between(&a, &b), a.between(&b));
        assert_eq!(group::between(&b, &a), b.between(&a));
    }

    #[test]
    fn test_rot2_try_from_complex() {
        let r = Rot2::try_from(Complex::new(0.0, 2.0)).unwrap();
        assert!(r.equals(&Rot2::from_angle(PI / 2.0), TOLERANCE));

        assert!(matches!(
            Rot2::try_from(Complex::new(0.0, 0.0)),
            Err(ManifoldError::NormalizationFailed(_))
        ));
        assert_eq!(
            Rot2::try_from(Complex::new(f64::NAN, 0.0)),
            Err(ManifoldError::InvalidNumber)
        );
    }

    #[test]
    fn test_relative_bearing_jacobian_at_zero() {
        let mut jac = Matrix1x2::zeros();
        let result = relative_bearing_with_jacobian(&Point2::identity(), Some(&mut jac));
        assert!(matches!(result, Err(ManifoldError::ZeroDistance { .. })));

        // Without a Jacobian the zero vector is fine
        let result = relative_bearing_with_jacobian(&Point2::identity(), None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_rot2_group_and_chart_invariants() {
        let a = Rot2::from_angle(2.5);
        let b = Rot2::from_angle(-2.9);
        assert!(group::check_invariants(&a, &b, 1e-9));
        assert!(manifold::check_invariants(&a, &b, 1e-9));
    }

    #[test]
    fn test_rot2_chart_wraps_angle() {
        let a = Rot2::from_angle(PI - 0.1);
        let b = Rot2::from_angle(-PI + 0.1);
        let v = <Rot2Chart as Chart>::local(&a, &b);
        assert!((v[0] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_rot2_display() {
        assert_eq!(Rot2::from_angle(0.5).to_string(), "Rot2(theta: 0.5000)");
    }
}
