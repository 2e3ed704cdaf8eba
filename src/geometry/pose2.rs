//! Pose2 - rigid transformations in the plane
//!
//! A Pose2 is an element of SE(2): a rotation `R` followed by a translation `t`,
//! acting on points as `p ↦ R·p + t`.
//!
//! Tangent vectors are `[dx, dy, dθ]`, translation first and rotation last, and
//! perturbations are applied on the right: `p ∘ Exp([dx, dy, dθ])`. Every
//! Jacobian in this module has its columns in that order.
//!
//! The free functions take optional Jacobian outputs. With `None` the derivative
//! is not computed at all. `bearing` and `range` have separate `_with_jacobians`
//! entry points because their derivatives do not exist at zero distance.

use crate::concepts::{Chart, LieGroupTag, Manifold, StructureCategory, Testable};
use crate::geometry::{
    ManifoldError, ManifoldResult, Point2, Rot2, ZERO_DISTANCE_THRESHOLD,
    rot2::{relative_bearing, relative_bearing_with_jacobian},
};
use nalgebra::{
    Isometry2, Matrix1x2, Matrix1x3, Matrix2, Matrix2x3, Matrix3, Translation2, Vector3,
};
use std::{
    fmt,
    fmt::{Display, Formatter},
    ops::Mul,
};

/// A rigid transformation in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2 {
    /// Rotation part
    r: Rot2,
    /// Translation part
    t: Point2,
}

impl Display for Pose2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pose2(x: {:.4}, y: {:.4}, theta: {:.4})",
            self.x(),
            self.y(),
            self.theta()
        )
    }
}

impl Default for Pose2 {
    fn default() -> Self {
        Pose2::identity()
    }
}

impl From<Isometry2<f64>> for Pose2 {
    fn from(isometry: Isometry2<f64>) -> Self {
        Pose2::from_isometry(&isometry)
    }
}

impl From<Pose2> for Isometry2<f64> {
    fn from(pose: Pose2) -> Self {
        pose.isometry()
    }
}

impl Pose2 {
    /// Get the identity transformation.
    pub fn identity() -> Self {
        Pose2 {
            r: Rot2::identity(),
            t: Point2::identity(),
        }
    }

    /// Create a pose from its rotation and translation.
    pub fn new(r: Rot2, t: Point2) -> Self {
        Pose2 { r, t }
    }

    /// Create a pose from translation components and an angle in radians.
    pub fn from_xy_angle(x: f64, y: f64, theta: f64) -> Self {
        Pose2::new(Rot2::from_angle(theta), Point2::new(x, y))
    }

    /// Create a pose from a nalgebra isometry.
    pub fn from_isometry(isometry: &Isometry2<f64>) -> Self {
        Pose2::new(
            Rot2::new(isometry.rotation),
            Point2::new(isometry.translation.x, isometry.translation.y),
        )
    }

    /// Convert to a nalgebra isometry.
    pub fn isometry(&self) -> Isometry2<f64> {
        Isometry2::from_parts(Translation2::new(self.x(), self.y()), self.r.complex())
    }

    /// Rotation part.
    pub fn rotation(&self) -> Rot2 {
        self.r
    }

    /// Translation part.
    pub fn translation(&self) -> Point2 {
        self.t
    }

    pub fn x(&self) -> f64 {
        self.t.x()
    }

    pub fn y(&self) -> f64 {
        self.t.y()
    }

    pub fn theta(&self) -> f64 {
        self.r.theta()
    }

    /// 2×2 rotation matrix.
    pub fn rotation_matrix(&self) -> Matrix2<f64> {
        self.r.matrix()
    }

    /// 3×3 homogeneous matrix `[[R, t], [0, 0, 1]]`.
    pub fn matrix(&self) -> Matrix3<f64> {
        let mut m = Matrix3::identity();
        m.fixed_view_mut::<2, 2>(0, 0).copy_from(&self.r.matrix());
        m[(0, 2)] = self.x();
        m[(1, 2)] = self.y();
        m
    }

    /// Adjoint matrix `[[R, (t.y, -t.x)ᵀ], [0, 0, 1]]`.
    ///
    /// Maps a body-frame tangent vector of `self` to the frame `self` is expressed in:
    /// `self ∘ Exp(v) = Exp(Ad·v) ∘ self`.
    pub fn adjoint(&self) -> Matrix3<f64> {
        let mut adjoint_matrix = Matrix3::identity();
        adjoint_matrix
            .fixed_view_mut::<2, 2>(0, 0)
            .copy_from(&self.r.matrix());
        adjoint_matrix[(0, 2)] = self.y();
        adjoint_matrix[(1, 2)] = -self.x();
        adjoint_matrix
    }

    /// Inverse transformation `(Rᵀ, -Rᵀt)`.
    pub fn inverse(&self) -> Self {
        Pose2 {
            r: self.r.inverse(),
            t: -self.r.unrotate(&self.t),
        }
    }

    /// Composition `self ∘ other = (R₁R₂, t₁ + R₁t₂)`.
    pub fn compose(&self, other: &Pose2) -> Self {
        Pose2 {
            r: self.r.compose(&other.r),
            t: self.t + self.r.rotate(&other.t),
        }
    }

    /// Relative pose `self⁻¹ ∘ other`.
    pub fn between(&self, other: &Pose2) -> Self {
        Pose2 {
            r: self.r.between(&other.r),
            t: self.r.unrotate(&(other.t - self.t)),
        }
    }

    /// Map a point from this pose's frame to the outer frame: `R·p + t`.
    pub fn transform_from(&self, point: &Point2) -> Point2 {
        self.r.rotate(point) + self.t
    }

    /// Map a point from the outer frame into this pose's frame: `Rᵀ(p − t)`.
    pub fn transform_to(&self, point: &Point2) -> Point2 {
        self.r.unrotate(&(*point - self.t))
    }

    /// Exponential map from the tangent vector `[x, y, θ]`.
    pub fn expmap(tangent: &Vector3<f64>) -> Self {
        let theta = tangent[2];
        let (a, b) = exp_coefficients(theta);

        let x = a * tangent[0] - b * tangent[1];
        let y = b * tangent[0] + a * tangent[1];

        Pose2::new(Rot2::from_angle(theta), Point2::new(x, y))
    }

    /// Logarithmic map to the tangent vector `[x, y, θ]`, the inverse of [`Pose2::expmap`].
    pub fn logmap(&self) -> Vector3<f64> {
        let theta = self.theta();
        let (a, b) = exp_coefficients(theta);

        let den = 1.0 / (a * a + b * b);
        let a_scaled = a * den;
        let b_scaled = b * den;

        let x = a_scaled * self.x() + b_scaled * self.y();
        let y = -b_scaled * self.x() + a_scaled * self.y();

        Vector3::new(x, y, theta)
    }

    /// Generate a random pose with translation in [-1, 1]² and angle in [-π, π).
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        Pose2::from_xy_angle(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-std::f64::consts::PI..std::f64::consts::PI),
        )
    }

    /// Renormalize the rotation part.
    pub fn normalize(&mut self) {
        self.r.normalize();
    }

    /// Check that the rotation is unit norm and the translation is finite.
    pub fn is_valid(&self, tolerance: f64) -> bool {
        self.r.is_valid(tolerance) && self.x().is_finite() && self.y().is_finite()
    }
}

/// Coefficients `(sin θ / θ, (1 − cos θ) / θ)` of the SE(2) exponential.
fn exp_coefficients(theta: f64) -> (f64, f64) {
    let theta_sq = theta * theta;

    if theta_sq < f64::EPSILON {
        // Taylor approximation
        let a = 1.0 - theta_sq / 6.0;
        let b = 0.5 * theta - theta * theta_sq / 24.0;
        (a, b)
    } else {
        (theta.sin() / theta, (1.0 - theta.cos()) / theta)
    }
}

impl Mul for Pose2 {
    type Output = Pose2;

    fn mul(self, rhs: Pose2) -> Pose2 {
        self.compose(&rhs)
    }
}

impl Testable for Pose2 {
    fn equals(&self, other: &Self, tolerance: f64) -> bool {
        self.t.equals(&other.t, tolerance) && self.r.equals(&other.r, tolerance)
    }
}

impl StructureCategory for Pose2 {
    type Category = LieGroupTag;
}

crate::multiplicative_group!(Pose2, between = |g, h| Pose2::between(g, h));

/// Exponential chart for [`Pose2`]: `retract(p, v) = p ∘ Exp(v)`, `local(p, q) = Log(p⁻¹q)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pose2Chart;

impl Chart for Pose2Chart {
    type Manifold = Pose2;

    fn local(origin: &Pose2, other: &Pose2) -> Vector3<f64> {
        origin.between(other).logmap()
    }

    fn retract(origin: &Pose2, tangent: &Vector3<f64>) -> Pose2 {
        origin.compose(&Pose2::expmap(tangent))
    }
}

impl Manifold for Pose2 {
    const DIM: usize = 3;
    type TangentVector = Vector3<f64>;
    type DefaultChart = Pose2Chart;
}

crate::assert_lie_group!(Pose2);

/// Composition `p1 ∘ p2` with `H1 = Ad(p2⁻¹)` and `H2 = I`.
pub fn compose(
    p1: &Pose2,
    p2: &Pose2,
    h1: Option<&mut Matrix3<f64>>,
    h2: Option<&mut Matrix3<f64>>,
) -> Pose2 {
    if let Some(h) = h1 {
        *h = p2.inverse().adjoint();
    }
    if let Some(h) = h2 {
        *h = Matrix3::identity();
    }
    p1.compose(p2)
}

/// Inverse `p⁻¹` with `H = −Ad(p)`.
pub fn inverse(p: &Pose2, h: Option<&mut Matrix3<f64>>) -> Pose2 {
    if let Some(h) = h {
        *h = -p.adjoint();
    }
    p.inverse()
}

/// Map a local point to the outer frame: `R·p + t`.
///
/// `H1 = [R | R·(−p.y, p.x)ᵀ]` (2×3), `H2 = R` (2×2).
pub fn transform_from(
    pose: &Pose2,
    point: &Point2,
    h1: Option<&mut Matrix2x3<f64>>,
    h2: Option<&mut Matrix2<f64>>,
) -> Point2 {
    if let Some(h) = h1 {
        let r = pose.rotation_matrix();
        let dtheta = pose.r.rotate(&Point2::new(-point.y(), point.x()));
        h.fixed_view_mut::<2, 2>(0, 0).copy_from(&r);
        h[(0, 2)] = dtheta.x();
        h[(1, 2)] = dtheta.y();
    }
    if let Some(h) = h2 {
        *h = pose.rotation_matrix();
    }
    pose.transform_from(point)
}

/// Map an outer-frame point into the pose's frame: `q = Rᵀ(p − t)`.
///
/// `H1 = [[−1, 0, q.y], [0, −1, −q.x]]` (2×3), `H2 = Rᵀ` (2×2).
pub fn transform_to(
    pose: &Pose2,
    point: &Point2,
    h1: Option<&mut Matrix2x3<f64>>,
    h2: Option<&mut Matrix2<f64>>,
) -> Point2 {
    let q = pose.transform_to(point);
    if let Some(h) = h1 {
        *h = Matrix2x3::new(-1.0, 0.0, q.y(), 0.0, -1.0, -q.x());
    }
    if let Some(h) = h2 {
        *h = pose.r.transpose();
    }
    q
}

/// Relative pose `p1⁻¹ ∘ p2`.
///
/// `H1` is a closed form in the result rotation `(c, s)`, the world-frame
/// translation delta `(x, y) = p2.t − p1.t` and the rotation `(c2, s2)` of `p2`:
///
/// ```text
/// H1 = [ -c, -s, -s2·x + c2·y ]
///      [  s, -c, -c2·x - s2·y ]
///      [  0,  0, -1           ]
/// ```
///
/// `H2` is the identity.
pub fn between(
    p1: &Pose2,
    p2: &Pose2,
    h1: Option<&mut Matrix3<f64>>,
    h2: Option<&mut Matrix3<f64>>,
) -> Pose2 {
    let result = p1.between(p2);

    if let Some(h) = h1 {
        let (c, s) = (result.r.c(), result.r.s());
        let (c2, s2) = (p2.r.c(), p2.r.s());
        let delta = p2.t - p1.t;
        let (x, y) = (delta.x(), delta.y());

        let dt1 = -s2 * x + c2 * y;
        let dt2 = -c2 * x - s2 * y;
        *h = Matrix3::new(
            -c, -s, dt1, //
            s, -c, dt2, //
            0.0, 0.0, -1.0,
        );
    }
    if let Some(h) = h2 {
        *h = Matrix3::identity();
    }

    result
}

/// Direction from the pose to a point, in the pose's frame.
///
/// A point at the pose's origin has bearing identity.
pub fn bearing(pose: &Pose2, point: &Point2) -> Rot2 {
    relative_bearing(&pose.transform_to(point))
}

/// [`bearing`] with Jacobians chained through [`transform_to`]:
/// `H1 = D·J_pose` (1×3), `H2 = D·J_point` (1×2) where `D` comes from
/// [`relative_bearing_with_jacobian`].
///
/// # Errors
/// `ZeroDistance` if a Jacobian is requested and the point coincides with the pose.
pub fn bearing_with_jacobians(
    pose: &Pose2,
    point: &Point2,
    h1: Option<&mut Matrix1x3<f64>>,
    h2: Option<&mut Matrix1x2<f64>>,
) -> ManifoldResult<Rot2> {
    if h1.is_none() && h2.is_none() {
        return Ok(bearing(pose, point));
    }

    let mut j_pose = Matrix2x3::zeros();
    let mut j_point = Matrix2::zeros();
    let q = transform_to(
        pose,
        point,
        h1.is_some().then_some(&mut j_pose),
        h2.is_some().then_some(&mut j_point),
    );

    let mut d = Matrix1x2::zeros();
    let direction = relative_bearing_with_jacobian(&q, Some(&mut d))?;
    if let Some(h) = h1 {
        *h = d * j_pose;
    }
    if let Some(h) = h2 {
        *h = d * j_point;
    }

    Ok(direction)
}

/// Distance from the pose's origin to a point.
pub fn range(pose: &Pose2, point: &Point2) -> f64 {
    pose.transform_to(point).norm()
}

/// [`range`] with Jacobians chained through [`transform_to`]:
/// `H1 = D·J_pose` (1×3), `H2 = D·J_point` (1×2) with `D = [x/n, y/n]`.
///
/// # Errors
/// `ZeroDistance` if a Jacobian is requested and the point coincides with the pose.
pub fn range_with_jacobians(
    pose: &Pose2,
    point: &Point2,
    h1: Option<&mut Matrix1x3<f64>>,
    h2: Option<&mut Matrix1x2<f64>>,
) -> ManifoldResult<f64> {
    if h1.is_none() && h2.is_none() {
        return Ok(range(pose, point));
    }

    let mut j_pose = Matrix2x3::zeros();
    let mut j_point = Matrix2::zeros();
    let q = transform_to(
        pose,
        point,
        h1.is_some().then_some(&mut j_pose),
        h2.is_some().then_some(&mut j_point),
    );

    let n = q.norm();
    if n <= ZERO_DISTANCE_THRESHOLD {
        return Err(ManifoldError::ZeroDistance { operation: "range" }.log());
    }

    let d = Matrix1x2::new(q.x() / n, q.y() / n);
    if let Some(h) = h1 {
        *h = d * j_pose;
    }
    if let Some(h) = h2 {
        *h = d * j_point;
    }

    Ok(n)
}
