//! Structure contracts as seen from a downstream crate.

use nalgebra::{Vector1, Vector3};
use planar_pose::concepts::{
    GroupTag, IsChart, IsManifold, VectorSpaceTag, group, manifold, vector_space,
};
use planar_pose::geometry::{Point2Chart, Pose2Chart, Rot2Chart};
use planar_pose::{
    Chart, Group, LieGroup, Manifold, Point2, Pose2, Rot2, StructureCategory, TangentVector,
    Testable, VectorSpace, additive_group, assert_group, assert_lie_group, assert_manifold,
    assert_vector_space, multiplicative_group,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::ops::{Add, Mul, Neg, Sub};

assert_lie_group!(Pose2);
assert_lie_group!(Rot2);
assert_vector_space!(Point2);
assert_vector_space!(f64);
assert_vector_space!(Vector3<f64>);
assert_manifold!(Pose2);
assert_group!(Rot2);

/// Distances along a line, defined entirely outside the library.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Meters(f64);

impl Meters {
    fn identity() -> Self {
        Meters(0.0)
    }
}

impl Add for Meters {
    type Output = Meters;

    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Meters;

    fn sub(self, rhs: Meters) -> Meters {
        Meters(self.0 - rhs.0)
    }
}

impl Neg for Meters {
    type Output = Meters;

    fn neg(self) -> Meters {
        Meters(-self.0)
    }
}

impl StructureCategory for Meters {
    type Category = VectorSpaceTag;
}

impl Testable for Meters {
    fn equals(&self, other: &Self, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

additive_group!(Meters);

struct MetersChart;

impl Chart for MetersChart {
    type Manifold = Meters;

    fn local(origin: &Meters, other: &Meters) -> Vector1<f64> {
        Vector1::new(other.0 - origin.0)
    }

    fn retract(origin: &Meters, tangent: &Vector1<f64>) -> Meters {
        Meters(origin.0 + tangent[0])
    }
}

impl Manifold for Meters {
    const DIM: usize = 1;
    type TangentVector = Vector1<f64>;
    type DefaultChart = MetersChart;
}

assert_vector_space!(Meters);

/// Non-zero scale factors under multiplication, tagged as a plain group.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gain(f64);

impl Gain {
    fn identity() -> Self {
        Gain(1.0)
    }

    fn inverse(&self) -> Self {
        Gain(1.0 / self.0)
    }
}

impl Mul for Gain {
    type Output = Gain;

    fn mul(self, rhs: Gain) -> Gain {
        Gain(self.0 * rhs.0)
    }
}

impl StructureCategory for Gain {
    type Category = GroupTag;
}

impl Testable for Gain {
    fn equals(&self, other: &Self, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

multiplicative_group!(Gain);
assert_group!(Gain);

/// Product of a sequence of group elements, left to right.
fn product<T: Group>(elements: &[T]) -> T {
    elements
        .iter()
        .fold(T::identity(), |acc, element| acc.compose(element))
}

/// Step from `origin` along `tangent` and measure the step back.
fn step_and_measure<T: LieGroup>(origin: &T, tangent: &T::TangentVector) -> T::TangentVector {
    let moved = <T::DefaultChart as Chart>::retract(origin, tangent);
    <T::DefaultChart as Chart>::local(origin, &moved)
}

/// Mirror `a` through `center`, once with arithmetic and once with group operations.
fn reflect<T: VectorSpace + Testable>(a: &T, center: &T) -> T {
    let by_arithmetic = center.clone() - (a.clone() - center.clone());
    let by_group = center.compose(&a.between(center));
    assert!(by_arithmetic.equals(&by_group, 1e-12));
    by_arithmetic
}

#[test]
fn test_dimensions() {
    assert_eq!(IsManifold::<Pose2>::dim(), 3);
    assert_eq!(IsManifold::<Rot2>::dim(), 1);
    assert_eq!(IsManifold::<Point2>::dim(), 2);
    assert_eq!(IsManifold::<Meters>::dim(), 1);
    assert_eq!(<Pose2 as Manifold>::DIM, <Vector3<f64> as TangentVector>::SIZE);
}

#[test]
fn test_generic_product_over_groups() {
    let poses = [
        Pose2::from_xy_angle(1.0, 0.0, 0.5),
        Pose2::from_xy_angle(0.0, 2.0, -0.25),
        Pose2::from_xy_angle(-1.0, 0.5, 1.0),
    ];
    let expected = poses[0] * poses[1] * poses[2];
    assert!(product(&poses).equals(&expected, 1e-12));

    assert_eq!(product(&[Meters(1.0), Meters(2.5), Meters(-0.5)]), Meters(3.0));
    assert!(product(&[Gain(2.0), Gain(4.0), Gain(0.25)]).equals(&Gain(2.0), 1e-12));
    assert!(product::<Rot2>(&[]).equals(&Rot2::identity(), 0.0));
}

#[test]
fn test_generic_lie_group_step() {
    let small = Vector3::new(0.01, -0.02, 0.03);
    let measured = step_and_measure(&Pose2::from_xy_angle(3.0, -1.0, 2.0), &small);
    assert!((measured - small).norm() < 1e-12);

    let measured = step_and_measure(&Rot2::from_angle(-3.0), &Vector1::new(0.1));
    assert!((measured[0] - 0.1).abs() < 1e-12);
}

#[test]
fn test_generic_vector_space_arithmetic() {
    assert!(reflect(&Meters(1.0), &Meters(3.0)).equals(&Meters(5.0), 1e-12));
    let m = reflect(&Point2::new(0.0, 0.0), &Point2::new(2.0, 4.0));
    assert!(m.equals(&Point2::new(4.0, 8.0), 1e-12));
    let v = reflect(&Vector3::new(1.0, 1.0, 1.0), &Vector3::zeros());
    assert!(v.equals(&Vector3::new(-1.0, -1.0, -1.0), 1e-12));
}

#[test]
fn test_chart_round_trips() {
    let p = Pose2::from_xy_angle(1.0, 2.0, 3.0);
    let q = Pose2::from_xy_angle(-2.0, 0.5, -3.0);
    assert!(IsChart::<Pose2Chart>::round_trip(&p, &q).equals(&q, 1e-9));

    let r1 = Rot2::from_angle(0.2);
    let r2 = Rot2::from_angle(-2.9);
    assert!(IsChart::<Rot2Chart>::round_trip(&r1, &r2).equals(&r2, 1e-12));

    let a = Point2::new(1.0, 1.0);
    let b = Point2::new(-3.0, 2.0);
    assert!(IsChart::<Point2Chart>::round_trip(&a, &b).equals(&b, 1e-12));
}

#[test]
fn test_axioms_on_random_samples() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let p1 = Pose2::from_xy_angle(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-3.1..3.1),
        );
        let p2 = Pose2::from_xy_angle(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-3.1..3.1),
        );
        assert!(group::check_invariants(&p1, &p2, 1e-9));
        assert!(manifold::check_invariants(&p1, &p2, 1e-9));
        assert!(group::check_invariants(&p1.rotation(), &p2.rotation(), 1e-9));

        let a = p1.translation();
        let b = p2.translation();
        assert!(group::check_invariants(&a, &b, 1e-9));
        assert!(vector_space::check_invariants(&a, &b, 1e-12));
    }
}

#[test]
fn test_axioms_on_downstream_types() {
    assert!(vector_space::check_invariants(&Meters(2.0), &Meters(-7.5), 0.0));
    assert!(manifold::check_invariants(&Meters(2.0), &Meters(-7.5), 1e-15));
    assert!(group::check_invariants(&Gain(0.5), &Gain(8.0), 1e-12));
}

#[test]
fn test_group_free_functions() {
    let a = Pose2::from_xy_angle(1.0, 2.0, 0.4);
    let b = Pose2::from_xy_angle(-1.0, 0.0, 1.4);

    assert!(group::compose(&a, &b).equals(&(a * b), 1e-12));
    assert!(group::between(&a, &b).equals(&(a.inverse() * b), 1e-12));
    assert_eq!(group::between(&a, &b), a.between(&b));
    assert_eq!(
        group::between(&a.rotation(), &b.rotation()),
        a.rotation().between(&b.rotation())
    );
    assert!(group::inverse(&a).equals(&a.inverse(), 1e-12));
    assert!(group::identity::<Pose2>().equals(&Pose2::identity(), 0.0));
}
