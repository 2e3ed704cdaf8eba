//! Scalars and fixed-size vectors as vector spaces.
//!
//! `f64` and `SVector<f64, N>` are Euclidean: the group operation is addition
//! and the chart is plain translation. This lets scalar measurements (a range)
//! and raw vectors take part in the same generic code as poses.

use crate::concepts::{Chart, Manifold, StructureCategory, Testable, VectorSpaceTag};
use nalgebra::{SVector, Vector1};

impl StructureCategory for f64 {
    type Category = VectorSpaceTag;
}

crate::additive_group!(f64, 0.0);

impl Testable for f64 {
    fn equals(&self, other: &Self, tolerance: f64) -> bool {
        (self - other).abs() <= tolerance
    }
}

/// Translation chart for scalars.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarChart;

impl Chart for ScalarChart {
    type Manifold = f64;

    fn local(origin: &f64, other: &f64) -> Vector1<f64> {
        Vector1::new(other - origin)
    }

    fn retract(origin: &f64, tangent: &Vector1<f64>) -> f64 {
        origin + tangent[0]
    }
}

impl Manifold for f64 {
    const DIM: usize = 1;
    type TangentVector = Vector1<f64>;
    type DefaultChart = ScalarChart;
}

crate::assert_vector_space!(f64);

impl<const N: usize> StructureCategory for SVector<f64, N> {
    type Category = VectorSpaceTag;
}

crate::additive_group!([const N: usize] SVector<f64, N>, SVector::<f64, N>::zeros());

impl<const N: usize> Testable for SVector<f64, N> {
    fn equals(&self, other: &Self, tolerance: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

/// Translation chart for `SVector<f64, N>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorChart<const N: usize>;

impl<const N: usize> Chart for VectorChart<N> {
    type Manifold = SVector<f64, N>;

    fn local(origin: &SVector<f64, N>, other: &SVector<f64, N>) -> SVector<f64, N> {
        other - origin
    }

    fn retract(origin: &SVector<f64, N>, tangent: &SVector<f64, N>) -> SVector<f64, N> {
        origin + tangent
    }
}

impl<const N: usize> Manifold for SVector<f64, N> {
    const DIM: usize = N;
    type TangentVector = SVector<f64, N>;
    type DefaultChart = VectorChart<N>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{Group, IsManifold, manifold, vector_space};
    use nalgebra::{Vector2, Vector3};

    crate::assert_vector_space!(Vector2<f64>);
    crate::assert_vector_space!(Vector3<f64>);

    #[test]
    fn test_scalar_group_is_addition() {
        assert_eq!(2.0_f64.compose(&3.0), 5.0);
        assert_eq!(2.0_f64.between(&3.0), 1.0);
        assert_eq!(Group::inverse(&2.0_f64), -2.0);
        assert_eq!(<f64 as Group>::identity(), 0.0);
    }

    #[test]
    fn test_scalar_invariants() {
        assert!(vector_space::check_invariants(&1.5_f64, &-4.25, 0.0));
        assert!(manifold::check_invariants(&1.5_f64, &-4.25, 1e-15));
    }

    #[test]
    fn test_vector_group_is_addition() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-1.0, 0.5, 2.0);
        assert_eq!(a.compose(&b), a + b);
        assert_eq!(a.between(&b), b - a);
        assert_eq!(<Vector3<f64> as Group>::identity(), Vector3::zeros());
    }

    #[test]
    fn test_vector_invariants() {
        let a = Vector3::new(0.1, -0.2, 0.3);
        let b = Vector3::new(5.0, 6.0, -7.0);
        assert!(vector_space::check_invariants(&a, &b, 1e-15));
        assert!(manifold::check_invariants(&a, &b, 1e-15));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(IsManifold::<f64>::dim(), 1);
        assert_eq!(IsManifold::<Vector2<f64>>::dim(), 2);
        assert_eq!(IsManifold::<Vector3<f64>>::dim(), 3);
    }
}
