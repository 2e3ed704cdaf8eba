//! 2D points.
//!
//! `Point2` is a plain vector space: the group operation is addition and the
//! default chart is the translation `a + d`.

use crate::concepts::{Chart, Manifold, StructureCategory, Testable, VectorSpaceTag};
use nalgebra::Vector2;
use std::{
    fmt,
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

/// A point (or free vector) in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    coords: Vector2<f64>,
}

impl Display for Point2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Point2({:.4}, {:.4})", self.x(), self.y())
    }
}

impl From<Vector2<f64>> for Point2 {
    fn from(coords: Vector2<f64>) -> Self {
        Point2 { coords }
    }
}

impl From<Point2> for Vector2<f64> {
    fn from(point: Point2) -> Self {
        point.coords
    }
}

impl Point2 {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point2 {
            coords: Vector2::new(x, y),
        }
    }

    /// The origin (group identity).
    pub fn identity() -> Self {
        Point2 {
            coords: Vector2::zeros(),
        }
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Coordinates as a column vector.
    pub fn vector(&self) -> Vector2<f64> {
        self.coords
    }

    /// Euclidean norm, without overflow for large coordinates.
    pub fn norm(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2) -> f64 {
        (*other - *self).norm()
    }

    /// Generate a random point in [-1, 1]².
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        Point2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::from(self.coords + rhs.coords)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::from(self.coords - rhs.coords)
    }
}

impl Neg for Point2 {
    type Output = Point2;

    fn neg(self) -> Point2 {
        Point2::from(-self.coords)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;

    fn mul(self, scale: f64) -> Point2 {
        Point2::from(self.coords * scale)
    }
}

impl Testable for Point2 {
    fn equals(&self, other: &Self, tolerance: f64) -> bool {
        (self.x() - other.x()).abs() <= tolerance && (self.y() - other.y()).abs() <= tolerance
    }
}

impl StructureCategory for Point2 {
    type Category = VectorSpaceTag;
}

crate::additive_group!(Point2);

/// Translation chart for [`Point2`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Point2Chart;

impl Chart for Point2Chart {
    type Manifold = Point2;

    fn local(origin: &Point2, other: &Point2) -> Vector2<f64> {
        other.coords - origin.coords
    }

    fn retract(origin: &Point2, tangent: &Vector2<f64>) -> Point2 {
        Point2::from(origin.coords + tangent)
    }
}

impl Manifold for Point2 {
    const DIM: usize = 2;
    type TangentVector = Vector2<f64>;
    type DefaultChart = Point2Chart;
}

crate::assert_vector_space!(Point2);
