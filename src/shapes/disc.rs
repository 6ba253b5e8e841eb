//! Flat round shapes: circles and ellipses.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::{Point3, Real, Vector3};

/// A flat disc facing along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Point3,
    pub normal: Vector3,
    pub radius: Real,
}

impl Circle {
    pub fn new(center: Point3, normal: Vector3, radius: Real) -> Circle {
        Circle {
            center,
            normal: normal.normalize(),
            radius,
        }
    }
}

impl Bounded for Circle {
    fn aabb(&self) -> Aabb {
        Aabb::around(&self.center, self.radius)
    }
}

impl Primitive for Circle {
    const KIND: ShapeKind = ShapeKind::Circle;

    fn centroid(&self) -> Point3 {
        self.center
    }
}

/// A flat ellipse facing along `normal`, with two in-plane radii.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    pub center: Point3,
    pub normal: Vector3,
    pub radius_a: Real,
    pub radius_b: Real,
}

impl Ellipse {
    pub fn new(center: Point3, normal: Vector3, radius_a: Real, radius_b: Real) -> Ellipse {
        Ellipse {
            center,
            normal: normal.normalize(),
            radius_a,
            radius_b,
        }
    }

    /// The larger of both radii.
    pub fn max_radius(&self) -> Real {
        self.radius_a.max(self.radius_b)
    }
}

impl Bounded for Ellipse {
    fn aabb(&self) -> Aabb {
        Aabb::around(&self.center, self.max_radius())
    }
}

impl Primitive for Ellipse {
    const KIND: ShapeKind = ShapeKind::Ellipse;

    fn centroid(&self) -> Point3 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use crate::aabb::Bounded;
    use crate::shapes::{Circle, Ellipse};
    use crate::{Point3, Vector3};

    #[test]
    fn test_disc_bounds() {
        let center = Point3::new(0.0, 1.0, 0.0);
        let circle = Circle::new(center, Vector3::y(), 2.0);
        let ellipse = Ellipse::new(center, Vector3::y(), 0.5, 2.0);
        assert_eq!(circle.aabb(), ellipse.aabb());
        assert_eq!(ellipse.aabb().max, Point3::new(2.0, 3.0, 2.0));
    }
}
