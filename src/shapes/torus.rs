//! This module defines a Torus.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::{Point3, Real, Vector3};

/// A torus around `normal`, the tube of `minor_radius` following a circle of `major_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Torus {
    pub center: Point3,
    pub normal: Vector3,
    pub major_radius: Real,
    pub minor_radius: Real,
}

impl Torus {
    pub fn new(center: Point3, normal: Vector3, major_radius: Real, minor_radius: Real) -> Torus {
        Torus {
            center,
            normal: normal.normalize(),
            major_radius,
            minor_radius,
        }
    }
}

impl Bounded for Torus {
    fn aabb(&self) -> Aabb {
        Aabb::around(&self.center, self.major_radius + self.minor_radius)
    }
}

impl Primitive for Torus {
    const KIND: ShapeKind = ShapeKind::Torus;

    fn centroid(&self) -> Point3 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use crate::aabb::Bounded;
    use crate::shapes::Torus;
    use crate::{Point3, Vector3};

    #[test]
    fn test_torus_bounds() {
        let torus = Torus::new(Point3::new(1.0, 0.0, 0.0), Vector3::y(), 2.0, 0.5);
        assert_eq!(torus.aabb().min, Point3::new(-1.5, -2.5, -2.5));
    }
}
