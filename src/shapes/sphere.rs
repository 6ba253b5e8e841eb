//! This module defines a Sphere.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::{Point3, Real};

/// A representation of a Sphere
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// Center of the sphere
    pub center: Point3,
    /// Radius of the sphere
    pub radius: Real,
}

impl Sphere {
    /// Creates a sphere centered on a given point with a radius
    pub fn new(center: Point3, radius: Real) -> Sphere {
        Sphere { center, radius }
    }
}

impl Bounded for Sphere {
    fn aabb(&self) -> Aabb {
        Aabb::around(&self.center, self.radius)
    }
}

impl Primitive for Sphere {
    const KIND: ShapeKind = ShapeKind::Sphere;

    fn centroid(&self) -> Point3 {
        self.center
    }
}
