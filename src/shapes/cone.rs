//! This module defines a capped Cone.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::{Point3, Real, Vector3};

/// A cone with its base disc of `radius` and apex `height` apart along `axis`.
/// `center` sits halfway between base and apex.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cone {
    pub center: Point3,
    pub axis: Vector3,
    pub radius: Real,
    pub height: Real,
}

impl Cone {
    /// Creates a cone. `axis` will be normalized.
    pub fn new(center: Point3, axis: Vector3, radius: Real, height: Real) -> Cone {
        Cone {
            center,
            axis: axis.normalize(),
            radius,
            height,
        }
    }

    /// Radius of the sphere around `center` enclosing base rim and apex.
    pub fn bounding_radius(&self) -> Real {
        (self.height * 0.5).hypot(self.radius)
    }
}

impl Bounded for Cone {
    fn aabb(&self) -> Aabb {
        Aabb::around(&self.center, self.bounding_radius())
    }
}

impl Primitive for Cone {
    const KIND: ShapeKind = ShapeKind::Cone;

    fn centroid(&self) -> Point3 {
        self.center
    }
}
