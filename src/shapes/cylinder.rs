//! This module defines a capped Cylinder.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::{Point3, Real, Vector3};

/// A capped cylinder around `axis`, centered halfway between its caps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cylinder {
    /// Center of the cylinder, halfway along its axis
    pub center: Point3,
    /// Direction of the axis, unit length
    pub axis: Vector3,
    /// Radius of the caps
    pub radius: Real,
    /// Distance between the caps
    pub height: Real,
}

impl Cylinder {
    /// Creates a cylinder. `axis` will be normalized.
    pub fn new(center: Point3, axis: Vector3, radius: Real, height: Real) -> Cylinder {
        Cylinder {
            center,
            axis: axis.normalize(),
            radius,
            height,
        }
    }

    /// Isotropic half extent covering every orientation of the cylinder.
    /// `sqrt(2) * max(a, b)` is never below `sqrt(a^2 + b^2)`.
    pub fn bounding_extent(&self) -> Real {
        (self.height * 0.5).max(self.radius) * std::f32::consts::SQRT_2
    }
}

impl Bounded for Cylinder {
    fn aabb(&self) -> Aabb {
        Aabb::around(&self.center, self.bounding_extent())
    }
}

impl Primitive for Cylinder {
    const KIND: ShapeKind = ShapeKind::Cylinder;

    fn centroid(&self) -> Point3 {
        self.center
    }
}
