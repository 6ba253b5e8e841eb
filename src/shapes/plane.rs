//! This module defines a finite, rectangular Plane.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::{Point3, Real, Vector3};

/// A rectangle of `width` by `height` facing along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Center of the rectangle
    pub center: Point3,
    /// Facing direction, unit length
    pub normal: Vector3,
    /// First side length
    pub width: Real,
    /// Second side length
    pub height: Real,
}

impl Plane {
    /// Creates a plane. `normal` will be normalized.
    pub fn new(center: Point3, normal: Vector3, width: Real, height: Real) -> Plane {
        Plane {
            center,
            normal: normal.normalize(),
            width,
            height,
        }
    }
}

impl Bounded for Plane {
    // The larger full side length, well past the half diagonal.
    fn aabb(&self) -> Aabb {
        Aabb::around(&self.center, self.width.max(self.height))
    }
}

impl Primitive for Plane {
    const KIND: ShapeKind = ShapeKind::Plane;

    fn centroid(&self) -> Point3 {
        self.center
    }
}
