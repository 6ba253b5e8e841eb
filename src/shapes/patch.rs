//! This module defines bicubic Bezier patches.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::Point3;

/// A bicubic patch given by a 4x4 control net, row major.
/// The patch lies inside the convex hull of its control points, so their
/// box bounds the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BicubicPatch {
    pub control_points: [Point3; 16],
    bounds: Aabb,
}

impl BicubicPatch {
    /// Creates a patch and precomputes the box of its control points.
    pub fn new(control_points: [Point3; 16]) -> BicubicPatch {
        let bounds = control_points
            .iter()
            .fold(Aabb::empty(), |aabb, point| aabb.grow(point));
        BicubicPatch {
            control_points,
            bounds,
        }
    }
}

impl Bounded for BicubicPatch {
    fn aabb(&self) -> Aabb {
        self.bounds
    }
}

impl Primitive for BicubicPatch {
    const KIND: ShapeKind = ShapeKind::BicubicPatch;

    fn centroid(&self) -> Point3 {
        self.bounds.center()
    }
}
