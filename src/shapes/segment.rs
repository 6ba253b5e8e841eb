//! This module defines thick line segments.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::{Point3, Real};

/// A line segment rendered with a given `thickness`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// Start point of the segment
    pub start: Point3,
    /// End point of the segment
    pub end: Point3,
    /// Distance from the center line that still counts as the segment
    pub thickness: Real,
}

impl LineSegment {
    pub fn new(start: Point3, end: Point3, thickness: Real) -> LineSegment {
        LineSegment {
            start,
            end,
            thickness,
        }
    }
}

impl Bounded for LineSegment {
    fn aabb(&self) -> Aabb {
        Aabb::empty()
            .grow(&self.start)
            .grow(&self.end)
            .expanded(self.thickness)
    }
}

impl Primitive for LineSegment {
    const KIND: ShapeKind = ShapeKind::LineSegment;

    fn centroid(&self) -> Point3 {
        nalgebra::center(&self.start, &self.end)
    }
}
