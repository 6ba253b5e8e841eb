//! This module defines a rotated box.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::{Point3, Quat, Real, Vector3};

/// An oriented box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cuboid {
    /// Center of the box
    pub center: Point3,
    /// Extents of the box before being transformed by the rotation
    pub half_extents: Vector3,
    /// Orientation of the box
    pub rotation: Quat,
}

impl Cuboid {
    /// Creates an axis aligned box.
    pub fn new(center: Point3, half_extents: Vector3) -> Cuboid {
        Cuboid {
            center,
            half_extents,
            rotation: Quat::identity(),
        }
    }

    /// Returns this box with the given orientation.
    pub fn rotated(mut self, rotation: Quat) -> Cuboid {
        self.rotation = rotation;
        self
    }

    /// Half diagonal of the box, the radius of its bounding sphere.
    pub fn half_diagonal(&self) -> Real {
        self.half_extents.norm()
    }
}

impl Bounded for Cuboid {
    fn aabb(&self) -> Aabb {
        Aabb::around(&self.center, self.half_diagonal())
    }
}

impl Primitive for Cuboid {
    const KIND: ShapeKind = ShapeKind::Cuboid;

    fn centroid(&self) -> Point3 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use crate::aabb::Bounded;
    use crate::shapes::Cuboid;
    use crate::{Point3, Quat, Vector3, EPSILON};

    #[test]
    fn test_rotated_corners_are_bounded() {
        let rotation = Quat::from_axis_angle(&Vector3::x_axis(), std::f32::consts::FRAC_PI_4);
        let cuboid = Cuboid::new(Point3::new(0.5, 2.2, 0.5), Vector3::new(0.5, 1.0, 2.0))
            .rotated(rotation);
        let aabb = cuboid.aabb();

        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    let local = cuboid.half_extents.component_mul(&Vector3::new(sx, sy, sz));
                    let corner = cuboid.center + cuboid.rotation * local;
                    assert!(aabb.approx_contains_aabb_eps(&corner.aabb(), EPSILON));
                }
            }
        }
    }
}
