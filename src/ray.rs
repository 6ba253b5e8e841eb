//! This module defines a Ray structure and the slab intersection test against [`Aabb`]s.
//!
//! [`Aabb`]: ../aabb/struct.Aabb.html

use crate::aabb::{Aabb, IntersectsAabb};
use crate::axis::Axis;
use crate::utils::{fast_max, fast_min};
use crate::{Point3, Real, Vector3};

/// A struct which defines a ray and some of its cached values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The ray origin.
    pub origin: Point3,

    /// The ray direction.
    pub direction: Vector3,

    /// Inverse (1/x) ray direction. Cached for use in [`Aabb`] intersections.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub inv_direction: Vector3,
}

impl Ray {
    /// Creates a new [`Ray`] from an `origin` and a `direction`.
    /// `direction` will be normalized.
    ///
    /// # Examples
    /// ```
    /// use shape_bvh::ray::Ray;
    /// use shape_bvh::{Point3, Vector3};
    ///
    /// let origin = Point3::new(0.0, 0.0, 0.0);
    /// let direction = Vector3::new(2.0, 0.0, 0.0);
    /// let ray = Ray::new(origin, direction);
    ///
    /// assert_eq!(ray.origin, origin);
    /// assert_eq!(ray.direction, Vector3::new(1.0, 0.0, 0.0));
    /// ```
    ///
    /// [`Ray`]: struct.Ray.html
    ///
    pub fn new(origin: Point3, direction: Vector3) -> Ray {
        let direction = direction.normalize();
        Ray {
            origin,
            direction,
            inv_direction: direction.map(|x| 1.0 / x),
        }
    }

    /// The point at distance `t` along the ray.
    pub fn at(&self, t: Real) -> Point3 {
        self.origin + self.direction * t
    }

    /// Tests the intersection of a [`Ray`] with an [`Aabb`] using the slab method.
    /// Boxes behind the origin are missed, boxes containing it are hit. Flat boxes count as
    /// hit when the ray crosses them.
    ///
    /// # Examples
    /// ```
    /// use shape_bvh::aabb::Aabb;
    /// use shape_bvh::ray::Ray;
    /// use shape_bvh::{Point3, Vector3};
    ///
    /// let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
    ///
    /// let ahead = Aabb::with_bounds(Point3::new(99.9, -1.0, -1.0), Point3::new(100.1, 1.0, 1.0));
    /// let behind = Aabb::with_bounds(Point3::new(-5.0, -1.0, -1.0), Point3::new(-4.0, 1.0, 1.0));
    ///
    /// assert!(ray.intersects_aabb(&ahead));
    /// assert!(!ray.intersects_aabb(&behind));
    /// ```
    ///
    /// [`Ray`]: struct.Ray.html
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        let lbr = (aabb.min - self.origin).component_mul(&self.inv_direction);
        let rtr = (aabb.max - self.origin).component_mul(&self.inv_direction);

        let mut tmin = 0.0;
        let mut tmax = Real::INFINITY;
        for axis in Axis::ALL {
            tmin = fast_max(fast_min(lbr[axis], rtr[axis]), tmin);
            tmax = fast_min(fast_max(lbr[axis], rtr[axis]), tmax);
        }

        tmax >= tmin
    }
}

impl IntersectsAabb for Ray {
    fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        Ray::intersects_aabb(self, aabb)
    }
}
