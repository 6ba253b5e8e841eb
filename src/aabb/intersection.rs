use crate::aabb::Aabb;
use crate::Point3;

/// A trait implemented by things that may or may not intersect an [`Aabb`] and, by extension,
/// things that can be used to traverse a [`Bvh`].
///
/// # Examples
/// ```
/// use shape_bvh::aabb::{Aabb, IntersectsAabb};
/// use shape_bvh::Point3;
///
/// struct XyPlane;
///
/// impl IntersectsAabb for XyPlane {
///     fn intersects_aabb(&self, aabb: &Aabb) -> bool {
///         aabb.min.z <= 0.0 && aabb.max.z >= 0.0
///     }
/// }
///
/// let aabb = Aabb::with_bounds(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
/// assert!(XyPlane.intersects_aabb(&aabb));
/// ```
///
/// [`Bvh`]: ../bvh/struct.Bvh.html
pub trait IntersectsAabb {
    /// Returns whether this object intersects an [`Aabb`].
    fn intersects_aabb(&self, aabb: &Aabb) -> bool;
}

impl IntersectsAabb for Aabb {
    fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        for i in 0..3 {
            if self.max[i] < aabb.min[i] || aabb.max[i] < self.min[i] {
                return false;
            }
        }
        true
    }
}

impl IntersectsAabb for Point3 {
    fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        aabb.contains(self)
    }
}
