//! Axis Aligned Bounding Boxes.

use std::fmt;

use crate::axis::Axis;
use crate::{Point3, Real, Vector3};

/// [`Aabb`] struct.
///
/// An empty box has `min = +inf` and `max = -inf` on every axis, which makes it the identity
/// element of [`Aabb::join`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum coordinates
    pub min: Point3,

    /// Maximum coordinates
    pub max: Point3,
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Min bound: {}; Max bound: {}", self.min, self.max)
    }
}

/// A trait implemented by things which can be bounded by an [`Aabb`].
pub trait Bounded {
    /// Returns the geometric bounds of this object in the form of an [`Aabb`].
    fn aabb(&self) -> Aabb;
}

impl<T: Bounded> Bounded for &T {
    fn aabb(&self) -> Aabb {
        T::aabb(self)
    }
}

impl Aabb {
    /// Creates a new [`Aabb`] with the given bounds.
    ///
    /// # Examples
    /// ```
    /// use shape_bvh::aabb::Aabb;
    /// use shape_bvh::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    /// assert_eq!(aabb.min.x, -1.0);
    /// assert_eq!(aabb.max.z, 1.0);
    /// ```
    pub fn with_bounds(min: Point3, max: Point3) -> Aabb {
        Aabb { min, max }
    }

    /// Creates a new empty [`Aabb`].
    ///
    /// # Examples
    /// ```
    /// use shape_bvh::aabb::Aabb;
    ///
    /// let aabb = Aabb::empty();
    /// assert!(aabb.is_empty());
    /// assert!(!aabb.is_valid());
    /// ```
    pub fn empty() -> Aabb {
        Aabb {
            min: Point3::new(Real::INFINITY, Real::INFINITY, Real::INFINITY),
            max: Point3::new(Real::NEG_INFINITY, Real::NEG_INFINITY, Real::NEG_INFINITY),
        }
    }

    /// Creates an [`Aabb`] centered on `center` which extends `extent` along every axis.
    /// Used for all the isotropic shape bounds.
    pub fn around(center: &Point3, extent: Real) -> Aabb {
        let half = Vector3::repeat(extent);
        Aabb::with_bounds(center - half, center + half)
    }

    /// Returns true if `min <= max` holds on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Returns true if the [`Aabb`] contains no point at all.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Returns true if the [`Point3`] is inside the [`Aabb`].
    pub fn contains(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Returns true if `other` lies completely inside this [`Aabb`].
    /// An empty `other` is contained in everything.
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        other.is_empty() || (self.contains(&other.min) && self.contains(&other.max))
    }

    /// Returns true if `other` is approximately inside this [`Aabb`]
    /// with respect to some `epsilon`.
    pub fn approx_contains_aabb_eps(&self, other: &Aabb, epsilon: Real) -> bool {
        if other.is_empty() {
            return true;
        }
        (0..3).all(|i| {
            other.min[i] - self.min[i] > -epsilon && other.max[i] - self.max[i] < epsilon
        })
    }

    /// Returns true if both boxes have the same bounds, up to `epsilon` per coordinate.
    pub fn relative_eq(&self, other: &Aabb, epsilon: Real) -> bool {
        (0..3).all(|i| {
            (self.min[i] - other.min[i]).abs() <= epsilon
                && (self.max[i] - other.max[i]).abs() <= epsilon
        })
    }

    /// Returns a new minimal [`Aabb`] which contains both this [`Aabb`] and `other`.
    /// The result is the convex hull of the both [`Aabb`]s.
    ///
    /// # Examples
    /// ```
    /// use shape_bvh::aabb::Aabb;
    /// use shape_bvh::Point3;
    ///
    /// let aabb1 = Aabb::with_bounds(Point3::new(-101.0, 0.0, 0.0), Point3::new(-100.0, 1.0, 1.0));
    /// let aabb2 = Aabb::with_bounds(Point3::new(100.0, 0.0, 0.0), Point3::new(101.0, 1.0, 1.0));
    /// let joint = aabb1.join(&aabb2);
    ///
    /// assert_eq!(joint.min, Point3::new(-101.0, 0.0, 0.0));
    /// assert_eq!(joint.max, Point3::new(101.0, 1.0, 1.0));
    /// assert_eq!(joint.join(&Aabb::empty()), joint);
    /// ```
    pub fn join(&self, other: &Aabb) -> Aabb {
        Aabb::with_bounds(self.min.inf(&other.min), self.max.sup(&other.max))
    }

    /// Mutable version of [`Aabb::join`].
    pub fn join_mut(&mut self, other: &Aabb) {
        *self = self.join(other);
    }

    /// Returns a new minimal [`Aabb`] which contains both this [`Aabb`] and the [`Point3`] `other`.
    pub fn grow(&self, other: &Point3) -> Aabb {
        Aabb::with_bounds(self.min.inf(other), self.max.sup(other))
    }

    /// Mutable version of [`Aabb::grow`].
    pub fn grow_mut(&mut self, other: &Point3) {
        *self = self.grow(other);
    }

    /// Returns this [`Aabb`] pushed outwards by `amount` on every side.
    pub fn expanded(&self, amount: Real) -> Aabb {
        let delta = Vector3::repeat(amount);
        Aabb::with_bounds(self.min - delta, self.max + delta)
    }

    /// Returns the size of this [`Aabb`] in all three dimensions.
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the center [`Point3`] of the [`Aabb`].
    ///
    /// # Examples
    /// ```
    /// use shape_bvh::aabb::Aabb;
    /// use shape_bvh::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(-2.0, 0.0, 1.0), Point3::new(4.0, 4.0, 3.0));
    /// assert_eq!(aabb.center(), Point3::new(1.0, 2.0, 2.0));
    /// ```
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the extent of this [`Aabb`] along `axis`, `0` for empty boxes.
    pub fn extent(&self, axis: Axis) -> Real {
        let extent = self.max[axis] - self.min[axis];
        if extent > 0.0 {
            extent
        } else {
            0.0
        }
    }

    /// Returns the total surface area of this [`Aabb`], `2 * (xy + yz + zx)`.
    /// Only ever compared relative to other areas. Empty boxes have an area of `0`.
    ///
    /// # Examples
    /// ```
    /// use shape_bvh::aabb::Aabb;
    /// use shape_bvh::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0));
    /// assert_eq!(aabb.surface_area(), 22.0);
    /// assert_eq!(Aabb::empty().surface_area(), 0.0);
    /// ```
    pub fn surface_area(&self) -> Real {
        if self.is_empty() {
            return 0.0;
        }
        let size = self.size();
        2.0 * (size.x * size.y + size.y * size.z + size.z * size.x)
    }

    /// Returns the axis along which the [`Aabb`] is stretched the most.
    pub fn largest_axis(&self) -> Axis {
        let size = self.size();
        if size.x > size.y && size.x > size.z {
            Axis::X
        } else if size.y > size.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

impl Default for Aabb {
    fn default() -> Aabb {
        Aabb::empty()
    }
}

/// Implementation of [`Bounded`] for [`Aabb`].
impl Bounded for Aabb {
    fn aabb(&self) -> Aabb {
        *self
    }
}

/// Implementation of [`Bounded`] for [`Point3`].
impl Bounded for Point3 {
    fn aabb(&self) -> Aabb {
        Aabb::with_bounds(*self, *self)
    }
}
