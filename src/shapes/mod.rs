//! Scene object types and their bounding proxies.
//!
//! Every shape only has to produce a conservative [`Aabb`] and a cheap representative
//! centroid. Rotated shapes are bounded isotropically instead of exactly.
//!
//! [`Aabb`]: ../aabb/struct.Aabb.html

use std::fmt;

use crate::aabb::Bounded;
use crate::Point3;

mod cone;
mod cuboid;
mod cylinder;
mod disc;
mod patch;
mod plane;
mod segment;
mod sphere;
mod torus;

pub use self::cone::Cone;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::disc::{Circle, Ellipse};
pub use self::patch::BicubicPatch;
pub use self::plane::Plane;
pub use self::segment::LineSegment;
pub use self::sphere::Sphere;
pub use self::torus::Torus;

/// Identifies the typed scene array an object was taken from.
/// The discriminant is the value the GPU kernel switches on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum ShapeKind {
    Sphere = 0,
    Cylinder = 1,
    Cuboid = 2,
    Plane = 3,
    Circle = 4,
    Ellipse = 5,
    LineSegment = 6,
    Cone = 7,
    Torus = 8,
    BicubicPatch = 9,
}

impl ShapeKind {
    /// All kinds in proxy collection order.
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cuboid,
        ShapeKind::Plane,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::LineSegment,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::BicubicPatch,
    ];

    /// The value written to the GPU info buffer.
    pub fn gpu_id(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A scene object that can be fed to the [`BvhBuilder`].
///
/// [`BvhBuilder`]: ../bvh/struct.BvhBuilder.html
pub trait Primitive: Bounded {
    /// The scene array this type lives in.
    const KIND: ShapeKind;

    /// A representative point used for binning and partitioning.
    /// Not necessarily the geometric centroid.
    fn centroid(&self) -> Point3;
}
