//! The typed scene container handed to the builder.

use crate::proxy::{extend_proxies, PrimitiveProxy};
use crate::shapes::{
    BicubicPatch, Circle, Cone, Cuboid, Cylinder, Ellipse, LineSegment, Plane, Sphere, Torus,
};

/// One array per shape kind. Proxies are collected in [`ShapeKind`] order.
///
/// [`ShapeKind`]: ../shapes/enum.ShapeKind.html
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub cylinders: Vec<Cylinder>,
    pub cuboids: Vec<Cuboid>,
    pub planes: Vec<Plane>,
    pub circles: Vec<Circle>,
    pub ellipses: Vec<Ellipse>,
    pub line_segments: Vec<LineSegment>,
    pub cones: Vec<Cone>,
    pub tori: Vec<Torus>,
    pub patches: Vec<BicubicPatch>,
}

impl Scene {
    /// Total number of objects over all arrays.
    pub fn len(&self) -> usize {
        self.spheres.len()
            + self.cylinders.len()
            + self.cuboids.len()
            + self.planes.len()
            + self.circles.len()
            + self.ellipses.len()
            + self.line_segments.len()
            + self.cones.len()
            + self.tori.len()
            + self.patches.len()
    }

    /// Returns true if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects one bounding proxy per object.
    pub fn proxies(&self) -> Vec<PrimitiveProxy> {
        let mut proxies = Vec::with_capacity(self.len());
        extend_proxies(&mut proxies, &self.spheres);
        extend_proxies(&mut proxies, &self.cylinders);
        extend_proxies(&mut proxies, &self.cuboids);
        extend_proxies(&mut proxies, &self.planes);
        extend_proxies(&mut proxies, &self.circles);
        extend_proxies(&mut proxies, &self.ellipses);
        extend_proxies(&mut proxies, &self.line_segments);
        extend_proxies(&mut proxies, &self.cones);
        extend_proxies(&mut proxies, &self.tori);
        extend_proxies(&mut proxies, &self.patches);
        proxies
    }
}
