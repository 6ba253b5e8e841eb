//! Uniform bounding proxies for typed scene objects.

use crate::aabb::{Aabb, Bounded};
use crate::shapes::{Primitive, ShapeKind};
use crate::Point3;

/// Maps a position in the permuted primitive list back to a concrete scene object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimitiveInfo {
    /// The scene array the object lives in.
    pub kind: ShapeKind,

    /// The object's position in that array.
    pub index: usize,
}

/// What the builder sees of a scene object: which object it is, a conservative box and a
/// representative point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PrimitiveProxy {
    /// The scene array the object came from.
    pub kind: ShapeKind,

    /// The object's position in that array.
    pub index: usize,

    /// A conservative, not necessarily tight, box around the object.
    pub aabb: Aabb,

    /// The point used to bin and partition the object.
    pub centroid: Point3,
}

impl PrimitiveProxy {
    /// Creates a proxy from already computed bounds.
    pub fn new(kind: ShapeKind, index: usize, aabb: Aabb, centroid: Point3) -> PrimitiveProxy {
        PrimitiveProxy {
            kind,
            index,
            aabb,
            centroid,
        }
    }

    /// Extracts the proxy of the `index`-th object of its scene array.
    ///
    /// # Examples
    /// ```
    /// use shape_bvh::proxy::PrimitiveProxy;
    /// use shape_bvh::shapes::{ShapeKind, Torus};
    /// use shape_bvh::{Point3, Vector3};
    ///
    /// let torus = Torus::new(Point3::new(0.0, 1.0, 0.0), Vector3::y(), 2.0, 0.5);
    /// let proxy = PrimitiveProxy::from_primitive(&torus, 3);
    ///
    /// assert_eq!(proxy.kind, ShapeKind::Torus);
    /// assert_eq!(proxy.index, 3);
    /// assert_eq!(proxy.centroid, torus.center);
    /// assert_eq!(proxy.aabb.max, Point3::new(2.5, 3.5, 2.5));
    /// ```
    pub fn from_primitive<P: Primitive>(shape: &P, index: usize) -> PrimitiveProxy {
        PrimitiveProxy::new(P::KIND, index, shape.aabb(), shape.centroid())
    }

    /// The `(kind, index)` pair identifying the scene object.
    pub fn info(&self) -> PrimitiveInfo {
        PrimitiveInfo {
            kind: self.kind,
            index: self.index,
        }
    }
}

impl Bounded for PrimitiveProxy {
    fn aabb(&self) -> Aabb {
        self.aabb
    }
}

/// Appends the proxies of every object in `shapes`, in array order.
pub fn extend_proxies<P: Primitive>(proxies: &mut Vec<PrimitiveProxy>, shapes: &[P]) {
    proxies.extend(
        shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| PrimitiveProxy::from_primitive(shape, index)),
    );
}

#[cfg(test)]
mod tests {
    use crate::proxy::{extend_proxies, PrimitiveInfo};
    use crate::shapes::{ShapeKind, Sphere};
    use crate::Point3;

    #[test]
    fn test_extend_keeps_array_order() {
        let spheres: Vec<_> = (0..4)
            .map(|i| Sphere::new(Point3::new(i as f32, 0.0, 0.0), 0.25))
            .collect();
        let mut proxies = Vec::new();
        extend_proxies(&mut proxies, &spheres);
        extend_proxies(&mut proxies, &spheres[..1]);

        assert_eq!(proxies.len(), 5);
        assert_eq!(
            proxies[3].info(),
            PrimitiveInfo {
                kind: ShapeKind::Sphere,
                index: 3
            }
        );
        assert_eq!(proxies[4].index, 0);
        assert_eq!(proxies[2].centroid, Point3::new(2.0, 0.0, 0.0));
    }
}
