//! A crate which builds binary bounding volume hierarchies over heterogeneous
//! analytic-shape scenes and encodes them for a GPU ray-traversal kernel.
//!
//! ## About
//!
//! Scenes consist of typed arrays of spheres, cylinders, boxes, planes, circles, ellipses,
//! line segments, cones, tori and bicubic patches. Every object is reduced to a bounding proxy
//! (an [`Aabb`] plus a representative centroid) and the proxies are partitioned with a binned
//! Surface Area Heuristic into a flat node array. Leaves reference contiguous runs of a
//! permuted primitive index list, which is the layout the GPU kernel walks.
//!
//! When a hierarchy would not beat a linear scan (tiny scenes, no useful split), the builder
//! skips construction and reports an auto-fallback instead.
//!
//! ## Example
//!
//! ```
//! use shape_bvh::bvh::BvhBuilder;
//! use shape_bvh::scene::Scene;
//! use shape_bvh::shapes::Sphere;
//! use shape_bvh::Point3;
//!
//! let mut scene = Scene::default();
//! for i in 0..100 {
//!     let x = (i % 10) as f32 * 3.0;
//!     let z = (i / 10) as f32 * 3.0;
//!     scene.spheres.push(Sphere::new(Point3::new(x, 0.0, z), 1.0));
//! }
//!
//! let bvh = BvhBuilder::default().build(&scene);
//! assert!(!bvh.stats.auto_fallback);
//! assert!(bvh.validate().is_ok());
//!
//! let buffers = shape_bvh::flat_bvh::pack(&bvh).unwrap();
//! assert_eq!(buffers.nodes.len(), bvh.nodes.len());
//! ```
//!
//! ## Features
//!
//! - `serde` (default **disabled**) - adds `Serialize` and `Deserialize` implementations for
//!   the configuration, statistics, node and shape types
//!

/// Float type used by this crate.
pub type Real = f32;

/// Point math type used by this crate. Type alias for [`nalgebra::Point3`].
pub type Point3 = nalgebra::Point3<Real>;

/// Vector math type used by this crate. Type alias for [`nalgebra::Vector3`].
pub type Vector3 = nalgebra::Vector3<Real>;

/// Rotation type used by this crate. Type alias for [`nalgebra::UnitQuaternion`].
pub type Quat = nalgebra::UnitQuaternion<Real>;

/// A minimal floating value used as a lower bound.
pub const EPSILON: Real = 0.00001;

pub mod aabb;
pub mod axis;
pub mod bvh;
pub mod config;
pub mod error;
pub mod flat_bvh;
pub mod proxy;
pub mod ray;
pub mod scene;
pub mod shapes;
mod utils;

#[cfg(test)]
mod testbase;

pub use aabb::Aabb;
