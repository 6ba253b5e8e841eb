//! This module exports methods to encode a [`Bvh`] into GPU buffers and to traverse the
//! encoded nodes the way a GPU kernel does.
//!
//! [`Bvh`]: ../bvh/struct.Bvh.html

use bytemuck::{Pod, Zeroable};

use crate::aabb::{Aabb, IntersectsAabb};
use crate::bvh::{Bvh, BvhNode};
use crate::error::PackError;
use crate::proxy::PrimitiveInfo;

/// Largest integer every value up to which an `f32` represents exactly.
const MAX_EXACT_SCALAR: usize = 1 << 24;

/// A structure of a node of a flat [`Bvh`], as uploaded to the GPU.
///
/// Interior nodes store the index of their left child in `child_or_first` and `0` in
/// `count_or_zero`, the right child is always the next node. Leaves store the offset of
/// their first primitive in the permuted index buffer and a non-zero primitive count.
///
/// [`Bvh`]: ../bvh/struct.Bvh.html
///
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FlatNode {
    /// Minimum corner of the node box.
    pub bounds_min: [f32; 3],

    /// Left child index, or first primitive offset for leaves.
    pub child_or_first: u32,

    /// Maximum corner of the node box.
    pub bounds_max: [f32; 3],

    /// Primitive count of a leaf, `0` for interior nodes.
    pub count_or_zero: u32,
}

impl FlatNode {
    /// Returns true for leaves.
    pub fn is_leaf(&self) -> bool {
        self.count_or_zero != 0
    }

    /// The node box.
    pub fn aabb(&self) -> Aabb {
        Aabb::with_bounds(self.bounds_min.into(), self.bounds_max.into())
    }

    /// The eight scalar layout
    /// `[minX, minY, minZ, childOrFirst, maxX, maxY, maxZ, countOrZero]`.
    /// Indices are written as float values, [`pack`] guarantees they are exact.
    pub fn to_scalars(&self) -> [f32; 8] {
        let [min_x, min_y, min_z] = self.bounds_min;
        let [max_x, max_y, max_z] = self.bounds_max;
        [
            min_x,
            min_y,
            min_z,
            self.child_or_first as f32,
            max_x,
            max_y,
            max_z,
            self.count_or_zero as f32,
        ]
    }
}

/// `(kind, index)` of a permuted primitive, as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct GpuPrimitiveInfo {
    /// [`ShapeKind`](crate::shapes::ShapeKind) discriminant.
    pub kind: u32,

    /// Index into the scene array of that kind.
    pub index: u32,
}

/// The three buffers the traversal kernel consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuBuffers {
    /// Node `0` is the root. Empty when the build fell back to a linear scan.
    pub nodes: Vec<FlatNode>,

    /// Proxy indices in leaf order.
    pub primitive_indices: Vec<u32>,

    /// `(kind, index)` per entry of `primitive_indices`.
    pub primitive_infos: Vec<GpuPrimitiveInfo>,
}

impl GpuBuffers {
    /// The node buffer as a flat scalar array, eight scalars per node.
    pub fn node_scalars(&self) -> Vec<f32> {
        self.nodes.iter().flat_map(FlatNode::to_scalars).collect()
    }

    /// The node buffer as raw bytes, ready for upload.
    pub fn node_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.nodes)
    }
}

fn to_u32(what: &'static str, value: usize) -> Result<u32, PackError> {
    u32::try_from(value).map_err(|_| PackError::IndexOverflow { what, value })
}

fn to_scalar_index(what: &'static str, value: usize) -> Result<u32, PackError> {
    if value > MAX_EXACT_SCALAR {
        return Err(PackError::NotRepresentable { what, value });
    }
    to_u32(what, value)
}

fn flatten_node(node: &BvhNode) -> Result<FlatNode, PackError> {
    let aabb = node.aabb();
    let (child_or_first, count_or_zero) = match *node {
        BvhNode::Node { child_l_index, .. } => (to_scalar_index("child index", child_l_index)?, 0),
        BvhNode::Leaf { first, count, .. } => (
            to_scalar_index("primitive offset", first)?,
            to_scalar_index("primitive count", count)?,
        ),
    };
    Ok(FlatNode {
        bounds_min: aabb.min.into(),
        child_or_first,
        bounds_max: aabb.max.into(),
        count_or_zero,
    })
}

/// Encodes `bvh` into the GPU buffer layout.
///
/// Fails if an index does not fit into a `u32`, or if a node index or count would not survive
/// the round trip through an `f32` scalar.
///
/// # Examples
/// ```
/// use shape_bvh::bvh::BvhBuilder;
/// use shape_bvh::config::BuildConfig;
/// use shape_bvh::flat_bvh::pack;
/// use shape_bvh::scene::Scene;
/// use shape_bvh::shapes::Sphere;
/// use shape_bvh::Point3;
///
/// let mut scene = Scene::default();
/// for i in 0..8 {
///     scene.spheres.push(Sphere::new(Point3::new(i as f32 * 4.0, 0.0, 0.0), 1.0));
/// }
/// let config = BuildConfig::default().with_auto_fallback(false);
/// let bvh = BvhBuilder::new(config).unwrap().build(&scene);
///
/// let buffers = pack(&bvh).unwrap();
/// let scalars = buffers.node_scalars();
/// assert_eq!(scalars.len(), 8 * bvh.nodes.len());
/// // The root is an interior node whose left child is node 1.
/// assert_eq!(scalars[3], 1.0);
/// assert_eq!(scalars[7], 0.0);
/// ```
#[tracing::instrument(skip_all, fields(nodes = bvh.nodes.len()))]
pub fn pack(bvh: &Bvh) -> Result<GpuBuffers, PackError> {
    let nodes = bvh
        .nodes
        .iter()
        .map(flatten_node)
        .collect::<Result<Vec<_>, _>>()?;
    let primitive_indices = bvh
        .primitive_indices
        .iter()
        .map(|index| to_u32("primitive index", *index))
        .collect::<Result<Vec<_>, _>>()?;
    let primitive_infos = bvh
        .primitive_infos
        .iter()
        .map(|info: &PrimitiveInfo| {
            Ok(GpuPrimitiveInfo {
                kind: info.kind.gpu_id(),
                index: to_u32("shape index", info.index)?,
            })
        })
        .collect::<Result<Vec<_>, PackError>>()?;

    tracing::trace!(
        bytes = nodes.len() * std::mem::size_of::<FlatNode>(),
        "packed node buffer"
    );
    Ok(GpuBuffers {
        nodes,
        primitive_indices,
        primitive_infos,
    })
}

/// Traverses a flat [`Bvh`] structure with an explicit stack, the same way the GPU kernel
/// does. Returns the proxy indices of every leaf whose box `query` intersects.
/// Without nodes every primitive is a candidate.
///
/// [`Bvh`]: ../bvh/struct.Bvh.html
///
/// # Examples
/// ```
/// use shape_bvh::bvh::BvhBuilder;
/// use shape_bvh::flat_bvh::{pack, traverse_flat_bvh};
/// use shape_bvh::ray::Ray;
/// use shape_bvh::scene::Scene;
/// use shape_bvh::shapes::Sphere;
/// use shape_bvh::{Point3, Vector3};
///
/// let mut scene = Scene::default();
/// for i in 0..64 {
///     let center = Point3::new((i % 8) as f32 * 3.0, (i / 8) as f32 * 3.0, 0.0);
///     scene.spheres.push(Sphere::new(center, 1.0));
/// }
/// let bvh = BvhBuilder::default().build(&scene);
/// let buffers = pack(&bvh).unwrap();
///
/// // A ray along the first row only reaches leaves around it.
/// let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
/// let hits = traverse_flat_bvh(&ray, &buffers.nodes, &buffers.primitive_indices);
/// assert!(hits.len() >= 8);
/// assert!(hits.len() < 64);
/// ```
pub fn traverse_flat_bvh(
    query: &impl IntersectsAabb,
    nodes: &[FlatNode],
    primitive_indices: &[u32],
) -> Vec<usize> {
    if nodes.is_empty() {
        return primitive_indices.iter().map(|i| *i as usize).collect();
    }

    let mut hits = Vec::new();
    let mut stack = vec![0usize];
    while let Some(index) = stack.pop() {
        let node = &nodes[index];
        if !query.intersects_aabb(&node.aabb()) {
            continue;
        }
        let first = node.child_or_first as usize;
        if node.is_leaf() {
            let count = node.count_or_zero as usize;
            hits.extend(primitive_indices[first..first + count].iter().map(|i| *i as usize));
        } else {
            stack.push(first + 1);
            stack.push(first);
        }
    }
    hits
}
