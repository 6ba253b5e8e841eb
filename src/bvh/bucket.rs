//! Binned SAH split search.

use num_traits::ToPrimitive;

use crate::aabb::Aabb;
use crate::axis::Axis;
use crate::config::BuildConfig;
use crate::proxy::PrimitiveProxy;
use crate::{Point3, Real, EPSILON};

/// Defines a Bucket utility object. Used to store the properties of shape-partitions
/// in the [`Bvh`] build procedure using SAH.
///
/// [`Bvh`]: struct.Bvh.html
#[derive(Clone, Copy, Debug)]
pub(crate) struct Bucket {
    /// The number of primitives in this `Bucket`.
    pub size: usize,

    /// The joint [`Aabb`] of the primitives in this `Bucket`.
    pub aabb: Aabb,
}

impl Bucket {
    /// Returns an empty bucket.
    pub fn empty() -> Bucket {
        Bucket {
            size: 0,
            aabb: Aabb::empty(),
        }
    }

    /// Extend this `Bucket` by a primitive with the given [`Aabb`].
    pub fn add_aabb(&mut self, aabb: &Aabb) {
        self.size += 1;
        self.aabb.join_mut(aabb);
    }

    /// Join the contents of two `Bucket`s.
    pub fn join_bucket(a: Bucket, b: &Bucket) -> Bucket {
        Bucket {
            size: a.size + b.size,
            aabb: a.aabb.join(&b.aabb),
        }
    }
}

/// Maps centroids to bins along one axis of a centroid box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BinGrid {
    pub axis: Axis,
    origin: Real,
    scale: Real,
    pub bins: usize,
}

impl BinGrid {
    /// Returns [`None`] if the centroids do not spread along `axis`.
    pub fn new(axis: Axis, centroid_bounds: &Aabb, bins: usize) -> Option<BinGrid> {
        let extent = centroid_bounds.extent(axis);
        if extent <= EPSILON {
            return None;
        }
        Some(BinGrid {
            axis,
            origin: centroid_bounds.min[axis],
            // Keep the maximum centroid inside the last bin.
            scale: (bins as Real - 0.01) / extent,
            bins,
        })
    }

    /// The bin a centroid falls into. Values outside the grid are clamped.
    pub fn bin_of(&self, centroid: &Point3) -> usize {
        let relative = (centroid[self.axis] - self.origin) * self.scale;
        relative.to_usize().unwrap_or(0).min(self.bins - 1)
    }
}

/// The cheapest bin boundary found over all axes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitCandidate {
    /// The grid the boundary belongs to.
    pub grid: BinGrid,

    /// Bins `0..boundary` go left, the others right.
    pub boundary: usize,

    /// `Ct + (nL * AL + nR * AR) / AP`.
    pub cost: Real,

    /// Primitives left of the boundary.
    pub left_count: usize,
}

/// SAH cost of splitting a node of area `parent_area` into the two buckets.
fn split_cost(traversal_cost: Real, left: &Bucket, right: &Bucket, parent_area: Real) -> Real {
    if parent_area <= 0.0 {
        // Zero-volume ranges cannot be ranked by area, every split costs a full scan.
        return traversal_cost + (left.size + right.size) as Real;
    }
    traversal_cost
        + (left.size as Real * left.aabb.surface_area()
            + right.size as Real * right.aabb.surface_area())
            / parent_area
}

/// Evaluates every bin boundary on every axis with enough centroid spread and returns the
/// cheapest one. Returns [`None`] if all axes are degenerate.
///
/// Buckets are filled in one pass per axis; a right-to-left suffix scan and a left-to-right
/// prefix scan then give both sides of every boundary in `O(bins)`.
pub(crate) fn find_best_split(
    proxies: &[PrimitiveProxy],
    indices: &[usize],
    aabb_bounds: &Aabb,
    centroid_bounds: &Aabb,
    config: &BuildConfig,
) -> Option<SplitCandidate> {
    let bins = config.bin_count(indices.len());
    let parent_area = aabb_bounds.surface_area();

    let mut buckets = vec![Bucket::empty(); bins];
    let mut suffix = vec![Bucket::empty(); bins];
    let mut best: Option<SplitCandidate> = None;

    for axis in Axis::ALL {
        let Some(grid) = BinGrid::new(axis, centroid_bounds, bins) else {
            continue;
        };

        buckets.fill(Bucket::empty());
        for index in indices {
            let proxy = &proxies[*index];
            buckets[grid.bin_of(&proxy.centroid)].add_aabb(&proxy.aabb);
        }

        // suffix[i] holds the join of buckets[i..].
        let mut right = Bucket::empty();
        for i in (1..bins).rev() {
            right = Bucket::join_bucket(right, &buckets[i]);
            suffix[i] = right;
        }

        let mut left = Bucket::empty();
        for boundary in 1..bins {
            left = Bucket::join_bucket(left, &buckets[boundary - 1]);
            let right = &suffix[boundary];
            if left.size == 0 || right.size == 0 {
                continue;
            }

            let cost = split_cost(config.traversal_cost, &left, right, parent_area);
            if best.map_or(true, |b| cost < b.cost) {
                best = Some(SplitCandidate {
                    grid,
                    boundary,
                    cost,
                    left_count: left.size,
                });
            }
        }
    }

    best
}
