//! This module defines [`Bvh`] and [`BvhBuilder`] and functions for building and traversing it.
//!
//! [`Bvh`]: struct.Bvh.html
//! [`BvhBuilder`]: struct.BvhBuilder.html
//!

use crate::aabb::{Aabb, IntersectsAabb};
use crate::bvh::bucket::find_best_split;
use crate::bvh::partition::{median_split, partition_by_bin};
use crate::bvh::stats::{BuildStats, LeafTally};
use crate::bvh::BvhNode;
use crate::config::BuildConfig;
use crate::error::{BuildError, ValidationError};
use crate::proxy::{PrimitiveInfo, PrimitiveProxy};
use crate::scene::Scene;
use crate::utils::joint_aabb_of_proxies;
use crate::Real;

/// A pending subtree: node slot `node_index` covers `indices[first..first + count]`.
#[derive(Debug, Clone, Copy)]
struct BuildTask {
    node_index: usize,
    first: usize,
    count: usize,
    depth: usize,
}

/// Working state of a single build. Never outlives the call that created it.
struct BuildContext<'a> {
    config: &'a BuildConfig,
    proxies: &'a [PrimitiveProxy],
    indices: Vec<usize>,
    nodes: Vec<BvhNode>,
    nodes_used: usize,
    tally: LeafTally,
}

impl<'a> BuildContext<'a> {
    fn new(config: &'a BuildConfig, proxies: &'a [PrimitiveProxy], indices: Vec<usize>) -> Self {
        // A full binary tree over `n` leaves has `2n - 1` nodes.
        let capacity = 2 * proxies.len() - 1;
        BuildContext {
            config,
            proxies,
            indices,
            nodes: vec![BvhNode::create_dummy(); capacity],
            nodes_used: 1,
            tally: LeafTally::default(),
        }
    }

    /// Builds every subtree with an explicit stack. Each slot is written exactly once, children
    /// are allocated as a pair directly after all previously allocated slots.
    fn run(&mut self) {
        let mut stack = vec![BuildTask {
            node_index: 0,
            first: 0,
            count: self.proxies.len(),
            depth: 0,
        }];

        while let Some(task) = stack.pop() {
            let BuildTask {
                node_index,
                first,
                count,
                depth,
            } = task;
            let range = &mut self.indices[first..first + count];
            let (aabb, centroid_bounds) = joint_aabb_of_proxies(range, self.proxies);

            if count <= self.config.max_leaf_size {
                self.write_leaf(node_index, aabb, first, count, depth);
                continue;
            }
            if depth >= self.config.max_depth {
                tracing::trace!(node_index, count, depth, "depth cap reached, forcing leaf");
                self.write_leaf(node_index, aabb, first, count, depth);
                continue;
            }

            let Some(mid) =
                choose_split(self.config, self.proxies, range, &aabb, &centroid_bounds)
            else {
                self.write_leaf(node_index, aabb, first, count, depth);
                continue;
            };

            if self.nodes_used + 2 > self.nodes.len() {
                tracing::warn!(node_index, count, "node capacity exhausted, forcing leaf");
                self.write_leaf(node_index, aabb, first, count, depth);
                continue;
            }
            let child_l_index = self.nodes_used;
            let child_r_index = child_l_index + 1;
            self.nodes_used += 2;

            self.nodes[node_index] = BvhNode::Node {
                aabb,
                child_l_index,
                child_r_index,
            };

            // Right first, so the left subtree is processed next.
            stack.push(BuildTask {
                node_index: child_r_index,
                first: first + mid,
                count: count - mid,
                depth: depth + 1,
            });
            stack.push(BuildTask {
                node_index: child_l_index,
                first,
                count: mid,
                depth: depth + 1,
            });
        }

        self.nodes.truncate(self.nodes_used);
    }

    fn write_leaf(&mut self, node_index: usize, aabb: Aabb, first: usize, count: usize, depth: usize) {
        self.nodes[node_index] = BvhNode::Leaf { aabb, first, count };
        self.tally.add_leaf(count, depth);
    }
}

/// Decides how to split `range`, partitions it in place and returns the size of the left
/// side. Returns [`None`] if the range should become a leaf.
fn choose_split(
    config: &BuildConfig,
    proxies: &[PrimitiveProxy],
    range: &mut [usize],
    aabb: &Aabb,
    centroid_bounds: &Aabb,
) -> Option<usize> {
    let count = range.len();
    let forced = count > config.forced_split_threshold;

    let Some(candidate) = find_best_split(proxies, range, aabb, centroid_bounds, config) else {
        // Every centroid coincides, only a median split makes progress.
        tracing::trace!(count, "degenerate centroids, median split");
        return Some(median_split(range, proxies, centroid_bounds));
    };

    let leaf_cost = count as Real;
    if candidate.cost >= leaf_cost * (1.0 - config.split_margin) && !forced {
        return None;
    }

    let mid = partition_by_bin(range, proxies, &candidate.grid, candidate.boundary);
    if mid == 0 || mid == count {
        tracing::trace!(count, "bin partition produced an empty side");
        return None;
    }
    debug_assert_eq!(mid, candidate.left_count);

    if forced && (mid < config.min_leaf_size || count - mid < config.min_leaf_size) {
        tracing::trace!(count, mid, "unbalanced split, median split");
        return Some(median_split(range, proxies, centroid_bounds));
    }
    Some(mid)
}

/// The [`Bvh`] data structure. Contains the flat list of [`BvhNode`]s, the permuted
/// primitive list the leaves point into and the build statistics.
///
/// When [`BuildStats::auto_fallback`] is set, `nodes` is empty and the primitives have to be
/// scanned linearly through `primitive_indices` / `primitive_infos`.
///
/// [`Bvh`]: struct.Bvh.html
/// [`BvhNode`]: enum.BvhNode.html
///
#[derive(Debug, Clone, Default)]
pub struct Bvh {
    /// The list of nodes of the [`Bvh`]. Node `0` is the root.
    pub nodes: Vec<BvhNode>,

    /// Proxy indices in leaf order. Leaves cover contiguous runs of this list.
    pub primitive_indices: Vec<usize>,

    /// `(kind, index)` of the proxy at the same position of `primitive_indices`.
    pub primitive_infos: Vec<PrimitiveInfo>,

    /// Diagnostics of the build.
    pub stats: BuildStats,

    /// The proxies in their original, unpermuted order.
    pub proxies: Vec<PrimitiveProxy>,
}

impl Bvh {
    /// Returns true if the build produced no hierarchy, either for lack of primitives or
    /// because of an auto-fallback.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the proxy indices held by a leaf. Interior nodes hold none.
    pub fn leaf_primitives(&self, node_index: usize) -> &[usize] {
        match self.nodes[node_index].primitive_range() {
            Some(range) => &self.primitive_indices[range],
            None => &[],
        }
    }

    /// Traverses the [`Bvh`].
    /// Returns the indices of all proxies whose leaves were reached by `query`, in leaf order.
    /// Without a hierarchy every proxy is returned.
    ///
    /// [`Bvh`]: struct.Bvh.html
    ///
    pub fn traverse(&self, query: &impl IntersectsAabb) -> Vec<usize> {
        if self.nodes.is_empty() {
            return self.primitive_indices.clone();
        }

        let mut hits = Vec::new();
        let mut stack = vec![0];
        while let Some(node_index) = stack.pop() {
            let node = &self.nodes[node_index];
            if !query.intersects_aabb(&node.aabb()) {
                continue;
            }
            match *node {
                BvhNode::Node {
                    child_l_index,
                    child_r_index,
                    ..
                } => {
                    stack.push(child_r_index);
                    stack.push(child_l_index);
                }
                BvhNode::Leaf { .. } => hits.extend_from_slice(self.leaf_primitives(node_index)),
            }
        }
        hits
    }

    /// Checks the structural invariants of the hierarchy: every primitive sits in exactly one
    /// leaf, interior boxes are the merge of their children, leaf boxes contain their
    /// primitives, the root covers the scene and the node count stays within `2n - 1`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let n = self.proxies.len();
        for found in [self.primitive_indices.len(), self.primitive_infos.len()] {
            if found != n {
                return Err(ValidationError::LengthMismatch { expected: n, found });
            }
        }

        let mut seen = vec![0usize; n];
        for (position, &primitive) in self.primitive_indices.iter().enumerate() {
            if primitive >= n {
                return Err(ValidationError::NotABijection {
                    primitive,
                    count: 0,
                });
            }
            seen[primitive] += 1;
            if self.primitive_infos[position] != self.proxies[primitive].info() {
                return Err(ValidationError::InfoMismatch { position });
            }
        }
        if let Some((primitive, &count)) = seen.iter().enumerate().find(|(_, c)| **c != 1) {
            return Err(ValidationError::NotABijection { primitive, count });
        }

        if self.nodes.is_empty() {
            return Ok(());
        }
        if self.nodes.len() >= 2 * n {
            return Err(ValidationError::CapacityExceeded {
                nodes: self.nodes.len(),
                primitives: n,
            });
        }

        let scene_aabb = self
            .proxies
            .iter()
            .fold(Aabb::empty(), |aabb, proxy| aabb.join(&proxy.aabb));
        if self.nodes[0].aabb() != scene_aabb {
            return Err(ValidationError::RootIncomplete);
        }

        let mut covered = vec![0usize; n];
        let mut visited = 0;
        let mut stack = vec![0];
        while let Some(node_index) = stack.pop() {
            visited += 1;
            match self.nodes[node_index] {
                BvhNode::Node {
                    aabb,
                    child_l_index,
                    child_r_index,
                } => {
                    for child in [child_l_index, child_r_index] {
                        if child <= node_index || child >= self.nodes.len() {
                            return Err(ValidationError::InvalidChild {
                                node: node_index,
                                child,
                            });
                        }
                    }
                    if child_r_index != child_l_index + 1 {
                        return Err(ValidationError::InvalidChild {
                            node: node_index,
                            child: child_r_index,
                        });
                    }
                    let joint = self.nodes[child_l_index]
                        .aabb()
                        .join(&self.nodes[child_r_index].aabb());
                    if joint != aabb {
                        return Err(ValidationError::BoundsMismatch { node: node_index });
                    }
                    stack.push(child_r_index);
                    stack.push(child_l_index);
                }
                BvhNode::Leaf { aabb, first, count } => {
                    let end = first + count;
                    if count == 0 || end > n {
                        return Err(ValidationError::InvalidLeafRange {
                            node: node_index,
                            first,
                            end,
                        });
                    }
                    for position in first..end {
                        covered[position] += 1;
                        let proxy = &self.proxies[self.primitive_indices[position]];
                        if !aabb.contains_aabb(&proxy.aabb) {
                            return Err(ValidationError::BoundsMismatch { node: node_index });
                        }
                    }
                }
            }
        }

        if visited != self.nodes.len() {
            return Err(ValidationError::Unreachable {
                reachable: visited,
                nodes: self.nodes.len(),
            });
        }
        if let Some((position, &count)) = covered.iter().enumerate().find(|(_, c)| **c != 1) {
            return Err(ValidationError::NotABijection {
                primitive: self.primitive_indices[position],
                count,
            });
        }
        Ok(())
    }
}

/// Builds [`Bvh`]s with a fixed [`BuildConfig`]. Holds no state between builds, so one
/// builder can serve any number of builds, also from several threads.
///
/// # Examples
/// ```
/// use shape_bvh::bvh::BvhBuilder;
/// use shape_bvh::config::BuildConfig;
/// use shape_bvh::scene::Scene;
/// use shape_bvh::shapes::Sphere;
/// use shape_bvh::Point3;
///
/// let mut scene = Scene::default();
/// scene.spheres.push(Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0));
///
/// // Tiny scenes are scanned linearly by default.
/// let bvh = BvhBuilder::default().build(&scene);
/// assert!(bvh.stats.auto_fallback);
/// assert!(bvh.nodes.is_empty());
///
/// let config = BuildConfig::default().with_auto_fallback(false);
/// let bvh = BvhBuilder::new(config).unwrap().build(&scene);
/// assert_eq!(bvh.nodes.len(), 1);
/// assert_eq!(bvh.nodes[0].primitive_range(), Some(0..1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BvhBuilder {
    config: BuildConfig,
}

impl BvhBuilder {
    /// Creates a builder, rejecting configurations that cannot drive a build.
    pub fn new(config: BuildConfig) -> Result<BvhBuilder, BuildError> {
        config.validate()?;
        Ok(BvhBuilder { config })
    }

    /// The tunables of this builder.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Creates a new [`Bvh`] over every object of `scene`.
    ///
    /// [`Bvh`]: struct.Bvh.html
    ///
    #[tracing::instrument(skip_all, fields(primitives = scene.len()))]
    pub fn build(&self, scene: &Scene) -> Bvh {
        self.build_proxies(scene.proxies())
    }

    /// Creates a new [`Bvh`] from already extracted proxies. Leaf ranges and
    /// `primitive_indices` refer to positions in `proxies`.
    ///
    /// [`Bvh`]: struct.Bvh.html
    ///
    #[tracing::instrument(skip_all, fields(primitives = proxies.len()))]
    pub fn build_proxies(&self, proxies: Vec<PrimitiveProxy>) -> Bvh {
        let config = &self.config;
        let n = proxies.len();
        if n == 0 {
            return Bvh::default();
        }

        let indices: Vec<usize> = (0..n).collect();
        let (root_aabb, root_centroids) = joint_aabb_of_proxies(&indices, &proxies);
        let probe = find_best_split(&proxies, &indices, &root_aabb, &root_centroids, config);

        let root_direct_cost = n as Real;
        let root_best_cost = probe.map(|split| split.cost);
        let improvement_ratio = root_best_cost
            .map(|best| ((root_direct_cost - best) / root_direct_cost).max(0.0))
            .unwrap_or(0.0);

        let auto_fallback = config.auto_fallback
            && (n < config.small_scene_threshold
                || probe.is_none()
                || improvement_ratio < config.min_root_improvement);

        let mut stats = BuildStats {
            primitive_count: n,
            root_best_cost,
            root_direct_cost,
            improvement_ratio,
            auto_fallback,
            ..Default::default()
        };

        if auto_fallback {
            tracing::debug!(n, improvement_ratio, "hierarchy skipped, linear scan is competitive");
            let primitive_infos = proxies.iter().map(PrimitiveProxy::info).collect();
            return Bvh {
                nodes: Vec::new(),
                primitive_indices: indices,
                primitive_infos,
                stats,
                proxies,
            };
        }

        let mut context = BuildContext::new(config, &proxies, indices);
        context.run();
        let BuildContext {
            indices,
            nodes,
            tally,
            ..
        } = context;

        stats.node_count = nodes.len();
        stats.leaf_count = tally.leaves;
        stats.avg_leaf_size = tally.avg_size();
        stats.max_leaf_size = tally.max_size;
        stats.max_depth = tally.max_depth;
        tracing::debug!(%stats, "bvh built");

        let primitive_infos = indices.iter().map(|i| proxies[*i].info()).collect();
        Bvh {
            nodes,
            primitive_indices: indices,
            primitive_infos,
            stats,
            proxies,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use float_eq::assert_float_eq;
    use proptest::prelude::*;

    use crate::aabb::{Aabb, IntersectsAabb};
    use crate::bvh::{Bvh, BvhBuilder, BvhNode};
    use crate::config::BuildConfig;
    use crate::error::ValidationError;
    use crate::proxy::PrimitiveProxy;
    use crate::scene::Scene;
    use crate::shapes::Sphere;
    use crate::testbase::{
        grid_scene, mixed_scene, random_sphere_scene, sphere_proxies, spheres_along_x,
        structure_of,
    };
    use crate::Point3;

    fn no_fallback() -> BvhBuilder {
        BvhBuilder::new(BuildConfig::default().with_auto_fallback(false)).unwrap()
    }

    fn leaves(bvh: &Bvh) -> Vec<(Aabb, Vec<usize>)> {
        (0..bvh.nodes.len())
            .filter(|i| bvh.nodes[*i].is_leaf())
            .map(|i| (bvh.nodes[i].aabb(), bvh.leaf_primitives(i).to_vec()))
            .collect()
    }

    #[test]
    fn test_empty_scene_builds_nothing() {
        let bvh = BvhBuilder::default().build(&Scene::default());
        assert!(bvh.is_empty());
        assert!(bvh.primitive_indices.is_empty());
        assert_eq!(bvh.stats.primitive_count, 0);
        assert_eq!(bvh.stats.node_count, 0);
        assert!(!bvh.stats.auto_fallback);
        assert_eq!(bvh.validate(), Ok(()));
    }

    #[test]
    fn test_single_primitive_is_a_leaf_root() {
        let proxies = sphere_proxies(&[Sphere::new(Point3::new(1.0, 2.0, 3.0), 0.5)]);
        let bvh = no_fallback().build_proxies(proxies);
        assert_eq!(bvh.nodes.len(), 1);
        assert_eq!(bvh.nodes[0].primitive_range(), Some(0..1));
        assert_eq!(bvh.primitive_indices, vec![0]);
        assert_eq!(bvh.stats.leaf_count, 1);
        assert_eq!(bvh.validate(), Ok(()));
    }

    #[test]
    fn test_small_scene_falls_back() {
        let proxies = sphere_proxies(&spheres_along_x(10, 3.0, 1.0));
        let bvh = BvhBuilder::default().build_proxies(proxies);
        assert!(bvh.stats.auto_fallback);
        assert!(bvh.nodes.is_empty());
        assert_eq!(bvh.primitive_indices, (0..10).collect::<Vec<_>>());
        assert_eq!(bvh.primitive_infos.len(), 10);
        // The probe still ran.
        assert!(bvh.stats.root_best_cost.is_some());
        assert_eq!(bvh.validate(), Ok(()));
    }

    #[test]
    fn test_no_improvement_falls_back() {
        // Huge overlapping spheres gain nothing from any split.
        let spheres: Vec<_> = (0..40)
            .map(|i| Sphere::new(Point3::new(i as f32 * 0.01, 0.0, 0.0), 100.0))
            .collect();
        let bvh = BvhBuilder::default().build_proxies(sphere_proxies(&spheres));
        assert!(bvh.stats.improvement_ratio < 0.02);
        assert!(bvh.stats.auto_fallback);
        assert!(bvh.is_empty());
    }

    #[test]
    /// Scenario A: unit spheres along X split along X into small, ordered leaves.
    fn test_spheres_along_x() {
        let proxies = sphere_proxies(&spheres_along_x(30, 3.0, 1.0));
        let bvh = BvhBuilder::default().build_proxies(proxies);
        assert!(!bvh.stats.auto_fallback);
        assert_eq!(bvh.validate(), Ok(()));

        let root = bvh.nodes[0];
        let (l, r) = (bvh.nodes[root.child_l()].aabb(), bvh.nodes[root.child_r()].aabb());
        assert!(l.max.x < r.min.x, "first split must separate along X");

        let mut leaves = leaves(&bvh);
        assert!(leaves.iter().all(|(_, prims)| prims.len() <= 4));
        leaves.sort_by(|a, b| a.0.min.x.total_cmp(&b.0.min.x));
        for (i, (aabb, _)) in leaves.iter().enumerate() {
            for (other, _) in leaves.iter().skip(i + 2) {
                assert!(!aabb.intersects_aabb(other));
            }
        }
    }

    #[test]
    /// Scenario B: fully coincident primitives are median split, never looping.
    fn test_coincident_primitives_are_median_split() {
        let proxies = sphere_proxies(&vec![Sphere::new(Point3::new(1.0, 1.0, 1.0), 0.5); 5]);
        let bvh = no_fallback().build_proxies(proxies);
        assert_eq!(bvh.validate(), Ok(()));
        assert_eq!(bvh.nodes.len(), 3);
        let mut sizes: Vec<_> = leaves(&bvh).iter().map(|(_, p)| p.len()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![2, 3]);

        // With the default policy the root probe finds no split at all.
        let proxies = sphere_proxies(&vec![Sphere::new(Point3::new(1.0, 1.0, 1.0), 0.5); 5]);
        let bvh = BvhBuilder::default().build_proxies(proxies);
        assert!(bvh.stats.auto_fallback);
        assert_eq!(bvh.stats.root_best_cost, None);
        assert_eq!(bvh.stats.improvement_ratio, 0.0);
    }

    #[test]
    fn test_many_coincident_primitives_respect_depth_cap() {
        let proxies = sphere_proxies(&vec![Sphere::new(Point3::origin(), 1.0); 5000]);
        let config = BuildConfig::default()
            .with_auto_fallback(false)
            .with_max_depth(6);
        let bvh = BvhBuilder::new(config).unwrap().build_proxies(proxies);
        assert_eq!(bvh.validate(), Ok(()));
        assert!(bvh.stats.max_depth <= 6);
        assert!(bvh.stats.max_leaf_size >= 5000 / 64);
    }

    #[test]
    /// Scenario C: a regular grid benefits clearly from the hierarchy.
    fn test_grid_scene() {
        let bvh = BvhBuilder::default().build(&grid_scene(10, 3.0));
        assert_eq!(bvh.stats.primitive_count, 1000);
        assert!(!bvh.stats.auto_fallback);
        assert!(bvh.stats.improvement_ratio > 0.2);
        assert!(bvh.stats.avg_leaf_size >= 2.0);
        assert!(bvh.stats.avg_leaf_size <= 8.0);
        assert!(bvh.stats.node_count <= 2 * 1000 - 1);
        assert_float_eq!(
            bvh.stats.avg_leaf_size,
            1000.0 / bvh.stats.leaf_count as f32,
            abs <= 1e-4
        );
        assert_eq!(bvh.validate(), Ok(()));
    }

    #[test]
    fn test_mixed_scene_maps_back_to_objects() {
        let scene = mixed_scene(8);
        let bvh = no_fallback().build(&scene);
        assert_eq!(bvh.validate(), Ok(()));
        let proxies = scene.proxies();
        for (position, info) in bvh.primitive_infos.iter().enumerate() {
            assert_eq!(proxies[bvh.primitive_indices[position]].info(), *info);
        }
    }

    #[test]
    fn test_forced_split_rebalances_large_ranges() {
        // One far outlier makes the SAH prefer splitting it off alone.
        let mut spheres = spheres_along_x(63, 0.1, 0.05);
        spheres.push(Sphere::new(Point3::new(1000.0, 0.0, 0.0), 0.05));
        let bvh = no_fallback().build_proxies(sphere_proxies(&spheres));
        assert_eq!(bvh.validate(), Ok(()));

        let root = bvh.nodes[0];
        let left = bvh.nodes[root.child_l()].aabb();
        let right = bvh.nodes[root.child_r()].aabb();
        // The split happened, but not as a 63/1 cut.
        assert!(left.max.x < 1000.0 && right.max.x >= 1000.0);
        assert!(right.min.x < 999.0);
    }

    #[test]
    fn test_traverse_matches_brute_force() {
        let scene = random_sphere_scene(500, 7);
        let bvh = BvhBuilder::default().build(&scene);
        let query = Aabb::with_bounds(Point3::new(-5.0, -5.0, -5.0), Point3::new(5.0, 5.0, 5.0));

        let mut hits = bvh.traverse(&query);
        hits.retain(|i| query.intersects_aabb(&bvh.proxies[*i].aabb));
        let hits: HashSet<_> = hits.into_iter().collect();
        let expected: HashSet<_> = (0..bvh.proxies.len())
            .filter(|i| query.intersects_aabb(&bvh.proxies[*i].aabb))
            .collect();
        assert_eq!(hits, expected);
    }

    #[test]
    fn test_validate_detects_corruption() {
        let bvh = BvhBuilder::default().build(&grid_scene(4, 2.0));
        assert_eq!(bvh.validate(), Ok(()));

        let mut broken = bvh.clone();
        broken.primitive_indices.swap(0, 1);
        assert!(matches!(
            broken.validate(),
            Err(ValidationError::InfoMismatch { .. }) | Err(ValidationError::BoundsMismatch { .. })
        ));

        let mut broken = bvh.clone();
        if let BvhNode::Node { ref mut aabb, .. } = broken.nodes[0] {
            *aabb = Aabb::empty();
        }
        assert_eq!(broken.validate(), Err(ValidationError::RootIncomplete));

        let mut broken = bvh;
        broken.primitive_infos.pop();
        assert!(matches!(
            broken.validate(),
            Err(ValidationError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        assert!(BvhBuilder::new(BuildConfig::default().with_max_leaf_size(0)).is_err());
    }

    #[test]
    fn test_proxy_order_is_preserved() {
        let proxies = sphere_proxies(&spheres_along_x(40, 2.0, 0.5));
        let expected: Vec<PrimitiveProxy> = proxies.clone();
        let bvh = BvhBuilder::default().build_proxies(proxies);
        assert_eq!(bvh.proxies, expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        // Bijection, bounds containment, root completeness and capacity hold for random scenes.
        #[test]
        fn test_random_scenes_are_valid(n in 0usize..300, seed in any::<u64>()) {
            let scene = random_sphere_scene(n, seed);
            let bvh = no_fallback().build(&scene);
            prop_assert_eq!(bvh.validate(), Ok(()));
            prop_assert_eq!(bvh.primitive_indices.len(), n);
            if n > 0 {
                prop_assert!(bvh.nodes.len() <= 2 * n - 1);
                prop_assert!(bvh.stats.max_depth <= 60);
            }
        }

        // Rebuilding the same input yields the same tree.
        #[test]
        fn test_rebuild_is_deterministic(n in 1usize..200, seed in any::<u64>()) {
            let scene = random_sphere_scene(n, seed);
            let builder = BvhBuilder::default();
            let a = builder.build(&scene);
            let b = builder.build(&scene);
            prop_assert_eq!(structure_of(&a), structure_of(&b));
            prop_assert_eq!(a.stats, b.stats);
        }
    }
}
