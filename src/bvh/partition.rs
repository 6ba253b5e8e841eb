//! In-place partitioning of index ranges.

use crate::aabb::Aabb;
use crate::bvh::bucket::BinGrid;
use crate::proxy::PrimitiveProxy;
use crate::utils::jitter_key;

/// Moves every index whose centroid falls into a bin below `boundary` to the front of
/// `indices` and returns how many there are.
pub(crate) fn partition_by_bin(
    indices: &mut [usize],
    proxies: &[PrimitiveProxy],
    grid: &BinGrid,
    boundary: usize,
) -> usize {
    let mut left = 0;
    let mut right = indices.len();
    while left < right {
        if grid.bin_of(&proxies[indices[left]].centroid) < boundary {
            left += 1;
        } else {
            right -= 1;
            indices.swap(left, right);
        }
    }
    left
}

/// Splits `indices` at their median centroid along the axis of largest centroid spread.
/// Equal centroids are ordered by [`jitter_key`] of the primitive index, so the result only
/// depends on the primitives, not on their current order. Returns the split offset,
/// `indices.len() / 2`.
pub(crate) fn median_split(
    indices: &mut [usize],
    proxies: &[PrimitiveProxy],
    centroid_bounds: &Aabb,
) -> usize {
    let axis = centroid_bounds.largest_axis();
    let mid = indices.len() / 2;
    if mid == 0 {
        return mid;
    }
    indices.select_nth_unstable_by(mid, |a, b| {
        proxies[*a].centroid[axis]
            .total_cmp(&proxies[*b].centroid[axis])
            .then_with(|| jitter_key(*a).cmp(&jitter_key(*b)))
    });
    mid
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::axis::Axis;
    use crate::bvh::bucket::BinGrid;
    use crate::bvh::partition::{median_split, partition_by_bin};
    use crate::shapes::Sphere;
    use crate::testbase::{sphere_proxies, spheres_along_x};
    use crate::utils::joint_aabb_of_proxies;
    use crate::Point3;

    #[test]
    fn test_partition_by_bin() {
        let proxies = sphere_proxies(&spheres_along_x(20, 1.0, 0.25));
        let mut indices: Vec<usize> = (0..proxies.len()).rev().collect();
        let (_, centroids) = joint_aabb_of_proxies(&indices, &proxies);
        let grid = BinGrid::new(Axis::X, &centroids, 4).unwrap();

        let mid = partition_by_bin(&mut indices, &proxies, &grid, 2);
        assert_eq!(mid, 10);
        assert!(indices[..mid].iter().all(|i| *i < 10));
        assert!(indices[mid..].iter().all(|i| *i >= 10));
    }

    #[test]
    fn test_median_split_of_coincident_primitives_is_reproducible() {
        let proxies = sphere_proxies(&vec![Sphere::new(Point3::new(2.0, 2.0, 2.0), 1.0); 9]);
        let (_, centroids) = joint_aabb_of_proxies(&(0..9).collect::<Vec<_>>(), &proxies);

        let mut forward: Vec<usize> = (0..9).collect();
        let mut backward: Vec<usize> = (0..9).rev().collect();
        let mid = median_split(&mut forward, &proxies, &centroids);
        assert_eq!(mid, 4);
        assert_eq!(median_split(&mut backward, &proxies, &centroids), mid);

        let left_a: HashSet<_> = forward[..mid].iter().copied().collect();
        let left_b: HashSet<_> = backward[..mid].iter().copied().collect();
        assert_eq!(left_a, left_b);
    }

    #[test]
    fn test_median_split_orders_by_centroid() {
        let proxies = sphere_proxies(&spheres_along_x(11, 2.0, 0.5));
        let mut indices: Vec<usize> = vec![10, 3, 7, 0, 9, 1, 5, 2, 8, 4, 6];
        let (_, centroids) = joint_aabb_of_proxies(&indices, &proxies);
        let mid = median_split(&mut indices, &proxies, &centroids);
        assert_eq!(mid, 5);
        assert!(indices[..mid].iter().all(|i| *i < 5));
        assert!(indices[mid..].iter().all(|i| *i >= 5));
    }
}
