//! Utilities module.

use crate::aabb::Aabb;
use crate::proxy::PrimitiveProxy;
use crate::Real;

/// Fast floating point minimum.  This function matches the semantics of
///
/// ```no_compile
/// if x < y { x } else { y }
/// ```
///
/// which has efficient instruction sequences on many platforms (1 instruction on x86).  For most
/// values, it matches the semantics of `x.min(y)`; the special cases are:
///
/// ```text
/// min(-0.0, +0.0); +0.0
/// min(+0.0, -0.0): -0.0
/// min( NaN,  1.0):  1.0
/// min( 1.0,  NaN):  NaN
/// ```
#[inline(always)]
pub fn fast_min(x: Real, y: Real) -> Real {
    if x < y {
        x
    } else {
        y
    }
}

/// Fast floating point maximum, the counterpart of [`fast_min`].
#[inline(always)]
pub fn fast_max(x: Real, y: Real) -> Real {
    if x > y {
        x
    } else {
        y
    }
}

/// Returns the joint [`Aabb`] of the proxies named by `indices` and the [`Aabb`] of their
/// centroids.
pub fn joint_aabb_of_proxies(indices: &[usize], proxies: &[PrimitiveProxy]) -> (Aabb, Aabb) {
    let mut aabb = Aabb::empty();
    let mut centroid = Aabb::empty();
    for index in indices {
        let proxy = &proxies[*index];
        aabb.join_mut(&proxy.aabb);
        centroid.grow_mut(&proxy.centroid);
    }
    (aabb, centroid)
}

/// Deterministic tie-break key of a primitive, a splitmix64 finalizer over its index.
/// Spreads neighbouring indices so coincident primitives are not ordered by input position.
pub fn jitter_key(index: usize) -> u64 {
    let mut z = (index as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
