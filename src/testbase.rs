//! Common utilities shared by unit tests.
#![cfg(test)]

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bvh::{Bvh, BvhNode};
use crate::proxy::PrimitiveProxy;
use crate::scene::Scene;
use crate::shapes::{
    BicubicPatch, Circle, Cone, Cuboid, Cylinder, Ellipse, LineSegment, Plane, Sphere, Torus,
};
use crate::{Point3, Quat, Vector3};

/// A vector represented as a tuple
pub type TupleVec = (f32, f32, f32);

/// Generate a `TupleVec` for [`proptest::strategy::Strategy`] from -10e10 to 10e10
/// A small enough range to prevent most fp32 errors from breaking certain tests
pub fn tuplevec_small_strategy() -> impl Strategy<Value = TupleVec> {
    (
        -10e10_f32..10e10_f32,
        -10e10_f32..10e10_f32,
        -10e10_f32..10e10_f32,
    )
}

/// Convert a `TupleVec` to a [`Point3`].
pub fn tuple_to_point(tpl: &TupleVec) -> Point3 {
    Point3::new(tpl.0, tpl.1, tpl.2)
}

/// Convert a `TupleVec` to a [`Vector3`].
pub fn tuple_to_vector(tpl: &TupleVec) -> Vector3 {
    Vector3::new(tpl.0, tpl.1, tpl.2)
}

/// `n` spheres of the same radius centered on `(i * spacing, 0, 0)`.
pub fn spheres_along_x(n: usize, spacing: f32, radius: f32) -> Vec<Sphere> {
    (0..n)
        .map(|i| Sphere::new(Point3::new(i as f32 * spacing, 0.0, 0.0), radius))
        .collect()
}

/// Proxies of a sphere-only scene, in array order.
pub fn sphere_proxies(spheres: &[Sphere]) -> Vec<PrimitiveProxy> {
    spheres
        .iter()
        .enumerate()
        .map(|(index, sphere)| PrimitiveProxy::from_primitive(sphere, index))
        .collect()
}

/// `n * n * n` unit spheres on a regular grid.
pub fn grid_scene(n: usize, spacing: f32) -> Scene {
    let mut scene = Scene::default();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let center = Point3::new(x as f32, y as f32, z as f32) * spacing;
                scene.spheres.push(Sphere::new(center, 1.0));
            }
        }
    }
    scene
}

/// A scene with `k` objects of every kind, spread along a diagonal.
pub fn mixed_scene(k: usize) -> Scene {
    let mut scene = Scene::default();
    for i in 0..k {
        let base = Point3::new(i as f32 * 7.0, (i % 3) as f32 * 4.0, (i % 5) as f32 * 2.0);
        let at = |offset: f32| base + Vector3::new(0.0, offset, offset * 0.5);
        let tilt = Vector3::new(1.0, 2.0, (i % 4) as f32).normalize();

        scene.spheres.push(Sphere::new(at(0.0), 0.5));
        scene
            .cylinders
            .push(Cylinder::new(at(2.0), tilt, 0.3, 1.5));
        scene.cuboids.push(
            Cuboid::new(at(4.0), Vector3::new(0.5, 0.25, 1.0))
                .rotated(Quat::from_axis_angle(&Vector3::y_axis(), i as f32 * 0.3)),
        );
        scene.planes.push(Plane::new(at(6.0), Vector3::y(), 2.0, 1.0));
        scene.circles.push(Circle::new(at(8.0), tilt, 0.75));
        scene
            .ellipses
            .push(Ellipse::new(at(10.0), Vector3::z(), 1.0, 0.4));
        scene
            .line_segments
            .push(LineSegment::new(at(12.0), at(13.0) + Vector3::x(), 0.1));
        scene.cones.push(Cone::new(at(14.0), Vector3::y(), 0.5, 1.0));
        scene
            .tori
            .push(Torus::new(at(16.0), Vector3::y(), 1.0, 0.2));

        let origin = at(18.0);
        let mut control_points = [Point3::origin(); 16];
        for (j, point) in control_points.iter_mut().enumerate() {
            let (u, v) = ((j % 4) as f32, (j / 4) as f32);
            *point = origin + Vector3::new(u * 0.5, ((u + v) * 0.7).sin() * 0.3, v * 0.5);
        }
        scene.patches.push(BicubicPatch::new(control_points));
    }
    scene
}

/// `n` spheres with random centers in a 100 unit cube and random radii, reproducible by `seed`.
pub fn random_sphere_scene(n: usize, seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = Scene::default();
    for _ in 0..n {
        let center = Point3::new(
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
        );
        scene
            .spheres
            .push(Sphere::new(center, rng.random_range(0.1..2.0)));
    }
    scene
}

/// The parts of a [`Bvh`] that must match between equivalent builds.
pub fn structure_of(bvh: &Bvh) -> (Vec<BvhNode>, Vec<usize>) {
    (bvh.nodes.clone(), bvh.primitive_indices.clone())
}
