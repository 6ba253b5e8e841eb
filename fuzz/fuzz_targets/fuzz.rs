#![no_main]
use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nalgebra::Point3;
use ordered_float::NotNan;
use shape_bvh::bvh::BvhBuilder;
use shape_bvh::config::BuildConfig;
use shape_bvh::flat_bvh::{pack, traverse_flat_bvh};
use shape_bvh::ray::Ray;
use shape_bvh::scene::Scene;
use shape_bvh::shapes::{Cuboid, LineSegment, Sphere};

type Float = f32;
const LIMIT: Float = 1_000_000.0;

fuzz_target!(|workload: Workload| {
    workload.fuzz();
});

#[derive(Arbitrary)]
struct ArbitraryPoint {
    coordinates: [NotNan<Float>; 3],
}

impl ArbitraryPoint {
    fn point(&self) -> Point3<Float> {
        Point3::from_slice(&self.coordinates).map(|f| f.into_inner().clamp(-LIMIT, LIMIT))
    }
}

impl Debug for ArbitraryPoint {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.point(), f)
    }
}

fn size(value: NotNan<Float>) -> Float {
    value.into_inner().abs().min(LIMIT)
}

#[derive(Debug, Arbitrary)]
enum ArbitraryShape {
    Sphere(ArbitraryPoint, NotNan<Float>),
    Cuboid(ArbitraryPoint, ArbitraryPoint),
    Segment(ArbitraryPoint, ArbitraryPoint, NotNan<Float>),
}

impl ArbitraryShape {
    fn add_to(&self, scene: &mut Scene) {
        match self {
            ArbitraryShape::Sphere(center, radius) => {
                scene.spheres.push(Sphere::new(center.point(), size(*radius)))
            }
            ArbitraryShape::Cuboid(center, half) => {
                let half = half.point().map(Float::abs).coords;
                scene.cuboids.push(Cuboid::new(center.point(), half))
            }
            ArbitraryShape::Segment(start, end, thickness) => scene.line_segments.push(
                LineSegment::new(start.point(), end.point(), size(*thickness)),
            ),
        }
    }
}

#[derive(Arbitrary)]
struct ArbitraryRay {
    origin: ArbitraryPoint,
    destination: ArbitraryPoint,
}

impl Debug for ArbitraryRay {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.ray(), f)
    }
}

impl ArbitraryRay {
    fn ray(&self) -> Ray {
        // Double normalize helps when the first one encounters precision issues.
        let mut direction = (self.destination.point() - self.origin.point())
            .normalize()
            .normalize();
        // Ensure no degenerate direction.
        if direction.magnitude() < 0.5 || direction.iter().any(|f| f.is_nan() || f.abs() > 1.5) {
            direction.iter_mut().for_each(|f| *f = 1.0);
            direction = direction.normalize();
        }
        Ray::new(self.origin.point(), direction)
    }
}

#[derive(Debug, Arbitrary)]
struct Workload {
    shapes: Vec<ArbitraryShape>,
    ray: ArbitraryRay,
    max_leaf_size: u8,
    max_depth: u8,
    auto_fallback: bool,
}

impl Workload {
    fn fuzz(self) {
        let mut scene = Scene::default();
        for shape in &self.shapes {
            shape.add_to(&mut scene);
        }

        let config = BuildConfig::default()
            .with_max_leaf_size(usize::from(self.max_leaf_size % 16).max(1))
            .with_max_depth(usize::from(self.max_depth).max(1))
            .with_auto_fallback(self.auto_fallback);
        let builder = BvhBuilder::new(config).unwrap();
        let bvh = builder.build(&scene);

        if let Err(error) = bvh.validate() {
            panic!("invalid hierarchy: {error}\n{}", bvh.stats);
        }

        let buffers = pack(&bvh).unwrap();
        let ray = self.ray.ray();
        let tree = bvh.traverse(&ray).into_iter().collect::<HashSet<_>>();
        let flat = traverse_flat_bvh(&ray, &buffers.nodes, &buffers.primitive_indices)
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(tree, flat);
    }
}
