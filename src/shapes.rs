//! Procedural shape sampling.
//!
//! Each shape is a statistical distribution over 3D space, not a fixed mesh:
//! re-sampling the same shape yields a different but statistically similar
//! point set. That is intentional - regenerated fields "breathe" instead of
//! snapping back to identical positions.
//!
//! # Example
//!
//! ```ignore
//! use morphfield::shapes::{self, Shape};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let points = shapes::generate(Shape::Saturn, 4000, &mut rng);
//! assert_eq!(points.len(), 4000);
//! ```

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Number of particles in the default field.
pub const DEFAULT_PARTICLE_COUNT: usize = 4000;

/// Tilt of Saturn's ring plane.
const RING_TILT: f32 = PI / 6.0;

/// The closed set of shapes the field can morph between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Heart,
    Flower,
    Saturn,
    Buddha,
    Fireworks,
    Sphere,
}

impl Shape {
    /// Every shape, in selection order.
    pub const ALL: [Shape; 6] = [
        Shape::Heart,
        Shape::Flower,
        Shape::Saturn,
        Shape::Buddha,
        Shape::Fireworks,
        Shape::Sphere,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Shape::Heart => "Heart",
            Shape::Flower => "Flower",
            Shape::Saturn => "Saturn",
            Shape::Buddha => "Buddha",
            Shape::Fireworks => "Fireworks",
            Shape::Sphere => "Sphere",
        }
    }

    /// Shape at `index` into [`Shape::ALL`], if in range.
    ///
    /// Used by selection UIs (e.g. number keys); anything outside the set
    /// is rejected here rather than defaulted inside the sampler.
    pub fn from_index(index: usize) -> Option<Shape> {
        Shape::ALL.get(index).copied()
    }
}

/// Sample `count` target positions for `shape`.
///
/// Every point is drawn independently, so the returned set is a fresh
/// realization of the shape's distribution each call.
///
/// # Panics
///
/// Panics if `count` is zero; an empty field is a programmer error.
pub fn generate<R: Rng>(shape: Shape, count: usize, rng: &mut R) -> Vec<Vec3> {
    assert!(count > 0, "particle count must be positive");
    (0..count).map(|_| sample_point(shape, rng)).collect()
}

/// Draw a single point from the shape's distribution.
fn sample_point<R: Rng>(shape: Shape, rng: &mut R) -> Vec3 {
    match shape {
        Shape::Heart => heart_point(rng),
        Shape::Flower => flower_point(rng),
        Shape::Saturn => saturn_point(rng),
        Shape::Buddha => buddha_point(rng),
        Shape::Fireworks => {
            let radius = 6.0 * rng.gen::<f32>();
            random_on_sphere(rng, radius)
        }
        Shape::Sphere => random_on_sphere(rng, 3.0),
    }
}

/// Uniform sample on a sphere surface via the inverse-CDF method.
fn random_on_sphere<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Parametric heart curve with depth jitter.
fn heart_point<R: Rng>(rng: &mut R) -> Vec3 {
    let t = TAU * rng.gen::<f32>();
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();

    Vec3::new(x * 0.2, y * 0.2, rng.gen_range(-1.0..1.0))
}

/// Four-petal rose curve with a radius-dependent z ripple.
fn flower_point<R: Rng>(rng: &mut R) -> Vec3 {
    let t = TAU * rng.gen::<f32>();
    let r = 3.0 * (4.0 * t).cos();

    Vec3::new(
        r * t.cos() * 1.5,
        r * t.sin() * 1.5,
        rng.gen_range(-1.0..1.0) + (2.0 * r).sin() * 0.5,
    )
}

/// Tilted ring (60%) around a solid planet (40%).
fn saturn_point<R: Rng>(rng: &mut R) -> Vec3 {
    if rng.gen::<f32>() > 0.4 {
        let angle = TAU * rng.gen::<f32>();
        let dist = rng.gen_range(3.5..6.0);
        let flat = Vec3::new(angle.cos() * dist, rng.gen_range(-0.1..0.1), angle.sin() * dist);
        tilt_ring(flat, RING_TILT)
    } else {
        random_on_sphere(rng, 2.0)
    }
}

/// Tilt a ring point by rotating its (x, y) pair; z is untouched.
///
/// Applying the same tilt with the opposite sign restores the point.
pub(crate) fn tilt_ring(p: Vec3, tilt: f32) -> Vec3 {
    Vec3::new(
        p.x * tilt.cos() + p.y * tilt.sin(),
        p.y * tilt.cos() - p.x * tilt.sin(),
        p.z,
    )
}

/// Seated silhouette from three stacked primitives:
/// head (30%), squashed torso (40%), ring base (30%).
fn buddha_point<R: Rng>(rng: &mut R) -> Vec3 {
    let part = rng.gen::<f32>();

    if part < 0.3 {
        random_on_sphere(rng, 1.2) + Vec3::new(0.0, 2.5, 0.0)
    } else if part < 0.7 {
        let torso = random_on_sphere(rng, 2.0);
        Vec3::new(torso.x * 1.2, torso.y, torso.z * 0.8)
    } else {
        let angle = TAU * rng.gen::<f32>();
        let radius = rng.gen_range(2.5..3.5);
        Vec3::new(
            angle.cos() * radius,
            rng.gen_range(-1.5..-1.0),
            angle.sin() * radius * 0.8,
        )
    }
}
