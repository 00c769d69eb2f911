//! The morph engine: a live particle buffer chasing a scaled target shape.
//!
//! The engine owns two fixed-length buffers. `target` is regenerated
//! wholesale on a shape change; `current` is only ever nudged toward
//! `target * scale` by exponential smoothing, one step per tick. Leaving
//! `current` untouched on a shape change is what produces the visible morph:
//! the field flows from wherever it was into the new shape.
//!
//! # Example
//!
//! ```ignore
//! use morphfield::{ControlState, MorphEngine, Shape};
//!
//! let mut engine = MorphEngine::new(Shape::Heart, 4000);
//! engine.tick(1.0 / 60.0, ControlState::active(1.5));
//! engine.set_shape(Shape::Saturn); // current keeps morphing from where it was
//! ```

use crate::control::ControlState;
use crate::idle;
use crate::shapes::{self, Shape};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Exponential smoothing rate, in 1/seconds.
pub const DEFAULT_SMOOTHING_RATE: f32 = 3.0;

/// Whole-field yaw speed in radians per second.
const ROTATION_SPEED: f32 = 0.1;

/// Half-size of the cube the startup scatter is drawn from.
const SCATTER_HALF_SIZE: f32 = 5.0;

/// Owns and advances the particle field.
///
/// Single-threaded: both buffers are touched only from the tick path, and
/// shape changes land between ticks, so no tick ever observes a
/// half-written target.
pub struct MorphEngine {
    shape: Shape,
    current: Vec<Vec3>,
    target: Vec<Vec3>,
    rotation_y: f32,
    smoothing_rate: f32,
    elapsed: f32,
    rng: SmallRng,
}

impl MorphEngine {
    /// New engine showing `shape` with `count` particles.
    ///
    /// `current` starts as a uniform scatter so the first seconds of the
    /// session are a morph from noise into the shape.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn new(shape: Shape, count: usize) -> Self {
        Self::with_rng(shape, count, SmallRng::from_entropy())
    }

    /// New engine with a fixed seed, for deterministic tests and benches.
    pub fn seeded(shape: Shape, count: usize, seed: u64) -> Self {
        Self::with_rng(shape, count, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(shape: Shape, count: usize, mut rng: SmallRng) -> Self {
        let target = shapes::generate(shape, count, &mut rng);
        let current = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-SCATTER_HALF_SIZE..SCATTER_HALF_SIZE),
                    rng.gen_range(-SCATTER_HALF_SIZE..SCATTER_HALF_SIZE),
                    rng.gen_range(-SCATTER_HALF_SIZE..SCATTER_HALF_SIZE),
                )
            })
            .collect();

        Self {
            shape,
            current,
            target,
            rotation_y: 0.0,
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
            elapsed: 0.0,
            rng,
        }
    }

    /// Shape the field is currently morphing toward.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of particles in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Always false; the field cannot be constructed empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Accumulated whole-field yaw, wrapped to [0, 2pi).
    ///
    /// Applied by the renderer as a rotation of the entire field, not baked
    /// into the per-particle positions.
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Live positions, read-only. Re-upload every frame.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Live positions as a flat byte slice (three f32 per particle), ready
    /// for a vertex-buffer upload.
    #[inline]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.current)
    }

    /// Target positions the field is converging toward (unscaled).
    #[inline]
    pub fn targets(&self) -> &[Vec3] {
        &self.target
    }

    /// Set the responsiveness of the morph (clamped to non-negative).
    pub fn set_smoothing_rate(&mut self, rate: f32) {
        self.smoothing_rate = rate.max(0.0);
    }

    /// Switch the target shape.
    ///
    /// Regenerates `target` wholesale; `current` is left untouched so the
    /// field morphs over from wherever it was.
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.target = shapes::generate(shape, self.target.len(), &mut self.rng);
    }

    /// Advance the field by `dt` seconds under the given control value.
    ///
    /// Each particle moves a clamped exponential-smoothing step toward
    /// `target * scale`, where scale comes from the control signal or, when
    /// inactive, from the idle breathing oscillation. A non-finite or
    /// non-positive `dt` is a zero-effect tick, so a stalled clock can never
    /// push NaN into the position buffer.
    pub fn tick(&mut self, dt: f32, control: ControlState) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.elapsed += dt;
        let scale = if control.active {
            control.scale
        } else {
            idle::idle_scale(self.elapsed)
        };

        // Clamped so a long frame stall lands exactly on the destination
        // instead of overshooting past it.
        let alpha = (self.smoothing_rate * dt).clamp(0.0, 1.0);

        for (current, target) in self.current.iter_mut().zip(&self.target) {
            *current += (*target * scale - *current) * alpha;
        }

        self.rotation_y = (self.rotation_y + dt * ROTATION_SPEED).rem_euclid(TAU);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_engine_starts_scattered() {
        let engine = MorphEngine::seeded(Shape::Sphere, 100, 1);
        assert_eq!(engine.len(), 100);
        assert_eq!(engine.positions().len(), engine.targets().len());
        for p in engine.positions() {
            assert!(p.abs().max_element() <= SCATTER_HALF_SIZE);
        }
    }

    #[test]
    fn test_converges_to_target() {
        let mut engine = MorphEngine::seeded(Shape::Heart, 200, 2);
        for _ in 0..500 {
            engine.tick(DT, ControlState::active(1.0));
        }
        for (current, target) in engine.positions().iter().zip(engine.targets()) {
            assert!((*current - *target).abs().max_element() < 1e-4);
        }
    }

    #[test]
    fn test_converges_to_scaled_target() {
        let mut engine = MorphEngine::seeded(Shape::Sphere, 200, 3);
        for _ in 0..500 {
            engine.tick(DT, ControlState::active(2.5));
        }
        for (current, target) in engine.positions().iter().zip(engine.targets()) {
            assert!((*current - *target * 2.5).abs().max_element() < 1e-4);
        }
    }

    #[test]
    fn test_large_dt_does_not_overshoot() {
        let mut engine = MorphEngine::seeded(Shape::Flower, 200, 4);
        let before: Vec<Vec3> = engine.positions().to_vec();

        engine.tick(5.0, ControlState::active(1.0));

        for ((after, before), target) in engine
            .positions()
            .iter()
            .zip(&before)
            .zip(engine.targets())
        {
            // Interpolation factor saturates at 1: one huge step lands on
            // the destination exactly, never past it.
            assert!((*after - *target).abs().max_element() < 1e-5);
            for axis in 0..3 {
                let span = target[axis] - before[axis];
                let step = after[axis] - before[axis];
                assert!(step.abs() <= span.abs() + 1e-5);
                assert!(step * span >= 0.0);
            }
        }
    }

    #[test]
    fn test_set_shape_leaves_current_untouched() {
        let mut engine = MorphEngine::seeded(Shape::Sphere, 150, 5);
        for _ in 0..30 {
            engine.tick(DT, ControlState::active(1.0));
        }

        let current_before: Vec<Vec3> = engine.positions().to_vec();
        let target_before: Vec<Vec3> = engine.targets().to_vec();

        engine.set_shape(Shape::Fireworks);

        assert_eq!(engine.shape(), Shape::Fireworks);
        assert_eq!(engine.positions(), current_before.as_slice());
        assert_eq!(engine.len(), 150);
        assert_eq!(engine.targets().len(), 150);
        assert_ne!(engine.targets(), target_before.as_slice());
    }

    #[test]
    fn test_non_finite_dt_is_zero_effect() {
        let mut engine = MorphEngine::seeded(Shape::Saturn, 100, 6);
        engine.tick(DT, ControlState::active(1.0));

        let positions: Vec<Vec3> = engine.positions().to_vec();
        let rotation = engine.rotation_y();

        for bad_dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0, 0.0] {
            engine.tick(bad_dt, ControlState::active(2.0));
        }

        assert_eq!(engine.positions(), positions.as_slice());
        assert_eq!(engine.rotation_y(), rotation);
        for p in engine.positions() {
            assert!(p.is_finite());
        }
    }

    #[test]
    fn test_idle_control_keeps_breathing() {
        let mut engine = MorphEngine::seeded(Shape::Sphere, 200, 7);
        for _ in 0..2000 {
            engine.tick(DT, ControlState::idle());
        }
        // Settled into the breathing band around the unscaled target.
        for (current, target) in engine.positions().iter().zip(engine.targets()) {
            let radius = current.length() / target.length();
            assert!((0.85..=1.15).contains(&radius), "radius ratio {radius}");
        }
    }

    #[test]
    fn test_rotation_wraps() {
        let mut engine = MorphEngine::seeded(Shape::Sphere, 10, 8);
        for _ in 0..2000 {
            engine.tick(0.5, ControlState::idle());
        }
        assert!((0.0..TAU).contains(&engine.rotation_y()));
    }
}
