//! Integration tests for the morphing field.
//!
//! These exercise the crate the way an application does: shape generation
//! feeding the engine, control values arriving through the shared cell, and
//! the viewer's shader validating as real WGSL.

use glam::Vec3;
use morphfield::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ============================================================================
// Shape Sampling
// ============================================================================

#[test]
fn test_every_shape_fills_the_field() {
    let mut rng = SmallRng::seed_from_u64(11);
    for shape in Shape::ALL {
        let points = morphfield::shapes::generate(shape, DEFAULT_PARTICLE_COUNT, &mut rng);
        assert_eq!(points.len(), DEFAULT_PARTICLE_COUNT);
        assert!(points.iter().all(|p| p.is_finite()));
    }
}

#[test]
fn test_shape_labels_are_unique() {
    let labels: std::collections::HashSet<_> = Shape::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels.len(), Shape::ALL.len());
}

// ============================================================================
// Engine + Control End to End
// ============================================================================

#[test]
fn test_tracked_hands_expand_the_field() {
    let mut engine = MorphEngine::seeded(Shape::Sphere, 500, 21);
    let cell = SignalCell::new();

    // Hands far apart: the mapping saturates at the maximum scale.
    cell.publish(HandDetection::Two { distance: 0.85 }.to_control());
    for _ in 0..500 {
        engine.tick(1.0 / 60.0, cell.latest());
    }

    // Sphere targets sit at radius 3; fully expanded particles at 3 * 3.
    for p in engine.positions() {
        assert!((p.length() - 9.0).abs() < 1e-2, "unexpanded point {:?}", p);
    }
}

#[test]
fn test_losing_tracking_falls_back_to_breathing() {
    let mut engine = MorphEngine::seeded(Shape::Sphere, 500, 22);
    let cell = SignalCell::new();

    cell.publish(HandDetection::Two { distance: 0.85 }.to_control());
    for _ in 0..200 {
        engine.tick(1.0 / 60.0, cell.latest());
    }

    // Tracker dies: the last publish is idle and the field settles back
    // into the breathing band around scale 1.
    cell.publish(HandDetection::None.to_control());
    for _ in 0..2000 {
        engine.tick(1.0 / 60.0, cell.latest());
    }

    for p in engine.positions() {
        let ratio = p.length() / 3.0;
        assert!((0.85..=1.15).contains(&ratio), "ratio {ratio}");
    }
}

#[test]
fn test_shape_switch_morphs_from_current_positions() {
    let mut engine = MorphEngine::seeded(Shape::Heart, 500, 23);
    for _ in 0..300 {
        engine.tick(1.0 / 60.0, ControlState::active(1.0));
    }

    let mid_morph: Vec<Vec3> = engine.positions().to_vec();
    engine.set_shape(Shape::Sphere);

    // One tick later the field has moved only a smoothing step away from
    // where it was, not jumped to the new shape.
    engine.tick(1.0 / 60.0, ControlState::active(1.0));
    let alpha = 3.0 / 60.0;
    for (now, before) in engine.positions().iter().zip(&mid_morph) {
        let moved = (*now - *before).length();
        let remaining = before.length() + 3.0; // generous bound on |dest - before|
        assert!(moved <= remaining * alpha + 1e-4);
    }

    // And eventually it converges onto the sphere.
    for _ in 0..500 {
        engine.tick(1.0 / 60.0, ControlState::active(1.0));
    }
    for p in engine.positions() {
        assert!((p.length() - 3.0).abs() < 1e-2);
    }
}

#[test]
fn test_tracker_thread_handoff() {
    let cell = SignalCell::new();
    let tracker = cell.clone();

    let producer = std::thread::spawn(move || {
        for i in 0..1000 {
            let distance = 0.1 + (i as f32 / 1000.0) * 0.75;
            tracker.publish(HandDetection::Two { distance }.to_control());
        }
    });

    let mut engine = MorphEngine::seeded(Shape::Fireworks, 100, 24);
    for _ in 0..100 {
        // Reads interleave with publishes; every observed value is a
        // complete, in-range pair and the tick never stalls.
        let control = cell.latest();
        assert!((0.2..=3.0).contains(&control.scale));
        engine.tick(1.0 / 60.0, control);
    }
    producer.join().unwrap();

    assert!(engine.positions().iter().all(|p| p.is_finite()));
}

// ============================================================================
// Viewer Shader
// ============================================================================

#[test]
fn test_point_shader_validates() {
    let module = naga::front::wgsl::parse_str(morphfield::viewer::POINT_SHADER)
        .expect("point shader should parse");

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .expect("point shader should validate");
}
