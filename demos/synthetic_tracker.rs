//! # Synthetic Tracker
//!
//! Stands in for the camera + hand-landmark collaborator: a background
//! thread publishes readings at its own ~30 Hz cadence through the shared
//! [`SignalCell`] while the render loop consumes whatever is latest each
//! frame. The two sides never wait for each other.
//!
//! The synthetic hands drift apart and together on slow sine waves, and
//! "lose tracking" for a couple of seconds out of every ten so the idle
//! breathing fallback is visible too.
//!
//! Keys: `1`-`6` select a shape, `Esc` quits.
//!
//! Run with: `cargo run --example synthetic_tracker`

use morphfield::prelude::*;
use std::thread;
use std::time::{Duration, Instant};
use winit::keyboard::KeyCode;

const SHAPE_KEYS: [KeyCode; 6] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

/// Detection cadence of the simulated tracker.
const TRACKER_INTERVAL: Duration = Duration::from_millis(33);

/// Seconds of each 10-second cycle spent with tracking "lost".
const DROPOUT_SECS: f32 = 2.0;

fn main() {
    let engine = MorphEngine::new(Shape::Saturn, DEFAULT_PARTICLE_COUNT);
    let signal = SignalCell::new();

    let tracker = signal.clone();
    thread::spawn(move || {
        let start = Instant::now();
        loop {
            let t = start.elapsed().as_secs_f32();

            let detection = if t % 10.0 < DROPOUT_SECS {
                HandDetection::None
            } else {
                // Two wrists wandering across normalized screen space.
                let left = Vec2::new(0.5 - 0.25 * (0.31 * t).sin(), 0.5 + 0.05 * (0.47 * t).cos());
                let right = Vec2::new(0.5 + 0.25 * (0.23 * t).cos(), 0.5 - 0.05 * (0.61 * t).sin());
                HandDetection::Two {
                    distance: wrist_distance(left, right),
                }
            };

            tracker.publish(detection.to_control());
            thread::sleep(TRACKER_INTERVAL);
        }
    });

    println!("synthetic tracker running | 1-6 shapes | Esc quit");

    Viewer::new(engine)
        .with_signal(signal)
        .with_color(Vec3::new(0.2, 0.8, 1.0))
        .with_title("morphfield - synthetic tracker")
        .with_update(|ctx| {
            for (index, key) in SHAPE_KEYS.iter().enumerate() {
                if ctx.key_pressed(*key) {
                    if let Some(shape) = Shape::from_index(index) {
                        ctx.engine.set_shape(shape);
                    }
                }
            }
            if ctx.key_pressed(KeyCode::Escape) {
                ctx.exit();
            }
        })
        .run();
}
