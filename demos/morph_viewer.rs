//! # Interactive Morph Viewer
//!
//! Drives the field with "virtual hands" on the keyboard, standing in for
//! the camera + landmark tracker.
//!
//! Controls:
//! - `1`-`6` select a shape (Heart, Flower, Saturn, Buddha, Fireworks, Sphere)
//! - `H` toggle hand presence; `Up`/`Down` move the hands apart/together
//! - `C` cycle the particle color, `F` toggle fullscreen, `Esc` quit
//! - drag to orbit, scroll to zoom
//!
//! Run with: `cargo run --example morph_viewer`

use morphfield::prelude::*;
use winit::keyboard::KeyCode;

const SHAPE_KEYS: [KeyCode; 6] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

const COLORS: [Vec3; 4] = [
    Vec3::new(1.0, 0.0, 0.67), // magenta
    Vec3::new(0.2, 0.8, 1.0),  // cyan
    Vec3::new(1.0, 0.75, 0.2), // amber
    Vec3::new(0.5, 1.0, 0.4),  // lime
];

/// How fast the arrow keys move the virtual hands, in normalized
/// screen-space distance per second.
const HAND_SPEED: f32 = 0.4;

fn main() {
    let engine = MorphEngine::new(Shape::Heart, DEFAULT_PARTICLE_COUNT);

    let mut distance = 0.35_f32;
    let mut hands_present = false;
    let mut color_index = 0;

    println!("1-6 shapes | H hands on/off | Up/Down spread | C color | F fullscreen | Esc quit");

    Viewer::new(engine)
        .with_color(COLORS[0])
        .with_title("morphfield - virtual hands")
        .with_update(move |ctx| {
            for (index, key) in SHAPE_KEYS.iter().enumerate() {
                if ctx.key_pressed(*key) {
                    if let Some(shape) = Shape::from_index(index) {
                        println!("shape: {}", shape.label());
                        ctx.engine.set_shape(shape);
                    }
                }
            }

            if ctx.key_pressed(KeyCode::KeyH) {
                hands_present = !hands_present;
                println!(
                    "hands: {}",
                    if hands_present { "tracking" } else { "lost" }
                );
            }
            if ctx.key_held(KeyCode::ArrowUp) {
                distance += HAND_SPEED * ctx.delta();
            }
            if ctx.key_held(KeyCode::ArrowDown) {
                distance -= HAND_SPEED * ctx.delta();
            }
            distance = distance.clamp(0.0, 1.0);

            let detection = if hands_present {
                HandDetection::Two { distance }
            } else {
                HandDetection::None
            };
            ctx.signal.publish(detection.to_control());

            if ctx.key_pressed(KeyCode::KeyC) {
                color_index = (color_index + 1) % COLORS.len();
                ctx.set_color(COLORS[color_index]);
            }
            if ctx.key_pressed(KeyCode::KeyF) {
                ctx.toggle_fullscreen();
            }
            if ctx.key_pressed(KeyCode::Escape) {
                ctx.exit();
            }
        })
        .run();
}
