//! # Morphfield
//!
//! A particle field that continuously morphs between procedurally generated
//! 3D shapes, with its expansion driven by a live two-hand distance signal.
//!
//! ## Quick Start
//!
//! ```ignore
//! use morphfield::prelude::*;
//! use winit::keyboard::KeyCode;
//!
//! fn main() {
//!     let engine = MorphEngine::new(Shape::Heart, DEFAULT_PARTICLE_COUNT);
//!     let signal = SignalCell::new();
//!
//!     // A tracker thread publishes control values at its own cadence...
//!     let tracker = signal.clone();
//!     std::thread::spawn(move || {
//!         tracker.publish(HandDetection::Two { distance: 0.6 }.to_control());
//!     });
//!
//!     // ...and the viewer consumes the latest one every frame.
//!     Viewer::new(engine)
//!         .with_signal(signal)
//!         .with_update(|ctx| {
//!             if ctx.key_pressed(KeyCode::Digit2) {
//!                 ctx.engine.set_shape(Shape::Flower);
//!             }
//!         })
//!         .run();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Shapes
//!
//! [`shapes::generate`] turns a [`Shape`] into a fresh set of target
//! positions. Shapes are distributions, not meshes: re-selecting a shape
//! yields a different but statistically similar point set.
//!
//! ### Morphing
//!
//! [`MorphEngine`] owns the live position buffer and the target buffer.
//! Every tick it moves each particle a clamped exponential-smoothing step
//! toward `target * scale`. Switching shapes replaces only the target, so
//! the field visibly flows from one shape into the next.
//!
//! ### Control
//!
//! The expansion scale comes from a hand tracker: the distance between two
//! wrists maps to a scale in [0.2, 3.0] ([`control::scale_from_distance`]).
//! Tracker and render loop meet in a [`SignalCell`], a last-value cell with
//! no queueing. When no signal is active the field falls back to a gentle
//! idle breathing oscillation ([`idle::idle_scale`]).

pub mod control;
pub mod idle;
pub mod morph;
pub mod shapes;
pub mod time;
pub mod viewer;

pub use control::{ControlState, HandDetection, SignalCell};
pub use glam::{Vec2, Vec3};
pub use morph::MorphEngine;
pub use shapes::{Shape, DEFAULT_PARTICLE_COUNT};
pub use viewer::{FrameContext, Viewer};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use morphfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::{
        scale_from_distance, wrist_distance, ControlState, HandDetection, SignalCell,
    };
    pub use crate::idle::idle_scale;
    pub use crate::morph::MorphEngine;
    pub use crate::shapes::{Shape, DEFAULT_PARTICLE_COUNT};
    pub use crate::time::FrameClock;
    pub use crate::viewer::{FrameContext, Viewer};
    pub use crate::{Vec2, Vec3};
}
