//! Control-signal plumbing between a hand tracker and the render loop.
//!
//! The tracker side (camera capture + landmark detection) is an external
//! collaborator running on its own cadence. It reduces each video frame to a
//! [`HandDetection`], maps that to a [`ControlState`], and publishes it into
//! a shared [`SignalCell`]. The render loop reads the latest value once per
//! tick - never blocking, never queueing, staleness accepted.
//!
//! # Example
//!
//! ```ignore
//! use morphfield::control::{HandDetection, SignalCell};
//!
//! let cell = SignalCell::new();
//! let tracker = cell.clone();
//!
//! // Tracker thread, at its own cadence:
//! tracker.publish(HandDetection::Two { distance: 0.6 }.to_control());
//!
//! // Render loop, once per frame:
//! let control = cell.latest();
//! ```

use glam::Vec2;
use std::sync::{Arc, Mutex};

/// Smallest expansion factor the field will contract to.
pub const MIN_SCALE: f32 = 0.2;
/// Largest expansion factor the field will expand to.
pub const MAX_SCALE: f32 = 3.0;

/// Wrist distance mapped to the bottom of the scale range.
const DISTANCE_DEADZONE: f32 = 0.1;
/// Scale units per unit of normalized wrist distance.
const DISTANCE_GAIN: f32 = 4.0;

/// Per-tick control value consumed by the morph engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlState {
    /// Multiplicative expansion factor, clamped to [`MIN_SCALE`]..[`MAX_SCALE`].
    pub scale: f32,
    /// Whether a live signal is present; when false the engine falls back to
    /// the idle breathing scale.
    pub active: bool,
}

impl ControlState {
    /// An active signal at the given scale (clamped into range).
    pub fn active(scale: f32) -> Self {
        Self {
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
            active: true,
        }
    }

    /// No live signal; the engine will breathe on its own.
    pub fn idle() -> Self {
        Self {
            scale: 1.0,
            active: false,
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Map a normalized two-wrist distance to an expansion scale.
///
/// `d = 0.1` rests at the minimum, `d = 0.35` is the neutral scale 1.0,
/// and `d >= 0.85` saturates at the maximum.
pub fn scale_from_distance(distance: f32) -> f32 {
    ((distance - DISTANCE_DEADZONE) * DISTANCE_GAIN).clamp(MIN_SCALE, MAX_SCALE)
}

/// Euclidean distance between two normalized (0..1 screen space) wrist
/// landmarks.
pub fn wrist_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Outcome of one detection pass over a video frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HandDetection {
    /// No hands in frame.
    None,
    /// Exactly one hand in frame.
    One,
    /// Both hands in frame, with their normalized wrist distance.
    Two {
        distance: f32,
    },
}

impl HandDetection {
    /// Collapse a detection result into the per-tick control value.
    ///
    /// A single hand carries no distance signal, so it falls back to idle
    /// rather than pinning the field at scale 1.
    pub fn to_control(self) -> ControlState {
        match self {
            HandDetection::Two { distance } => ControlState::active(scale_from_distance(distance)),
            HandDetection::One | HandDetection::None => ControlState::idle(),
        }
    }
}

/// Last-value handoff between the tracker thread and the render loop.
///
/// One writer, one reader, one slot: `publish` overwrites, `latest` reads
/// whatever is there. The reader always observes a complete `(scale, active)`
/// pair and never waits for a fresh one.
#[derive(Clone)]
pub struct SignalCell {
    inner: Arc<Mutex<ControlState>>,
}

impl SignalCell {
    /// New cell holding the idle state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ControlState::idle())),
        }
    }

    /// Overwrite the cell with the newest reading.
    pub fn publish(&self, state: ControlState) {
        *self.inner.lock().unwrap() = state;
    }

    /// Most recent reading.
    pub fn latest(&self) -> ControlState {
        *self.inner.lock().unwrap()
    }
}

impl Default for SignalCell {
    fn default() -> Self {
        Self::new()
    }
}
