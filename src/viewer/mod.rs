//! Windowed point viewer for the morphing field.
//!
//! The viewer owns the render loop: once per display frame it runs the
//! user's update callback, reads the latest control value from the shared
//! [`SignalCell`], ticks the engine, re-uploads the position buffer, and
//! draws. Dragging orbits the camera, scrolling zooms.
//!
//! # Example
//!
//! ```ignore
//! use morphfield::prelude::*;
//! use winit::keyboard::KeyCode;
//!
//! let engine = MorphEngine::new(Shape::Heart, DEFAULT_PARTICLE_COUNT);
//! Viewer::new(engine)
//!     .with_color(Vec3::new(1.0, 0.0, 0.67))
//!     .with_update(|ctx| {
//!         if ctx.key_pressed(KeyCode::Escape) {
//!             ctx.exit();
//!         }
//!     })
//!     .run();
//! ```

mod gpu;
mod shader;

pub use shader::POINT_SHADER;

use crate::control::SignalCell;
use crate::morph::MorphEngine;
use crate::time::FrameClock;
use gpu::GpuState;

use glam::Vec3;
use std::collections::HashSet;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

type UpdateFn = Box<dyn FnMut(&mut FrameContext)>;

/// Per-frame context handed to the update callback.
///
/// Gives the callback the engine (to switch shapes), the signal cell (to
/// publish control values from in-process sources), keyboard state, timing,
/// and window requests.
pub struct FrameContext<'a> {
    /// The engine driving the field; switch shapes through this.
    pub engine: &'a mut MorphEngine,
    /// The shared control cell the render loop reads after this callback.
    pub signal: &'a SignalCell,
    pressed: &'a HashSet<KeyCode>,
    held: &'a HashSet<KeyCode>,
    elapsed: f32,
    delta: f32,
    color: &'a mut Vec3,
    exit: &'a mut bool,
    toggle_fullscreen: &'a mut bool,
}

impl FrameContext<'_> {
    /// Was this key pressed since the previous frame (ignoring repeats)?
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Is this key currently held down?
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Seconds since the viewer started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds since the previous frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Current particle color.
    pub fn color(&self) -> Vec3 {
        *self.color
    }

    /// Change the particle color.
    pub fn set_color(&mut self, color: Vec3) {
        *self.color = color;
    }

    /// Toggle borderless fullscreen after this frame.
    pub fn toggle_fullscreen(&mut self) {
        *self.toggle_fullscreen = true;
    }

    /// Close the window and end the run loop.
    pub fn exit(&mut self) {
        *self.exit = true;
    }
}

/// Viewer builder.
///
/// Use method chaining to configure, then call `.run()` to open the window;
/// `run` blocks until the window closes.
pub struct Viewer {
    engine: MorphEngine,
    signal: SignalCell,
    color: Vec3,
    point_size: f32,
    title: String,
    update: Option<UpdateFn>,
}

impl Viewer {
    /// Viewer around an engine, with defaults for everything else.
    pub fn new(engine: MorphEngine) -> Self {
        Self {
            engine,
            signal: SignalCell::new(),
            color: Vec3::new(1.0, 0.0, 0.67),
            point_size: 0.015,
            title: "morphfield".to_string(),
            update: None,
        }
    }

    /// Share an externally-owned control cell (e.g. fed by a tracker
    /// thread). Without this the viewer creates its own idle cell.
    pub fn with_signal(mut self, signal: SignalCell) -> Self {
        self.signal = signal;
        self
    }

    /// Particle color (RGB, 0.0-1.0).
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Point sprite size in clip units.
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Per-frame callback, run before the engine tick.
    pub fn with_update<F>(mut self, update: F) -> Self
    where
        F: FnMut(&mut FrameContext) + 'static,
    {
        self.update = Some(Box::new(update));
        self
    }

    /// Open the window and run. Blocks until the window is closed.
    pub fn run(self) {
        let event_loop = EventLoop::new().unwrap();
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app).unwrap();
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    engine: MorphEngine,
    signal: SignalCell,
    clock: FrameClock,
    color: Vec3,
    point_size: f32,
    title: String,
    update: Option<UpdateFn>,
    pressed: HashSet<KeyCode>,
    held: HashSet<KeyCode>,
    is_fullscreen: bool,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
}

impl App {
    fn new(viewer: Viewer) -> Self {
        Self {
            window: None,
            gpu_state: None,
            engine: viewer.engine,
            signal: viewer.signal,
            clock: FrameClock::new(),
            color: viewer.color,
            point_size: viewer.point_size,
            title: viewer.title,
            update: viewer.update,
            pressed: HashSet::new(),
            held: HashSet::new(),
            is_fullscreen: false,
            mouse_pressed: false,
            last_mouse_pos: None,
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (elapsed, delta) = self.clock.advance();

        let mut exit = false;
        let mut toggle_fullscreen = false;
        if let Some(update) = &mut self.update {
            let mut ctx = FrameContext {
                engine: &mut self.engine,
                signal: &self.signal,
                pressed: &self.pressed,
                held: &self.held,
                elapsed,
                delta,
                color: &mut self.color,
                exit: &mut exit,
                toggle_fullscreen: &mut toggle_fullscreen,
            };
            update(&mut ctx);
        }
        self.pressed.clear();

        if exit {
            event_loop.exit();
            return;
        }
        if toggle_fullscreen {
            if let Some(window) = &self.window {
                let fullscreen = if self.is_fullscreen {
                    None
                } else {
                    Some(Fullscreen::Borderless(None))
                };
                window.set_fullscreen(fullscreen);
                self.is_fullscreen = !self.is_fullscreen;
            }
        }

        // Latest tracker value; stale is fine, blocking is not.
        let control = self.signal.latest();
        self.engine.tick(delta, control);

        if let Some(gpu_state) = &mut self.gpu_state {
            gpu_state.upload_positions(self.engine.position_bytes());
            match gpu_state.render(self.engine.rotation_y(), self.color, self.point_size) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu_state.resize(winit::dpi::PhysicalSize {
                    width: gpu_state.config.width,
                    height: gpu_state.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title(self.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
            self.window = Some(window.clone());

            self.gpu_state = Some(pollster::block_on(GpuState::new(
                window,
                self.engine.position_bytes(),
                self.engine.len() as u32,
            )));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if !event.repeat {
                                self.pressed.insert(code);
                            }
                            self.held.insert(code);
                        }
                        ElementState::Released => {
                            self.held.remove(&code);
                        }
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;

                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.camera.yaw -= dx as f32 * 0.005;
                            gpu_state.camera.pitch += dy as f32 * 0.005;
                            gpu_state.camera.pitch = gpu_state.camera.pitch.clamp(-1.5, 1.5);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.camera.distance -= scroll * 0.5;
                    gpu_state.camera.distance = gpu_state.camera.distance.clamp(2.0, 30.0);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }
}
