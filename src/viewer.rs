//! Standalone backdrop window backed by winit.
//!
//! ```no_run
//! # use planetscape::Viewer;
//! Viewer::builder()
//!     .with_title("Planetscape")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::animation::Mode;
use crate::engine::BackdropEngine;
use crate::error::PlanetscapeError;
use crate::input::{InputEvent, Modifiers, MouseButton};
use crate::options::Options;

/// Pixels of touchpad scroll that count as one wheel notch.
const PIXELS_PER_NOTCH: f64 = 100.0;

/// How often the debug title refreshes its FPS readout.
const TITLE_REFRESH: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Builder with the default title and options.
    fn new() -> Self {
        Self {
            options: None,
            title: "Planetscape".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the backdrop.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop. The mouse wheel scrolls a virtual page of
/// `page.length` pixels; the debug chord hands the camera to the orbit
/// controls.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::Viewer`] if the event loop cannot be
    /// created or exits with an error.
    pub fn run(self) -> Result<(), PlanetscapeError> {
        let event_loop =
            EventLoop::new().map_err(|e| PlanetscapeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            title: self.title,
            last_title_update: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PlanetscapeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<BackdropEngine>,
    options: Option<Options>,
    title: String,
    last_title_update: Instant,
}

/// The wgpu surface size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Window title for the current mode. Scroll mode shows the page, so the
/// title stays plain; debug mode hides it and reports the frame rate.
fn window_title(base: &str, mode: Mode, fps: f32) -> String {
    match mode {
        Mode::Scroll => base.to_owned(),
        Mode::Debug => format!("{base} [debug, {fps:.0} fps]"),
    }
}

impl ViewerApp {
    fn refresh_title(&mut self, force: bool) {
        let (Some(window), Some(engine)) = (&self.window, &self.engine) else {
            return;
        };
        let now = Instant::now();
        let due = now.duration_since(self.last_title_update) >= TITLE_REFRESH;
        if force || (engine.mode() == Mode::Debug && due) {
            window.set_title(&window_title(&self.title, engine.mode(), engine.fps()));
            self.last_title_update = now;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(engine) = &mut self.engine {
            if engine.should_render() {
                if let Err(e) = engine.render() {
                    log::error!("render error: {e:?}");
                    if matches!(e, wgpu::SurfaceError::OutOfMemory) {
                        event_loop.exit();
                        return;
                    }
                }
            }
        }
        self.refresh_title(false);
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(logical_w, logical_h))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let options = self.options.take().unwrap_or_default();
        let engine = match pollster::block_on(BackdropEngine::new(window.clone(), size, options)) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(engine) = &mut self.engine else {
            return;
        };

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                engine.resize(vp_w, vp_h);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::Focused(false) => engine.release_pointer(),

            WindowEvent::MouseInput { button, state, .. } => {
                let _ = engine.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                let _ = engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_NOTCH) as f32,
                };
                let _ = engine.handle_input(InputEvent::Wheel { delta: notches });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                let _ = engine.handle_input(InputEvent::ModifiersChanged(Modifiers::from(
                    modifiers.state(),
                )));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let before = engine.mode();
                if engine.handle_key_press(&format!("{code:?}")) && engine.mode() != before {
                    self.refresh_title(true);
                }
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_reflects_mode() {
        assert_eq!(window_title("Planetscape", Mode::Scroll, 60.0), "Planetscape");
        assert_eq!(
            window_title("Planetscape", Mode::Debug, 59.6),
            "Planetscape [debug, 60 fps]"
        );
    }

    #[test]
    fn builder_defaults() {
        let viewer = Viewer::builder().build();
        assert_eq!(viewer.title, "Planetscape");
        assert_eq!(viewer.options, Options::default());
    }
}
