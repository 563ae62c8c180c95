//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) and `pixels` (presentation) with the
// lobby's frame loop.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌───────────────────────────────────────────────┐
//  │  Winit Event Loop                              │
//  │   ↓                                            │
//  │  InputProcessor                                │
//  │   ├─ Converts Winit keys/buttons               │
//  │   └─ Tracks pointer (window → canvas pixels)   │
//  │   ↓                                            │
//  │  InputBuffer                                   │
//  │   ↓ (drain on RedrawRequested)                 │
//  │  Lobby::frame(batch, dt)                       │
//  │   ↓                                            │
//  │  Canvas ──copy──► Pixels frame ──► render()    │
//  └───────────────────────────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input handed over as one batch
//    → Redraws requested from about_to_wait at the configured FPS
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input collected in between is
//   delivered atomically, in arrival order
// - **Fixed-size canvas**: the lobby renders at the configured viewport;
//   `pixels` scales it into whatever size the window has
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Launcher::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::*;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::geometry::{Position, Size};
use crate::core::input::InputEvent;
use crate::lobby::{FrameControl, Lobby};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop, a window or a pixel surface
/// the launcher cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),

    #[error("window creation failed: {0}")]
    WindowCreation(#[from] OsError),

    /// The pixel surface could not be created or presented.
    #[error("pixel surface error: {0}")]
    Surface(#[from] pixels::Error),
}

//=== PlatformConfig ======================================================

/// Longest pause between frames, whatever the configured FPS.
const MAX_FRAME_INTERVAL: Duration = Duration::from_secs(1);

/// Window settings handed over by the launcher.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlatformConfig {
    pub title: String,
    pub viewport: Size,
    pub fps: f64,
}

impl PlatformConfig {
    /// Time between two frames at the configured FPS, capped at one
    /// second. Rates that yield no representable interval get the cap.
    pub(crate) fn frame_interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.fps)
            .map_or(MAX_FRAME_INTERVAL, |interval| interval.min(MAX_FRAME_INTERVAL))
    }
}

//=== Platform ============================================================

/// Window owner, input aggregator and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(lobby, config)`
/// 2. **Execution**: `platform.run()` - blocks in the event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: the lobby returns `FrameControl::Exit`, or a fatal
///    error is recorded and returned from `run`
///
/// # Fields
///
/// - `window`/`pixels`: created lazily in `resumed()` (mobile compatibility)
/// - `buffer`: accumulates events until `RedrawRequested`
/// - `input_processor`: converts Winit events → launcher events
pub(crate) struct Platform {
    config: PlatformConfig,
    lobby: Lobby,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Presentation surface bound to `window`.
    pixels: Option<Pixels<'static>>,

    buffer: InputBuffer,
    input_processor: InputProcessor,

    last_frame: Instant,
    next_frame: Instant,

    /// First fatal error, returned from `run`.
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform driving `lobby`.
    ///
    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub fn new(lobby: Lobby, config: PlatformConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        let now = Instant::now();
        Self {
            config,
            lobby,
            window: None,
            pixels: None,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            last_frame: now,
            next_frame: now,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the lobby exits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails, or if the window or pixel surface could not be set up.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Creates the window and its pixel surface.
    fn create_surface(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(Arc<Window>, Pixels<'static>), PlatformError> {
        let viewport = self.config.viewport;
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(viewport.width, viewport.height));

        let window = Arc::new(event_loop.create_window(attrs)?);
        let inner = window.inner_size();
        let texture = SurfaceTexture::new(inner.width, inner.height, Arc::clone(&window));
        let pixels = Pixels::new(viewport.width, viewport.height, texture)?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI, canvas {}x{}",
            inner.width,
            inner.height,
            window.scale_factor(),
            viewport.width,
            viewport.height
        );
        Ok((window, pixels))
    }

    /// Records a fatal error and stops the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    /// Maps a window-space cursor position to canvas pixels.
    fn to_canvas(&self, x: f64, y: f64) -> Position {
        match &self.pixels {
            Some(pixels) => {
                let (px, py) = pixels
                    .window_pos_to_pixel((x as f32, y as f32))
                    .unwrap_or_else(|outside| pixels.clamp_pixel_pos(outside));
                Position::new(px as i32, py as i32)
            }
            None => Position::new(x as i32, y as i32),
        }
    }

    /// Runs one lobby frame and presents the canvas.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;

        if !self.buffer.is_empty() {
            trace!(target: "platform::input", "Flushing {} events", self.buffer.len());
        }
        let input = self.buffer.drain(self.input_processor.pointer());

        if self.lobby.frame(&input, dt) == FrameControl::Exit {
            info!(target: "platform", "Lobby finished, closing window");
            event_loop.exit();
            return;
        }

        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };

        self.lobby.canvas().copy_to(pixels.frame_mut());
        if let Err(e) = pixels.render() {
            self.fail(event_loop, PlatformError::Surface(e));
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet. On mobile, this may be
    /// called multiple times (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match self.create_surface(event_loop) {
            Ok((window, pixels)) => {
                window.request_redraw();
                self.window = Some(window);
                self.pixels = Some(pixels);
                self.last_frame = Instant::now();
                self.next_frame = self.last_frame + self.config.frame_interval();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.buffer.push(InputEvent::QuitRequested);
                self.redraw(event_loop);
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.resize_surface(size.width, size.height) {
                        warn!(target: "platform", "Surface resize to {}x{} failed: {}", size.width, size.height, e);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pointer = self.to_canvas(position.x, position.y);
                self.input_processor.update_pointer(pointer);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Key event ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = self.input_processor.process_mouse_button(button, state) {
                    self.buffer.push(event);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {
                // Ignore: Focused, ScaleFactorChanged (Resized follows), etc.
            }
        }
    }

    /// Paces redraws at the configured FPS.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame = now + self.config.frame_interval();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
