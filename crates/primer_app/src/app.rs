//! Winit host for the samples.
//!
//! - [`App`]: builder for the window and render settings
//! - [`Sample`]: implemented by each sample program
//! - `AppRunner`: the winit `ApplicationHandler` driving both
//!
//! ```rust,ignore
//! use primer_app::{App, Sample};
//!
//! fn main() -> primer_core::Result<()> {
//!     App::new()
//!         .with_title("HelloGPU")
//!         .with_size(800, 600)
//!         .with_screen_mode_from_args(ScreenMode::Windowed)
//!         .run::<ClearSample>()
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
pub use winit::window::{Window, WindowId};

use primer_core::errors::{PrimerError, Result};
use primer_core::settings::{AppSettings, RenderSettings, ScreenMode};
use primer_render::context::{Frame, GpuContext, capture_validation};

use crate::dialog;
use crate::time::{FrameClock, FrameState};
use crate::window;

/// One sample program: resources created once, one fixed render sequence
/// per frame.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init) after the window and GPU context exist
/// 2. [`update`](Self::update) and [`render`](Self::render) once per frame
/// 3. dropped before the GPU context when the window closes
pub trait Sample: Sized + 'static {
    /// Creates every GPU resource the sample needs. An error aborts start-up
    /// and is shown to the user.
    fn init(ctx: &GpuContext, window: &Arc<Window>) -> Result<Self>;

    /// Per-frame state changes before rendering.
    #[allow(unused_variables)]
    fn update(&mut self, ctx: &GpuContext, frame: &FrameState) {}

    /// Records the frame's passes into `frame.encoder`.
    fn render(&mut self, ctx: &GpuContext, frame: &mut Frame);

    /// Called after the surface has been resized.
    #[allow(unused_variables)]
    fn resize(&mut self, ctx: &GpuContext, width: u32, height: u32) {}
}

/// Application builder.
pub struct App {
    settings: AppSettings,
    render_settings: RenderSettings,
    startup_error: Option<PrimerError>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: AppSettings::default(),
            render_settings: RenderSettings::default(),
            startup_error: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings = self.settings.with_title(title);
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.settings = self.settings.with_size(width, height);
        self
    }

    #[must_use]
    pub fn with_screen_mode(mut self, mode: ScreenMode) -> Self {
        self.settings = self.settings.with_screen_mode(mode);
        self
    }

    /// Takes the screen mode from the first command-line argument, or
    /// `default` without one.
    #[must_use]
    pub fn with_screen_mode_from_args(self, default: ScreenMode) -> Self {
        self.with_screen_mode_args(std::env::args().skip(1), default)
    }

    /// Takes the screen mode from `args` (program name excluded). An unknown
    /// name fails [`run`](Self::run) the way a failed initialization does.
    #[must_use]
    pub fn with_screen_mode_args<I, A>(mut self, args: I, default: ScreenMode) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        match ScreenMode::from_args(args, default) {
            Ok(mode) => self.settings = self.settings.with_screen_mode(mode),
            Err(e) => self.startup_error = Some(e),
        }
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_render_settings(mut self, settings: RenderSettings) -> Self {
        self.render_settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// The configuration error [`run`](Self::run) will report, if any.
    #[must_use]
    pub fn startup_error(&self) -> Option<&PrimerError> {
        self.startup_error.as_ref()
    }

    /// Runs the sample until its window closes.
    ///
    /// Blocks the calling thread. Returns the initialisation error if the
    /// sample failed to start.
    pub fn run<S: Sample>(mut self) -> Result<()> {
        if let Some(error) = self.startup_error.take() {
            report_startup_failure(&error);
            return Err(error);
        }

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        log::info!(
            "Starting '{}' {}x{} ({})",
            self.settings.title,
            self.settings.width,
            self.settings.height,
            self.settings.screen_mode
        );

        let mut runner = AppRunner::<S>::new(self.settings, self.render_settings);
        event_loop.run_app(&mut runner)?;

        match runner.init_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn report_startup_failure(error: &PrimerError) {
    log::error!("Initialization failed: {error}");
    dialog::show_error(dialog::INIT_FAILED_TITLE, &error.to_string());
}

/// Fields drop in declaration order: the sample goes before the context,
/// the context before the window.
struct AppRunner<S: Sample> {
    sample: Option<S>,
    context: Option<GpuContext>,
    window: Option<Arc<Window>>,

    settings: AppSettings,
    render_settings: RenderSettings,
    init_error: Option<PrimerError>,

    clock: FrameClock,
}

impl<S: Sample> AppRunner<S> {
    fn new(settings: AppSettings, render_settings: RenderSettings) -> Self {
        Self {
            sample: None,
            context: None,
            window: None,
            settings,
            render_settings,
            init_error: None,
            clock: FrameClock::new(Instant::now()),
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = window::window_attributes(event_loop, &self.settings);
        let window = Arc::new(event_loop.create_window(attributes)?);
        self.window = Some(window.clone());

        let (width, height) = window::surface_size(&window, &self.settings);
        log::info!("Initializing GPU context {width}x{height}...");

        let context = pollster::block_on(GpuContext::new(
            window.clone(),
            &self.render_settings,
            width,
            height,
        ))?;
        let sample = capture_validation(&context.device, || S::init(&context, &window))?;

        self.context = Some(context);
        self.sample = Some(sample);
        log::info!("Initialization complete");
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PrimerError) {
        report_startup_failure(&error);
        self.init_error = Some(error);
        event_loop.exit();
    }

    fn render_frame(&mut self) {
        let (Some(context), Some(sample)) = (&mut self.context, &mut self.sample) else {
            return;
        };

        let state = self.clock.begin(Instant::now());
        sample.update(context, &state);

        let Some(mut frame) = context.begin_frame() else {
            return;
        };
        sample.render(context, &mut frame);
        context.end_frame(frame);

        if let Some(fps) = self.clock.presented() {
            log::debug!("FPS: {fps:.1}");
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        let (Some(context), Some(sample)) = (&mut self.context, &mut self.sample) else {
            return;
        };
        if width == 0 || height == 0 || context.size() == (width, height) {
            return;
        }
        log::info!("Resizing surface to {width}x{height}");
        context.resize(width, height);
        sample.resize(context, width, height);
    }
}

impl<S: Sample> ApplicationHandler for AppRunner<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        if let Err(e) = self.initialize(event_loop) {
            self.fail(event_loop, e);
            return;
        }

        self.clock.restart(Instant::now());
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.render_frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.sample.is_some()
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Sample resources must go before the device that created them.
        self.sample = None;
        self.context = None;
        log::info!("Shut down after {} frames", self.clock.presented_frames());
    }
}
