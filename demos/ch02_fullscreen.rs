//! Clears the screen in exclusive 800x600 fullscreen at 60 Hz.
//!
//! Usage: `cargo run --example ch02_fullscreen [window|fullscreen|virtual]`

use primer::prelude::*;
use winit::window::Fullscreen;

/// Clears colour, depth and stencil, then presents.
struct ClearScreen;

impl Sample for ClearScreen {
    fn init(_ctx: &GpuContext, window: &Arc<Window>) -> Result<Self> {
        match window.fullscreen() {
            Some(Fullscreen::Exclusive(mode)) => log::info!(
                "Exclusive fullscreen {}x{} @ {} mHz",
                mode.size().width,
                mode.size().height,
                mode.refresh_rate_millihertz()
            ),
            Some(Fullscreen::Borderless(_)) => log::info!("Borderless fullscreen"),
            None => log::info!("Windowed"),
        }
        Ok(Self)
    }

    fn render(&mut self, ctx: &GpuContext, frame: &mut Frame) {
        let _pass = ctx.begin_clear_pass(frame, "Clear Pass");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    App::new()
        .with_title("HelloGPU")
        .with_size(800, 600)
        .with_screen_mode_from_args(ScreenMode::Fullscreen)
        .run::<ClearScreen>()
}
