//! Clears an 800x600 window every frame.
//!
//! Usage: `cargo run --example ch02_window [window|fullscreen|virtual]`

use primer::prelude::*;

/// Clears colour, depth and stencil, then presents.
struct ClearScreen;

impl Sample for ClearScreen {
    fn init(_ctx: &GpuContext, _window: &Arc<Window>) -> Result<Self> {
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
        .with_screen_mode_from_args(ScreenMode::Windowed)
        .run::<ClearScreen>()
}
