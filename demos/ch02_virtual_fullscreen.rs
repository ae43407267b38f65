//! Clears a borderless, always-on-top window covering the primary monitor.
//!
//! Usage: `cargo run --example ch02_virtual_fullscreen [window|fullscreen|virtual]`

use primer::prelude::*;

/// Clears colour, depth and stencil, then presents.
struct ClearScreen;

impl Sample for ClearScreen {
    fn init(ctx: &GpuContext, window: &Arc<Window>) -> Result<Self> {
        let (width, height) = ctx.size();
        log::info!(
            "Covering the monitor at {:?} with a {width}x{height} surface",
            window.outer_position().ok()
        );
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
        .with_screen_mode_from_args(ScreenMode::VirtualFullscreen)
        .run::<ClearScreen>()
}
