//! Two-pass deferred shading.
//!
//! The geometry pass writes world position, normal and diffuse colour of five
//! pots and a floor into the G-buffer; the lighting pass accumulates sixteen
//! point lights per pixel over a fullscreen strip.

use primer::prelude::*;
use primer::primer_render::DeferredRenderer;

struct DeferredRendering {
    renderer: DeferredRenderer,
}

impl Sample for DeferredRendering {
    fn init(ctx: &GpuContext, _window: &Arc<Window>) -> Result<Self> {
        Ok(Self {
            renderer: DeferredRenderer::new(ctx)?,
        })
    }

    fn render(&mut self, ctx: &GpuContext, frame: &mut Frame) {
        self.renderer.render(ctx, frame);
    }

    fn resize(&mut self, ctx: &GpuContext, width: u32, height: u32) {
        self.renderer.resize(ctx, width, height);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    App::new()
        .with_title("DeferredGPU")
        .with_size(1280, 720)
        .with_screen_mode_from_args(ScreenMode::Windowed)
        .run::<DeferredRendering>()
}
