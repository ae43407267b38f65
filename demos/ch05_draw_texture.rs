//! Draws a textured quad. The image is read from `textures/sample.png` next
//! to the executable and blended over the clear colour with its alpha.

use primer::prelude::*;

const TEXTURE_FILE: &str = "textures/sample.png";

struct DrawTexture {
    pipeline: wgpu::RenderPipeline,
    transform: UniformBuffer<TransformUniforms>,
    texture_bind_group: wgpu::BindGroup,
    quad: GpuMesh,
    camera: Camera,
}

impl Sample for DrawTexture {
    fn init(ctx: &GpuContext, _window: &Arc<Window>) -> Result<Self> {
        let device = &ctx.device;

        let mut shaders = ShaderLibrary::new();
        let module = shaders.load(device, "textured", context! {})?;

        let texture = GpuTexture::load(device, &ctx.queue, TEXTURE_FILE, ctx.texture_format())?;
        let texture_layout = GpuTexture::bind_group_layout(device, "Quad Texture Layout");
        let texture_bind_group = texture.bind_group(device, &texture_layout);

        let transform = UniformBuffer::new(
            device,
            "Quad Transform",
            wgpu::ShaderStages::VERTEX,
            &TransformUniforms::default(),
        );

        let pipeline = PipelineBuilder::new("Textured Quad Pipeline", module)
            .vertex_layout(VertexPT::layout())
            .bind_group_layout(&transform.layout)
            .bind_group_layout(&texture_layout)
            .color_target(ctx.color_format())
            .alpha_blending()
            .depth(ctx.depth_format, true)
            .build(device);

        Ok(Self {
            pipeline,
            transform,
            texture_bind_group,
            quad: GpuMesh::upload(device, "Textured Quad", &geometry::create_textured_quad()),
            camera: Camera::looking_at_origin(Vec3::new(0.0, 2.0, -4.0), ctx.aspect_ratio()),
        })
    }

    fn render(&mut self, ctx: &GpuContext, frame: &mut Frame) {
        let wvp = self.camera.world_view_projection(Mat4::IDENTITY);
        self.transform.write(&ctx.queue, &TransformUniforms::new(wvp));

        let mut pass = ctx.begin_clear_pass(frame, "Textured Quad Pass");
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.transform.bind_group, &[]);
        pass.set_bind_group(1, &self.texture_bind_group, &[]);
        self.quad.draw(&mut pass);
    }

    fn resize(&mut self, _ctx: &GpuContext, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    App::new()
        .with_title("HelloGPU")
        .with_size(800, 600)
        .with_screen_mode_from_args(ScreenMode::Windowed)
        .run::<DrawTexture>()
}
