//! Draws a vertex-coloured triangle from a vertex buffer.
//!
//! The world-view-projection matrix is rebuilt every frame and uploaded to a
//! uniform buffer. Culling is off, so the triangle is visible from both sides.

use primer::prelude::*;

struct DrawTriangle {
    pipeline: wgpu::RenderPipeline,
    transform: UniformBuffer<TransformUniforms>,
    triangle: GpuMesh,
    camera: Camera,
}

impl Sample for DrawTriangle {
    fn init(ctx: &GpuContext, _window: &Arc<Window>) -> Result<Self> {
        let device = &ctx.device;

        let mut shaders = ShaderLibrary::new();
        let module = shaders.load(device, "color", context! {})?;

        let transform = UniformBuffer::new(
            device,
            "Triangle Transform",
            wgpu::ShaderStages::VERTEX,
            &TransformUniforms::default(),
        );

        let pipeline = PipelineBuilder::new("Triangle Pipeline", module)
            .vertex_layout(VertexPC::layout())
            .bind_group_layout(&transform.layout)
            .color_target(ctx.color_format())
            .cull_mode(None)
            .depth(ctx.depth_format, true)
            .build(device);

        let triangle = GpuMesh::upload(device, "Triangle", &geometry::create_triangle());
        let camera = Camera::looking_at_origin(Vec3::new(0.0, 2.0, -4.0), ctx.aspect_ratio());

        Ok(Self {
            pipeline,
            transform,
            triangle,
            camera,
        })
    }

    fn render(&mut self, ctx: &GpuContext, frame: &mut Frame) {
        let wvp = self.camera.world_view_projection(Mat4::IDENTITY);
        self.transform.write(&ctx.queue, &TransformUniforms::new(wvp));

        let mut pass = ctx.begin_clear_pass(frame, "Triangle Pass");
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.transform.bind_group, &[]);
        self.triangle.draw(&mut pass);
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
        .run::<DrawTriangle>()
}
