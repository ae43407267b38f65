//! Draws the lathed pot from an indexed vertex buffer, lit by one directional
//! light in the pixel shader.

use primer::prelude::*;

struct DrawPot {
    pipeline: wgpu::RenderPipeline,
    scene: UniformBuffer<SceneUniforms>,
    pot: GpuMesh,
    camera: Camera,
}

impl Sample for DrawPot {
    fn init(ctx: &GpuContext, _window: &Arc<Window>) -> Result<Self> {
        let device = &ctx.device;

        let mut shaders = ShaderLibrary::new();
        let module = shaders.load(device, "lit", context! {})?;

        let scene = UniformBuffer::new(
            device,
            "Pot Scene",
            wgpu::ShaderStages::VERTEX,
            &SceneUniforms::default(),
        );

        let pipeline = PipelineBuilder::new("Pot Pipeline", module)
            .vertex_layout(VertexPN::layout())
            .bind_group_layout(&scene.layout)
            .color_target(ctx.color_format())
            .depth(ctx.depth_format, true)
            .build(device);

        let data = geometry::create_pot();
        log::info!(
            "Pot: {} vertices, {} triangles",
            data.vertex_count(),
            data.primitive_count()
        );
        let pot = GpuMesh::upload(device, "Pot", &data);
        let camera = Camera::looking_at_origin(Vec3::new(0.0, 2.0, -4.0), ctx.aspect_ratio());

        Ok(Self {
            pipeline,
            scene,
            pot,
            camera,
        })
    }

    fn render(&mut self, ctx: &GpuContext, frame: &mut Frame) {
        self.scene.write(
            &ctx.queue,
            &SceneUniforms {
                world: Mat4::IDENTITY,
                view_proj: self.camera.view_projection_matrix(),
            },
        );

        let mut pass = ctx.begin_clear_pass(frame, "Pot Pass");
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.scene.bind_group, &[]);
        self.pot.draw(&mut pass);
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
        .run::<DrawPot>()
}
