//! Same scene as `ch05_draw_texture`, but the shader is not built into the
//! binary: `runtime/textured.wgsl` is read from disk and compiled when the
//! sample starts. Parse and validation errors are logged and abort start-up.

use primer::prelude::*;

const SHADER_FILE: &str = "runtime/textured.wgsl";
const TEXTURE_FILE: &str = "textures/sample.png";

struct DynamicShaderCompile {
    pipeline: wgpu::RenderPipeline,
    transform: UniformBuffer<TransformUniforms>,
    texture_bind_group: wgpu::BindGroup,
    quad: GpuMesh,
    camera: Camera,
}

impl Sample for DynamicShaderCompile {
    fn init(ctx: &GpuContext, _window: &Arc<Window>) -> Result<Self> {
        let device = &ctx.device;

        let module = ShaderCompiler::compile_file(device, SHADER_FILE)?;

        let texture = GpuTexture::load(device, &ctx.queue, TEXTURE_FILE, ctx.texture_format())?;
        let texture_layout = GpuTexture::bind_group_layout(device, "Runtime Texture Layout");
        let texture_bind_group = texture.bind_group(device, &texture_layout);

        let transform = UniformBuffer::new(
            device,
            "Runtime Transform",
            wgpu::ShaderStages::VERTEX,
            &TransformUniforms::default(),
        );

        let pipeline = PipelineBuilder::new("Runtime Shader Pipeline", &module)
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
            quad: GpuMesh::upload(device, "Runtime Quad", &geometry::create_textured_quad()),
            camera: Camera::looking_at_origin(Vec3::new(0.0, 2.0, -4.0), ctx.aspect_ratio()),
        })
    }

    fn render(&mut self, ctx: &GpuContext, frame: &mut Frame) {
        let wvp = self.camera.world_view_projection(Mat4::IDENTITY);
        self.transform.write(&ctx.queue, &TransformUniforms::new(wvp));

        let mut pass = ctx.begin_clear_pass(frame, "Runtime Shader Pass");
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
        .run::<DynamicShaderCompile>()
}
