//! Deferred Shading
//!
//! Two passes per frame:
//!
//! 1. **Geometry pass** writes world position, world normal and diffuse colour
//!    of every visible surface into the G-buffer, with depth testing.
//! 2. **Lighting pass** draws one fullscreen strip into the swap-chain image,
//!    reads the G-buffer texel under each pixel and accumulates the point
//!    lights. Texels no geometry was written to are discarded, leaving the
//!    clear colour.
//!
//! The scene is fixed: five pots and a floor, sixteen lights.

use minijinja::context;

use primer_core::camera::Camera;
use primer_core::color;
use primer_core::errors::{PrimerError, Result};
use primer_core::geometry::{create_floor, create_fullscreen_quad, create_pot};
use primer_core::lighting::{
    DEFERRED_CAMERA_EYE, DEFERRED_LIGHTS, FLOOR_PLACEMENT, LightingUniforms, MAX_LIGHTS, POT_PLACEMENTS,
};
use primer_core::uniforms::{CameraUniforms, DrawUniforms};
use primer_core::vertex::{Vertex, VertexPN, VertexPT};

use crate::buffer::{DynamicUniformBuffer, UniformBuffer};
use crate::context::{Frame, GpuContext};
use crate::mesh::GpuMesh;
use crate::pipeline::PipelineBuilder;
use crate::shader::ShaderLibrary;
use crate::texture::RenderTarget;

/// Shader names of the two passes.
pub const GEOMETRY_PASS: &str = "deferred_geometry";
pub const LIGHTING_PASS: &str = "deferred_lighting";

/// G-buffer layout: world position, world normal, diffuse.
pub const GBUFFER_FORMATS: [wgpu::TextureFormat; 3] = [
    wgpu::TextureFormat::Rgba32Float,
    wgpu::TextureFormat::Rgba16Float,
    wgpu::TextureFormat::Rgba8Unorm,
];

/// Names of the G-buffer targets, in [`GBUFFER_FORMATS`] order.
pub const GBUFFER_TARGETS: [&str; 3] = ["world position", "world normal", "diffuse"];

const DRAW_SLOTS: u32 = POT_PLACEMENTS.len() as u32 + 1;

/// Bytes each pixel of the G-buffer occupies across all targets.
#[must_use]
pub fn gbuffer_bytes_per_sample() -> u32 {
    GBUFFER_FORMATS
        .iter()
        .map(|f| f.target_pixel_byte_cost().unwrap_or(0))
        .sum()
}

/// Fails with the target's name when `features` do not allow rendering to
/// `format`.
pub fn check_render_target(
    target: &str,
    format: wgpu::TextureFormat,
    features: wgpu::TextureFormatFeatures,
) -> Result<()> {
    if features
        .allowed_usages
        .contains(wgpu::TextureUsages::RENDER_ATTACHMENT)
    {
        Ok(())
    } else {
        Err(PrimerError::RenderTargetUnsupported {
            target: target.to_string(),
            format,
        })
    }
}

// ─── GBuffer ─────────────────────────────────────────────────────────────────

/// The three geometry-pass targets and the bind group that reads them.
pub struct GBuffer {
    pub position: RenderTarget,
    pub normal: RenderTarget,
    pub diffuse: RenderTarget,
    pub bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl GBuffer {
    /// Layout of the lighting pass's view of the G-buffer (bindings 0..3).
    #[must_use]
    pub fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        let entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: false },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };

        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("GBuffer Layout"),
            entries: &[entry(0), entry(1), entry(2)],
        })
    }

    /// Checks that `adapter` can render to every G-buffer format. Downlevel
    /// backends often cannot render to `Rgba32Float`.
    pub fn check_support(adapter: &wgpu::Adapter) -> Result<()> {
        for (target, format) in GBUFFER_TARGETS.into_iter().zip(GBUFFER_FORMATS) {
            check_render_target(target, format, adapter.get_texture_format_features(format))?;
        }
        Ok(())
    }

    pub fn new(
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        Self::check_support(adapter)?;

        let [position_format, normal_format, diffuse_format] = GBUFFER_FORMATS;
        let position = RenderTarget::new(device, "GBuffer World Position", width, height, position_format);
        let normal = RenderTarget::new(device, "GBuffer World Normal", width, height, normal_format);
        let diffuse = RenderTarget::new(device, "GBuffer Diffuse", width, height, diffuse_format);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("GBuffer BindGroup"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&position.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&normal.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&diffuse.view),
                },
            ],
        });

        log::debug!("Created G-buffer {width}x{height}");

        Ok(Self {
            position,
            normal,
            diffuse,
            bind_group,
            width,
            height,
        })
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All three targets cleared to zero.
    #[must_use]
    pub fn color_attachments(&self) -> [Option<wgpu::RenderPassColorAttachment<'_>>; 3] {
        [
            Some(self.position.clear_attachment()),
            Some(self.normal.clear_attachment()),
            Some(self.diffuse.clear_attachment()),
        ]
    }
}

// ─── DeferredRenderer ────────────────────────────────────────────────────────

pub struct DeferredRenderer {
    geometry_pipeline: wgpu::RenderPipeline,
    floor_pipeline: wgpu::RenderPipeline,
    lighting_pipeline: wgpu::RenderPipeline,

    camera: Camera,
    camera_uniforms: UniformBuffer<CameraUniforms>,
    draw_uniforms: DynamicUniformBuffer<DrawUniforms>,
    lighting_uniforms: UniformBuffer<LightingUniforms>,

    gbuffer_layout: wgpu::BindGroupLayout,
    gbuffer: GBuffer,

    pot: GpuMesh,
    floor: GpuMesh,
    fullscreen_quad: GpuMesh,
}

impl DeferredRenderer {
    pub fn new(ctx: &GpuContext) -> Result<Self> {
        let device = &ctx.device;
        let (width, height) = ctx.size();

        let mut shaders = ShaderLibrary::new();
        shaders.load(device, GEOMETRY_PASS, context! {})?;
        shaders.load(device, LIGHTING_PASS, context! { max_lights => MAX_LIGHTS })?;

        let camera = Camera::looking_at_origin(DEFERRED_CAMERA_EYE, ctx.aspect_ratio());
        let camera_uniforms = UniformBuffer::new(
            device,
            "Deferred Camera",
            wgpu::ShaderStages::VERTEX,
            &CameraUniforms {
                view_proj: camera.view_projection_matrix(),
            },
        );
        let draw_uniforms = DynamicUniformBuffer::new(
            device,
            "Deferred Draws",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            DRAW_SLOTS,
        );
        let lighting_uniforms = UniformBuffer::new(
            device,
            "Deferred Lights",
            wgpu::ShaderStages::FRAGMENT,
            &LightingUniforms::from_lights(&DEFERRED_LIGHTS),
        );

        let gbuffer_layout = GBuffer::bind_group_layout(device);
        let gbuffer = GBuffer::new(&ctx.adapter, device, &gbuffer_layout, width, height)?;

        let geometry_module = shaders.get(GEOMETRY_PASS)?;
        let geometry_pipeline = Self::geometry_pipeline(
            ctx,
            geometry_module,
            &camera_uniforms.layout,
            &draw_uniforms.layout,
            Some(wgpu::Face::Back),
        );
        let floor_pipeline = Self::geometry_pipeline(
            ctx,
            geometry_module,
            &camera_uniforms.layout,
            &draw_uniforms.layout,
            None,
        );

        let lighting_pipeline = PipelineBuilder::new("Deferred Lighting Pipeline", shaders.get(LIGHTING_PASS)?)
            .vertex_layout(VertexPT::layout())
            .bind_group_layout(&gbuffer_layout)
            .bind_group_layout(&lighting_uniforms.layout)
            .color_target(ctx.color_format())
            .topology(wgpu::PrimitiveTopology::TriangleStrip)
            .cull_mode(None)
            .build(device);

        let pot = GpuMesh::upload(device, "Pot", &create_pot());
        let floor = GpuMesh::upload(device, "Floor", &create_floor());
        let fullscreen_quad = GpuMesh::upload(device, "Fullscreen Quad", &create_fullscreen_quad());

        log::info!(
            "Deferred renderer ready: {} lights, G-buffer {} bytes/pixel",
            DEFERRED_LIGHTS.len(),
            gbuffer_bytes_per_sample()
        );

        Ok(Self {
            geometry_pipeline,
            floor_pipeline,
            lighting_pipeline,
            camera,
            camera_uniforms,
            draw_uniforms,
            lighting_uniforms,
            gbuffer_layout,
            gbuffer,
            pot,
            floor,
            fullscreen_quad,
        })
    }

    fn geometry_pipeline(
        ctx: &GpuContext,
        module: &wgpu::ShaderModule,
        camera_layout: &wgpu::BindGroupLayout,
        draw_layout: &wgpu::BindGroupLayout,
        cull_mode: Option<wgpu::Face>,
    ) -> wgpu::RenderPipeline {
        let label = if cull_mode.is_some() {
            "Deferred Geometry Pipeline"
        } else {
            "Deferred Geometry Pipeline (No Cull)"
        };
        let mut builder = PipelineBuilder::new(label, module)
            .vertex_layout(VertexPN::layout())
            .bind_group_layout(camera_layout)
            .bind_group_layout(draw_layout)
            .cull_mode(cull_mode)
            .depth(ctx.depth_format, true);
        for format in GBUFFER_FORMATS {
            builder = builder.color_target(format);
        }
        builder.build(&ctx.device)
    }

    /// Recreates the G-buffer at the new surface size.
    pub fn resize(&mut self, ctx: &GpuContext, width: u32, height: u32) {
        if width == 0 || height == 0 || self.gbuffer.size() == (width, height) {
            return;
        }
        match GBuffer::new(&ctx.adapter, &ctx.device, &self.gbuffer_layout, width, height) {
            Ok(gbuffer) => self.gbuffer = gbuffer,
            Err(e) => {
                log::error!("Keeping the {:?} G-buffer: {e}", self.gbuffer.size());
                return;
            }
        }
        self.camera.set_aspect(width, height);
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn render(&mut self, ctx: &GpuContext, frame: &mut Frame) {
        self.camera_uniforms.write(
            &ctx.queue,
            &CameraUniforms {
                view_proj: self.camera.view_projection_matrix(),
            },
        );

        let draws: Vec<DrawUniforms> = POT_PLACEMENTS
            .iter()
            .chain(std::iter::once(&FLOOR_PLACEMENT))
            .map(|p| DrawUniforms::new(p.world_matrix(), p.color))
            .collect();
        self.draw_uniforms.write(&ctx.queue, &draws);

        // Geometry pass
        {
            let color_attachments = self.gbuffer.color_attachments();
            let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Deferred Geometry Pass"),
                color_attachments: &color_attachments,
                depth_stencil_attachment: Some(ctx.depth_stencil_attachment()),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&self.geometry_pipeline);
            pass.set_bind_group(0, &self.camera_uniforms.bind_group, &[]);
            for slot in 0..POT_PLACEMENTS.len() as u32 {
                pass.set_bind_group(1, &self.draw_uniforms.bind_group, &[self.draw_uniforms.offset(slot)]);
                self.pot.draw(&mut pass);
            }

            pass.set_pipeline(&self.floor_pipeline);
            pass.set_bind_group(
                1,
                &self.draw_uniforms.bind_group,
                &[self.draw_uniforms.offset(DRAW_SLOTS - 1)],
            );
            self.floor.draw(&mut pass);
        }

        // Lighting pass
        {
            let clear = color::clear_color(color::DEFERRED_CLEAR, ctx.color_format().is_srgb());
            let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Deferred Lighting Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&self.lighting_pipeline);
            pass.set_bind_group(0, &self.gbuffer.bind_group, &[]);
            pass.set_bind_group(1, &self.lighting_uniforms.bind_group, &[]);
            self.fullscreen_quad.draw(&mut pass);
        }
    }
}
