//! GPU Resource Tests
//!
//! Headless tests against a real adapter. Each test is skipped when no
//! adapter is available (for example on CI without a GPU).
//!
//! Tests for:
//! - Run-time shader compilation into device modules
//! - Dynamic uniform slots at the device's offset alignment
//! - Texture upload and G-buffer creation
//! - Validation errors captured during initialization
//! - Pipeline creation with bind groups and depth

use primer::PrimerError;
use primer::primer_core::geometry::{create_pot, create_textured_quad};
use primer::primer_core::image_data::ImageData;
use primer::primer_core::uniforms::{DrawUniforms, TransformUniforms};
use primer::primer_core::vertex::{Vertex, VertexPC};
use primer::primer_render::deferred::{GBUFFER_TARGETS, GBuffer};
use primer::primer_render::shader::context;
use primer::primer_render::{
    DynamicUniformBuffer, GpuMesh, GpuTexture, PipelineBuilder, ShaderCompiler, ShaderLibrary, UniformBuffer,
    capture_validation,
};

fn headless_adapter() -> Option<wgpu::Adapter> {
    let instance = wgpu::Instance::default();
    match pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default())) {
        Ok(adapter) => Some(adapter),
        Err(e) => {
            eprintln!("[SKIP] GPU not available: {e}");
            None
        }
    }
}

fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    headless_adapter().and_then(|adapter| device_for(&adapter))
}

fn device_for(adapter: &wgpu::Adapter) -> Option<(wgpu::Device, wgpu::Queue)> {
    match pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default())) {
        Ok(pair) => Some(pair),
        Err(e) => {
            eprintln!("[SKIP] Device creation failed: {e}");
            None
        }
    }
}

#[test]
fn compiles_runtime_shader() -> anyhow::Result<()> {
    let Some((device, _queue)) = headless_device() else {
        return Ok(());
    };
    ShaderCompiler::compile_file(&device, "runtime/textured.wgsl")?;
    Ok(())
}

#[test]
fn broken_source_never_reaches_device() {
    let Some((device, _queue)) = headless_device() else {
        return;
    };
    let result = ShaderCompiler::compile_source(&device, "broken.wgsl", "fn main( {");
    assert!(result.is_err());
}

#[test]
fn loads_every_embedded_shader() -> anyhow::Result<()> {
    let Some((device, _queue)) = headless_device() else {
        return Ok(());
    };
    let mut library = ShaderLibrary::new();
    for name in ShaderLibrary::embedded_names() {
        library.load(&device, &name, context! { max_lights => 16 })?;
    }
    assert_eq!(library.len(), ShaderLibrary::embedded_names().len());
    Ok(())
}

#[test]
fn dynamic_slots_respect_device_alignment() {
    let Some((device, queue)) = headless_device() else {
        return;
    };
    let mut draws = DynamicUniformBuffer::<DrawUniforms>::new(&device, "Test Draws", wgpu::ShaderStages::VERTEX, 6);
    let alignment = device.limits().min_uniform_buffer_offset_alignment;

    assert_eq!(draws.capacity(), 6);
    assert_eq!(draws.stride() % alignment, 0);
    assert!(draws.stride() as usize >= std::mem::size_of::<DrawUniforms>());
    assert_eq!(draws.offset(5), 5 * draws.stride());
    assert_eq!(draws.buffer.size(), u64::from(draws.stride()) * 6);

    // Extra values are dropped rather than written past the end.
    draws.write(&queue, &[DrawUniforms::default(); 8]);
    queue.submit(None);
}

#[test]
fn uploads_meshes_and_textures() {
    let Some((device, queue)) = headless_device() else {
        return;
    };

    let quad = GpuMesh::upload(&device, "Quad", &create_textured_quad());
    assert_eq!(quad.index_count, 6);
    let pot = GpuMesh::upload(&device, "Pot", &create_pot());
    assert_eq!(pot.vertex_count, create_pot().vertex_count());

    let image = ImageData::checkerboard(64, 8, [255; 4], [0, 0, 0, 255]);
    let texture = GpuTexture::from_image(&device, &queue, &image, wgpu::TextureFormat::Rgba8Unorm, "Checker");
    assert_eq!((texture.width, texture.height), (64, 64));
    let layout = GpuTexture::bind_group_layout(&device, "Checker Layout");
    let _bind_group = texture.bind_group(&device, &layout);
    queue.submit(None);
}

#[test]
fn creates_gbuffer_or_names_the_unrenderable_target() {
    let Some(adapter) = headless_adapter() else {
        return;
    };
    let Some((device, _queue)) = device_for(&adapter) else {
        return;
    };
    let layout = GBuffer::bind_group_layout(&device);

    match GBuffer::new(&adapter, &device, &layout, 320, 180) {
        Ok(gbuffer) => {
            assert_eq!(gbuffer.size(), (320, 180));
            assert_eq!(gbuffer.position.format, wgpu::TextureFormat::Rgba32Float);
            assert_eq!(gbuffer.color_attachments().iter().flatten().count(), 3);
        }
        Err(PrimerError::RenderTargetUnsupported { target, format }) => {
            assert!(GBUFFER_TARGETS.contains(&target.as_str()));
            let usages = adapter.get_texture_format_features(format).allowed_usages;
            assert!(!usages.contains(wgpu::TextureUsages::RENDER_ATTACHMENT));
            eprintln!("[SKIP] Adapter cannot render the {target} target ({format:?})");
        }
        Err(e) => panic!("unexpected G-buffer error: {e}"),
    }
}

// ============================================================================
// Initialization error capture
// ============================================================================

#[test]
fn captured_validation_error_fails_initialization() {
    let Some((device, _queue)) = headless_device() else {
        return;
    };
    let result = capture_validation(&device, || {
        Ok(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("No Usage"),
            size: 16,
            usage: wgpu::BufferUsages::empty(),
            mapped_at_creation: false,
        }))
    });
    assert!(matches!(result, Err(PrimerError::GpuValidation(_))));
}

#[test]
fn valid_creation_passes_through_capture() -> anyhow::Result<()> {
    let Some((device, _queue)) = headless_device() else {
        return Ok(());
    };
    let value = capture_validation(&device, || Ok(42))?;
    assert_eq!(value, 42);

    let early = capture_validation(&device, || -> primer::Result<()> {
        Err(PrimerError::ShaderNotFound("missing".into()))
    });
    assert!(matches!(early, Err(PrimerError::ShaderNotFound(_))));
    Ok(())
}

#[test]
fn builds_depth_tested_pipeline() -> anyhow::Result<()> {
    let Some((device, _queue)) = headless_device() else {
        return Ok(());
    };
    let mut library = ShaderLibrary::new();
    library.load(&device, "color", context! {})?;
    let transform = UniformBuffer::new(
        &device,
        "Transform",
        wgpu::ShaderStages::VERTEX,
        &TransformUniforms::default(),
    );

    capture_validation(&device, || {
        let _pipeline = PipelineBuilder::new("Test Pipeline", library.get("color")?)
            .vertex_layout(VertexPC::layout())
            .bind_group_layout(&transform.layout)
            .color_target(wgpu::TextureFormat::Rgba8Unorm)
            .cull_mode(None)
            .depth(wgpu::TextureFormat::Depth24PlusStencil8, true)
            .build(&device);
        Ok(())
    })?;
    Ok(())
}
