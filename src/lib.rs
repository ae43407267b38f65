//! # Primer
//!
//! A progressive series of GPU rendering samples built on wgpu and winit:
//! clearing a window, switching between windowed and fullscreen modes,
//! drawing from vertex and index buffers, texturing, compiling shaders at run
//! time, and two-pass deferred shading.
//!
//! The sample programs live in `demos/`; this crate re-exports the pieces
//! they are built from.
//!
//! - [`primer_core`]: errors, settings, geometry, camera and uniform layouts
//! - [`primer_render`]: GPU context, resources, shaders and the deferred renderer
//! - [`primer_app`]: the winit host
//!
//! ```rust,ignore
//! use primer::prelude::*;
//!
//! struct Clear;
//!
//! impl Sample for Clear {
//!     fn init(_ctx: &GpuContext, _window: &Arc<Window>) -> Result<Self> {
//!         Ok(Self)
//!     }
//!
//!     fn render(&mut self, ctx: &GpuContext, frame: &mut Frame) {
//!         ctx.begin_clear_pass(frame, "Clear");
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     App::new().with_title("HelloGPU").run::<Clear>()
//! }
//! ```

pub use primer_app;
pub use primer_core;
pub use primer_render;

pub use primer_app::{App, Sample};
pub use primer_core::errors::{PrimerError, Result};
pub use primer_render::context::{Frame, GpuContext};

/// Everything a sample program usually needs.
pub mod prelude {
    pub use std::sync::Arc;

    pub use glam::{Mat4, Vec3, Vec4};

    pub use primer_app::{App, FrameState, Sample, Window};
    pub use primer_core::camera::Camera;
    pub use primer_core::color;
    pub use primer_core::errors::{PrimerError, Result};
    pub use primer_core::geometry::{self, MeshData};
    pub use primer_core::settings::{AppSettings, RenderSettings, ScreenMode};
    pub use primer_core::uniforms::{SceneUniforms, TransformUniforms};
    pub use primer_core::vertex::{Vertex, VertexPC, VertexPN, VertexPT};
    pub use primer_render::buffer::{DynamicUniformBuffer, UniformBuffer};
    pub use primer_render::context::{Frame, GpuContext};
    pub use primer_render::mesh::GpuMesh;
    pub use primer_render::pipeline::PipelineBuilder;
    pub use primer_render::shader::{ShaderCompiler, ShaderLibrary, context};
    pub use primer_render::texture::GpuTexture;
}
