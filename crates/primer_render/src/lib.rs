//! Primer Render
//!
//! GPU-side pieces of the samples, built directly on wgpu:
//!
//! - [`context`]: device, queue, swap chain and depth buffer
//! - [`buffer`] / [`mesh`] / [`texture`]: uniform blocks, static meshes, textures
//! - [`shader`]: embedded shader templates and run-time WGSL compilation
//! - [`pipeline`]: fixed-function state and pipeline creation
//! - [`deferred`]: the two-pass deferred shading renderer

pub mod buffer;
pub mod context;
pub mod deferred;
pub mod mesh;
pub mod pipeline;
pub mod shader;
pub mod texture;

pub use buffer::{DynamicUniformBuffer, UniformBuffer};
pub use context::{AcquireFailure, Frame, GpuContext, capture_validation};
pub use deferred::{DeferredRenderer, GBuffer};
pub use mesh::GpuMesh;
pub use pipeline::{PipelineBuilder, PipelineState};
pub use shader::{ShaderCompiler, ShaderLibrary, validate_wgsl};
pub use texture::{GpuTexture, RenderTarget};
