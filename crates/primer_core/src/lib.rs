//! Primer Core
//!
//! GPU-independent building blocks shared by the Primer samples:
//!
//! - [`errors`]: the shared error type
//! - [`settings`]: window and render configuration, screen modes
//! - [`display`]: exclusive-fullscreen video mode selection
//! - [`vertex`] / [`geometry`]: vertex formats and static meshes
//! - [`camera`] / [`uniforms`] / [`lighting`]: transforms and uniform layouts
//! - [`io`] / [`image_data`]: files next to the executable, image decoding

pub mod camera;
pub mod color;
pub mod display;
pub mod errors;
pub mod geometry;
pub mod image_data;
pub mod io;
pub mod lighting;
pub mod settings;
pub mod uniforms;
pub mod vertex;

pub use camera::Camera;
pub use display::{VideoModeInfo, select_video_mode};
pub use errors::{PrimerError, Result};
pub use geometry::MeshData;
pub use image_data::ImageData;
pub use lighting::{GpuLight, LightingUniforms, MAX_LIGHTS, PointLight};
pub use settings::{AppSettings, RenderSettings, ScreenMode};
pub use vertex::{Vertex, VertexPC, VertexPN, VertexPT};
