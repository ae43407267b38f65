//! Error Types
//!
//! This module defines the error type shared by every Primer crate.
//!
//! # Overview
//!
//! [`PrimerError`] names the step that failed rather than the API call that
//! reported it:
//! - GPU initialization (adapter, device, surface)
//! - Window and event loop creation
//! - File loading relative to the executable
//! - Image decoding and shader compilation
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, PrimerError>`.
//!
//! ```rust,ignore
//! use primer_core::errors::{PrimerError, Result};
//!
//! fn setup() -> Result<()> {
//!     // Initialization steps propagate errors with `?`
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// The error type for the Primer samples.
///
/// Every initialization failure maps to one variant. The `Display` output is
/// what the host shows to the user in the "Initialization failed" dialog.
#[derive(Error, Debug)]
pub enum PrimerError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request GPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create the window surface.
    #[error("Failed to create surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    /// The surface cannot be presented by the selected adapter.
    #[error("Surface configuration failed: {0}")]
    SurfaceConfigFailed(String),

    /// The adapter cannot render to a format one of the render targets needs.
    #[error("Failed to create render target {target}: {format:?} is not renderable on this adapter")]
    RenderTargetUnsupported {
        /// Which target, e.g. "world position"
        target: String,
        format: wgpu::TextureFormat,
    },

    /// A resource created during initialization failed device validation.
    #[error("GPU validation failed: {0}")]
    GpuValidation(String),

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Window creation failed (winit).
    #[cfg(feature = "winit")]
    #[error("Failed to create window: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    // ========================================================================
    // File & Asset Errors
    // ========================================================================
    /// A file could not be read.
    #[error("Failed to load file {path}: {source}")]
    FileLoad {
        /// Full path that was tried
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A file was not found in any of the searched directories.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    // ========================================================================
    // Shader Errors
    // ========================================================================
    /// WGSL source failed to parse or validate.
    #[error("Failed to compile shader {name}:\n{diagnostics}")]
    ShaderCompile {
        /// Shader file or template name
        name: String,
        /// Compiler diagnostics, already formatted against the source
        diagnostics: String,
    },

    /// A shader that the sample expects was never loaded.
    #[error("Shader not found: {0}")]
    ShaderNotFound(String),

    /// Shader template rendering error.
    #[error("Shader template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Unknown screen mode name.
    #[error("Unknown screen mode '{0}' (expected window, fullscreen or virtual)")]
    UnknownScreenMode(String),
}

// ============================================================================
// Convenient conversion implementations
// ============================================================================

impl From<image::ImageError> for PrimerError {
    fn from(err: image::ImageError) -> Self {
        PrimerError::ImageDecodeError(err.to_string())
    }
}

impl From<wgpu::RequestAdapterError> for PrimerError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        PrimerError::AdapterRequestFailed(err.to_string())
    }
}

impl From<wgpu::Error> for PrimerError {
    fn from(err: wgpu::Error) -> Self {
        PrimerError::GpuValidation(err.to_string())
    }
}

/// Alias for `Result<T, PrimerError>`.
pub type Result<T> = std::result::Result<T, PrimerError>;
