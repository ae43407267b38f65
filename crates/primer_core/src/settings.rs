//! Sample Settings
//!
//! Configuration for the window host ([`AppSettings`]) and the GPU context
//! ([`RenderSettings`]). Both are plain structs with sensible defaults and
//! builder-style `with_*` methods.
//!
//! ```rust,ignore
//! use primer_core::settings::{AppSettings, ScreenMode};
//!
//! let settings = AppSettings::default()
//!     .with_title("DeferredGPU")
//!     .with_size(1280, 720)
//!     .with_screen_mode(ScreenMode::Windowed);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color;
use crate::errors::PrimerError;

// ---------------------------------------------------------------------------
// ScreenMode
// ---------------------------------------------------------------------------

/// How the sample window is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenMode {
    /// Fixed-size decorated window that cannot be resized or maximised.
    #[default]
    Windowed,
    /// Exclusive fullscreen at the requested resolution and 60 Hz.
    Fullscreen,
    /// Borderless, always-on-top window covering the whole monitor.
    VirtualFullscreen,
}

impl ScreenMode {
    /// Parses the first of `args` (program name excluded), or returns
    /// `default` when there is none.
    pub fn from_args<I, A>(args: I, default: ScreenMode) -> Result<Self, PrimerError>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        match args.into_iter().next() {
            Some(arg) => arg.as_ref().parse(),
            None => Ok(default),
        }
    }

    /// Returns `true` when the window has no decorations.
    #[inline]
    #[must_use]
    pub fn is_borderless(self) -> bool {
        !matches!(self, Self::Windowed)
    }
}

impl FromStr for ScreenMode {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "window" | "windowed" => Ok(Self::Windowed),
            "fullscreen" | "full" => Ok(Self::Fullscreen),
            "virtual" | "virtual-fullscreen" | "virtual_fullscreen" => Ok(Self::VirtualFullscreen),
            _ => Err(PrimerError::UnknownScreenMode(s.to_string())),
        }
    }
}

impl fmt::Display for ScreenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windowed => "window",
            Self::Fullscreen => "fullscreen",
            Self::VirtualFullscreen => "virtual",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// AppSettings
// ---------------------------------------------------------------------------

/// Window configuration for a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    /// Client-area / back-buffer width in physical pixels.
    pub width: u32,
    /// Client-area / back-buffer height in physical pixels.
    pub height: u32,
    pub screen_mode: ScreenMode,
    /// Refresh rate requested in exclusive fullscreen.
    pub refresh_rate_hz: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: "HelloGPU".into(),
            width: 800,
            height: 600,
            screen_mode: ScreenMode::Windowed,
            refresh_rate_hz: 60,
        }
    }
}

impl AppSettings {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_screen_mode(mut self, mode: ScreenMode) -> Self {
        self.screen_mode = mode;
        self
    }

    /// Width divided by height of the requested back buffer.
    #[inline]
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

// ---------------------------------------------------------------------------
// RenderSettings
// ---------------------------------------------------------------------------

/// GPU context configuration.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub power_preference: wgpu::PowerPreference,
    /// Present once per vertical blank.
    pub vsync: bool,
    /// Format of the depth-stencil buffer created with the surface.
    pub depth_format: wgpu::TextureFormat,
    /// Clear colour in sRGB space; linearised at clear time for sRGB surfaces.
    pub clear_color: [f32; 4],
    /// Number of frames the presentation engine may queue (back buffers).
    pub frame_latency: u32,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            vsync: true,
            depth_format: wgpu::TextureFormat::Depth24PlusStencil8,
            clear_color: color::SKY_CLEAR,
            frame_latency: 2,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
        }
    }
}

impl RenderSettings {
    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    #[must_use]
    pub fn with_clear_color(mut self, rgba: [f32; 4]) -> Self {
        self.clear_color = rgba;
        self
    }
}
