//! wgpu Context
//!
//! The [`GpuContext`] holds the core GPU handles: device, queue, surface and
//! its configuration, plus the depth-stencil buffer that follows the surface
//! size. It is created once by the host before any sample resource and
//! dropped after all of them.

use std::sync::Arc;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use primer_core::color;
use primer_core::errors::{PrimerError, Result};
use primer_core::settings::RenderSettings;

/// One acquired swap-chain image and the encoder recording into it.
pub struct Frame {
    surface_texture: wgpu::SurfaceTexture,
    /// The image no longer matches the surface; reconfigure after presenting.
    suboptimal: bool,
    /// View of the swap-chain image.
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// Core wgpu context holding GPU handles.
///
/// - `device` / `queue`: resource creation and command submission
/// - `surface` / `config`: the window's presentable images ("swap chain")
/// - `depth_view`: auto depth-stencil buffer, recreated on resize
pub struct GpuContext {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,

    pub depth_format: wgpu::TextureFormat,
    depth_view: wgpu::TextureView,
    /// Clear colour in sRGB space.
    pub clear_color: [f32; 4],
}

impl GpuContext {
    pub async fn new<W>(window: W, settings: &RenderSettings, width: u32, height: u32) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: settings.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?}, {:?})", info.name, info.device_type, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Primer Device"),
                required_features: settings.required_features,
                required_limits: settings.required_limits.clone(),
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await?;

        device.set_device_lost_callback(|reason, message| {
            log::error!("GPU device lost ({reason:?}): {message}");
        });
        device.on_uncaptured_error(Arc::new(|error: wgpu::Error| {
            log::error!("Uncaptured GPU error: {error}");
        }));

        let mut config = surface
            .get_default_config(&adapter, width.max(1), height.max(1))
            .ok_or_else(|| {
                PrimerError::SurfaceConfigFailed("Surface not supported by adapter".to_string())
            })?;

        // Colours are authored in display space, so prefer a non-sRGB swap chain.
        let caps = surface.get_capabilities(&adapter);
        if let Some(format) = caps.formats.iter().copied().find(|f| !f.is_srgb()) {
            config.format = format;
        }

        config.present_mode = if settings.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        config.desired_maximum_frame_latency = settings.frame_latency;
        surface.configure(&device, &config);
        log::info!(
            "Surface configured: {}x{} {:?} {:?}",
            config.width,
            config.height,
            config.format,
            config.present_mode
        );

        let depth_view = Self::create_depth_texture(&device, &config, settings.depth_format);

        Ok(Self {
            adapter,
            device,
            queue,
            surface,
            config,
            depth_format: settings.depth_format,
            depth_view,
            clear_color: settings.clear_color,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
        }
    }

    /// Re-applies the current configuration to the surface and rebuilds the
    /// depth buffer.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_texture(&self.device, &self.config, self.depth_format);
    }

    pub fn create_depth_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        format: wgpu::TextureFormat,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Acquires the next swap-chain image.
    ///
    /// A lost or outdated surface is reconfigured once and the frame is
    /// skipped; other failures are logged and the frame is skipped.
    pub fn begin_frame(&mut self) -> Option<Frame> {
        let (surface_texture, suboptimal) = match self.surface.get_current_texture() {
            wgpu::CurrentSurfaceTexture::Success(texture) => (texture, false),
            wgpu::CurrentSurfaceTexture::Suboptimal(texture) => (texture, true),
            wgpu::CurrentSurfaceTexture::Timeout => return self.skip_frame(AcquireFailure::Timeout),
            wgpu::CurrentSurfaceTexture::Occluded => return self.skip_frame(AcquireFailure::Occluded),
            wgpu::CurrentSurfaceTexture::Outdated => return self.skip_frame(AcquireFailure::Outdated),
            wgpu::CurrentSurfaceTexture::Lost => return self.skip_frame(AcquireFailure::Lost),
            wgpu::CurrentSurfaceTexture::Validation => return self.skip_frame(AcquireFailure::Validation),
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        Some(Frame {
            surface_texture,
            suboptimal,
            view,
            encoder,
        })
    }

    fn skip_frame(&mut self, failure: AcquireFailure) -> Option<Frame> {
        if failure.is_error() {
            log::error!("Swap-chain image not acquired: {failure}");
        } else if failure.reconfigures() {
            log::warn!(
                "Surface {failure}; reconfiguring {}x{}",
                self.config.width,
                self.config.height
            );
            self.reconfigure();
        } else {
            log::warn!("Skipping frame: {failure}");
        }
        None
    }

    /// Submits the frame's commands and presents the image. A suboptimal
    /// image is presented first and the surface reconfigured afterwards.
    pub fn end_frame(&mut self, frame: Frame) {
        let Frame {
            surface_texture,
            suboptimal,
            encoder,
            ..
        } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        if suboptimal {
            log::debug!("Suboptimal swap-chain image; reconfiguring");
            self.reconfigure();
        }
    }

    /// Returns the surface color format.
    #[inline]
    #[must_use]
    pub fn color_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Format for colour textures so they sample the way they display.
    #[must_use]
    pub fn texture_format(&self) -> wgpu::TextureFormat {
        if self.config.format.is_srgb() {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        }
    }

    /// Returns the depth texture view.
    #[inline]
    #[must_use]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Returns the current surface dimensions.
    #[inline]
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    #[inline]
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    /// The configured clear colour, converted for the surface format.
    #[must_use]
    pub fn surface_clear_color(&self) -> wgpu::Color {
        color::clear_color(self.clear_color, self.config.format.is_srgb())
    }

    /// Depth cleared to 1.0 and stencil to 0.
    #[must_use]
    pub fn depth_stencil_attachment(&self) -> wgpu::RenderPassDepthStencilAttachment<'_> {
        wgpu::RenderPassDepthStencilAttachment {
            view: &self.depth_view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: self.depth_format.has_stencil_aspect().then_some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(0),
                store: wgpu::StoreOp::Store,
            }),
        }
    }

    /// Begins a pass on the swap-chain image that clears colour, depth and
    /// stencil.
    pub fn begin_clear_pass<'a>(&'a self, frame: &'a mut Frame, label: &str) -> wgpu::RenderPass<'a> {
        let clear = self.surface_clear_color();
        frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(self.depth_stencil_attachment()),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}

/// Why no swap-chain image was acquired this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireFailure {
    Timeout,
    /// The window is minimised or hidden.
    Occluded,
    Outdated,
    Lost,
    Validation,
}

impl AcquireFailure {
    /// Lost and outdated surfaces are reconfigured before the next frame.
    #[must_use]
    pub fn reconfigures(self) -> bool {
        matches!(self, Self::Outdated | Self::Lost)
    }

    /// Logged as an error rather than a warning.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Validation)
    }
}

impl std::fmt::Display for AcquireFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Timeout => "timed out",
            Self::Occluded => "occluded",
            Self::Outdated => "outdated",
            Self::Lost => "lost",
            Self::Validation => "failed validation",
        })
    }
}

/// Runs `create` inside a validation error scope on `device`.
///
/// Any buffer, texture or pipeline `create` makes that fails validation
/// becomes [`PrimerError::GpuValidation`] instead of reaching the
/// uncaptured-error handler.
pub fn capture_validation<T>(device: &wgpu::Device, create: impl FnOnce() -> Result<T>) -> Result<T> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let created = create();
    let captured = pollster::block_on(scope.pop());
    let value = created?;
    match captured {
        Some(error) => Err(error.into()),
        None => Ok(value),
    }
}
