//! Window creation per [`ScreenMode`].

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::{MonitorHandle, VideoModeHandle};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowButtons, WindowLevel};

use primer_core::display::{ScreenRect, VideoModeInfo, select_video_mode, virtual_fullscreen_rect};
use primer_core::settings::{AppSettings, ScreenMode};

fn video_mode_info(mode: &VideoModeHandle) -> VideoModeInfo {
    let size = mode.size();
    VideoModeInfo::new(
        size.width,
        size.height,
        mode.bit_depth(),
        mode.refresh_rate_millihertz(),
    )
}

/// Picks the exclusive mode for `settings`, if the monitor offers one.
fn find_exclusive_mode(monitor: &MonitorHandle, settings: &AppSettings) -> Option<VideoModeHandle> {
    let modes: Vec<VideoModeHandle> = monitor.video_modes().collect();
    let infos: Vec<VideoModeInfo> = modes.iter().map(video_mode_info).collect();
    let index = select_video_mode(
        &infos,
        settings.width,
        settings.height,
        settings.refresh_rate_hz,
    )?;
    log::info!("Selected video mode {}", infos[index]);
    modes.into_iter().nth(index)
}

fn target_monitor(event_loop: &ActiveEventLoop) -> Option<MonitorHandle> {
    event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
}

/// Builds the window attributes for the configured screen mode.
#[must_use]
pub fn window_attributes(event_loop: &ActiveEventLoop, settings: &AppSettings) -> WindowAttributes {
    let base = Window::default_attributes()
        .with_title(&settings.title)
        .with_inner_size(PhysicalSize::new(settings.width, settings.height));

    match settings.screen_mode {
        ScreenMode::Windowed => base
            .with_resizable(false)
            .with_enabled_buttons(WindowButtons::CLOSE | WindowButtons::MINIMIZE),

        ScreenMode::Fullscreen => {
            let monitor = target_monitor(event_loop);
            let fullscreen = match monitor.as_ref().and_then(|m| find_exclusive_mode(m, settings)) {
                Some(mode) => Fullscreen::Exclusive(mode),
                None => {
                    log::warn!(
                        "No {}x{} true-colour {} Hz video mode; using borderless fullscreen",
                        settings.width,
                        settings.height,
                        settings.refresh_rate_hz
                    );
                    Fullscreen::Borderless(monitor)
                }
            };
            base.with_decorations(false).with_fullscreen(Some(fullscreen))
        }

        ScreenMode::VirtualFullscreen => {
            let monitor = target_monitor(event_loop).map(|m| {
                let position = m.position();
                let size = m.size();
                ScreenRect::new(position.x, position.y, size.width, size.height)
            });
            if monitor.is_none() {
                log::warn!("No monitor reported; virtual fullscreen keeps the requested size");
            }
            let rect = virtual_fullscreen_rect(monitor, settings.width, settings.height);
            base.with_decorations(false)
                .with_resizable(false)
                .with_window_level(WindowLevel::AlwaysOnTop)
                .with_position(PhysicalPosition::new(rect.x, rect.y))
                .with_inner_size(PhysicalSize::new(rect.width, rect.height))
        }
    }
}

/// Back-buffer size for the created window.
///
/// Exclusive fullscreen keeps the requested size; the other modes follow the
/// window's client area.
#[must_use]
pub fn surface_size(window: &Window, settings: &AppSettings) -> (u32, u32) {
    match (settings.screen_mode, window.fullscreen()) {
        (ScreenMode::Fullscreen, Some(Fullscreen::Exclusive(_))) => (settings.width, settings.height),
        _ => {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        }
    }
}
