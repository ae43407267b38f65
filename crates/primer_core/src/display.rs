//! Video mode selection for exclusive fullscreen and window placement for
//! virtual fullscreen.
//!
//! The host gathers the monitor's modes into [`VideoModeInfo`] values and picks
//! one with [`select_video_mode`], which keeps the choice testable without a
//! display.

/// A display mode as reported by the window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoModeInfo {
    pub width: u32,
    pub height: u32,
    /// Bits per pixel.
    pub bit_depth: u16,
    /// Refresh rate in millihertz.
    pub refresh_rate_millihertz: u32,
}

impl VideoModeInfo {
    #[must_use]
    pub const fn new(width: u32, height: u32, bit_depth: u16, refresh_rate_millihertz: u32) -> Self {
        Self {
            width,
            height,
            bit_depth,
            refresh_rate_millihertz,
        }
    }

    /// 8 bits per channel. Window systems report an X8R8G8B8 mode as either 24
    /// or 32 bits.
    #[inline]
    #[must_use]
    pub fn is_true_color(&self) -> bool {
        matches!(self.bit_depth, 24 | 32)
    }

    /// Refresh rate rounded to the nearest whole hertz.
    #[inline]
    #[must_use]
    pub fn refresh_rate_hz(&self) -> u32 {
        (self.refresh_rate_millihertz + 500) / 1000
    }

    #[must_use]
    pub fn matches(&self, width: u32, height: u32, refresh_hz: u32) -> bool {
        self.width == width
            && self.height == height
            && self.is_true_color()
            && self.refresh_rate_hz() == refresh_hz
    }
}

impl std::fmt::Display for VideoModeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} {}bpp @ {:.2} Hz",
            self.width,
            self.height,
            self.bit_depth,
            self.refresh_rate_millihertz as f32 / 1000.0
        )
    }
}

/// Index of the first mode matching `width`×`height`, true colour and
/// `refresh_hz`.
#[must_use]
pub fn select_video_mode(
    modes: &[VideoModeInfo],
    width: u32,
    height: u32,
    refresh_hz: u32,
) -> Option<usize> {
    modes.iter().position(|m| m.matches(width, height, refresh_hz))
}

/// A window rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Where a virtual fullscreen window goes: over the whole `monitor` when one
/// is known, otherwise `width`×`height` at the desktop origin.
///
/// The desktop keeps its current video mode. The window covers the monitor
/// at that mode instead of switching the display to `width`×`height`, so the
/// back buffer takes the monitor's size.
#[must_use]
pub fn virtual_fullscreen_rect(monitor: Option<ScreenRect>, width: u32, height: u32) -> ScreenRect {
    monitor.unwrap_or(ScreenRect::new(0, 0, width, height))
}
