//! Colour helpers.
//!
//! The samples describe colours either as packed `0xAARRGGBB` words or as
//! 8-bit channels. Both are converted to normalised RGBA floats here.

/// Clear colour shared by the forward samples: `RGBA(0x40, 0x80, 0xFF, 0x00)`.
pub const SKY_CLEAR: [f32; 4] = rgba8(0x40, 0x80, 0xFF, 0x00);

/// Clear colour behind the deferred lighting pass: `RGB(0, 192, 64)`.
pub const DEFERRED_CLEAR: [f32; 4] = rgba8(0x00, 0xC0, 0x40, 0xFF);

/// Builds a normalised colour from 8-bit channels.
#[inline]
#[must_use]
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Unpacks a `0xAARRGGBB` word into normalised `[r, g, b, a]`.
#[inline]
#[must_use]
pub const fn argb(packed: u32) -> [f32; 4] {
    rgba8(
        (packed >> 16) as u8,
        (packed >> 8) as u8,
        packed as u8,
        (packed >> 24) as u8,
    )
}

/// sRGB electro-optical transfer function for one channel.
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts an sRGB-space colour into the `wgpu::Color` to clear with.
///
/// Clear values are written as-is into the attachment, so an sRGB target
/// needs the linear value to display the intended colour. Alpha is linear.
#[must_use]
pub fn clear_color(rgba: [f32; 4], target_is_srgb: bool) -> wgpu::Color {
    let [r, g, b, a] = rgba;
    let convert = |c: f32| {
        if target_is_srgb {
            f64::from(srgb_to_linear(c))
        } else {
            f64::from(c)
        }
    };
    wgpu::Color {
        r: convert(r),
        g: convert(g),
        b: convert(b),
        a: f64::from(a),
    }
}
