use std::path::Path;

use crate::errors::Result;
use crate::io;

/// Decoded RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    /// Decodes an in-memory PNG or JPEG.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// Resolves `relative` next to the executable and decodes it.
    pub fn load(relative: impl AsRef<Path>) -> Result<Self> {
        let bytes = io::load_asset(relative)?;
        Self::decode(&bytes)
    }

    /// A `size`×`size` checkerboard of `cell`-pixel squares alternating
    /// between `a` and `b`.
    #[must_use]
    pub fn checkerboard(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = cell.max(1);
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let texel = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
                rgba.extend_from_slice(&texel);
            }
        }
        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    #[inline]
    #[must_use]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}
