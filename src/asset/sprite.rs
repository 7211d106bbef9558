//! Decoded sprite pixels

use image::{imageops::FilterType, Rgba, RgbaImage};
use std::path::Path;

/// Fill colour of a missing-sprite placeholder
pub const PLACEHOLDER_FILL: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Outline colour of a missing-sprite placeholder
pub const PLACEHOLDER_OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Outline thickness in pixels
const PLACEHOLDER_BORDER: u32 = 2;

/// An RGBA sprite, already scaled to its on-screen size.
#[derive(Debug, Clone)]
pub struct SpriteImage {
    pixels: RgbaImage,
}

impl SpriteImage {
    /// Decode an image file and scale it by `scale` (nearest neighbour, alpha kept).
    pub fn open(path: &Path, scale: f32) -> Result<Self, image::ImageError> {
        let decoded = image::open(path)?.to_rgba8();
        let (w, h) = scaled_size(decoded.width(), decoded.height(), scale);
        let pixels = if (w, h) == decoded.dimensions() {
            decoded
        } else {
            image::imageops::resize(&decoded, w, h, FilterType::Nearest)
        };
        Ok(Self { pixels })
    }

    /// Magenta box with a black border, sized `fallback × scale`.
    pub fn placeholder(fallback: (u32, u32), scale: f32) -> Self {
        let (w, h) = scaled_size(fallback.0, fallback.1, scale);
        let mut pixels = RgbaImage::from_pixel(w, h, PLACEHOLDER_FILL);
        for (x, y, px) in pixels.enumerate_pixels_mut() {
            let edge = x < PLACEHOLDER_BORDER
                || y < PLACEHOLDER_BORDER
                || x + PLACEHOLDER_BORDER >= w
                || y + PLACEHOLDER_BORDER >= h;
            if edge {
                *px = PLACEHOLDER_OUTLINE;
            }
        }
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Size in pixels as floats, for layout math
    pub fn size(&self) -> (f32, f32) {
        (self.width() as f32, self.height() as f32)
    }

    /// Raw RGBA8 bytes, row-major
    pub fn rgba(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

#[cfg(test)]
impl SpriteImage {
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }
}

/// Largest side a GPU texture can take
const MAX_SIDE: u32 = u16::MAX as u32;

/// Truncating scale, never collapsing below one pixel or past `MAX_SIDE`
fn scaled_size(w: u32, h: u32, scale: f32) -> (u32, u32) {
    let w = ((w as f32 * scale) as u32).max(1);
    let h = ((h as f32 * scale) as u32).max(1);
    if w > MAX_SIDE || h > MAX_SIDE {
        log::warn!("Sprite of {}x{} exceeds {} pixels per side, clamping", w, h, MAX_SIDE);
    }
    (w.min(MAX_SIDE), h.min(MAX_SIDE))
}
