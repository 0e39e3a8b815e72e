//! Pixel-space geometry for textures, sprite rectangles, and grid cells.
//!
//! All coordinates are in texture pixels with the origin at the top-left
//! corner and `y` growing downward (the usual image convention).

use serde::{Deserialize, Serialize};

/// Dimensions of a full source texture in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextureSize {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
}

impl TextureSize {
    /// Creates a new texture size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A sprite rectangle inside a texture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PixelRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Creates a new pixel rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive), widened so it cannot overflow.
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Bottom edge (exclusive), widened so it cannot overflow.
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Returns true if the rectangle lies entirely within `texture`.
    pub fn fits_within(&self, texture: TextureSize) -> bool {
        self.right() <= texture.width as u64 && self.bottom() <= texture.height as u64
    }
}

/// Size of a single cell in a uniform spritesheet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellSize {
    /// Cell width in pixels.
    pub width: u32,
    /// Cell height in pixels.
    pub height: u32,
}

impl CellSize {
    /// Creates a new cell size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pixels left over when a texture is not an exact multiple of its cell size.
///
/// The leftover strip is never turned into frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRemainder {
    /// Unused pixels at the right edge of the texture.
    pub width: u32,
    /// Unused pixels at the bottom edge of the texture.
    pub height: u32,
}
