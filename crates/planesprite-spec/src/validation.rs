//! Construction-time validation for textures, rectangles, and grid cells.
//!
//! Every check here runs before any UV is computed, so a failed build never
//! leaves a partial table behind.

use crate::error::AtlasError;
use crate::geometry::{CellSize, PixelRect, TextureSize};

/// Validate that a texture has non-zero dimensions.
///
/// # Example
/// ```
/// use planesprite_spec::validation::validate_texture_size;
/// use planesprite_spec::TextureSize;
///
/// assert!(validate_texture_size(TextureSize::new(256, 128)).is_ok());
/// assert!(validate_texture_size(TextureSize::new(0, 128)).is_err());
/// ```
pub fn validate_texture_size(texture: TextureSize) -> Result<(), AtlasError> {
    if texture.is_degenerate() {
        return Err(AtlasError::InvalidTextureSize {
            width: texture.width,
            height: texture.height,
        });
    }
    Ok(())
}

/// Validate that a grid cell has non-zero dimensions.
///
/// A cell larger than the texture is accepted; the grid then truncates to
/// zero columns or rows.
pub fn validate_cell_size(cell: CellSize) -> Result<(), AtlasError> {
    if cell.width == 0 || cell.height == 0 {
        return Err(AtlasError::InvalidCellSize {
            width: cell.width,
            height: cell.height,
        });
    }

    Ok(())
}

/// Validate that a named frame rectangle lies within the texture.
///
/// # Example
/// ```
/// use planesprite_spec::validation::validate_rect;
/// use planesprite_spec::{PixelRect, TextureSize};
///
/// let texture = TextureSize::new(100, 100);
/// assert!(validate_rect("a", PixelRect::new(0, 0, 50, 50), texture).is_ok());
/// assert!(validate_rect("b", PixelRect::new(60, 0, 50, 50), texture).is_err());
/// ```
pub fn validate_rect(name: &str, rect: PixelRect, texture: TextureSize) -> Result<(), AtlasError> {
    if !rect.fits_within(texture) {
        return Err(AtlasError::FrameOutOfBounds {
            name: name.to_string(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            texture_width: texture.width,
            texture_height: texture.height,
        });
    }
    Ok(())
}
