//! Named-frame atlas builder.
//!
//! Every frame rectangle is supplied explicitly. All rectangles are
//! validated and mapped up front, so lookups on the returned factory only
//! read precomputed UVs.

use log::debug;
use planesprite_spec::validation::{validate_rect, validate_texture_size};
use planesprite_spec::{AtlasDef, AtlasError, PixelRect, TextureSize};

use crate::mapper::map_rect_to_uv;
use crate::quad::QuadFactory;
use crate::table::FrameTable;

/// Build a quad factory from explicitly placed frames.
///
/// Frames are indexed in iteration order of `frames`.
///
/// # Arguments
/// * `material` - Opaque material identifier forwarded to the renderer
/// * `texture_size` - Size of the full texture in pixels
/// * `frames` - `(name, rect)` pairs in texture pixel space
///
/// # Errors
/// Fails on a zero-sized texture, a rectangle outside the texture, or a
/// repeated frame name. No factory is returned in any of these cases.
///
/// # Example
/// ```
/// use planesprite_builder::create_atlas;
/// use planesprite_spec::{PixelRect, TextureSize};
///
/// let atlas = create_atlas(
///     "ui",
///     TextureSize::new(100, 100),
///     [("a", PixelRect::new(0, 0, 50, 50))],
/// )
/// .unwrap();
///
/// let quad = atlas.quad("a", ()).unwrap();
/// assert_eq!(quad.uvs.front(), &[0.0, 0.5, 0.5, 0.5, 0.5, 1.0, 0.0, 1.0]);
/// ```
pub fn create_atlas<I, N>(
    material: impl Into<String>,
    texture_size: TextureSize,
    frames: I,
) -> Result<QuadFactory, AtlasError>
where
    I: IntoIterator<Item = (N, PixelRect)>,
    N: Into<String>,
{
    let material = material.into();
    validate_texture_size(texture_size)?;

    let frames = frames.into_iter();
    let mut table = FrameTable::with_capacity(frames.size_hint().0);
    for (name, rect) in frames {
        let name = name.into();
        validate_rect(&name, rect, texture_size)?;
        table.insert(name, map_rect_to_uv(rect, texture_size))?;
    }

    debug!(
        "built atlas '{}' with {} frames ({}x{})",
        material,
        table.len(),
        texture_size.width,
        texture_size.height
    );

    Ok(QuadFactory::new(material, texture_size, table))
}

/// Build a quad factory from an [`AtlasDef`].
///
/// Frames are indexed in the order the definition lists them.
pub fn build_atlas(def: &AtlasDef) -> Result<QuadFactory, AtlasError> {
    create_atlas(
        def.material.clone(),
        def.texture_size,
        def.frames.iter().map(|(name, rect)| (name.clone(), *rect)),
    )
}
