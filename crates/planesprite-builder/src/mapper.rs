//! Pixel rectangle to UV quad mapping.

use planesprite_spec::{PixelRect, TextureSize, UvQuad};

/// Map a pixel rectangle inside `texture` to a double-sided UV quad.
///
/// The rectangle is normalized against the texture size and flipped
/// vertically, since textures have their origin at the top-left while UV
/// space has it at the bottom-left. Corners are emitted bottom-left,
/// bottom-right, top-right, top-left, and the face is repeated for the back.
///
/// `texture` must have non-zero dimensions; both builders validate this
/// before calling.
///
/// # Example
/// ```
/// use planesprite_builder::map_rect_to_uv;
/// use planesprite_spec::{PixelRect, TextureSize};
///
/// let uv = map_rect_to_uv(PixelRect::new(0, 0, 100, 100), TextureSize::new(100, 100));
/// assert_eq!(uv.front(), &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
/// assert_eq!(uv.back(), uv.front());
/// ```
pub fn map_rect_to_uv(rect: PixelRect, texture: TextureSize) -> UvQuad {
    let tw = texture.width as f64;
    let th = texture.height as f64;

    let x = rect.x as f64 / tw;
    let y = rect.y as f64 / th;
    let w = rect.width as f64 / tw;
    let h = rect.height as f64 / th;

    let bottom = 1.0 - y - h;
    let top = 1.0 - y;

    UvQuad::from_front([x, bottom, x + w, bottom, x + w, top, x, top])
}
