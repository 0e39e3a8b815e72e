//! Property-based tests for UV mapping and grid numbering using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p planesprite-builder --test uv_properties
//! ```

use proptest::prelude::*;

use planesprite_builder::{create_atlas, create_sprite_sheet, frame_name, map_rect_to_uv};
use planesprite_spec::{CellSize, Corner, PixelRect, TextureSize, FACE_LEN, QUAD_LEN};

/// Strategy for a texture plus a rectangle that lies inside it.
fn texture_and_rect() -> impl Strategy<Value = (TextureSize, PixelRect)> {
    (1u32..=4096, 1u32..=4096)
        .prop_flat_map(|(tw, th)| {
            (Just(tw), Just(th), 0..=tw, 0..=th)
        })
        .prop_flat_map(|(tw, th, x, y)| {
            (
                Just(TextureSize::new(tw, th)),
                Just(x),
                Just(y),
                0..=(tw - x),
                0..=(th - y),
            )
        })
        .prop_map(|(texture, x, y, w, h)| (texture, PixelRect::new(x, y, w, h)))
}

proptest! {
    /// Every quad has 16 values and the back face mirrors the front.
    #[test]
    fn back_face_mirrors_front((texture, rect) in texture_and_rect()) {
        let uv = map_rect_to_uv(rect, texture);
        prop_assert_eq!(uv.as_slice().len(), QUAD_LEN);
        prop_assert_eq!(&uv.as_slice()[..FACE_LEN], &uv.as_slice()[FACE_LEN..]);
    }

    /// Corners follow BL, BR, TR, TL with the vertical flip applied.
    #[test]
    fn corners_follow_winding((texture, rect) in texture_and_rect()) {
        let uv = map_rect_to_uv(rect, texture);
        let tw = texture.width as f64;
        let th = texture.height as f64;

        let left = rect.x as f64 / tw;
        let right = rect.x as f64 / tw + rect.width as f64 / tw;
        let bottom = 1.0 - rect.y as f64 / th - rect.height as f64 / th;
        let top = 1.0 - rect.y as f64 / th;

        prop_assert_eq!(uv.corner(Corner::BottomLeft), (left, bottom));
        prop_assert_eq!(uv.corner(Corner::BottomRight), (right, bottom));
        prop_assert_eq!(uv.corner(Corner::TopRight), (right, top));
        prop_assert_eq!(uv.corner(Corner::TopLeft), (left, top));
    }

    /// Rectangles inside the texture produce UVs inside the unit square.
    #[test]
    fn uvs_stay_in_unit_range((texture, rect) in texture_and_rect()) {
        let uv = map_rect_to_uv(rect, texture);
        for v in uv.as_slice() {
            prop_assert!(*v >= -1e-12 && *v <= 1.0 + 1e-12, "value out of range: {}", v);
        }
    }

    /// Frame `r * C + c` is the cell at row `r`, column `c`.
    #[test]
    fn sheet_numbering_is_row_major(
        columns in 1u32..=12,
        rows in 1u32..=12,
        cw in 1u32..=64,
        ch in 1u32..=64,
    ) {
        let texture = TextureSize::new(columns * cw, rows * ch);
        let sheet = create_sprite_sheet("m", texture, CellSize::new(cw, ch)).unwrap();

        prop_assert_eq!(sheet.len(), (columns * rows) as usize);
        for r in 0..rows {
            for c in 0..columns {
                let n = (r * columns + c) as usize;
                let expected = map_rect_to_uv(PixelRect::new(c * cw, r * ch, cw, ch), texture);
                prop_assert_eq!(sheet.uvs(frame_name(n).as_str()), Some(&expected));
                prop_assert_eq!(sheet.frame_at(r, c), Some(&expected));
            }
        }
    }

    /// Leftover pixels never become frames.
    #[test]
    fn sheet_truncates_partial_cells(
        tw in 1u32..=512,
        th in 1u32..=512,
        cw in 1u32..=640,
        ch in 1u32..=640,
    ) {
        let sheet = create_sprite_sheet("m", TextureSize::new(tw, th), CellSize::new(cw, ch)).unwrap();

        prop_assert_eq!(sheet.columns(), tw / cw);
        prop_assert_eq!(sheet.rows(), th / ch);
        prop_assert_eq!(sheet.len(), ((tw / cw) * (th / ch)) as usize);
        prop_assert_eq!(sheet.remainder().is_some(), tw % cw != 0 || th % ch != 0);
    }

    /// Building twice from the same input yields equal, independent tables.
    #[test]
    fn atlas_build_is_idempotent((texture, rect) in texture_and_rect()) {
        let first = create_atlas("m", texture, [("a", rect)]).unwrap();
        let second = create_atlas("m", texture, [("a", rect)]).unwrap();
        prop_assert_eq!(first.table(), second.table());
    }
}
