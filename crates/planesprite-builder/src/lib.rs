//! UV table builders and quad factories for sprites on 3D planes.
//!
//! Two builders turn a sprite description into a [`QuadFactory`]:
//!
//! - [`create_atlas`] takes explicitly placed, named frame rectangles.
//! - [`create_sprite_sheet`] slices a texture into a uniform grid and names
//!   the cells `frame0`, `frame1`, ... in row-major order.
//!
//! Both map every frame with [`map_rect_to_uv`] once, at construction, and
//! fail fast on invalid input. The factory then combines a frame's UVs with
//! a material and caller properties into a [`QuadDescriptor`] for an
//! external [`QuadRenderer`].
//!
//! # Example
//!
//! ```
//! use planesprite_builder::{create_sprite_sheet, PlaneProps, QuadDescriptor};
//! use planesprite_spec::{CellSize, TextureSize};
//!
//! let sheet = create_sprite_sheet("coin_spin", TextureSize::new(128, 32), CellSize::new(32, 32))
//!     .unwrap();
//!
//! let mut scene: Vec<QuadDescriptor<PlaneProps>> = Vec::new();
//! let mut renderer = |d: QuadDescriptor<PlaneProps>| scene.push(d);
//! sheet
//!     .render(&mut renderer, "frame2", PlaneProps::at([0.0, 1.0, 4.0]))
//!     .unwrap();
//!
//! assert_eq!(scene.len(), 1);
//! assert_eq!(scene[0].uvs.front()[0], 0.5);
//! ```

pub mod atlas;
pub mod mapper;
pub mod quad;
pub mod sheet;
pub mod table;

pub use atlas::{build_atlas, create_atlas};
pub use mapper::map_rect_to_uv;
pub use quad::{PlaneProps, QuadDescriptor, QuadFactory, QuadRenderer};
pub use sheet::{build_sprite_sheet, create_sprite_sheet, frame_name, SpriteSheet, FRAME_PREFIX};
pub use table::{FrameKey, FrameTable};

use planesprite_spec::{AtlasError, SpriteDef};

/// Build a quad factory from either kind of definition.
pub fn build(def: &SpriteDef) -> Result<QuadFactory, AtlasError> {
    match def {
        SpriteDef::Atlas(def) => build_atlas(def),
        SpriteDef::SpriteSheet(def) => build_sprite_sheet(def).map(SpriteSheet::into_factory),
    }
}

/// Parse a tagged JSON definition and build it.
pub fn build_from_json(json: &str) -> Result<QuadFactory, AtlasError> {
    build(&SpriteDef::from_json(json)?)
}
