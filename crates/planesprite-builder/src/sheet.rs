//! Uniform-grid spritesheet builder.
//!
//! The texture is sliced into equal cells which are numbered row-major:
//! all columns of row 0, then row 1, and so on. Cell `N` is named
//! `frame<N>`.
//!
//! When the texture is not an exact multiple of the cell size, the partial
//! column at the right edge and the partial row at the bottom are dropped.

use std::ops::Deref;

use log::{debug, warn};
use planesprite_spec::validation::{validate_cell_size, validate_texture_size};
use planesprite_spec::{
    AtlasError, CellSize, GridRemainder, PixelRect, SpriteSheetDef, TextureSize, UvQuad,
};

use crate::mapper::map_rect_to_uv;
use crate::quad::QuadFactory;
use crate::table::FrameTable;

/// Prefix of generated frame names.
pub const FRAME_PREFIX: &str = "frame";

/// Name of the `index`-th cell of a spritesheet.
pub fn frame_name(index: usize) -> String {
    format!("{FRAME_PREFIX}{index}")
}

/// A quad factory over a uniform grid, plus the grid layout.
///
/// Derefs to [`QuadFactory`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    factory: QuadFactory,
    cell_size: CellSize,
    columns: u32,
    rows: u32,
    remainder: Option<GridRemainder>,
}

impl SpriteSheet {
    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Pixels dropped at the right and bottom edges, if any.
    pub fn remainder(&self) -> Option<GridRemainder> {
        self.remainder
    }

    /// Frame index of the cell at `(row, column)`.
    pub fn frame_index(&self, row: u32, column: u32) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    /// UVs of the cell at `(row, column)`.
    pub fn frame_at(&self, row: u32, column: u32) -> Option<&UvQuad> {
        self.frame_index(row, column)
            .and_then(|index| self.factory.uvs(index))
    }

    pub fn into_factory(self) -> QuadFactory {
        self.factory
    }
}

impl Deref for SpriteSheet {
    type Target = QuadFactory;

    fn deref(&self) -> &QuadFactory {
        &self.factory
    }
}

/// Build a quad factory by slicing a texture into a uniform grid.
///
/// # Arguments
/// * `material` - Opaque material identifier forwarded to the renderer
/// * `texture_size` - Size of the full texture in pixels
/// * `cell_size` - Size of one grid cell in pixels
///
/// # Errors
/// Fails if either size has a zero dimension. A cell larger than the
/// texture is not an error: the grid truncates and the sheet is empty.
///
/// # Example
/// ```
/// use planesprite_builder::create_sprite_sheet;
/// use planesprite_spec::{CellSize, TextureSize};
///
/// let sheet = create_sprite_sheet(
///     "walk",
///     TextureSize::new(200, 100),
///     CellSize::new(100, 50),
/// )
/// .unwrap();
///
/// assert_eq!(sheet.len(), 4);
/// assert!(sheet.quad("frame3", ()).is_ok());
/// ```
pub fn create_sprite_sheet(
    material: impl Into<String>,
    texture_size: TextureSize,
    cell_size: CellSize,
) -> Result<SpriteSheet, AtlasError> {
    let material = material.into();
    validate_texture_size(texture_size)?;
    validate_cell_size(cell_size)?;

    let columns = texture_size.width / cell_size.width;
    let rows = texture_size.height / cell_size.height;

    let leftover_width = texture_size.width % cell_size.width;
    let leftover_height = texture_size.height % cell_size.height;
    let remainder = if leftover_width > 0 || leftover_height > 0 {
        warn!(
            "texture {}x{} for '{}' is not a multiple of cell {}x{}; dropping {}px right, {}px bottom",
            texture_size.width,
            texture_size.height,
            material,
            cell_size.width,
            cell_size.height,
            leftover_width,
            leftover_height
        );
        Some(GridRemainder {
            width: leftover_width,
            height: leftover_height,
        })
    } else {
        None
    };

    let mut table = FrameTable::with_capacity(columns as usize * rows as usize);
    let mut index = 0;
    for row in 0..rows {
        for column in 0..columns {
            let rect = PixelRect::new(
                column * cell_size.width,
                row * cell_size.height,
                cell_size.width,
                cell_size.height,
            );
            table.insert(frame_name(index), map_rect_to_uv(rect, texture_size))?;
            index += 1;
        }
    }

    debug!(
        "built sprite sheet '{}' with {} frames ({} columns x {} rows)",
        material,
        table.len(),
        columns,
        rows
    );

    Ok(SpriteSheet {
        factory: QuadFactory::new(material, texture_size, table),
        cell_size,
        columns,
        rows,
        remainder,
    })
}

/// Build a spritesheet from a [`SpriteSheetDef`].
pub fn build_sprite_sheet(def: &SpriteSheetDef) -> Result<SpriteSheet, AtlasError> {
    create_sprite_sheet(def.material.clone(), def.texture_size, def.cell_size)
}
