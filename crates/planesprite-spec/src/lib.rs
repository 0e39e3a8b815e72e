//! planesprite data model
//!
//! This crate provides the types, definitions, and validation shared by the
//! planesprite builders. A sprite lives inside a larger texture either as an
//! explicitly placed rectangle (an atlas) or as one cell of a uniform grid
//! (a spritesheet); both end up as a [`UvQuad`] of normalized coordinates
//! for a double-sided plane.
//!
//! # Example
//!
//! ```
//! use planesprite_spec::{AtlasDef, PixelRect};
//!
//! let def = AtlasDef::new("ui_atlas", 100, 100)
//!     .with_frame("a", PixelRect::new(0, 0, 50, 50));
//!
//! let json = def.to_json_pretty().unwrap();
//! assert_eq!(AtlasDef::from_json(&json).unwrap(), def);
//! ```
//!
//! # Modules
//!
//! - [`definition`]: Serde-backed atlas and spritesheet definitions
//! - [`error`]: Construction and lookup error types
//! - [`geometry`]: Pixel-space texture, rectangle, and cell sizes
//! - [`uv`]: The 16-value double-sided UV quad
//! - [`validation`]: Construction-time checks

pub mod definition;
pub mod error;
pub mod geometry;
pub mod uv;
pub mod validation;

// Re-export commonly used types at the crate root
pub use definition::{AtlasDef, SpriteDef, SpriteSheetDef};
pub use error::{AtlasError, FrameError};
pub use geometry::{CellSize, GridRemainder, PixelRect, TextureSize};
pub use uv::{Corner, UvQuad, FACE_LEN, QUAD_LEN};
