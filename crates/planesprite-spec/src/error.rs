//! Error types for table construction and frame lookup.

use thiserror::Error;

/// Errors raised while building a frame table.
///
/// Construction is all-or-nothing: when any of these is returned, no
/// table or factory exists.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Texture has a zero dimension.
    #[error("Invalid texture size {width}x{height}: both dimensions must be non-zero")]
    InvalidTextureSize { width: u32, height: u32 },

    /// Grid cell has a zero dimension.
    #[error("Invalid cell size {width}x{height}: both dimensions must be non-zero")]
    InvalidCellSize { width: u32, height: u32 },

    /// Frame rectangle extends past the texture edge.
    #[error("Frame '{name}' at ({x}, {y}) size {width}x{height} lies outside texture {texture_width}x{texture_height}")]
    FrameOutOfBounds {
        name: String,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        texture_width: u32,
        texture_height: u32,
    },

    /// Two frames share a name.
    #[error("Duplicate frame id: '{0}'")]
    DuplicateFrameId(String),

    /// Definition could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while looking up a single frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// No frame with this name exists in the table.
    #[error("Unknown frame: '{0}'")]
    UnknownFrame(String),

    /// Frame index is past the end of the table.
    #[error("Frame index {index} out of range (table has {len} frames)")]
    IndexOutOfRange { index: usize, len: usize },
}
