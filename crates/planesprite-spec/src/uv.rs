//! UV coordinate sets for double-sided quads.

use serde::{Deserialize, Serialize};

/// Number of `f64` values in a single face (4 corners, 2 coordinates each).
pub const FACE_LEN: usize = 8;

/// Number of `f64` values in a full quad (front face followed by back face).
pub const QUAD_LEN: usize = FACE_LEN * 2;

/// Quad corners in the order the renderer expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopRight,
    TopLeft,
}

impl Corner {
    /// All corners in winding order.
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
        Corner::TopLeft,
    ];

    /// Position of this corner within a face.
    pub fn index(self) -> usize {
        match self {
            Corner::BottomLeft => 0,
            Corner::BottomRight => 1,
            Corner::TopRight => 2,
            Corner::TopLeft => 3,
        }
    }
}

/// Normalized UVs for a double-sided quad.
///
/// Holds 16 values: the `(u, v)` pairs of the front face in
/// bottom-left, bottom-right, top-right, top-left order, then the same
/// pairs again for the back face. Serializes as a flat array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UvQuad([f64; QUAD_LEN]);

impl UvQuad {
    /// Builds a quad from a single face, mirroring it onto the back face.
    pub fn from_front(front: [f64; FACE_LEN]) -> Self {
        let mut values = [0.0; QUAD_LEN];
        values[..FACE_LEN].copy_from_slice(&front);
        values[FACE_LEN..].copy_from_slice(&front);
        Self(values)
    }

    /// The front face values.
    pub fn front(&self) -> &[f64] {
        &self.0[..FACE_LEN]
    }

    /// The back face values.
    pub fn back(&self) -> &[f64] {
        &self.0[FACE_LEN..]
    }

    /// The `(u, v)` pair of a front-face corner.
    pub fn corner(&self, corner: Corner) -> (f64, f64) {
        let i = corner.index() * 2;
        (self.0[i], self.0[i + 1])
    }

    /// All 16 values.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Copies the values into an owned `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Narrows the values to `f32` for GPU vertex buffers.
    pub fn to_f32(&self) -> [f32; QUAD_LEN] {
        self.0.map(|v| v as f32)
    }
}

impl AsRef<[f64]> for UvQuad {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<UvQuad> for [f64; QUAD_LEN] {
    fn from(quad: UvQuad) -> Self {
        quad.0
    }
}
