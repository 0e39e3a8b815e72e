//! Quad descriptors, factories, and the renderer adapter.
//!
//! A [`QuadFactory`] owns a precomputed [`FrameTable`] and turns a frame
//! selection plus caller properties into a [`QuadDescriptor`]. Rendering
//! itself happens outside this crate, behind [`QuadRenderer`].

use std::collections::BTreeMap;

use planesprite_spec::{FrameError, TextureSize, UvQuad};
use serde::{Deserialize, Serialize};

use crate::table::{FrameKey, FrameTable};

/// Everything a renderer needs to draw one textured plane.
///
/// Serializes flat, with the caller's properties alongside `material` and
/// `uvs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadDescriptor<P> {
    /// Caller-supplied properties, passed through untouched.
    #[serde(flatten)]
    pub props: P,

    /// Opaque material identifier.
    pub material: String,

    /// UVs for the selected frame.
    pub uvs: UvQuad,
}

/// Default per-instance plane properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneProps {
    #[serde(default)]
    pub position: [f64; 3],

    /// Euler angles in degrees.
    #[serde(default)]
    pub rotation: [f64; 3],

    #[serde(default = "default_scale")]
    pub scale: [f64; 3],

    /// Always face the camera.
    #[serde(default)]
    pub billboard: bool,

    /// Renderer-specific attributes not modeled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_scale() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for PlaneProps {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: default_scale(),
            billboard: false,
            extra: BTreeMap::new(),
        }
    }
}

impl PlaneProps {
    /// Props placed at `position` with identity rotation and scale.
    pub fn at(position: [f64; 3]) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: [f64; 3]) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: [f64; 3]) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_billboard(mut self, billboard: bool) -> Self {
        self.billboard = billboard;
        self
    }

    /// Adds an attribute the renderer understands but this type does not.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// An external renderer that draws textured planes.
///
/// Any `FnMut(QuadDescriptor<P>) -> O` closure is a renderer.
pub trait QuadRenderer<P> {
    /// Whatever the renderer hands back for a drawn plane (an entity id, a
    /// scene node, or `()`).
    type Output;

    /// Draws one plane.
    fn render_plane(&mut self, descriptor: QuadDescriptor<P>) -> Self::Output;
}

impl<P, O, F> QuadRenderer<P> for F
where
    F: FnMut(QuadDescriptor<P>) -> O,
{
    type Output = O;

    fn render_plane(&mut self, descriptor: QuadDescriptor<P>) -> O {
        self(descriptor)
    }
}

/// Produces quad descriptors from a precomputed frame table.
///
/// Returned by both builders. Lookups are read-only, so a factory can be
/// shared freely, including across threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadFactory {
    material: String,
    texture_size: TextureSize,
    frames: FrameTable,
}

impl QuadFactory {
    pub(crate) fn new(material: String, texture_size: TextureSize, frames: FrameTable) -> Self {
        Self {
            material,
            texture_size,
            frames,
        }
    }

    /// Builds a descriptor for the selected frame.
    ///
    /// Fails with [`FrameError`] if the frame does not exist; the
    /// properties are dropped in that case.
    pub fn quad<'k, P>(
        &self,
        frame: impl Into<FrameKey<'k>>,
        props: P,
    ) -> Result<QuadDescriptor<P>, FrameError> {
        let uvs = *self.frames.get(frame)?;
        Ok(QuadDescriptor {
            props,
            material: self.material.clone(),
            uvs,
        })
    }

    /// Builds a descriptor and hands it to `renderer`.
    pub fn render<'k, P, R>(
        &self,
        renderer: &mut R,
        frame: impl Into<FrameKey<'k>>,
        props: P,
    ) -> Result<R::Output, FrameError>
    where
        R: QuadRenderer<P>,
    {
        let descriptor = self.quad(frame, props)?;
        Ok(renderer.render_plane(descriptor))
    }

    /// Converts the factory into a closure keyed by frame name.
    pub fn into_fn<P>(self) -> impl Fn(&str, P) -> Result<QuadDescriptor<P>, FrameError> {
        move |frame: &str, props: P| self.quad(frame, props)
    }

    /// UVs of the selected frame, if it exists.
    pub fn uvs<'k>(&self, frame: impl Into<FrameKey<'k>>) -> Option<&UvQuad> {
        self.frames.get(frame).ok()
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn texture_size(&self) -> TextureSize {
        self.texture_size
    }

    pub fn table(&self) -> &FrameTable {
        &self.frames
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.contains(name)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Valid frame names in construction order.
    pub fn frame_names(&self) -> impl Iterator<Item = &str> {
        self.frames.names()
    }

    /// Serializes the material, texture size, and frame table to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
