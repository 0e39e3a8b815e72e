//! Declarative sprite definitions.
//!
//! These are the configuration inputs for the builders: an explicit named
//! atlas, a uniform spritesheet grid, or either one behind a `kind` tag.

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;
use crate::geometry::{CellSize, PixelRect, TextureSize};

/// An atlas of explicitly placed, named frames.
///
/// Frames keep the order they appear in the source, so index lookups on a
/// table built from this definition follow that order. Repeated names are
/// kept here and rejected when the table is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtlasDef {
    /// Opaque material identifier forwarded to the renderer.
    pub material: String,

    /// Size of the full texture in pixels.
    pub texture_size: TextureSize,

    /// Frame name to pixel rectangle, in source order.
    #[serde(default, with = "ordered_frames")]
    pub frames: Vec<(String, PixelRect)>,
}

impl AtlasDef {
    /// Creates an atlas definition with no frames.
    pub fn new(material: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            material: material.into(),
            texture_size: TextureSize::new(width, height),
            frames: Vec::new(),
        }
    }

    /// Appends a frame.
    pub fn with_frame(mut self, name: impl Into<String>, rect: PixelRect) -> Self {
        self.frames.push((name.into(), rect));
        self
    }

    /// Parses an atlas definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, AtlasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads and writes `frames` as a JSON object without reordering its keys.
mod ordered_frames {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    use crate::geometry::PixelRect;

    pub fn serialize<S>(frames: &[(String, PixelRect)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(frames.iter().map(|(name, rect)| (name, rect)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, PixelRect)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FramesVisitor)
    }

    struct FramesVisitor;

    impl<'de> Visitor<'de> for FramesVisitor {
        type Value = Vec<(String, PixelRect)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of frame names to pixel rectangles")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut frames = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, PixelRect>()? {
                frames.push(entry);
            }
            Ok(frames)
        }
    }
}

/// A texture sliced into a uniform grid of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteSheetDef {
    /// Opaque material identifier forwarded to the renderer.
    pub material: String,

    /// Size of the full texture in pixels.
    pub texture_size: TextureSize,

    /// Size of one grid cell in pixels.
    pub cell_size: CellSize,
}

impl SpriteSheetDef {
    /// Creates a spritesheet definition.
    pub fn new(material: impl Into<String>, texture_size: TextureSize, cell_size: CellSize) -> Self {
        Self {
            material: material.into(),
            texture_size,
            cell_size,
        }
    }

    /// Parses a spritesheet definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, AtlasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Either kind of sprite definition, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpriteDef {
    /// `"kind": "atlas"`
    Atlas(AtlasDef),
    /// `"kind": "sprite_sheet"`
    SpriteSheet(SpriteSheetDef),
}

impl SpriteDef {
    /// Parses a tagged definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Material identifier of the wrapped definition.
    pub fn material(&self) -> &str {
        match self {
            SpriteDef::Atlas(def) => &def.material,
            SpriteDef::SpriteSheet(def) => &def.material,
        }
    }

    /// Texture size of the wrapped definition.
    pub fn texture_size(&self) -> TextureSize {
        match self {
            SpriteDef::Atlas(def) => def.texture_size,
            SpriteDef::SpriteSheet(def) => def.texture_size,
        }
    }
}

impl From<AtlasDef> for SpriteDef {
    fn from(def: AtlasDef) -> Self {
        SpriteDef::Atlas(def)
    }
}

impl From<SpriteSheetDef> for SpriteDef {
    fn from(def: SpriteSheetDef) -> Self {
        SpriteDef::SpriteSheet(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_atlas_def_from_json() {
        let json = r#"
        {
          "material": "ui_atlas",
          "texture_size": { "width": 256, "height": 128 },
          "frames": {
            "heart": { "x": 0, "y": 0, "width": 16, "height": 16 },
            "coin": { "x": 16, "y": 0, "width": 16, "height": 16 }
          }
        }
        "#;

        let def = AtlasDef::from_json(json).unwrap();
        assert_eq!(def.material, "ui_atlas");
        assert_eq!(def.texture_size, TextureSize::new(256, 128));
        assert_eq!(
            def.frames,
            vec![
                ("heart".to_string(), PixelRect::new(0, 0, 16, 16)),
                ("coin".to_string(), PixelRect::new(16, 0, 16, 16)),
            ]
        );
    }

    #[test]
    fn test_atlas_def_keeps_repeated_names() {
        let json = r#"
        {
          "material": "m",
          "texture_size": { "width": 8, "height": 8 },
          "frames": {
            "a": { "x": 0, "y": 0, "width": 4, "height": 4 },
            "a": { "x": 4, "y": 0, "width": 4, "height": 4 }
          }
        }
        "#;

        let def = AtlasDef::from_json(json).unwrap();
        assert_eq!(def.frames.len(), 2);
        assert_eq!(def.frames[1].1, PixelRect::new(4, 0, 4, 4));
    }

    #[test]
    fn test_atlas_def_serializes_frames_in_order() {
        let def = AtlasDef::new("m", 64, 64)
            .with_frame("zeta", PixelRect::new(0, 0, 8, 8))
            .with_frame("alpha", PixelRect::new(8, 0, 8, 8));

        let json = serde_json::to_string(&def).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha, "frames reordered: {json}");
    }

    #[test]
    fn test_atlas_def_builder_roundtrip() {
        let def = AtlasDef::new("props", 64, 64)
            .with_frame("crate", PixelRect::new(0, 0, 32, 32))
            .with_frame("barrel", PixelRect::new(32, 0, 32, 32));

        let json = def.to_json_pretty().unwrap();
        let parsed = AtlasDef::from_json(&json).unwrap();
        assert_eq!(parsed, def);
    }

    #[test]
    fn test_atlas_def_missing_frames_defaults_empty() {
        let json = r#"{ "material": "m", "texture_size": { "width": 8, "height": 8 } }"#;
        let def = AtlasDef::from_json(json).unwrap();
        assert!(def.frames.is_empty());
    }

    #[test]
    fn test_atlas_def_rejects_unknown_fields() {
        let json = r#"{ "material": "m", "texture_size": { "width": 8, "height": 8 }, "padding": 2 }"#;
        let err = AtlasDef::from_json(json).unwrap_err();
        assert!(matches!(err, AtlasError::Json(_)));
    }

    #[test]
    fn test_sprite_sheet_def_from_json() {
        let json = r#"
        {
          "material": "explosion",
          "texture_size": { "width": 512, "height": 256 },
          "cell_size": { "width": 64, "height": 64 }
        }
        "#;

        let def = SpriteSheetDef::from_json(json).unwrap();
        assert_eq!(def.cell_size, CellSize::new(64, 64));
        assert_eq!(def.texture_size.width, 512);
    }

    #[test]
    fn test_tagged_sprite_def() {
        let json = r#"
        {
          "kind": "sprite_sheet",
          "material": "walk_cycle",
          "texture_size": { "width": 200, "height": 100 },
          "cell_size": { "width": 100, "height": 50 }
        }
        "#;

        let def = SpriteDef::from_json(json).unwrap();
        assert!(matches!(def, SpriteDef::SpriteSheet(_)));
        assert_eq!(def.material(), "walk_cycle");
        assert_eq!(def.texture_size(), TextureSize::new(200, 100));
    }

    #[test]
    fn test_tagged_sprite_def_roundtrip() {
        let def: SpriteDef = AtlasDef::new("icons", 32, 32)
            .with_frame("a", PixelRect::new(0, 0, 16, 16))
            .into();

        let json = serde_json::to_string(&def).unwrap();
        assert!(json.contains(r#""kind":"atlas""#));

        let parsed = SpriteDef::from_json(&json).unwrap();
        assert_eq!(parsed, def);
    }

    #[test]
    fn test_tagged_sprite_def_unknown_kind() {
        let json = r#"{ "kind": "nine_slice", "material": "m" }"#;
        assert!(SpriteDef::from_json(json).is_err());
    }
}
