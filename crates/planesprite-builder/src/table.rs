//! Precomputed frame lookup tables.

use std::collections::HashMap;

use planesprite_spec::{AtlasError, FrameError, UvQuad};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Selects a frame by name or by its 0-based construction index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKey<'a> {
    Name(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for FrameKey<'a> {
    fn from(name: &'a str) -> Self {
        FrameKey::Name(name)
    }
}

impl<'a> From<&'a String> for FrameKey<'a> {
    fn from(name: &'a String) -> Self {
        FrameKey::Name(name)
    }
}

impl From<usize> for FrameKey<'_> {
    fn from(index: usize) -> Self {
        FrameKey::Index(index)
    }
}

/// Immutable mapping from frame name to its UV quad.
///
/// Frames keep the order they were inserted in during construction. The
/// table cannot be modified once a builder has returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTable {
    names: Vec<String>,
    uvs: Vec<UvQuad>,
    index: HashMap<String, usize>,
}

impl FrameTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            uvs: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, name: String, uv: UvQuad) -> Result<(), AtlasError> {
        if self.index.contains_key(&name) {
            return Err(AtlasError::DuplicateFrameId(name));
        }
        self.index.insert(name.clone(), self.names.len());
        self.names.push(name);
        self.uvs.push(uv);
        Ok(())
    }

    /// Looks up a frame by name or index.
    pub fn get<'k>(&self, key: impl Into<FrameKey<'k>>) -> Result<&UvQuad, FrameError> {
        match key.into() {
            FrameKey::Name(name) => self
                .get_by_name(name)
                .ok_or_else(|| FrameError::UnknownFrame(name.to_string())),
            FrameKey::Index(index) => self.uvs.get(index).ok_or(FrameError::IndexOutOfRange {
                index,
                len: self.uvs.len(),
            }),
        }
    }

    /// Looks up a frame by name.
    pub fn get_by_name(&self, name: &str) -> Option<&UvQuad> {
        self.index.get(name).map(|&i| &self.uvs[i])
    }

    /// Name of the frame at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Construction index of the frame called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Frame names in construction order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// `(name, uv)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UvQuad)> {
        self.names.iter().map(String::as_str).zip(self.uvs.iter())
    }
}

// Serialized as a JSON object in construction order.
impl Serialize for FrameTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, uv) in self.iter() {
            map.serialize_entry(name, uv)?;
        }
        map.end()
    }
}
