use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical face directions of a cube, in the order the editor lists them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    Up = 4,
    Down = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::North,
        Face::East,
        Face::South,
        Face::West,
        Face::Up,
        Face::Down,
    ];

    /// Returns the `[0..6)` slot of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a slot index back into a `Face`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Key used by the editor's face map.
    pub fn key(self) -> &'static str {
        match self {
            Face::North => "north",
            Face::East => "east",
            Face::South => "south",
            Face::West => "west",
            Face::Up => "up",
            Face::Down => "down",
        }
    }

    pub fn from_key(key: &str) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Texture-space rectangle `[u1, v1, u2, v2]` mapped onto a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UvRegion(pub [f32; 4]);

impl UvRegion {
    #[inline]
    pub const fn new(u1: f32, v1: f32, u2: f32, v2: f32) -> Self {
        Self([u1, v1, u2, v2])
    }
}

fn default_tint() -> i32 {
    -1
}

fn default_enabled() -> bool {
    true
}

fn is_zero(v: &u16) -> bool {
    *v == 0
}

/// Per-face texture mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceData {
    pub uv: UvRegion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    /// Texture rotation in degrees: 0, 90, 180, or 270.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub rotation: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cullface: Option<Face>,
    #[serde(default = "default_tint")]
    pub tint: i32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl FaceData {
    pub fn new(uv: UvRegion) -> Self {
        Self {
            uv,
            texture: None,
            rotation: 0,
            cullface: None,
            tint: default_tint(),
            enabled: true,
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }
}

/// One optional slot per face direction. An empty slot means the face is not rendered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, FaceData>", into = "BTreeMap<String, FaceData>")]
pub struct FaceSet {
    slots: [Option<FaceData>; 6],
}

impl FaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every face present with the same mapping.
    pub fn uniform(data: FaceData) -> Self {
        let mut set = Self::new();
        for f in Face::ALL {
            set.set(f, data.clone());
        }
        set
    }

    #[inline]
    pub fn get(&self, face: Face) -> Option<&FaceData> {
        self.slots[face.index()].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, face: Face) -> Option<&mut FaceData> {
        self.slots[face.index()].as_mut()
    }

    pub fn set(&mut self, face: Face, data: FaceData) -> Option<FaceData> {
        self.slots[face.index()].replace(data)
    }

    pub fn remove(&mut self, face: Face) -> Option<FaceData> {
        self.slots[face.index()].take()
    }

    /// Present faces in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &FaceData)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|d| (f, d)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<BTreeMap<String, FaceData>> for FaceSet {
    type Error = String;

    fn try_from(map: BTreeMap<String, FaceData>) -> Result<Self, Self::Error> {
        let mut set = FaceSet::new();
        for (key, d) in map {
            let f = Face::from_key(&key).ok_or_else(|| format!("unknown face `{key}`"))?;
            set.set(f, d);
        }
        Ok(set)
    }
}

impl From<FaceSet> for BTreeMap<String, FaceData> {
    fn from(set: FaceSet) -> Self {
        set.slots
            .into_iter()
            .enumerate()
            .filter_map(|(i, d)| Some((Face::from_index(i)?.key().to_string(), d?)))
            .collect()
    }
}
