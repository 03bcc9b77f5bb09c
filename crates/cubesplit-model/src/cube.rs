use cubesplit_geom::{Aabb, Vec3};
use serde::{Deserialize, Serialize};

use crate::face::FaceSet;

fn default_visibility() -> bool {
    true
}

/// A cube element as stored in the editor document.
///
/// `from` and `to` are kept as free-length arrays because the host does not
/// guarantee them; consumers validate before use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<f32>>,
    #[serde(default)]
    pub faces: FaceSet,
    /// Euler rotation in degrees around `origin`.
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default)]
    pub origin: Vec3,
    #[serde(default = "default_visibility")]
    pub visibility: bool,
}

impl Cube {
    pub fn new(name: impl Into<String>, from: Vec3, to: Vec3) -> Self {
        Self {
            name: name.into(),
            from: Some(from.to_array().to_vec()),
            to: Some(to.to_array().to_vec()),
            faces: FaceSet::new(),
            rotation: Vec3::ZERO,
            origin: Vec3::ZERO,
            visibility: true,
        }
    }

    pub fn with_faces(mut self, faces: FaceSet) -> Self {
        self.faces = faces;
        self
    }

    pub fn with_pivot(mut self, origin: Vec3, rotation: Vec3) -> Self {
        self.origin = origin;
        self.rotation = rotation;
        self
    }

    /// Minimum corner, if present with exactly three components.
    #[inline]
    pub fn from_corner(&self) -> Option<Vec3> {
        self.from.as_deref().and_then(Vec3::from_slice)
    }

    /// Maximum corner, if present with exactly three components.
    #[inline]
    pub fn to_corner(&self) -> Option<Vec3> {
        self.to.as_deref().and_then(Vec3::from_slice)
    }

    /// Bounds when both corners are well formed. Does not check ordering.
    pub fn bounds(&self) -> Option<Aabb> {
        Some(Aabb::new(self.from_corner()?, self.to_corner()?))
    }

    pub fn set_bounds(&mut self, bounds: Aabb) {
        self.from = Some(bounds.min.to_array().to_vec());
        self.to = Some(bounds.max.to_array().to_vec());
    }
}
