use cubesplit_edit::{Document, ElementId, SceneHost};
use cubesplit_model::{Cube, Group};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::IoError;

/// Group entry in a scene file; `children` are positions in `cubes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default)]
    pub children: Vec<usize>,
}

/// On-disk scene: cubes, groups over them, and an optional selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub cubes: Vec<Cube>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<SceneGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected: Vec<usize>,
}

impl SceneFile {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, IoError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn to_toml_string(&self) -> Result<String, IoError> {
        Ok(toml::to_string(self)?)
    }

    /// Builds a document: ungrouped cubes at the root in file order, then each group.
    pub fn into_document(self) -> Result<Document, IoError> {
        let count = self.cubes.len();
        let mut owner: Vec<bool> = vec![false; count];
        for g in &self.groups {
            for &i in &g.children {
                if i >= count {
                    return Err(IoError::BadGroupChild {
                        group: g.name.clone(),
                        index: i,
                        count,
                    });
                }
                if owner[i] {
                    return Err(IoError::DuplicateMembership(i));
                }
                owner[i] = true;
            }
        }
        if let Some(&index) = self.selected.iter().find(|&&i| i >= count) {
            return Err(IoError::BadSelection { index, count });
        }

        let mut doc = Document::new();
        let ids: Vec<ElementId> = self.cubes.into_iter().map(|c| doc.add_cube(c)).collect();
        for g in self.groups {
            let gid = doc.add_group(Group {
                name: g.name,
                index: g.index,
            });
            for i in g.children {
                doc.add_to_group(gid, ids[i])?;
            }
        }
        doc.select(self.selected.into_iter().map(|i| ids[i]));
        Ok(doc)
    }

    /// Captures a document in outliner order.
    pub fn from_document(doc: &Document) -> Self {
        let mut position: HashMap<ElementId, usize> = HashMap::new();
        let mut cubes = Vec::with_capacity(doc.len());
        for (i, (id, cube)) in doc.cubes().into_iter().enumerate() {
            position.insert(id, i);
            cubes.push(cube.clone());
        }
        let groups = doc
            .groups()
            .into_iter()
            .map(|(gid, g)| SceneGroup {
                name: g.name.clone(),
                index: g.index,
                children: doc
                    .group_children(gid)
                    .unwrap_or(&[])
                    .iter()
                    .filter_map(|id| position.get(id).copied())
                    .collect(),
            })
            .collect();
        let selected = doc
            .selection()
            .iter()
            .filter_map(|id| position.get(id).copied())
            .collect();
        Self {
            cubes,
            groups,
            selected,
        }
    }
}

pub fn load_scene(path: impl AsRef<Path>) -> Result<Document, IoError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = SceneFile::from_toml_str(&s)?.into_document()?;
    log::info!("loaded {} cube(s) from {:?}", doc.len(), path);
    Ok(doc)
}

pub fn save_scene(doc: &Document, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    let text = SceneFile::from_document(doc).to_toml_string()?;
    fs::write(path, text).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} cube(s) to {:?}", doc.len(), path);
    Ok(())
}
