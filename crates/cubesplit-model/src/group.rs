use serde::{Deserialize, Serialize};

/// Outliner group. Groups created by a split carry the enumeration index
/// they collect; hand-made groups have none.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Group {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    /// Group for slot `index`, named `"<index>-<index + 1>"`.
    pub fn for_index(index: usize) -> Self {
        Self {
            name: format!("{}-{}", index, index + 1),
            index: Some(index),
        }
    }
}
