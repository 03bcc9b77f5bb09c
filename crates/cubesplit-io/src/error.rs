use cubesplit_edit::EditError;
use cubesplit_split::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("group `{group}` lists cube {index}, but the scene has {count} cubes")]
    BadGroupChild {
        group: String,
        index: usize,
        count: usize,
    },
    #[error("cube {0} is listed in more than one group")]
    DuplicateMembership(usize),
    #[error("selection lists cube {index}, but the scene has {count} cubes")]
    BadSelection { index: usize, count: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Edit(#[from] EditError),
}
