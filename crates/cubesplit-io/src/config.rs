use cubesplit_split::SplitConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::IoError;

/// Top-level `cubesplit.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub split: SplitConfig,
}

impl ToolConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, IoError> {
        let cfg: ToolConfig = toml::from_str(toml_str)?;
        cfg.split.validate()?;
        Ok(cfg)
    }
}

/// Reads the config file; a missing file yields defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<ToolConfig, IoError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("config {:?} not found; using defaults", path);
        return Ok(ToolConfig::default());
    }
    let s = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = ToolConfig::from_toml_str(&s)?;
    log::debug!("loaded config from {:?}: {:?}", path, cfg.split);
    Ok(cfg)
}
