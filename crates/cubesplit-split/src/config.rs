use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_EXTENT: f32 = 16.0;
pub const DEFAULT_NAME_PREFIX: &str = "cube";
pub const DEFAULT_MAX_PIECES: u64 = 1 << 20;

fn default_max_extent() -> f32 {
    DEFAULT_MAX_EXTENT
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

fn default_max_pieces() -> u64 {
    DEFAULT_MAX_PIECES
}

/// Tunables for a split run. Loaded from the `[split]` table of the config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Largest allowed piece extent on each axis.
    #[serde(default = "default_max_extent")]
    pub max_extent: f32,
    /// Pieces are named `<prefix>_<ix>-<iy>-<iz>`.
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
    /// The split command leaves a cube in place rather than emit more pieces
    /// than this.
    #[serde(default = "default_max_pieces")]
    pub max_pieces: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_extent: DEFAULT_MAX_EXTENT,
            name_prefix: default_name_prefix(),
            max_pieces: DEFAULT_MAX_PIECES,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_extent must be finite and positive, got {0}")]
    MaxExtent(f32),
    #[error("max_pieces must be at least 1")]
    MaxPieces,
}

impl SplitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_extent.is_finite() || self.max_extent <= 0.0 {
            return Err(ConfigError::MaxExtent(self.max_extent));
        }
        if self.max_pieces == 0 {
            return Err(ConfigError::MaxPieces);
        }
        Ok(())
    }
}
