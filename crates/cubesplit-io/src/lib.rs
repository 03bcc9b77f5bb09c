//! Scene and config files (TOML).
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod scene;

pub use config::{ToolConfig, load_config};
pub use error::IoError;
pub use scene::{SceneFile, SceneGroup, load_scene, save_scene};
