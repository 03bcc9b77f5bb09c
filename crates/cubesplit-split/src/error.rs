use cubesplit_geom::Axis;
use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Corner {
    From,
    To,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Corner::From => "from",
            Corner::To => "to",
        })
    }
}

/// Why a cube's geometry cannot be split.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryIssue {
    #[error("`{0}` corner is missing")]
    MissingCorner(Corner),
    #[error("`{corner}` corner has {len} components, expected 3")]
    WrongArity { corner: Corner, len: usize },
    #[error("`{0}` corner is not finite")]
    NonFinite(Corner),
    #[error("`from` is greater than `to` on the {0} axis")]
    Inverted(Axis),
    #[error("coordinates on the {0} axis are too coarse in f32 to cut at the configured step")]
    Imprecise(Axis),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    #[error("invalid geometry on cube `{cube}`: {issue}")]
    InvalidGeometry { cube: String, issue: GeometryIssue },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SplitError {
    pub fn invalid(cube: &str, issue: GeometryIssue) -> Self {
        SplitError::InvalidGeometry {
            cube: cube.to_string(),
            issue,
        }
    }

    pub fn issue(&self) -> Option<&GeometryIssue> {
        match self {
            SplitError::InvalidGeometry { issue, .. } => Some(issue),
            SplitError::Config(_) => None,
        }
    }
}
