//! Cube subdivision: cut one cube into a grid of pieces no larger than
//! `max_extent` on any axis, without touching the document.
#![forbid(unsafe_code)]

pub mod boundaries;
pub mod config;
pub mod error;
pub mod plan;
pub mod subdivide;

pub use boundaries::split_boundaries;
pub use config::{ConfigError, SplitConfig};
pub use error::{Corner, GeometryIssue, SplitError};
pub use plan::{CellIndex, SplitPlan, piece_count};
pub use subdivide::{Piece, child_name, subdivide};
