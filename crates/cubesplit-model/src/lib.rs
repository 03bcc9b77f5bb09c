//! Cube, face, and group types as the host editor stores them.
#![forbid(unsafe_code)]

pub mod cube;
pub mod face;
pub mod group;

pub use cube::Cube;
pub use face::{Face, FaceData, FaceSet, UvRegion};
pub use group::Group;
