use cubesplit_model::Cube;
use std::fmt;

use crate::error::EditError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementId(pub u64);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GroupId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g#{}", self.0)
    }
}

/// What the split command needs from the editor hosting it.
///
/// The command only reads cubes and issues these calls in enumeration order;
/// the host owns every cube and group.
pub trait SceneHost {
    /// Current selection, in selection order.
    fn selected(&self) -> Vec<ElementId>;

    fn cube(&self, id: ElementId) -> Option<&Cube>;

    /// Opens an undoable edit touching `elements`.
    fn begin_edit(&mut self, elements: &[ElementId]) -> Result<(), EditError>;

    /// Closes the open edit under `label`.
    fn finish_edit(&mut self, label: &str) -> Result<(), EditError>;

    /// Adds a cube at the outliner root.
    fn insert_cube(&mut self, cube: Cube) -> ElementId;

    /// Group collecting enumeration slot `index`, created on first request.
    fn ensure_group(&mut self, index: usize) -> GroupId;

    /// Moves `element` into `group`.
    fn add_to_group(&mut self, group: GroupId, element: ElementId) -> Result<(), EditError>;

    fn remove_element(&mut self, id: ElementId) -> Result<(), EditError>;

    /// Modal notice for the user.
    fn show_message_box(&mut self, title: &str, message: &str);
}
