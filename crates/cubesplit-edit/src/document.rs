use cubesplit_model::{Cube, Group};
use hashbrown::HashMap;
use std::collections::BTreeMap;

use crate::error::EditError;
use crate::host::{ElementId, GroupId, SceneHost};
use crate::undo::UndoJournal;

/// Entry in the outliner root.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Node {
    Cube(ElementId),
    Group(GroupId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
struct GroupEntry {
    group: Group,
    children: Vec<ElementId>,
}

/// Everything an undo step restores.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    cubes: BTreeMap<ElementId, Cube>,
    groups: BTreeMap<GroupId, GroupEntry>,
    // Split groups by enumeration slot
    by_index: HashMap<usize, GroupId>,
    // Grouped cubes only; a cube missing here sits at the root.
    parent: HashMap<ElementId, GroupId>,
    root: Vec<Node>,
    selection: Vec<ElementId>,
}

/// In-memory editor document: cubes, groups, outliner order, selection,
/// and undo history.
#[derive(Debug, Default)]
pub struct Document {
    state: SceneState,
    journal: UndoJournal<SceneState>,
    notices: Vec<Notice>,
    // Ids are never reused, even across undo.
    next_element: u64,
    next_group: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.cubes.is_empty()
    }

    /// Adds a cube at the outliner root.
    pub fn add_cube(&mut self, cube: Cube) -> ElementId {
        self.next_element += 1;
        let id = ElementId(self.next_element);
        self.state.cubes.insert(id, cube);
        self.state.root.push(Node::Cube(id));
        id
    }

    /// Adds a group at the outliner root. An indexed group becomes the target
    /// for that slot unless one is already registered.
    pub fn add_group(&mut self, group: Group) -> GroupId {
        self.next_group += 1;
        let id = GroupId(self.next_group);
        if let Some(index) = group.index {
            self.state.by_index.entry(index).or_insert(id);
        }
        self.state.groups.insert(
            id,
            GroupEntry {
                group,
                children: Vec::new(),
            },
        );
        self.state.root.push(Node::Group(id));
        id
    }

    #[inline]
    pub fn cube(&self, id: ElementId) -> Option<&Cube> {
        self.state.cubes.get(&id)
    }

    pub fn root(&self) -> &[Node] {
        &self.state.root
    }

    /// Cubes in outliner order, descending into groups.
    pub fn cubes(&self) -> Vec<(ElementId, &Cube)> {
        let mut out = Vec::with_capacity(self.state.cubes.len());
        for node in &self.state.root {
            match *node {
                Node::Cube(id) => {
                    if let Some(c) = self.state.cubes.get(&id) {
                        out.push((id, c));
                    }
                }
                Node::Group(gid) => {
                    if let Some(entry) = self.state.groups.get(&gid) {
                        for &id in &entry.children {
                            if let Some(c) = self.state.cubes.get(&id) {
                                out.push((id, c));
                            }
                        }
                    }
                }
            }
        }
        out
    }

    pub fn find_by_name(&self, name: &str) -> Vec<ElementId> {
        self.cubes()
            .into_iter()
            .filter(|(_, c)| c.name == name)
            .map(|(id, _)| id)
            .collect()
    }

    /// Groups in outliner order.
    pub fn groups(&self) -> Vec<(GroupId, &Group)> {
        self.state
            .root
            .iter()
            .filter_map(|n| match *n {
                Node::Group(gid) => self.state.groups.get(&gid).map(|e| (gid, &e.group)),
                Node::Cube(_) => None,
            })
            .collect()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.state.groups.get(&id).map(|e| &e.group)
    }

    pub fn group_children(&self, id: GroupId) -> Option<&[ElementId]> {
        self.state.groups.get(&id).map(|e| e.children.as_slice())
    }

    pub fn group_by_index(&self, index: usize) -> Option<GroupId> {
        self.state.by_index.get(&index).copied()
    }

    pub fn parent_of(&self, id: ElementId) -> Option<GroupId> {
        self.state.parent.get(&id).copied()
    }

    /// Replaces the selection, keeping known ids in the given order.
    pub fn select(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        let mut sel = Vec::new();
        for id in ids {
            if self.state.cubes.contains_key(&id) && !sel.contains(&id) {
                sel.push(id);
            }
        }
        self.state.selection = sel;
    }

    pub fn select_all(&mut self) {
        let ids: Vec<ElementId> = self.cubes().into_iter().map(|(id, _)| id).collect();
        self.state.selection = ids;
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    pub fn selection(&self) -> &[ElementId] {
        &self.state.selection
    }

    pub fn journal(&self) -> &UndoJournal<SceneState> {
        &self.journal
    }

    /// Reverts the last committed edit; returns its label.
    pub fn undo(&mut self) -> Option<String> {
        let (label, state) = self.journal.undo()?;
        self.state = state;
        log::info!(target: "edit", "undo `{}`", label);
        Some(label)
    }

    pub fn redo(&mut self) -> Option<String> {
        let (label, state) = self.journal.redo()?;
        self.state = state;
        log::info!(target: "edit", "redo `{}`", label);
        Some(label)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    // New cubes sit at the end of the root, so search from the back.
    fn detach(&mut self, id: ElementId) {
        match self.state.parent.remove(&id) {
            Some(gid) => {
                if let Some(entry) = self.state.groups.get_mut(&gid) {
                    if let Some(pos) = entry.children.iter().rposition(|c| *c == id) {
                        entry.children.remove(pos);
                    }
                }
            }
            None => {
                let node = Node::Cube(id);
                if let Some(pos) = self.state.root.iter().rposition(|n| *n == node) {
                    self.state.root.remove(pos);
                }
            }
        }
    }
}

impl SceneHost for Document {
    fn selected(&self) -> Vec<ElementId> {
        self.state.selection.clone()
    }

    fn cube(&self, id: ElementId) -> Option<&Cube> {
        Document::cube(self, id)
    }

    fn begin_edit(&mut self, elements: &[ElementId]) -> Result<(), EditError> {
        self.journal.begin(elements, &self.state)
    }

    fn finish_edit(&mut self, label: &str) -> Result<(), EditError> {
        let rev = self.journal.finish(label, &self.state)?;
        log::debug!(target: "edit", "committed `{}` rev={}", label, rev);
        Ok(())
    }

    fn insert_cube(&mut self, cube: Cube) -> ElementId {
        self.add_cube(cube)
    }

    fn ensure_group(&mut self, index: usize) -> GroupId {
        if let Some(gid) = self.group_by_index(index) {
            return gid;
        }
        self.add_group(Group::for_index(index))
    }

    fn add_to_group(&mut self, group: GroupId, element: ElementId) -> Result<(), EditError> {
        if !self.state.cubes.contains_key(&element) {
            return Err(EditError::UnknownElement(element));
        }
        if !self.state.groups.contains_key(&group) {
            return Err(EditError::UnknownGroup(group));
        }
        self.detach(element);
        if let Some(entry) = self.state.groups.get_mut(&group) {
            entry.children.push(element);
            self.state.parent.insert(element, group);
        }
        Ok(())
    }

    fn remove_element(&mut self, id: ElementId) -> Result<(), EditError> {
        self.state
            .cubes
            .remove(&id)
            .ok_or(EditError::UnknownElement(id))?;
        self.detach(id);
        if let Some(pos) = self.state.selection.iter().position(|s| *s == id) {
            self.state.selection.remove(pos);
        }
        Ok(())
    }

    fn show_message_box(&mut self, title: &str, message: &str) {
        log::info!(target: "edit", "{}: {}", title, message);
        self.notices.push(Notice {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
