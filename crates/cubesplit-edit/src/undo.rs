use crate::error::EditError;
use crate::host::ElementId;

#[derive(Default, Debug, Clone, Copy)]
pub struct UndoJournalStats {
    pub undo_entries: usize,
    pub redo_entries: usize,
    pub open: bool,
}

/// A committed edit: the document before and after, and what it touched.
#[derive(Clone, Debug)]
pub struct UndoEntry<S> {
    pub label: String,
    pub rev: u64,
    pub affected: Vec<ElementId>,
    before: S,
    after: S,
}

#[derive(Debug)]
struct Pending<S> {
    affected: Vec<ElementId>,
    before: S,
}

/// Snapshot-based undo/redo. One `begin`/`finish` pair is one undo step.
#[derive(Debug)]
pub struct UndoJournal<S> {
    pending: Option<Pending<S>>,
    undo: Vec<UndoEntry<S>>,
    redo: Vec<UndoEntry<S>>,
    counter: u64,
}

impl<S: Clone> Default for UndoJournal<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> UndoJournal<S> {
    pub fn new() -> Self {
        Self {
            pending: None,
            undo: Vec::new(),
            redo: Vec::new(),
            counter: 0,
        }
    }

    pub fn stats(&self) -> UndoJournalStats {
        UndoJournalStats {
            undo_entries: self.undo.len(),
            redo_entries: self.redo.len(),
            open: self.pending.is_some(),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Records `state` as the restore point. Edits do not nest.
    pub fn begin(&mut self, affected: &[ElementId], state: &S) -> Result<(), EditError> {
        if self.pending.is_some() {
            return Err(EditError::EditAlreadyOpen);
        }
        self.pending = Some(Pending {
            affected: affected.to_vec(),
            before: state.clone(),
        });
        Ok(())
    }

    /// Commits the open edit and returns its monotonically increasing stamp.
    /// A new commit discards anything that could have been redone.
    pub fn finish(&mut self, label: &str, state: &S) -> Result<u64, EditError> {
        let pending = self.pending.take().ok_or(EditError::NoOpenEdit)?;
        self.counter = self.counter.wrapping_add(1).max(1);
        self.undo.push(UndoEntry {
            label: label.to_string(),
            rev: self.counter,
            affected: pending.affected,
            before: pending.before,
            after: state.clone(),
        });
        self.redo.clear();
        Ok(self.counter)
    }

    /// Drops the open edit, handing back its restore point.
    pub fn cancel(&mut self) -> Option<S> {
        self.pending.take().map(|p| p.before)
    }

    pub fn last(&self) -> Option<&UndoEntry<S>> {
        self.undo.last()
    }

    /// Steps back one edit; returns its label and the state to restore.
    pub fn undo(&mut self) -> Option<(String, S)> {
        if self.pending.is_some() {
            return None;
        }
        let entry = self.undo.pop()?;
        let out = (entry.label.clone(), entry.before.clone());
        self.redo.push(entry);
        Some(out)
    }

    /// Reapplies the most recently undone edit.
    pub fn redo(&mut self) -> Option<(String, S)> {
        if self.pending.is_some() {
            return None;
        }
        let entry = self.redo.pop()?;
        let out = (entry.label.clone(), entry.after.clone());
        self.undo.push(entry);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_redo_walks_snapshots() {
        let mut j: UndoJournal<Vec<i32>> = UndoJournal::new();
        let mut state = vec![1];

        j.begin(&[ElementId(1)], &state).unwrap();
        state.push(2);
        let r1 = j.finish("add two", &state).unwrap();

        j.begin(&[], &state).unwrap();
        state.push(3);
        let r2 = j.finish("add three", &state).unwrap();
        assert!(r2 > r1);

        let (label, restored) = j.undo().unwrap();
        assert_eq!(label, "add three");
        assert_eq!(restored, vec![1, 2]);
        let (_, restored) = j.undo().unwrap();
        assert_eq!(restored, vec![1]);
        assert!(j.undo().is_none());

        let (label, again) = j.redo().unwrap();
        assert_eq!(label, "add two");
        assert_eq!(again, vec![1, 2]);
        assert_eq!(j.stats().redo_entries, 1);
    }

    #[test]
    fn new_commit_clears_redo() {
        let mut j: UndoJournal<u8> = UndoJournal::new();
        j.begin(&[], &0).unwrap();
        j.finish("a", &1).unwrap();
        j.undo().unwrap();
        assert_eq!(j.stats().redo_entries, 1);
        j.begin(&[], &0).unwrap();
        j.finish("b", &2).unwrap();
        assert_eq!(j.stats().redo_entries, 0);
        assert!(j.redo().is_none());
        assert_eq!(j.last().map(|e| e.label.as_str()), Some("b"));
    }

    #[test]
    fn edits_do_not_nest() {
        let mut j: UndoJournal<u8> = UndoJournal::new();
        assert_eq!(j.finish("x", &0), Err(EditError::NoOpenEdit));
        j.begin(&[], &0).unwrap();
        assert_eq!(j.begin(&[], &0), Err(EditError::EditAlreadyOpen));
        assert!(j.undo().is_none());
        assert_eq!(j.cancel(), Some(0));
        assert!(!j.is_open());
    }
}
