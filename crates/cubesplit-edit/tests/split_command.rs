use cubesplit_edit::{
    CommandError, Document, EMPTY_SELECTION_TITLE, EditError, ElementId, GroupId, Node,
    SPLIT_UNDO_LABEL, SceneHost, SkipReason, split_selection,
};
use cubesplit_geom::{Aabb, Vec3};
use cubesplit_model::{Cube, Face, FaceData, FaceSet, UvRegion};
use cubesplit_split::{GeometryIssue, SplitConfig, SplitError};

fn cube(name: &str, from: [f32; 3], to: [f32; 3]) -> Cube {
    let faces = FaceSet::uniform(FaceData::new(UvRegion::new(0.0, 0.0, 8.0, 8.0)).with_texture("skin"));
    Cube::new(name, from.into(), to.into()).with_faces(faces)
}

fn snapshot(doc: &Document) -> Vec<(String, Option<Aabb>)> {
    doc.cubes()
        .into_iter()
        .map(|(_, c)| (c.name.clone(), c.bounds()))
        .collect()
}

#[test]
fn empty_selection_shows_notice_and_changes_nothing() {
    let mut doc = Document::new();
    doc.add_cube(cube("a", [0.0; 3], [32.0; 3]));
    let before = snapshot(&doc);
    let err = split_selection(&mut doc, &SplitConfig::default()).unwrap_err();
    assert_eq!(err, CommandError::EmptySelection);
    assert_eq!(doc.notices().len(), 1);
    assert_eq!(doc.notices()[0].title, EMPTY_SELECTION_TITLE);
    assert_eq!(snapshot(&doc), before);
    assert_eq!(doc.journal().stats().undo_entries, 0);
}

#[test]
fn selected_cube_is_replaced_by_grouped_pieces() {
    let mut doc = Document::new();
    let keep = doc.add_cube(cube("keep", [0.0; 3], [4.0; 3]));
    let big = doc.add_cube(cube("big", [0.0; 3], [32.0; 3]));
    doc.select([big]);

    let report = split_selection(&mut doc, &SplitConfig::default()).unwrap();
    assert_eq!(report.split.len(), 1);
    assert!(report.failed.is_empty());
    assert_eq!(report.split[0].name, "big");
    assert_eq!(report.split[0].pieces.len(), 8);

    assert!(doc.cube(big).is_none());
    assert!(doc.cube(keep).is_some());
    assert_eq!(doc.len(), 9);

    // One group per enumeration slot, each holding one piece.
    let groups = doc.groups();
    assert_eq!(groups.len(), 8);
    for (i, (gid, g)) in groups.iter().enumerate() {
        assert_eq!(g.name, format!("{}-{}", i, i + 1));
        assert_eq!(g.index, Some(i));
        let children = doc.group_children(*gid).unwrap();
        assert_eq!(children, &[report.split[0].pieces[i]]);
    }
    assert_eq!(doc.root()[0], Node::Cube(keep));

    let entry = doc.journal().last().unwrap();
    assert_eq!(entry.label, SPLIT_UNDO_LABEL);
    assert_eq!(entry.affected, vec![big]);
}

#[test]
fn pieces_keep_parent_attributes() {
    let mut doc = Document::new();
    let mut c = cube("rotated", [-8.0, 0.0, -8.0], [24.0, 8.0, 8.0])
        .with_pivot(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, 45.0, 0.0));
    c.visibility = false;
    c.faces.remove(Face::Down);
    let id = doc.add_cube(c.clone());
    doc.select([id]);
    let report = split_selection(&mut doc, &SplitConfig::default()).unwrap();
    for pid in &report.split[0].pieces {
        let p = doc.cube(*pid).unwrap();
        assert_eq!(p.rotation, c.rotation);
        assert_eq!(p.origin, c.origin);
        assert!(!p.visibility);
        assert_eq!(p.faces, c.faces);
    }
}

#[test]
fn malformed_cube_is_skipped_and_rest_commits() {
    let mut doc = Document::new();
    let good = doc.add_cube(cube("good", [0.0; 3], [20.0, 16.0, 8.0]));
    let mut broken = cube("broken", [0.0; 3], [1.0; 3]);
    broken.to = None;
    let bad = doc.add_cube(broken);
    let other = doc.add_cube(cube("other", [0.0; 3], [16.0; 3]));
    doc.select([good, bad, other]);

    let report = split_selection(&mut doc, &SplitConfig::default()).unwrap();
    assert_eq!(report.split.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].element, bad);
    assert!(matches!(
        report.failed[0].error,
        SkipReason::Split(SplitError::InvalidGeometry {
            issue: GeometryIssue::MissingCorner(_),
            ..
        })
    ));
    // The malformed cube stays in the document untouched.
    assert_eq!(doc.cube(bad).map(|c| c.name.as_str()), Some("broken"));
    assert!(doc.cube(good).is_none());
    assert!(doc.cube(other).is_none());
    assert_eq!(doc.journal().stats().undo_entries, 1);
}

#[test]
fn groups_are_shared_by_slot_across_cubes() {
    let mut doc = Document::new();
    let a = doc.add_cube(cube("a", [0.0; 3], [32.0, 16.0, 16.0]));
    let b = doc.add_cube(cube("b", [100.0, 0.0, 0.0], [148.0, 16.0, 16.0]));
    doc.select([a, b]);
    let report = split_selection(&mut doc, &SplitConfig::default()).unwrap();
    assert_eq!(report.piece_count(), 5);

    // a -> slots 0,1; b -> slots 0,1,2
    let g0 = doc.group_by_index(0).unwrap();
    let g2 = doc.group_by_index(2).unwrap();
    assert_eq!(
        doc.group_children(g0).unwrap(),
        &[report.split[0].pieces[0], report.split[1].pieces[0]]
    );
    assert_eq!(doc.group_children(g2).unwrap(), &[report.split[1].pieces[2]]);
    assert_eq!(doc.groups().len(), 3);
}

#[test]
fn undo_and_redo_restore_the_batch() {
    let mut doc = Document::new();
    let a = doc.add_cube(cube("a", [0.0; 3], [40.0, 20.0, 10.0]));
    doc.select([a]);
    let before = snapshot(&doc);

    split_selection(&mut doc, &SplitConfig::default()).unwrap();
    let after = snapshot(&doc);
    assert_ne!(before, after);

    assert_eq!(doc.undo().as_deref(), Some(SPLIT_UNDO_LABEL));
    assert_eq!(snapshot(&doc), before);
    assert!(doc.groups().is_empty());
    assert_eq!(doc.selection(), &[a]);

    assert_eq!(doc.redo().as_deref(), Some(SPLIT_UNDO_LABEL));
    assert_eq!(snapshot(&doc), after);
}

#[test]
fn invalid_config_aborts_before_editing() {
    let mut doc = Document::new();
    let a = doc.add_cube(cube("a", [0.0; 3], [40.0; 3]));
    doc.select([a]);
    let cfg = SplitConfig {
        max_extent: -1.0,
        ..SplitConfig::default()
    };
    assert!(matches!(
        split_selection(&mut doc, &cfg),
        Err(CommandError::Config(_))
    ));
    assert!(doc.cube(a).is_some());
    assert!(!doc.journal().is_open());
}

/// Forwards to a `Document`, optionally padding the selection and failing
/// one `add_to_group` call.
struct Wrapped {
    doc: Document,
    extra: Vec<ElementId>,
    // Fails the add_to_group call with this zero-based number.
    fail_add: Option<usize>,
    adds: usize,
}

impl Wrapped {
    fn new(doc: Document) -> Self {
        Self {
            doc,
            extra: Vec::new(),
            fail_add: None,
            adds: 0,
        }
    }
}

impl SceneHost for Wrapped {
    fn selected(&self) -> Vec<ElementId> {
        let mut s = self.doc.selected();
        s.extend(self.extra.iter().copied());
        s
    }
    fn cube(&self, id: ElementId) -> Option<&Cube> {
        self.doc.cube(id)
    }
    fn begin_edit(&mut self, e: &[ElementId]) -> Result<(), EditError> {
        self.doc.begin_edit(e)
    }
    fn finish_edit(&mut self, l: &str) -> Result<(), EditError> {
        self.doc.finish_edit(l)
    }
    fn insert_cube(&mut self, c: Cube) -> ElementId {
        self.doc.insert_cube(c)
    }
    fn ensure_group(&mut self, i: usize) -> GroupId {
        self.doc.ensure_group(i)
    }
    fn add_to_group(&mut self, g: GroupId, e: ElementId) -> Result<(), EditError> {
        let n = self.adds;
        self.adds += 1;
        if self.fail_add == Some(n) {
            return Err(EditError::UnknownGroup(g));
        }
        self.doc.add_to_group(g, e)
    }
    fn remove_element(&mut self, id: ElementId) -> Result<(), EditError> {
        self.doc.remove_element(id)
    }
    fn show_message_box(&mut self, t: &str, m: &str) {
        self.doc.show_message_box(t, m)
    }
}

#[test]
fn stale_selection_entries_are_ignored() {
    let mut doc = Document::new();
    let a = doc.add_cube(cube("a", [0.0; 3], [16.0; 3]));
    doc.select([a]);
    let mut host = Wrapped::new(doc);
    host.extra.push(ElementId(999));
    let report = split_selection(&mut host, &SplitConfig::default()).unwrap();
    assert_eq!(report.split.len(), 1);
    assert!(report.failed.is_empty());
}

#[test]
fn repeated_selection_splits_once_and_closes_the_edit() {
    let mut doc = Document::new();
    let a = doc.add_cube(cube("a", [0.0; 3], [32.0, 16.0, 16.0]));
    doc.select([a]);
    let mut host = Wrapped::new(doc);
    host.extra.push(a);

    let report = split_selection(&mut host, &SplitConfig::default()).unwrap();
    assert_eq!(report.split.len(), 1);
    assert!(report.failed.is_empty());
    assert_eq!(host.doc.len(), 2);
    assert!(!host.doc.journal().is_open());
    assert_eq!(host.doc.journal().last().map(|e| e.affected.clone()), Some(vec![a]));

    // The document still accepts edits and undo.
    assert_eq!(host.doc.undo().as_deref(), Some(SPLIT_UNDO_LABEL));
    assert_eq!(host.doc.len(), 1);
    host.extra.clear();
    assert!(split_selection(&mut host, &SplitConfig::default()).is_ok());
}

#[test]
fn host_error_skips_that_cube_and_commits_the_rest() {
    let mut doc = Document::new();
    let a = doc.add_cube(cube("a", [0.0; 3], [32.0, 16.0, 16.0]));
    let b = doc.add_cube(cube("b", [0.0; 3], [16.0; 3]));
    doc.select([a, b]);
    let mut host = Wrapped::new(doc);
    // Second piece of `a`.
    host.fail_add = Some(1);

    let report = split_selection(&mut host, &SplitConfig::default()).unwrap();
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].element, a);
    assert!(matches!(report.failed[0].error, SkipReason::Host(_)));
    assert_eq!(report.split.len(), 1);
    assert_eq!(report.split[0].original, b);

    // `a` stays with none of its pieces left behind; `b` became one piece.
    let names: Vec<String> = host.doc.cubes().into_iter().map(|(_, c)| c.name.clone()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"a".to_string()));
    assert!(names.contains(&"cube_0-0-0".to_string()));
    assert!(!host.doc.journal().is_open());
    assert_eq!(host.doc.journal().stats().undo_entries, 1);
}

#[test]
fn flat_cube_is_kept_and_reported() {
    let mut doc = Document::new();
    let plane = doc.add_cube(cube("plane", [0.0; 3], [64.0, 0.0, 64.0]));
    let block = doc.add_cube(cube("block", [0.0; 3], [32.0, 16.0, 16.0]));
    doc.select([plane, block]);

    let report = split_selection(&mut doc, &SplitConfig::default()).unwrap();
    assert_eq!(report.flat, vec![plane]);
    assert!(report.failed.is_empty());
    assert_eq!(report.split.len(), 1);
    assert_eq!(doc.cube(plane).map(|c| c.name.as_str()), Some("plane"));
    assert!(doc.cube(block).is_none());
}

#[test]
fn piece_limit_leaves_cube_in_place() {
    let mut doc = Document::new();
    let a = doc.add_cube(cube("a", [0.0; 3], [64.0; 3]));
    doc.select([a]);
    let cfg = SplitConfig {
        max_pieces: 63,
        ..SplitConfig::default()
    };
    let report = split_selection(&mut doc, &cfg).unwrap();
    assert_eq!(
        report.failed[0].error,
        SkipReason::TooManyPieces {
            count: 64,
            limit: 63
        }
    );
    assert!(doc.cube(a).is_some());
    assert!(doc.groups().is_empty());
}

#[test]
fn large_split_keeps_outliner_consistent() {
    let mut doc = Document::new();
    let keep = doc.add_cube(cube("keep", [0.0; 3], [1.0; 3]));
    let big = doc.add_cube(cube("big", [0.0; 3], [512.0, 16.0, 512.0]));
    doc.select([big]);

    let report = split_selection(&mut doc, &SplitConfig::default()).unwrap();
    let pieces = &report.split[0].pieces;
    assert_eq!(pieces.len(), 32 * 32);
    assert_eq!(doc.len(), 32 * 32 + 1);

    // Root holds the untouched cube followed by one group per slot.
    assert_eq!(doc.root().len(), 32 * 32 + 1);
    assert_eq!(doc.root()[0], Node::Cube(keep));
    assert!(doc.root()[1..].iter().all(|n| matches!(n, Node::Group(_))));
    for (slot, id) in pieces.iter().enumerate() {
        let gid = doc.group_by_index(slot).unwrap();
        assert_eq!(doc.parent_of(*id), Some(gid));
        assert_eq!(doc.group_children(gid).unwrap(), &[*id]);
    }
    assert_eq!(doc.parent_of(keep), None);
    assert_eq!(doc.cubes().len(), doc.len());
}
