use cubesplit_model::Cube;
use cubesplit_split::{Piece, SplitConfig, piece_count, subdivide};
use hashbrown::HashSet;

use crate::error::{CommandError, EditError, SkipReason};
use crate::host::{ElementId, SceneHost};

pub const SPLIT_UNDO_LABEL: &str = "Split cubes into 16x16x16 sections";
pub const EMPTY_SELECTION_TITLE: &str = "No Cubes Selected";
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one cube to split.";

/// A cube that was replaced by its pieces.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitOutcome {
    pub original: ElementId,
    pub name: String,
    /// New elements in enumeration order.
    pub pieces: Vec<ElementId>,
}

/// A cube left in place because it could not be split.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitFailure {
    pub element: ElementId,
    pub error: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitReport {
    pub split: Vec<SplitOutcome>,
    pub failed: Vec<SplitFailure>,
    /// Cubes with zero extent on some axis. They have no pieces and stay put.
    pub flat: Vec<ElementId>,
}

impl SplitReport {
    pub fn piece_count(&self) -> usize {
        self.split.iter().map(|o| o.pieces.len()).sum()
    }
}

/// Splits every selected cube and replaces it with its pieces, as one undo step.
///
/// Pieces land in the group for their enumeration slot, shared across all
/// cubes of the document. A cube that cannot be split is logged and left
/// alone; the rest of the batch still commits. Once the edit is open it is
/// always finished.
pub fn split_selection<H: SceneHost + ?Sized>(
    host: &mut H,
    config: &SplitConfig,
) -> Result<SplitReport, CommandError> {
    let selected = host.selected();
    if selected.is_empty() {
        host.show_message_box(EMPTY_SELECTION_TITLE, EMPTY_SELECTION_MESSAGE);
        return Err(CommandError::EmptySelection);
    }
    config.validate()?;

    // Read every cube before mutating anything.
    let mut seen = HashSet::with_capacity(selected.len());
    let mut work: Vec<(ElementId, Cube)> = Vec::with_capacity(selected.len());
    for id in selected {
        if !seen.insert(id) {
            log::debug!(target: "split", "{} selected twice", id);
            continue;
        }
        match host.cube(id) {
            Some(c) => work.push((id, c.clone())),
            None => log::warn!(target: "split", "selected element {} is not a cube; skipping", id),
        }
    }

    let affected: Vec<ElementId> = work.iter().map(|(id, _)| *id).collect();
    host.begin_edit(&affected)?;
    let mut report = SplitReport::default();
    for (id, cube) in work {
        log::debug!(target: "split", "processing cube `{}` ({})", cube.name, id);
        let pieces = match pieces_for(&cube, config) {
            Ok(p) => p,
            Err(e) => {
                log::warn!(target: "split", "skipping {}: {}", id, e);
                report.failed.push(SplitFailure { element: id, error: e });
                continue;
            }
        };
        if pieces.is_empty() {
            log::info!(target: "split", "`{}` is flat; left in place", cube.name);
            report.flat.push(id);
            continue;
        }
        match replace(host, id, pieces) {
            Ok(placed) => {
                log::info!(target: "split", "split `{}` into {} pieces", cube.name, placed.len());
                report.split.push(SplitOutcome {
                    original: id,
                    name: cube.name,
                    pieces: placed,
                });
            }
            Err(e) => {
                log::warn!(target: "split", "skipping {}: {}", id, e);
                report.failed.push(SplitFailure {
                    element: id,
                    error: e.into(),
                });
            }
        }
    }
    host.finish_edit(SPLIT_UNDO_LABEL)?;
    log::info!(
        target: "split",
        "split operation completed: {} split, {} flat, {} skipped, {} pieces",
        report.split.len(),
        report.flat.len(),
        report.failed.len(),
        report.piece_count()
    );
    Ok(report)
}

fn pieces_for(cube: &Cube, config: &SplitConfig) -> Result<Vec<Piece>, SkipReason> {
    let count = piece_count(cube, config.max_extent)?;
    if count > config.max_pieces {
        return Err(SkipReason::TooManyPieces {
            count,
            limit: config.max_pieces,
        });
    }
    Ok(subdivide(cube, config)?)
}

/// Inserts the pieces and removes the original. On a host error the pieces
/// placed so far are removed again and the original is kept.
fn replace<H: SceneHost + ?Sized>(
    host: &mut H,
    original: ElementId,
    pieces: Vec<Piece>,
) -> Result<Vec<ElementId>, EditError> {
    let mut placed = Vec::with_capacity(pieces.len());
    match place(host, original, pieces, &mut placed) {
        Ok(()) => Ok(placed),
        Err(e) => {
            for id in placed {
                let _ = host.remove_element(id);
            }
            Err(e)
        }
    }
}

fn place<H: SceneHost + ?Sized>(
    host: &mut H,
    original: ElementId,
    pieces: Vec<Piece>,
    placed: &mut Vec<ElementId>,
) -> Result<(), EditError> {
    for piece in pieces {
        let group = host.ensure_group(piece.ordinal);
        let id = host.insert_cube(piece.cube);
        placed.push(id);
        host.add_to_group(group, id)?;
    }
    host.remove_element(original)
}
