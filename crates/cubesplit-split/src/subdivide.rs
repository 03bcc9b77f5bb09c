use cubesplit_model::Cube;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::plan::{CellIndex, SplitPlan};

/// One generated piece of a split cube.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub cell: CellIndex,
    /// Position in the cube's enumeration; callers use it as the group index.
    pub ordinal: usize,
    pub cube: Cube,
}

/// `<prefix>_<ix>-<iy>-<iz>`; unique within one cube's pieces only.
pub fn child_name(prefix: &str, cell: CellIndex) -> String {
    format!("{prefix}_{cell}")
}

/// Splits `cube` into pieces of at most `config.max_extent` per axis.
///
/// Pieces come back in X-outer, Z-inner order and exactly tile the cube.
/// Each piece carries the parent's rotation, origin, and visibility, and an
/// owned copy of every face. Face UVs are copied as-is, not rescaled to the
/// piece's share of the face. A cube that is flat on some axis yields no
/// pieces.
pub fn subdivide(cube: &Cube, config: &SplitConfig) -> Result<Vec<Piece>, SplitError> {
    config.validate()?;
    let plan = SplitPlan::for_cube(cube, config.max_extent)?;
    log::debug!(
        target: "split",
        "cube `{}` -> {:?} cells",
        cube.name,
        plan.cell_counts()
    );
    let pieces = plan
        .cells()
        .map(|cell| {
            let mut child = Cube {
                name: child_name(&config.name_prefix, cell),
                from: None,
                to: None,
                faces: cube.faces.clone(),
                rotation: cube.rotation,
                origin: cube.origin,
                visibility: cube.visibility,
            };
            child.set_bounds(plan.cell_bounds(cell));
            Piece {
                cell,
                ordinal: plan.ordinal(cell),
                cube: child,
            }
        })
        .collect();
    Ok(pieces)
}
