use cubesplit_geom::{Aabb, Axis, Vec3};
use cubesplit_model::Cube;
use std::fmt;

use crate::boundaries::{cell_count, representable, split_boundaries};
use crate::error::{Corner, GeometryIssue, SplitError};

/// Grid coordinates of one cell within a cube's split.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CellIndex {
    pub ix: usize,
    pub iy: usize,
    pub iz: usize,
}

impl CellIndex {
    #[inline]
    pub const fn new(ix: usize, iy: usize, iz: usize) -> Self {
        Self { ix, iy, iz }
    }

    #[inline]
    pub fn get(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.ix,
            Axis::Y => self.iy,
            Axis::Z => self.iz,
        }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.ix, self.iy, self.iz)
    }
}

/// Validated bounds of one cube plus its cut points on each axis.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitPlan {
    bounds: Aabb,
    cuts: [Vec<f32>; 3],
}

fn corner(cube: &Cube, which: Corner) -> Result<Vec3, SplitError> {
    let raw = match which {
        Corner::From => cube.from.as_deref(),
        Corner::To => cube.to.as_deref(),
    };
    let raw = raw.ok_or_else(|| SplitError::invalid(&cube.name, GeometryIssue::MissingCorner(which)))?;
    let v = Vec3::from_slice(raw).ok_or_else(|| {
        SplitError::invalid(
            &cube.name,
            GeometryIssue::WrongArity {
                corner: which,
                len: raw.len(),
            },
        )
    })?;
    if !v.is_finite() {
        return Err(SplitError::invalid(&cube.name, GeometryIssue::NonFinite(which)));
    }
    Ok(v)
}

fn ordered(name: &str, bounds: Aabb) -> Result<Aabb, SplitError> {
    for axis in Axis::ALL {
        if bounds.min[axis] > bounds.max[axis] {
            return Err(SplitError::invalid(name, GeometryIssue::Inverted(axis)));
        }
    }
    Ok(bounds)
}

fn cube_bounds(cube: &Cube) -> Result<Aabb, SplitError> {
    let from = corner(cube, Corner::From)?;
    let to = corner(cube, Corner::To)?;
    ordered(&cube.name, Aabb::new(from, to))
}

/// Number of pieces `subdivide` would produce, without building them.
///
/// Fails on exactly the cubes `SplitPlan::for_cube` rejects.
pub fn piece_count(cube: &Cube, max_extent: f32) -> Result<u64, SplitError> {
    let bounds = cube_bounds(cube)?;
    let mut count = 1u64;
    for a in Axis::ALL {
        let (min, max) = (bounds.min[a], bounds.max[a]);
        if max > min && !representable(min, max, max_extent) {
            return Err(SplitError::invalid(&cube.name, GeometryIssue::Imprecise(a)));
        }
        count = count.saturating_mul(cell_count(min, max, max_extent));
    }
    Ok(count)
}

impl SplitPlan {
    /// Validates the cube's corners and computes its cut points.
    pub fn for_cube(cube: &Cube, max_extent: f32) -> Result<Self, SplitError> {
        let bounds = cube_bounds(cube)?;
        Self::for_bounds(&cube.name, bounds, max_extent)
    }

    /// Plan for already-parsed bounds. `name` is only used in errors.
    ///
    /// A flat axis (`min == max`) has no cells, so the plan is empty.
    pub fn for_bounds(name: &str, bounds: Aabb, max_extent: f32) -> Result<Self, SplitError> {
        let bounds = ordered(name, bounds)?;
        let mut cuts: [Vec<f32>; 3] = Default::default();
        for a in Axis::ALL {
            cuts[a.index()] = split_boundaries(bounds.min[a], bounds.max[a], max_extent)
                .ok_or_else(|| SplitError::invalid(name, GeometryIssue::Imprecise(a)))?;
        }
        Ok(Self { bounds, cuts })
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Cut points along `axis`, first and last equal to the cube's bounds.
    #[inline]
    pub fn boundaries(&self, axis: Axis) -> &[f32] {
        &self.cuts[axis.index()]
    }

    /// Cells per axis, `[nx, ny, nz]`.
    pub fn cell_counts(&self) -> [usize; 3] {
        Axis::ALL.map(|a| self.cuts[a.index()].len() - 1)
    }

    pub fn cell_count(&self) -> usize {
        self.cell_counts().iter().product()
    }

    /// Position of `cell` in X-outer, Z-inner enumeration order.
    #[inline]
    pub fn ordinal(&self, cell: CellIndex) -> usize {
        let [_, ny, nz] = self.cell_counts();
        (cell.ix * ny + cell.iy) * nz + cell.iz
    }

    /// All cells, X outermost, then Y, then Z innermost.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        let [nx, ny, nz] = self.cell_counts();
        (0..nx).flat_map(move |ix| {
            (0..ny).flat_map(move |iy| (0..nz).map(move |iz| CellIndex::new(ix, iy, iz)))
        })
    }

    pub fn cell_bounds(&self, cell: CellIndex) -> Aabb {
        let mut min = Vec3::ZERO;
        let mut max = Vec3::ZERO;
        for axis in Axis::ALL {
            let cuts = self.boundaries(axis);
            let i = cell.get(axis);
            min[axis] = cuts[i];
            max[axis] = cuts[i + 1];
        }
        Aabb::new(min, max)
    }
}
