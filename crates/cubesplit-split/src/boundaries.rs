/// Cut points along one axis: `min, min + step, min + 2*step, ...` up to the
/// first value reaching `max`, which is clamped to `max`.
///
/// The first and last entries are exactly `min` and `max`, every interior gap
/// is `step` (to f32 precision), and no zero-width trailing gap is produced.
/// When `max <= min` the result is `[min]` (no cells). `step` must be positive
/// and finite; callers validate it through [`crate::SplitConfig`].
///
/// Cuts are computed in f64 and rounded once. Returns `None` when f32 spacing
/// around the axis is too coarse to place a cut every `step`.
pub fn split_boundaries(min: f32, max: f32, step: f32) -> Option<Vec<f32>> {
    if max <= min {
        return Some(vec![min]);
    }
    if !representable(min, max, step) {
        return None;
    }
    let n = cell_count(min, max, step);
    let mut out = Vec::with_capacity(n as usize + 1);
    out.push(min);
    let (lo, step64) = (f64::from(min), f64::from(step));
    for i in 1..n {
        out.push((lo + step64 * i as f64) as f32);
    }
    // A last cut within rounding of `max` would leave a zero-width cell.
    if out.len() > 1 && out[out.len() - 1] >= max {
        out.pop();
    }
    out.push(max);
    Some(out)
}

/// Number of cells `split_boundaries` yields, without allocating. One more
/// than the real count when the last interior cut rounds onto `max`.
pub fn cell_count(min: f32, max: f32, step: f32) -> u64 {
    if max <= min {
        return 0;
    }
    ((f64::from(max) - f64::from(min)) / f64::from(step)).ceil() as u64
}

/// Whether adjacent f32 values near `min..max` are at most half a step apart,
/// so every rounded cut stays strictly between its neighbours.
pub fn representable(min: f32, max: f32, step: f32) -> bool {
    let widest = min.abs().max(max.abs());
    spacing(widest) <= step / 2.0
}

fn spacing(x: f32) -> f32 {
    f32::from_bits(x.to_bits() + 1) - x
}
