//! Helpers for handing the edited boxes to a particle simulation: total volume, and
//! filling the boxes with evenly distributed points.

use crate::math::{Aab, FreeCoordinate, FreePoint};

/// Sum of the volumes of `boxes`. Overlapping regions are counted once per box.
pub fn total_volume<'a>(boxes: impl IntoIterator<Item = &'a Aab>) -> FreeCoordinate {
    boxes.into_iter().map(Aab::volume).sum()
}

/// Divides `count` particles among `boxes` in proportion to their volumes.
///
/// Each box gets the floor of its proportional share, and the last box with nonzero
/// volume also gets whatever remains, so the counts always add up to `count`. If no box
/// has any volume, every count is zero.
pub fn particle_counts(boxes: &[Aab], count: usize) -> Vec<usize> {
    let total = total_volume(boxes);
    let mut counts = vec![0; boxes.len()];
    if !(total > 0.0) {
        return counts;
    }

    let mut assigned = 0;
    let mut last_nonempty = None;
    for (i, aab) in boxes.iter().enumerate() {
        let volume = aab.volume();
        if volume > 0.0 {
            let share = (count as FreeCoordinate * volume / total).floor() as usize;
            counts[i] = share;
            assigned += share;
            last_nonempty = Some(i);
        }
    }
    if let Some(i) = last_nonempty {
        counts[i] += count.saturating_sub(assigned);
    }
    counts
}

/// Returns `count` points scattered uniformly within `boxes`, with each box receiving a
/// number of points proportional to its volume (see [`particle_counts()`]).
///
/// The points are grouped by box, in the order of `boxes`.
pub fn scatter_points(boxes: &[Aab], count: usize, rng: &mut impl rand::Rng) -> Vec<FreePoint> {
    let counts = particle_counts(boxes, count);
    let mut points = Vec::with_capacity(counts.iter().sum());
    for (aab, &n) in boxes.iter().zip(&counts) {
        points.extend((0..n).map(|_| aab.random_point(rng)));
    }
    points
}
