//! Visual reordering of a finished row (L2) and logical/visual index mapping.

use super::types::MAX_LEVEL;
use smallvec::SmallVec;
use std::ops::Range;

/// Size of the run-start stack: one slot per level up to `MAX_LEVEL`.
const LEVEL_SLOTS: usize = MAX_LEVEL as usize + 2;

/// Call `visit` with every range L2 reverses, innermost first.
///
/// Reversals happen for each level from the highest in `levels` down to the lowest odd
/// level present. Ranges are reported so that a range always comes after every range
/// nested inside it; disjoint ranges commute, so applying them in the reported order is
/// equivalent to the level-by-level rule.
pub(crate) fn runs_to_reverse(levels: &[u8], mut visit: impl FnMut(Range<usize>)) {
    let Some(lowest_odd) = levels.iter().copied().filter(|l| l % 2 == 1).min() else {
        return;
    };
    let lowest_odd = usize::from(lowest_odd);

    let mut open = [0usize; LEVEL_SLOTS];
    let mut prev = 0usize;
    for (i, level) in levels
        .iter()
        .map(|&l| usize::from(l.min(MAX_LEVEL)))
        .chain(std::iter::once(0))
        .enumerate()
    {
        if level > prev {
            for slot in &mut open[prev + 1..=level] {
                *slot = i;
            }
        } else {
            for t in (level + 1..=prev).rev().filter(|&t| t >= lowest_odd) {
                visit(open[t]..i);
            }
        }
        prev = level;
    }
}

/// Reorder `payload` from logical to visual order using the matching `levels`.
///
/// # Panics
/// Panics if `levels` and `payload` differ in length.
pub fn reorder_by_levels<T>(levels: &[u8], payload: &mut [T]) {
    assert_eq!(levels.len(), payload.len(), "levels and payload must align");
    runs_to_reverse(levels, |run| payload[run].reverse());
}

fn mirror_in(run: &Range<usize>, pos: usize) -> usize {
    run.start + run.end - 1 - pos
}

/// Visual position of logical position `pos` (both relative to `levels`).
pub(crate) fn visual_index(levels: &[u8], pos: usize) -> usize {
    let mut pos = pos;
    runs_to_reverse(levels, |run| {
        if run.contains(&pos) {
            pos = mirror_in(&run, pos);
        }
    });
    pos
}

/// Logical position shown at visual position `pos` (both relative to `levels`).
pub(crate) fn logical_index(levels: &[u8], pos: usize) -> usize {
    let mut runs: SmallVec<[Range<usize>; 16]> = SmallVec::new();
    runs_to_reverse(levels, |run| runs.push(run));
    runs.iter().rev().fold(pos, |pos, run| {
        if run.contains(&pos) { mirror_in(run, pos) } else { pos }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/reorder.rs"]
mod tests;
