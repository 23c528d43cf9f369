//! Level runs and isolating run sequences (BD13, X10).

use super::types::{BidiType, CharInfo};
use std::ops::Range;

/// One isolating run sequence: indices into the context in logical order, Gap records
/// excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IsolatingRunSequence {
    pub(crate) indices: Vec<usize>,
    pub(crate) level: u8,
    pub(crate) sos: BidiType,
    pub(crate) eos: BidiType,
}

impl IsolatingRunSequence {
    /// Embedding direction of the sequence (L for even levels, R for odd).
    pub(crate) fn embedding_direction(&self) -> BidiType {
        direction_of(self.level)
    }
}

fn direction_of(level: u8) -> BidiType {
    if level % 2 == 0 { BidiType::L } else { BidiType::R }
}

/// Index of the PDI matching the isolate initiator at `initiator`, counting nested
/// initiators. `None` when the paragraph ends first.
pub(crate) fn find_isolate_terminator(infos: &[CharInfo], initiator: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, info) in infos.iter().enumerate().skip(initiator + 1) {
        match info.original {
            t if t.is_isolate_initiator() => depth += 1,
            BidiType::PDI if depth == 0 => return Some(i),
            BidiType::PDI => depth -= 1,
            BidiType::B => return None,
            _ => {}
        }
    }
    None
}

/// Index of the isolate initiator matched by the PDI at `terminator`, scanning backward.
pub(crate) fn find_isolate_initiator(infos: &[CharInfo], terminator: usize) -> Option<usize> {
    let mut depth = 0usize;
    for i in (0..terminator).rev() {
        match infos[i].original {
            BidiType::PDI => depth += 1,
            t if t.is_isolate_initiator() && depth == 0 => return Some(i),
            t if t.is_isolate_initiator() => depth -= 1,
            BidiType::B => return None,
            _ => {}
        }
    }
    None
}

/// Maximal runs of equal level over non-Gap characters (BD7). A run may span Gap records.
fn level_runs(infos: &[CharInfo]) -> Vec<Range<usize>> {
    let mut runs: Vec<Range<usize>> = Vec::new();
    let mut current: Option<(Range<usize>, u8)> = None;
    for (i, info) in infos.iter().enumerate() {
        if info.ty == BidiType::Gap {
            continue;
        }
        match &mut current {
            Some((run, level)) if *level == info.level => run.end = i + 1,
            _ => {
                if let Some((run, _)) = current.take() {
                    runs.push(run);
                }
                current = Some((i..i + 1, info.level));
            }
        }
    }
    if let Some((run, _)) = current {
        runs.push(run);
    }
    runs
}

fn last_real(infos: &[CharInfo], run: &Range<usize>) -> usize {
    run.clone()
        .rev()
        .find(|&i| infos[i].ty != BidiType::Gap)
        .unwrap_or(run.start)
}

/// Chain level runs across matched isolates into isolating run sequences and compute
/// their `sos`/`eos` (X10).
pub(crate) fn isolating_run_sequences(
    infos: &[CharInfo],
    paragraph_level: u8,
) -> Vec<IsolatingRunSequence> {
    let runs = level_runs(infos);
    let run_starting_at = |pos: usize| runs.binary_search_by_key(&pos, |r| r.start).ok();

    let mut sequences = Vec::new();
    for (r, run) in runs.iter().enumerate() {
        // Runs opened by a matched PDI continue the sequence of their initiator.
        if infos[run.start].original == BidiType::PDI {
            let continues = find_isolate_initiator(infos, run.start).is_some_and(|init| {
                runs.iter()
                    .position(|other| other.contains(&init))
                    .is_some_and(|owner| owner != r && last_real(infos, &runs[owner]) == init)
            });
            if continues {
                continue;
            }
        }

        let mut indices: Vec<usize> = Vec::new();
        let mut current = r;
        loop {
            let run = &runs[current];
            indices.extend(run.clone().filter(|&i| infos[i].ty != BidiType::Gap));
            let last = last_real(infos, run);
            if !infos[last].original.is_isolate_initiator() {
                break;
            }
            match find_isolate_terminator(infos, last).and_then(run_starting_at) {
                Some(next) if next > current => current = next,
                _ => break,
            }
        }

        let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
            continue;
        };
        let level = infos[first].level;

        let before = infos[..first]
            .iter()
            .rev()
            .find(|i| i.ty != BidiType::Gap)
            .map_or(paragraph_level, |i| i.level);
        let after = if infos[last].original.is_isolate_initiator() {
            paragraph_level
        } else {
            infos[last + 1..]
                .iter()
                .find(|i| i.ty != BidiType::Gap)
                .map_or(paragraph_level, |i| i.level)
        };

        sequences.push(IsolatingRunSequence {
            indices,
            level,
            sos: direction_of(level.max(before)),
            eos: direction_of(level.max(after)),
        });
    }
    sequences
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/sequence.rs"]
mod tests;
