//! Paired bracket resolution (BD16, N0).

use super::classify::bracket;
use super::sequence::IsolatingRunSequence;
use super::types::{BidiType, Bracket, CharInfo, MAX_BRACKET_STACK};
use smallvec::SmallVec;

/// Canonical closing bracket identifying the pair a bracket belongs to.
fn pair_key(b: Bracket) -> Option<char> {
    match b {
        Bracket::None => None,
        Bracket::Open(close) => Some(close),
        Bracket::Close(open) => match bracket(open) {
            Bracket::Open(close) => Some(close),
            _ => Some(open),
        },
    }
}

/// Bracket pairs of `seq` as positions into `seq.indices`, sorted by opening position.
///
/// Only brackets whose current type is ON take part. Scanning stops at the 64th
/// simultaneously open bracket; pairs found up to that point are kept.
pub(crate) fn locate_pairs(infos: &[CharInfo], seq: &IsolatingRunSequence) -> Vec<(usize, usize)> {
    let mut openers: SmallVec<[(char, usize); MAX_BRACKET_STACK]> = SmallVec::new();
    let mut pairs = Vec::new();

    for (pos, &i) in seq.indices.iter().enumerate() {
        let info = &infos[i];
        if info.ty != BidiType::ON {
            continue;
        }
        let Some(key) = pair_key(info.bracket) else {
            continue;
        };
        match info.bracket {
            Bracket::Open(_) => {
                if openers.len() == MAX_BRACKET_STACK {
                    tracing::trace!(index = i, "bracket stack overflow");
                    break;
                }
                openers.push((key, pos));
            }
            Bracket::Close(_) => {
                if let Some(depth) = openers.iter().rposition(|&(k, _)| k == key) {
                    pairs.push((openers[depth].1, pos));
                    openers.truncate(depth);
                }
            }
            Bracket::None => {}
        }
    }

    pairs.sort_unstable();
    pairs
}

/// Apply N0 to every bracket pair of `seq`.
pub(crate) fn resolve_brackets(infos: &mut [CharInfo], seq: &IsolatingRunSequence) {
    let pairs = locate_pairs(infos, seq);
    if pairs.is_empty() {
        return;
    }
    let idx = &seq.indices;
    let embedding = seq.embedding_direction();

    for (open, close) in pairs {
        let mut found_embedding = false;
        let mut found_opposite = false;
        for &i in &idx[open + 1..close] {
            match infos[i].ty.strong_for_neutral() {
                Some(dir) if dir == embedding => {
                    found_embedding = true;
                    break;
                }
                Some(_) => found_opposite = true,
                None => {}
            }
        }

        let resolved = if found_embedding {
            // N0b
            embedding
        } else if found_opposite {
            // N0c: the preceding strong context decides; it is either the opposite
            // direction (c1) or the embedding direction (c2).
            idx[..open]
                .iter()
                .rev()
                .find_map(|&i| infos[i].ty.strong_for_neutral())
                .unwrap_or(seq.sos)
        } else {
            // N0d
            continue;
        };

        for pos in [open, close] {
            infos[idx[pos]].ty = resolved;
            // Marks following a resolved bracket take its direction.
            for &i in &idx[pos + 1..] {
                if infos[i].original != BidiType::NSM {
                    break;
                }
                infos[i].ty = resolved;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/brackets.rs"]
mod tests;
