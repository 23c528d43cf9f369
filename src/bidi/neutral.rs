//! Neutral resolution (N1, N2), implicit levels (I1, I2) and Gap reinsertion.

use super::sequence::IsolatingRunSequence;
use super::types::{BidiType, CharInfo, JoiningType, MAX_LEVEL};

/// Apply N1/N2 to every run of neutrals and isolate delimiters in `seq`.
pub(crate) fn resolve_neutrals(infos: &mut [CharInfo], seq: &IsolatingRunSequence) {
    let idx = &seq.indices;
    let embedding = seq.embedding_direction();

    let mut k = 0;
    while k < idx.len() {
        if !infos[idx[k]].ty.is_neutral_or_isolate() {
            k += 1;
            continue;
        }
        let start = k;
        while k < idx.len() && infos[idx[k]].ty.is_neutral_or_isolate() {
            k += 1;
        }

        let before = match start {
            0 => Some(seq.sos),
            _ => infos[idx[start - 1]].ty.strong_for_neutral(),
        };
        let after = match idx.get(k) {
            None => Some(seq.eos),
            Some(&i) => infos[i].ty.strong_for_neutral(),
        };
        let resolved = match (before, after) {
            (Some(b), Some(a)) if a == b => b,
            _ => embedding,
        };
        for &i in &idx[start..k] {
            infos[i].ty = resolved;
        }
    }
}

/// I1/I2 for every non-Gap character.
pub(crate) fn resolve_implicit(infos: &mut [CharInfo]) {
    for info in infos.iter_mut().filter(|i| i.ty != BidiType::Gap) {
        let bump = match (info.level % 2 == 0, info.ty) {
            (true, BidiType::R) => 1,
            (true, BidiType::AN | BidiType::EN) => 2,
            (false, BidiType::L | BidiType::AN | BidiType::EN) => 1,
            _ => 0,
        };
        info.level = (info.level + bump).min(MAX_LEVEL);
    }
}

/// Give every Gap the lower level of its nearest real neighbours and a joining type
/// from its code point: ZWJ causes joining, ZWNJ breaks it, anything else is transparent.
pub(crate) fn reinsert_gaps(infos: &mut [CharInfo], text: &[char], paragraph_level: u8) {
    let mut prev = paragraph_level;
    let mut i = 0;
    while i < infos.len() {
        if infos[i].ty != BidiType::Gap {
            prev = infos[i].level;
            i += 1;
            continue;
        }
        let start = i;
        while i < infos.len() && infos[i].ty == BidiType::Gap {
            i += 1;
        }
        let next = infos.get(i).map_or(paragraph_level, |info| info.level);
        let level = prev.min(next);
        for (info, &ch) in infos[start..i].iter_mut().zip(&text[start..i]) {
            info.level = level;
            info.joining = match ch {
                '\u{200D}' => JoiningType::Causing,
                '\u{200C}' => JoiningType::NonJoining,
                _ => JoiningType::Transparent,
            };
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/neutral.rs"]
mod tests;
