//! Character database lookups (binary search over the generated range tables).

use super::tables::{
    BIDI_CLASS_RANGES, BRACKET_PAIRS, JOINING_TYPE_RANGES, MIRROR_PAIRS, POSITIONAL_FORMS,
};
use super::types::{BidiType, Bracket, CharInfo, JoiningType};
use serde::Serialize;
use std::cmp::Ordering;

/// All database properties the engine uses for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharClass {
    /// Bidi class.
    pub bidi: BidiType,
    /// Paired-bracket role.
    pub bracket: Bracket,
    /// Arabic joining type.
    pub joining: JoiningType,
    /// Whether a mirrored glyph exists.
    pub mirrored: bool,
}

/// Positional presentation forms of an Arabic letter. `None` where the font encoding has
/// no such form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalForms {
    /// Standalone form.
    pub isolated: Option<char>,
    /// Joined on the right only.
    pub final_form: Option<char>,
    /// Joined on the left only.
    pub initial: Option<char>,
    /// Joined on both sides.
    pub medial: Option<char>,
}

fn range_lookup<T: Copy>(table: &[(u32, u32, T)], cp: u32) -> Option<T> {
    table
        .binary_search_by(|&(lo, hi, _)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|i| table[i].2)
}

fn pair_lookup(table: &[(u32, u32)], cp: u32) -> Option<char> {
    table
        .binary_search_by_key(&cp, |&(from, _)| from)
        .ok()
        .and_then(|i| char::from_u32(table[i].1))
}

/// Bidi class of `ch`.
pub fn bidi_type(ch: char) -> BidiType {
    range_lookup(BIDI_CLASS_RANGES, u32::from(ch)).unwrap_or(BidiType::L)
}

/// Arabic joining type of `ch`.
pub fn joining_type(ch: char) -> JoiningType {
    range_lookup(JOINING_TYPE_RANGES, u32::from(ch)).unwrap_or_default()
}

/// Mirrored counterpart of `ch`, if any.
pub fn mirror_of(ch: char) -> Option<char> {
    pair_lookup(MIRROR_PAIRS, u32::from(ch))
}

/// Map a bracket to its canonical equivalent (U+2329/U+232A decompose to U+3008/U+3009).
pub(crate) fn canonical_bracket(ch: char) -> char {
    match ch {
        '\u{2329}' => '\u{3008}',
        '\u{232A}' => '\u{3009}',
        other => other,
    }
}

/// Paired-bracket role of `ch`, with canonicalized partner.
pub fn bracket(ch: char) -> Bracket {
    let cp = u32::from(ch);
    if let Some(close) = pair_lookup(BRACKET_PAIRS, cp) {
        return Bracket::Open(canonical_bracket(close));
    }
    // Closing brackets are found by scanning the second column; the table is small.
    BRACKET_PAIRS
        .iter()
        .find(|&&(_, close)| close == cp)
        .and_then(|&(open, _)| char::from_u32(open))
        .map_or(Bracket::None, |open| Bracket::Close(canonical_bracket(open)))
}

/// Positional presentation forms of `ch`, if it is a shapeable Arabic letter.
pub fn positional_forms(ch: char) -> Option<PositionalForms> {
    let cp = u32::from(ch);
    let i = POSITIONAL_FORMS
        .binary_search_by_key(&cp, |&(base, ..)| base)
        .ok()?;
    let (_, isolated, final_form, initial, medial) = POSITIONAL_FORMS[i];
    let form = |v: u32| (v != 0).then(|| char::from_u32(v)).flatten();
    Some(PositionalForms {
        isolated: form(isolated),
        final_form: form(final_form),
        initial: form(initial),
        medial: form(medial),
    })
}

/// Look up every property of `ch`.
pub fn classify(ch: char) -> CharClass {
    CharClass {
        bidi: bidi_type(ch),
        bracket: bracket(ch),
        joining: joining_type(ch),
        mirrored: mirror_of(ch).is_some(),
    }
}

/// Fresh per-character record for `ch` at level 0.
pub(crate) fn char_info(ch: char) -> CharInfo {
    let class = classify(ch);
    CharInfo {
        ty: class.bidi,
        original: class.bidi,
        level: 0,
        bracket: class.bracket,
        mirrored: class.mirrored,
        joining: class.joining,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/classify.rs"]
mod tests;
