//! Paragraph level (P2/P3), explicit levels and directions (X1–X8) and X9 removal.

use super::types::{BaseDirection, BidiType, CharInfo, DirectionalStatus, MAX_DEPTH};
use smallvec::SmallVec;

/// Inline capacity of the directional status stack: `MAX_DEPTH + 2` entries always fit.
const STATUS_STACK: usize = 128;

/// First strong type (P2), skipping characters between an isolate initiator and its
/// matching PDI.
///
/// With `stop_at_pdi` the scan ends at an unmatched PDI, which is how X5c bounds the
/// search to the contents of an FSI. AL reports as R.
pub(crate) fn first_strong(infos: &[CharInfo], stop_at_pdi: bool) -> Option<BidiType> {
    let mut isolates = 0usize;
    for info in infos {
        match info.ty {
            BidiType::LRI | BidiType::RLI | BidiType::FSI => isolates += 1,
            BidiType::PDI if isolates > 0 => isolates -= 1,
            BidiType::PDI if stop_at_pdi => return None,
            BidiType::B => return None,
            BidiType::L if isolates == 0 => return Some(BidiType::L),
            BidiType::R | BidiType::AL if isolates == 0 => return Some(BidiType::R),
            _ => {}
        }
    }
    None
}

/// Paragraph embedding level from the direction hint (P2/P3 for [`BaseDirection::Auto`]).
pub(crate) fn paragraph_level(infos: &[CharInfo], hint: BaseDirection) -> u8 {
    match hint {
        BaseDirection::Ltr => 0,
        BaseDirection::Rtl => 1,
        BaseDirection::Auto => match first_strong(infos, false) {
            Some(BidiType::R) => 1,
            _ => 0,
        },
    }
}

fn least_odd_greater_than(level: u8) -> u8 {
    if level % 2 == 0 { level + 1 } else { level + 2 }
}

fn least_even_greater_than(level: u8) -> u8 {
    if level % 2 == 0 { level + 2 } else { level + 1 }
}

/// Assign explicit levels and override directions (X1–X8).
///
/// Isolate initiators and PDIs take the level of the status outside the isolate and keep
/// their original type in [`CharInfo::original`] for run sequence building.
pub(crate) fn resolve_explicit(infos: &mut [CharInfo], paragraph_level: u8) {
    let base = DirectionalStatus {
        level: paragraph_level,
        overridden: None,
        isolate: false,
    };
    let mut stack: SmallVec<[DirectionalStatus; STATUS_STACK]> = SmallVec::new();
    stack.push(base);

    let mut overflow_isolates = 0usize;
    let mut overflow_embeddings = 0usize;
    let mut valid_isolates = 0usize;

    for i in 0..infos.len() {
        let top = stack.last().copied().unwrap_or(base);
        let ty = infos[i].ty;
        match ty {
            // X2–X5
            BidiType::RLE | BidiType::LRE | BidiType::RLO | BidiType::LRO => {
                infos[i].level = top.level;
                let level = if matches!(ty, BidiType::RLE | BidiType::RLO) {
                    least_odd_greater_than(top.level)
                } else {
                    least_even_greater_than(top.level)
                };
                if level <= MAX_DEPTH && overflow_isolates == 0 && overflow_embeddings == 0 {
                    let overridden = match ty {
                        BidiType::RLO => Some(BidiType::R),
                        BidiType::LRO => Some(BidiType::L),
                        _ => None,
                    };
                    stack.push(DirectionalStatus {
                        level,
                        overridden,
                        isolate: false,
                    });
                } else if overflow_isolates == 0 {
                    overflow_embeddings += 1;
                    tracing::trace!(index = i, level, "embedding stack overflow");
                }
            }

            // X5a–X5c
            BidiType::RLI | BidiType::LRI | BidiType::FSI => {
                infos[i].level = top.level;
                if let Some(dir) = top.overridden {
                    infos[i].ty = dir;
                }
                let rtl = match ty {
                    BidiType::RLI => true,
                    BidiType::LRI => false,
                    _ => first_strong(&infos[i + 1..], true) == Some(BidiType::R),
                };
                let level = if rtl {
                    least_odd_greater_than(top.level)
                } else {
                    least_even_greater_than(top.level)
                };
                if level <= MAX_DEPTH && overflow_isolates == 0 && overflow_embeddings == 0 {
                    valid_isolates += 1;
                    stack.push(DirectionalStatus {
                        level,
                        overridden: None,
                        isolate: true,
                    });
                } else {
                    overflow_isolates += 1;
                    tracing::trace!(index = i, level, "isolate stack overflow");
                }
            }

            // X6a
            BidiType::PDI => {
                if overflow_isolates > 0 {
                    overflow_isolates -= 1;
                } else if valid_isolates > 0 {
                    overflow_embeddings = 0;
                    while stack.last().is_some_and(|s| !s.isolate) {
                        stack.pop();
                    }
                    stack.pop();
                    valid_isolates -= 1;
                }
                let top = stack.last().copied().unwrap_or(base);
                infos[i].level = top.level;
                if let Some(dir) = top.overridden {
                    infos[i].ty = dir;
                }
            }

            // X7
            BidiType::PDF => {
                infos[i].level = top.level;
                if overflow_isolates == 0 {
                    if overflow_embeddings > 0 {
                        overflow_embeddings -= 1;
                    } else if !top.isolate && stack.len() >= 2 {
                        stack.pop();
                    }
                }
            }

            // X8
            BidiType::B => infos[i].level = paragraph_level,

            BidiType::BN => infos[i].level = top.level,

            // X6
            _ => {
                infos[i].level = top.level;
                if let Some(dir) = top.overridden {
                    infos[i].ty = dir;
                }
            }
        }
    }
}

/// X9: mark embeddings, overrides, PDF and BN as [`BidiType::Gap`] in place.
pub(crate) fn remove_formatting(infos: &mut [CharInfo]) {
    for info in infos.iter_mut().filter(|info| info.ty.is_removed_by_x9()) {
        info.ty = BidiType::Gap;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/explicit.rs"]
mod tests;
