//! Weak type resolution (W1–W7) over one isolating run sequence.

use super::sequence::IsolatingRunSequence;
use super::types::{BidiType, CharInfo};

/// Apply W1–W7 to the characters of `seq`, in order.
pub(crate) fn resolve_weak(infos: &mut [CharInfo], seq: &IsolatingRunSequence) {
    let idx = &seq.indices;

    // W1: NSM takes the preceding type, ON after an isolate delimiter.
    let mut prev = seq.sos;
    for &i in idx {
        if infos[i].ty == BidiType::NSM {
            infos[i].ty = if prev.is_isolate_initiator() || prev == BidiType::PDI {
                BidiType::ON
            } else {
                prev
            };
        }
        prev = infos[i].ty;
    }

    // W2: EN after AL becomes AN. W3: AL becomes R.
    let mut last_strong = seq.sos;
    for &i in idx {
        match infos[i].ty {
            BidiType::L | BidiType::R => last_strong = infos[i].ty,
            BidiType::AL => {
                last_strong = BidiType::AL;
                infos[i].ty = BidiType::R;
            }
            BidiType::EN if last_strong == BidiType::AL => infos[i].ty = BidiType::AN,
            _ => {}
        }
    }

    // W4: a single separator between two numbers of the same kind.
    for k in 1..idx.len().saturating_sub(1) {
        let before = infos[idx[k - 1]].ty;
        let after = infos[idx[k + 1]].ty;
        let here = &mut infos[idx[k]].ty;
        match *here {
            BidiType::ES if before == BidiType::EN && after == BidiType::EN => {
                *here = BidiType::EN
            }
            BidiType::CS
                if before == after && matches!(before, BidiType::EN | BidiType::AN) =>
            {
                *here = before
            }
            _ => {}
        }
    }

    // W5: runs of ET adjacent to EN.
    let mut k = 0;
    while k < idx.len() {
        if infos[idx[k]].ty != BidiType::ET {
            k += 1;
            continue;
        }
        let start = k;
        while k < idx.len() && infos[idx[k]].ty == BidiType::ET {
            k += 1;
        }
        let touches_en = (start > 0 && infos[idx[start - 1]].ty == BidiType::EN)
            || (k < idx.len() && infos[idx[k]].ty == BidiType::EN);
        if touches_en {
            for &i in &idx[start..k] {
                infos[i].ty = BidiType::EN;
            }
        }
    }

    // W6: remaining separators and terminators become ON.
    for &i in idx {
        if matches!(infos[i].ty, BidiType::ES | BidiType::ET | BidiType::CS) {
            infos[i].ty = BidiType::ON;
        }
    }

    // W7: EN after L (or an L sos) becomes L.
    let mut last_strong = seq.sos;
    for &i in idx {
        match infos[i].ty {
            BidiType::L | BidiType::R => last_strong = infos[i].ty,
            BidiType::EN if last_strong == BidiType::L => infos[i].ty = BidiType::L,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/weak.rs"]
mod tests;
