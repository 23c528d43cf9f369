//! Arabic contextual shaping, Lam-Alef ligatures and L4 mirroring.

use super::classify::{mirror_of, positional_forms};
use super::types::{BidiType, CharInfo, JoiningType};

/// Font capability query used to decide whether a presentation form may be substituted.
pub trait GlyphSource {
    /// Whether the font can render `ch`.
    fn has_glyph(&self, ch: char) -> bool;
}

impl<F> GlyphSource for F
where
    F: Fn(char) -> bool,
{
    fn has_glyph(&self, ch: char) -> bool {
        self(ch)
    }
}

const LAM_INITIAL: char = '\u{FEDF}';
const LAM_MEDIAL: char = '\u{FEE0}';
const ZERO_WIDTH_NO_BREAK: char = '\u{FEFF}';

/// Final alef forms and their (isolated, final) Lam-Alef ligatures.
const LAM_ALEF: [(char, char, char); 4] = [
    ('\u{FE82}', '\u{FEF5}', '\u{FEF6}'),
    ('\u{FE84}', '\u{FEF7}', '\u{FEF8}'),
    ('\u{FE88}', '\u{FEF9}', '\u{FEFA}'),
    ('\u{FE8E}', '\u{FEFB}', '\u{FEFC}'),
];

fn is_transparent(info: &CharInfo) -> bool {
    info.joining == JoiningType::Transparent || info.original == BidiType::NSM
}

fn font_for<'f>(
    fonts: &[&'f dyn GlyphSource],
    attrs: Option<&[u32]>,
    index: usize,
) -> Option<&'f dyn GlyphSource> {
    let font = attrs.map_or(0, |a| (a[index] & 0xFFFF) as usize);
    fonts.get(font).copied()
}

/// Replace Arabic letters in `text` with their positional forms, then form Lam-Alef
/// ligatures. Works run by run over equal levels.
///
/// `attrs` carries one word per character whose low 16 bits select the font in `fonts`.
/// A form is substituted only when that font has the glyph.
pub(crate) fn shape(
    infos: &[CharInfo],
    text: &mut [char],
    attrs: Option<&[u32]>,
    fonts: &[&dyn GlyphSource],
) {
    let mut joined: Vec<usize> = Vec::new();
    let mut start = 0;
    while start < infos.len() {
        let level = infos[start].level;
        let end = infos[start..]
            .iter()
            .position(|i| i.level != level)
            .map_or(infos.len(), |n| start + n);

        joined.clear();
        joined.extend((start..end).filter(|&i| !is_transparent(&infos[i])));
        shape_run(infos, text, attrs, fonts, &joined);
        ligate_run(text, attrs, fonts, &joined);

        start = end;
    }
}

fn shape_run(
    infos: &[CharInfo],
    text: &mut [char],
    attrs: Option<&[u32]>,
    fonts: &[&dyn GlyphSource],
    run: &[usize],
) {
    for (k, &i) in run.iter().enumerate() {
        let joining = infos[i].joining;
        if !matches!(
            joining,
            JoiningType::Right | JoiningType::Left | JoiningType::Dual
        ) {
            continue;
        }
        let Some(forms) = positional_forms(text[i]) else {
            continue;
        };

        let joins_prev = k > 0
            && joining.joins_backward()
            && infos[run[k - 1]].joining.joins_forward();
        let joins_next = k + 1 < run.len()
            && joining.joins_forward()
            && infos[run[k + 1]].joining.joins_backward();

        let form = match (joins_prev, joins_next) {
            (true, true) => forms.medial,
            (true, false) => forms.final_form,
            (false, true) => forms.initial,
            (false, false) => forms.isolated,
        };
        let Some(glyph) = form else {
            continue;
        };
        if font_for(fonts, attrs, i).is_some_and(|f| f.has_glyph(glyph)) {
            text[i] = glyph;
        }
    }
}

fn ligate_run(
    text: &mut [char],
    attrs: Option<&[u32]>,
    fonts: &[&dyn GlyphSource],
    run: &[usize],
) {
    for pair in run.windows(2) {
        let (lam, alef) = (pair[0], pair[1]);
        let initial = match text[lam] {
            LAM_INITIAL => true,
            LAM_MEDIAL => false,
            _ => continue,
        };
        let Some(&(_, isolated, final_form)) =
            LAM_ALEF.iter().find(|&&(form, ..)| form == text[alef])
        else {
            continue;
        };
        let ligature = if initial { isolated } else { final_form };
        if font_for(fonts, attrs, lam).is_some_and(|f| f.has_glyph(ligature)) {
            text[lam] = ligature;
            text[alef] = ZERO_WIDTH_NO_BREAK;
        }
    }
}

/// L4: replace mirrored characters at odd levels with their counterparts.
pub(crate) fn mirror(infos: &[CharInfo], text: &mut [char]) {
    for (info, ch) in infos.iter().zip(text.iter_mut()).rev() {
        if info.level % 2 == 1 && info.mirrored && info.ty != BidiType::Gap {
            if let Some(m) = mirror_of(*ch) {
                *ch = m;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/shaping.rs"]
mod tests;
