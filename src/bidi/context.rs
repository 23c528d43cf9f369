//! Fixed-capacity bidi context: per-paragraph state and the public entry points.

use super::brackets::resolve_brackets;
use super::classify::char_info;
use super::explicit::{paragraph_level, remove_formatting, resolve_explicit};
use super::neutral::{reinsert_gaps, resolve_implicit, resolve_neutrals};
use super::reorder::{logical_index, reorder_by_levels, visual_index};
use super::sequence::isolating_run_sequences;
use super::shaping::{GlyphSource, mirror, shape};
use super::types::{BaseDirection, BidiType, CharInfo};
use super::weak::resolve_weak;
use crate::foundation::error::{EmberError, EmberResult};
use smallvec::SmallVec;
use std::ops::Range;

/// Bidi state for one paragraph of at most `capacity` characters.
///
/// Typical use:
/// 1. [`BidiContext::init`] classifies the text and reports whether bidi is needed.
/// 2. [`BidiContext::process`] resolves levels (skipped for pure LTR text).
/// 3. Optional [`BidiContext::apply_shaping`] and [`BidiContext::mirror_glyphs`].
/// 4. Per wrapped row: [`BidiContext::complete_row`], then one of the reorder calls.
#[derive(Debug, Clone)]
pub struct BidiContext {
    chars: Vec<CharInfo>,
    capacity: usize,
    paragraph_level: u8,
    needs_bidi: bool,
}

impl BidiContext {
    /// Create a context able to hold `max_chars` characters.
    pub fn new(max_chars: usize) -> EmberResult<Self> {
        let mut chars = Vec::new();
        chars.try_reserve_exact(max_chars).map_err(|_| {
            EmberError::out_of_memory(
                max_chars.saturating_mul(std::mem::size_of::<CharInfo>()),
                None,
            )
        })?;
        Ok(Self {
            chars,
            capacity: max_chars,
            paragraph_level: 0,
            needs_bidi: false,
        })
    }

    /// Number of characters of the current paragraph.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether no paragraph is loaded.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Fixed character capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the paragraph needs bidi processing (RTL content, RTL controls, or an RTL
    /// paragraph level).
    pub fn is_bidi_needed(&self) -> bool {
        self.needs_bidi
    }

    /// Whether the paragraph level is RTL.
    pub fn is_rtl(&self) -> bool {
        self.paragraph_level % 2 == 1
    }

    /// Paragraph embedding level (0 or 1).
    pub fn paragraph_level(&self) -> u8 {
        self.paragraph_level
    }

    /// Level of the character at `index`; the paragraph level when out of range.
    pub fn char_level(&self, index: usize) -> u8 {
        self.chars
            .get(index)
            .map_or(self.paragraph_level, |info| info.level)
    }

    /// Full record of the character at `index`.
    pub fn char_info(&self, index: usize) -> Option<&CharInfo> {
        self.chars.get(index)
    }

    /// Levels of every character, in logical order.
    pub fn levels(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars.iter().map(|info| info.level)
    }

    /// Classify `text` and determine the paragraph level. Returns whether bidi processing
    /// is needed; when it is not, every level is already final.
    #[tracing::instrument(level = "debug", skip(self, text), fields(len = text.len()))]
    pub fn init(&mut self, text: &[char], hint: BaseDirection) -> EmberResult<bool> {
        if text.len() > self.capacity {
            return Err(EmberError::Capacity {
                requested: text.len(),
                capacity: self.capacity,
            });
        }

        self.chars.clear();
        self.chars.extend(text.iter().copied().map(char_info));

        self.paragraph_level = paragraph_level(&self.chars, hint);
        self.needs_bidi =
            self.paragraph_level == 1 || self.chars.iter().any(|i| i.ty.triggers_bidi());
        let level = self.paragraph_level;
        for info in &mut self.chars {
            info.level = level;
        }
        Ok(self.needs_bidi)
    }

    /// Resolve embedding levels for the text passed to [`BidiContext::init`].
    #[tracing::instrument(level = "debug", skip(self, text), fields(len = text.len()))]
    pub fn process(&mut self, text: &[char]) -> EmberResult<()> {
        self.check_len(text.len(), "text")?;
        if !self.needs_bidi {
            return Ok(());
        }

        let level = self.paragraph_level;
        for (info, &ch) in self.chars.iter_mut().zip(text) {
            *info = char_info(ch);
        }
        resolve_explicit(&mut self.chars, level);
        remove_formatting(&mut self.chars);

        let sequences = isolating_run_sequences(&self.chars, level);
        tracing::trace!(sequences = sequences.len(), "isolating run sequences");
        for seq in &sequences {
            resolve_weak(&mut self.chars, seq);
            resolve_brackets(&mut self.chars, seq);
            resolve_neutrals(&mut self.chars, seq);
        }

        resolve_implicit(&mut self.chars);
        reinsert_gaps(&mut self.chars, text, level);
        Ok(())
    }

    /// Replace Arabic letters with positional forms and Lam-Alef ligatures.
    ///
    /// `attrs` holds one word per character; its low 16 bits index `fonts`. Without
    /// `attrs` every character uses `fonts[0]`. Forms the font lacks are left unshaped.
    pub fn apply_shaping(
        &self,
        text: &mut [char],
        attrs: Option<&[u32]>,
        fonts: &[&dyn GlyphSource],
    ) -> EmberResult<()> {
        self.check_len(text.len(), "text")?;
        if let Some(attrs) = attrs {
            self.check_len(attrs.len(), "attrs")?;
        }
        shape(&self.chars, text, attrs, fonts);
        Ok(())
    }

    /// L4: swap mirrored characters at RTL levels for their counterparts.
    pub fn mirror_glyphs(&self, text: &mut [char]) -> EmberResult<()> {
        self.check_len(text.len(), "text")?;
        mirror(&self.chars, text);
        Ok(())
    }

    /// L1 for one wrapped row: separators, and whitespace or isolate delimiters that
    /// trail the row or precede a separator, drop to the paragraph level.
    pub fn complete_row(&mut self, row: Range<usize>) -> EmberResult<()> {
        self.check_row(&row)?;
        if !self.needs_bidi {
            return Ok(());
        }
        let level = self.paragraph_level;
        let mut trailing = true;
        for info in self.chars[row].iter_mut().rev() {
            match info.original {
                BidiType::S | BidiType::B => {
                    info.level = level;
                    trailing = true;
                }
                BidiType::WS
                | BidiType::LRI
                | BidiType::RLI
                | BidiType::FSI
                | BidiType::PDI
                | BidiType::LRE
                | BidiType::RLE
                | BidiType::LRO
                | BidiType::RLO
                | BidiType::PDF
                | BidiType::BN => {
                    if trailing {
                        info.level = level;
                    }
                }
                _ => trailing = false,
            }
        }
        Ok(())
    }

    /// Reorder one row of characters into visual order. `text` holds exactly the row.
    pub fn reorder_chars(&self, row: Range<usize>, text: &mut [char]) -> EmberResult<()> {
        self.reorder(row, text)
    }

    /// Reorder one row of attribute words into visual order.
    pub fn reorder_words(&self, row: Range<usize>, words: &mut [u32]) -> EmberResult<()> {
        self.reorder(row, words)
    }

    /// Reorder one row of indices into visual order.
    pub fn reorder_indices(&self, row: Range<usize>, indices: &mut [usize]) -> EmberResult<()> {
        self.reorder(row, indices)
    }

    /// Visual position of logical position `index` within `row`. Positions outside the
    /// row are returned unchanged.
    pub fn reorder_index(&self, row: Range<usize>, index: usize) -> EmberResult<usize> {
        self.map_index(row, index, visual_index)
    }

    /// Logical position displayed at visual position `index` within `row`.
    pub fn reverse_reorder_index(&self, row: Range<usize>, index: usize) -> EmberResult<usize> {
        self.map_index(row, index, logical_index)
    }

    fn reorder<T>(&self, row: Range<usize>, payload: &mut [T]) -> EmberResult<()> {
        self.check_row(&row)?;
        if payload.len() != row.len() {
            return Err(EmberError::invalid(format!(
                "payload holds {} items for a row of {}",
                payload.len(),
                row.len()
            )));
        }
        if self.needs_bidi {
            reorder_by_levels(&self.row_levels(row), payload);
        }
        Ok(())
    }

    fn map_index(
        &self,
        row: Range<usize>,
        index: usize,
        map: fn(&[u8], usize) -> usize,
    ) -> EmberResult<usize> {
        self.check_row(&row)?;
        if !self.needs_bidi || !row.contains(&index) {
            return Ok(index);
        }
        let start = row.start;
        Ok(start + map(&self.row_levels(row), index - start))
    }

    fn row_levels(&self, row: Range<usize>) -> SmallVec<[u8; 128]> {
        self.chars[row].iter().map(|info| info.level).collect()
    }

    fn check_len(&self, len: usize, what: &str) -> EmberResult<()> {
        if len == self.chars.len() {
            Ok(())
        } else {
            Err(EmberError::invalid(format!(
                "{what} holds {len} items, context holds {}",
                self.chars.len()
            )))
        }
    }

    fn check_row(&self, row: &Range<usize>) -> EmberResult<()> {
        if row.start <= row.end && row.end <= self.chars.len() {
            Ok(())
        } else {
            Err(EmberError::invalid(format!(
                "row {}..{} outside 0..{}",
                row.start,
                row.end,
                self.chars.len()
            )))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bidi/context.rs"]
mod tests;
