//! Internal helpers for BMF edit operations
//!
//! Operations validate and compute their result first, then call
//! `record` exactly once and commit.

use bmf_engine::{Glyph, Result, Sequence};

use crate::transform::GlyphRange;

use super::BmfEditState;

impl BmfEditState {
    /// Snapshot the current state and mark the font dirty
    pub(crate) fn record(&mut self, description: &str) {
        self.history.snapshot(description, &self.font);
        self.is_dirty = true;
    }

    pub(crate) fn active_sequence_mut(&mut self) -> &mut Sequence {
        let index = self.active_sequence;
        &mut self.font.sequences_mut()[index]
    }

    /// Keep the active index valid after the sequence list shrank
    pub(crate) fn clamp_active_sequence(&mut self) {
        let last = self.font.sequence_count().saturating_sub(1);
        self.active_sequence = self.active_sequence.min(last);
    }

    /// Replace each glyph of `range` in the active sequence with `f(glyph)`.
    ///
    /// If any glyph fails, nothing is recorded or changed.
    pub(crate) fn apply_to_range(&mut self, description: &str, range: GlyphRange, f: impl Fn(&Glyph) -> Result<Glyph>) -> Result<()> {
        let mut updated = self.active_sequence().clone();
        let glyphs = range.codepoints().map(|cp| f(updated.glyph(cp))).collect::<Result<Vec<_>>>()?;
        let count = glyphs.len();
        updated.replace_glyphs(glyphs)?;

        self.record(description);
        *self.active_sequence_mut() = updated;
        log::debug!("{description}: {count} glyphs in sequence {}", self.active_sequence);
        Ok(())
    }

    /// Replace a single glyph of the active sequence with `f(glyph)`.
    pub(crate) fn apply_to_glyph(&mut self, description: &str, codepoint: u8, f: impl FnOnce(&Glyph) -> Result<Glyph>) -> Result<()> {
        let mut updated = self.active_sequence().clone();
        let glyph = f(updated.glyph(codepoint))?;
        updated.set_glyph(codepoint, glyph)?;

        self.record(description);
        *self.active_sequence_mut() = updated;
        Ok(())
    }
}
