//! Sequence management for the BMF editor
//!
//! Adding, removing and importing sequences is recorded in the history like
//! any glyph edit, so an import can be undone.

use bmf_engine::{BmfError, Glyph, Result, Sequence};

use super::BmfEditState;

/// Space width `fix_space_width` enforces by default.
pub const DEFAULT_MIN_SPACE_WIDTH: u8 = 4;

impl BmfEditState {
    /// Add an empty sequence and make it active
    pub fn add_sequence(&mut self, height: u8, baseline: u8, point_size: u8) -> Result<usize> {
        let sequence = Sequence::new(height, baseline, point_size)?;
        Ok(self.push_active_sequence("Add sequence", sequence))
    }

    /// Append an imported sequence and make it active
    pub fn import_sequence(&mut self, sequence: Sequence) -> usize {
        self.push_active_sequence("Import sequence", sequence)
    }

    fn push_active_sequence(&mut self, description: &str, sequence: Sequence) -> usize {
        self.record(description);
        let index = self.font.push_sequence(sequence);
        self.active_sequence = index;
        index
    }

    /// Append several sequences as one undoable step. The first new one becomes active.
    pub fn import_sequences(&mut self, sequences: Vec<Sequence>) -> Result<usize> {
        if sequences.is_empty() {
            return Err(BmfError::argument("nothing to import"));
        }
        self.record("Import sequences");
        let first = self.font.sequence_count();
        for sequence in sequences {
            self.font.push_sequence(sequence);
        }
        self.active_sequence = first;
        Ok(first)
    }

    /// Remove a sequence. The last remaining one cannot be removed.
    pub fn remove_sequence(&mut self, index: usize) -> Result<()> {
        if index >= self.font.sequence_count() {
            return Err(BmfError::argument(format!(
                "sequence index {index} out of range (font has {})",
                self.font.sequence_count()
            )));
        }
        if self.font.sequence_count() == 1 {
            return Err(BmfError::LastSequence);
        }
        self.record("Remove sequence");
        self.font.remove_sequence(index)?;
        self.clamp_active_sequence();
        Ok(())
    }

    /// Overwrite every other sequence with the glyphs of the active one.
    ///
    /// The targets take over height and baseline as well; their point size is kept.
    pub fn copy_sequence_to_all(&mut self) -> Result<()> {
        let source = self.active_sequence().clone();
        let active = self.active_sequence;
        self.record("Copy sequence to all");
        for (index, sequence) in self.font.sequences_mut().iter_mut().enumerate() {
            if index != active {
                sequence.copy_glyphs_from(&source);
            }
        }
        log::info!("Copied sequence {active} to {} sequences", self.font.sequence_count() - 1);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Metrics
    // ═══════════════════════════════════════════════════════════════════════

    /// Move the baseline of the active sequence, it must stay below the height
    pub fn set_baseline(&mut self, baseline: u8) -> Result<()> {
        let height = self.active_sequence().height();
        if baseline >= height {
            return Err(BmfError::argument(format!("baseline {baseline} must be below height {height}")));
        }
        self.record("Set baseline");
        self.active_sequence_mut().set_baseline(baseline)
    }

    /// Change the nominal point size of the active sequence
    pub fn set_point_size(&mut self, point_size: u8) -> Result<()> {
        if point_size == 0 {
            return Err(BmfError::argument("point size must be at least 1"));
        }
        self.record("Set point size");
        self.active_sequence_mut().set_point_size(point_size);
        Ok(())
    }

    /// In every sequence, widen a space glyph narrower than `min_width` to an empty glyph of that width
    pub fn fix_space_width(&mut self, min_width: u8) -> Result<usize> {
        if min_width == 0 {
            return Err(BmfError::argument("width must be at least 1"));
        }
        self.record("Fix space width");
        let mut fixed = 0;
        for sequence in self.font.sequences_mut() {
            if sequence.glyph(b' ').width() < min_width {
                sequence.modify_glyph(b' ', |space| Glyph::new(b' ', min_width, space.height()))?;
                fixed += 1;
            }
        }
        log::info!("Fixed space width in {fixed} sequences");
        Ok(fixed)
    }
}
