//! BMF Edit State
//!
//! The session object every font mutation goes through. It owns the font,
//! the undo history and the index of the active sequence.
//!
//! ## Undo/Redo System
//!
//! - Every mutating call takes exactly one snapshot before it changes anything
//! - Arguments are validated first; a rejected call leaves font and history untouched
//! - Undo/redo restore the sequence list only, the font name is not part of history
//! - The dirty flag tracks if the font has unsaved changes

use std::path::{Path, PathBuf};

use bmf_engine::{BmfError, Font, Glyph, Result, Sequence};

use crate::BmfHistory;

pub struct BmfEditState {
    /// The font being edited
    pub(crate) font: Font,

    /// Snapshots for undo/redo
    pub(crate) history: BmfHistory,

    /// Index of the sequence glyph operations apply to
    pub(crate) active_sequence: usize,

    /// File path (if loaded from/saved to file)
    pub(crate) file_path: Option<PathBuf>,

    /// Whether the font has been modified since last save
    pub(crate) is_dirty: bool,
}

impl Default for BmfEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl BmfEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a state with a new font holding one empty 16px sequence
    pub fn new() -> Self {
        Self::from_font(Font::default())
    }

    pub fn from_font(font: Font) -> Self {
        Self {
            font,
            history: BmfHistory::new(),
            active_sequence: 0,
            file_path: None,
            is_dirty: false,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let font = Font::load(path)?;
        log::info!("Loaded '{}' with {} sequences from {}", font.name(), font.sequence_count(), path.display());
        let mut state = Self::from_font(font);
        state.file_path = Some(path.to_path_buf());
        Ok(state)
    }

    /// Save to the file the font was loaded from or last saved to
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.file_path.clone() else {
            return Err(BmfError::argument("no file path set"));
        };
        self.save_as(path)
    }

    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.font.save(path)?;
        log::info!("Saved '{}' to {}", self.font.name(), path.display());
        self.file_path = Some(path.to_path_buf());
        self.mark_clean();
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn history(&self) -> &BmfHistory {
        &self.history
    }

    pub fn active_sequence_index(&self) -> usize {
        self.active_sequence
    }

    pub fn active_sequence(&self) -> &Sequence {
        &self.font.sequences()[self.active_sequence]
    }

    /// Glyph of the active sequence
    pub fn glyph(&self, codepoint: u8) -> &Glyph {
        self.active_sequence().glyph(codepoint)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Setters
    // ═══════════════════════════════════════════════════════════════════════

    /// Select the sequence glyph operations apply to
    pub fn set_active_sequence(&mut self, index: usize) -> Result<()> {
        if index >= self.font.sequence_count() {
            return Err(BmfError::argument(format!(
                "sequence index {index} out of range (font has {})",
                self.font.sequence_count()
            )));
        }
        self.active_sequence = index;
        Ok(())
    }

    /// Rename the font. Not recorded in the history.
    pub fn set_font_name(&mut self, name: &str) -> Result<()> {
        self.font.set_name(name)?;
        self.is_dirty = true;
        Ok(())
    }
}
