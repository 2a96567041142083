//! BMF font data model.
//!
//! A [`Font`] owns an ordered list of [`Sequence`]s (the "size index"), each
//! sequence owns exactly 256 [`Glyph`]s. A font always has at least one
//! sequence.

mod glyph;
mod sequence;

use std::path::Path;

pub use glyph::*;
pub use sequence::*;

use crate::{formats, BmfError, Result};

/// Longest name the BMF header can hold, in bytes.
pub const MAX_NAME_LEN: usize = 28;

/// Height of the sequence a new font starts with.
pub const DEFAULT_SEQUENCE_HEIGHT: u8 = 16;
/// Baseline of the sequence a new font starts with.
pub const DEFAULT_SEQUENCE_BASELINE: u8 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    name: String,
    version: u8,
    flags: u8,
    sequences: Vec<Sequence>,
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl Font {
    /// Create a font with one empty 16px sequence.
    ///
    /// Non-ASCII characters are dropped from `name` and it is cut to 28 bytes.
    pub fn new(name: impl Into<String>) -> Self {
        let sequence = Sequence::blank(DEFAULT_SEQUENCE_HEIGHT, DEFAULT_SEQUENCE_BASELINE, DEFAULT_SEQUENCE_HEIGHT);
        Self::with_sequence(name, sequence)
    }

    /// Create a font holding a single, usually imported, sequence.
    pub fn with_sequence(name: impl Into<String>, sequence: Sequence) -> Self {
        Self {
            name: header_name(&name.into()),
            version: formats::bmf::BMF_VERSION,
            flags: 0,
            sequences: vec![sequence],
        }
    }

    /// Create a font from a non-empty list of sequences.
    pub fn from_sequences(name: impl Into<String>, sequences: Vec<Sequence>) -> Result<Self> {
        if sequences.is_empty() {
            return Err(BmfError::argument("a font needs at least one sequence"));
        }
        Ok(Self {
            name: header_name(&name.into()),
            version: formats::bmf::BMF_VERSION,
            flags: 0,
            sequences,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the font. Unlike the constructors this fails if the ASCII part of `name` exceeds 28 bytes.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let name = ascii_only(name);
        if name.len() > MAX_NAME_LEN {
            return Err(BmfError::argument(format!("font name '{name}' exceeds {MAX_NAME_LEN} bytes")));
        }
        self.name = name;
        Ok(())
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub(crate) fn set_header(&mut self, version: u8, flags: u8) {
        self.version = version;
        self.flags = flags;
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Mutable access to the sequences. The list itself cannot grow or shrink through it.
    pub fn sequences_mut(&mut self) -> &mut [Sequence] {
        &mut self.sequences
    }

    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    pub fn sequence(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    pub fn sequence_mut(&mut self, index: usize) -> Option<&mut Sequence> {
        self.sequences.get_mut(index)
    }

    /// Append a sequence and return its index.
    pub fn push_sequence(&mut self, sequence: Sequence) -> usize {
        self.sequences.push(sequence);
        self.sequences.len() - 1
    }

    /// Remove the sequence at `index`. The last remaining sequence cannot be removed.
    pub fn remove_sequence(&mut self, index: usize) -> Result<Sequence> {
        if index >= self.sequences.len() {
            return Err(BmfError::argument(format!(
                "sequence index {index} out of range (font has {})",
                self.sequences.len()
            )));
        }
        if self.sequences.len() == 1 {
            return Err(BmfError::LastSequence);
        }
        Ok(self.sequences.remove(index))
    }

    /// Replace the whole sequence list, e.g. when restoring a history entry.
    pub fn restore_sequences(&mut self, sequences: Vec<Sequence>) -> Result<()> {
        if sequences.is_empty() {
            return Err(BmfError::argument("a font needs at least one sequence"));
        }
        self.sequences = sequences;
        Ok(())
    }

    /// First sequence imported at `point_size`.
    pub fn sequence_for_point_size(&self, point_size: u8) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.point_size() == point_size)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // I/O
    // ═══════════════════════════════════════════════════════════════════════

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        formats::bmf::decode(data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        formats::bmf::encode(self)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = self.to_bytes()?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

fn ascii_only(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii() && *c != '\0').collect()
}

/// ASCII part of `name`, cut to the header field.
fn header_name(name: &str) -> String {
    let mut name = ascii_only(name);
    name.truncate(MAX_NAME_LEN);
    name
}
