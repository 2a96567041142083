//! Undo history for BMF editing
//!
//! Every entry is a full copy of the font's sequences taken before a
//! mutation. Both stacks are bounded; the oldest entry is dropped first.

use std::collections::VecDeque;

use bmf_engine::{Font, Result, Sequence};

/// Maximum number of entries on each stack.
pub const HISTORY_CAPACITY: usize = 50;

/// Result of an undo or redo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// A state was restored.
    Applied,
    /// The stack was empty, nothing changed.
    Empty,
}

/// Trait for types that support undo/redo operations
pub trait BmfUndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation
    fn undo(&mut self) -> Result<HistoryOutcome>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation
    fn redo(&mut self) -> Result<HistoryOutcome>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    description: String,
    sequences: Vec<Sequence>,
}

impl HistoryEntry {
    /// Deep copy of all sequences of `font`.
    pub fn capture(description: impl Into<String>, font: &Font) -> Self {
        Self {
            description: description.into(),
            sequences: font.sequences().to_vec(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }
}

#[derive(Debug, Clone)]
pub struct BmfHistory {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for BmfHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl BmfHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record the current state of `font` before it is mutated. Clears the redo stack.
    pub fn snapshot(&mut self, description: impl Into<String>, font: &Font) {
        self.push(HistoryEntry::capture(description, font));
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        push_bounded(&mut self.undo_stack, entry, self.capacity);
        self.redo_stack.clear();
    }

    /// Restore the most recent snapshot. The live state moves to the redo stack.
    pub fn undo(&mut self, font: &mut Font) -> Result<HistoryOutcome> {
        let Some(entry) = self.undo_stack.pop_back() else {
            log::info!("Nothing to undo");
            return Ok(HistoryOutcome::Empty);
        };
        let current = HistoryEntry::capture(entry.description.clone(), font);
        log::debug!("Undo: {}", entry.description);
        font.restore_sequences(entry.sequences)?;
        push_bounded(&mut self.redo_stack, current, self.capacity);
        Ok(HistoryOutcome::Applied)
    }

    /// Re-apply the most recently undone state. The live state moves to the undo stack.
    pub fn redo(&mut self, font: &mut Font) -> Result<HistoryOutcome> {
        let Some(entry) = self.redo_stack.pop_back() else {
            log::info!("Nothing to redo");
            return Ok(HistoryOutcome::Empty);
        };
        let current = HistoryEntry::capture(entry.description.clone(), font);
        log::debug!("Redo: {}", entry.description);
        font.restore_sequences(entry.sequences)?;
        push_bounded(&mut self.undo_stack, current, self.capacity);
        Ok(HistoryOutcome::Applied)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|e| e.description.clone())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.back().map(|e| e.description.clone())
    }
}

fn push_bounded(stack: &mut VecDeque<HistoryEntry>, entry: HistoryEntry, capacity: usize) {
    while stack.len() >= capacity {
        stack.pop_front();
    }
    stack.push_back(entry);
}
