//! Undo/Redo system for the BMF editor

use bmf_engine::Result;

use crate::{BmfUndoState, HistoryOutcome};

use super::BmfEditState;

impl BmfEditState {
    /// Get undo stack length
    pub fn undo_stack_len(&self) -> usize {
        self.history.undo_len()
    }

    /// Get redo stack length
    pub fn redo_stack_len(&self) -> usize {
        self.history.redo_len()
    }

    fn after_restore(&mut self, outcome: HistoryOutcome) -> HistoryOutcome {
        if outcome == HistoryOutcome::Applied {
            self.clamp_active_sequence();
            self.is_dirty = true;
        }
        outcome
    }
}

impl BmfUndoState for BmfEditState {
    fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> Result<HistoryOutcome> {
        let outcome = self.history.undo(&mut self.font)?;
        Ok(self.after_restore(outcome))
    }

    fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> Result<HistoryOutcome> {
        let outcome = self.history.redo(&mut self.font)?;
        Ok(self.after_restore(outcome))
    }
}
