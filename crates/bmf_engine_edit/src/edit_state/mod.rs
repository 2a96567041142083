//! BMF edit state module structure
//!
//! Split into multiple files matching the test structure:
//! - `state.rs` - Struct definition, constructors, getters, file I/O
//! - `glyph_operations.rs` - Single glyph operations (pixel, clear, clone, width)
//! - `transform_operations.rs` - Batch transforms over a codepoint range
//! - `sequence_operations.rs` - Sequence management and imports
//! - `undo.rs` - Undo/redo system
//! - `internal.rs` - Snapshot and commit helpers

mod state;

mod glyph_operations;
mod internal;
mod sequence_operations;
mod transform_operations;
mod undo;

pub use sequence_operations::DEFAULT_MIN_SPACE_WIDTH;
pub use state::BmfEditState;
