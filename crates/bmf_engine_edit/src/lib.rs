#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::return_self_not_must_use
)]
//! Editing layer for BMF fonts
//!
//! Provides the model layer for bitmap font editing, including:
//! - `BmfEditState` - the session every mutation goes through
//! - `BmfHistory` - bounded snapshot based undo/redo
//! - `transform` - structural glyph transforms (width, bold, italic, shift, ...)

mod edit_state;
pub use edit_state::*;

mod history;
pub use history::*;

pub mod transform;
pub use transform::GlyphRange;

// Re-export the model types the edit API is expressed in
pub use bmf_engine::{BmfError, Font, FormatError, Glyph, Result, Sequence};
