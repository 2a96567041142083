#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::return_self_not_must_use
)]
//! Model, codec and importers for BMF bitmap fonts.

mod error;
pub use error::*;

mod font;
pub use font::*;

pub mod formats;

pub mod import;
pub use import::*;

mod text;
pub use text::*;
