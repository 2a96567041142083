//! Sequence importers: scalable fonts and glyph atlas images.

mod fontdue_engine;
mod options;
mod raster;
mod strip;

pub use fontdue_engine::{FontdueEngine, ONE_BIT_CUTOFF};
pub use options::*;
pub use raster::*;
pub use strip::*;
