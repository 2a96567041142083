//! Batch transforms over a codepoint range of the active sequence
//!
//! Each call validates its arguments, computes all new glyphs, records one
//! snapshot and commits. Codepoints outside 0-255 are skipped.

use bmf_engine::{BmfError, Result};

use crate::transform::{self, GlyphRange};

use super::BmfEditState;

fn check_width(width: u8) -> Result<()> {
    if width == 0 {
        return Err(BmfError::argument("width must be at least 1"));
    }
    Ok(())
}

impl BmfEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Width
    // ═══════════════════════════════════════════════════════════════════════

    /// Pad or truncate every glyph to exactly `width` columns
    pub fn set_fixed_width(&mut self, range: GlyphRange, width: u8) -> Result<()> {
        check_width(width)?;
        self.apply_to_range("Set fixed width", range, |g| transform::set_width(g, width))
    }

    /// Pad glyphs narrower than `width`
    pub fn enforce_min_width(&mut self, range: GlyphRange, width: u8) -> Result<()> {
        check_width(width)?;
        self.apply_to_range("Enforce minimum width", range, |g| transform::pad_to_min(g, width))
    }

    /// Truncate glyphs wider than `width`
    pub fn enforce_max_width(&mut self, range: GlyphRange, width: u8) -> Result<()> {
        check_width(width)?;
        self.apply_to_range("Enforce maximum width", range, |g| transform::truncate_to_max(g, width))
    }

    pub fn add_margins(&mut self, range: GlyphRange, left: u8, right: u8) -> Result<()> {
        self.apply_to_range("Add margins", range, |g| transform::add_margins(g, left, right))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Trimming
    // ═══════════════════════════════════════════════════════════════════════

    /// Remove empty columns on both sides of each glyph
    pub fn trim_horizontal(&mut self, range: GlyphRange) -> Result<()> {
        self.apply_to_range("Trim", range, |g| Ok(transform::trim_horizontal(g)))
    }

    /// Re-center each glyph's ink vertically inside the cell
    pub fn center_vertical(&mut self, range: GlyphRange) -> Result<()> {
        let height = self.active_sequence().height();
        self.apply_to_range("Center vertically", range, |g| {
            Ok(transform::center_vertical(&transform::trim_vertical(g), height))
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Style
    // ═══════════════════════════════════════════════════════════════════════

    pub fn bold(&mut self, range: GlyphRange) -> Result<()> {
        self.apply_to_range("Bold", range, transform::bold)
    }

    /// Slant glyphs to the right, `slant == 0` keeps them as they are
    pub fn italic(&mut self, range: GlyphRange, slant: u8) -> Result<()> {
        self.apply_to_range("Italic", range, |g| transform::italic(g, slant))
    }

    pub fn invert(&mut self, range: GlyphRange) -> Result<()> {
        self.apply_to_range("Invert", range, |g| Ok(transform::invert(g)))
    }

    /// Shift pixels with wrap-around, glyph sizes stay the same
    pub fn shift(&mut self, range: GlyphRange, dx: i32, dy: i32) -> Result<()> {
        self.apply_to_range("Shift", range, |g| Ok(transform::shift(g, dx, dy)))
    }
}
