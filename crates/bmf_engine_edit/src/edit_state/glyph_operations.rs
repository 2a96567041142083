//! Glyph-level operations for the BMF editor
//!
//! Operations on single glyphs of the active sequence:
//! - Pixel editing (set_pixel, toggle_pixel)
//! - Clear glyph
//! - Clone glyph
//! - Resize glyph width

use bmf_engine::{Glyph, Result};

use crate::transform;

use super::BmfEditState;

impl BmfEditState {
    fn in_bounds(&self, codepoint: u8, x: i32, y: i32) -> bool {
        let glyph = self.glyph(codepoint);
        x >= 0 && y >= 0 && x < i32::from(glyph.width()) && y < i32::from(glyph.height())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pixel Editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Set a single pixel value. Out of bounds coordinates are ignored.
    pub fn set_pixel(&mut self, codepoint: u8, x: i32, y: i32, value: bool) -> Result<()> {
        if !self.in_bounds(codepoint, x, y) {
            return Ok(());
        }
        self.apply_to_glyph("Edit pixel", codepoint, |g| {
            let mut glyph = g.clone();
            glyph.set_pixel(x as usize, y as usize, value);
            Ok(glyph)
        })
    }

    /// Toggle a single pixel (flip its value)
    pub fn toggle_pixel(&mut self, codepoint: u8, x: i32, y: i32) -> Result<()> {
        if !self.in_bounds(codepoint, x, y) {
            return Ok(());
        }
        let current = self.glyph(codepoint).pixel(x as usize, y as usize);
        self.set_pixel(codepoint, x, y, !current)
    }

    /// Clear glyph (set all pixels to off)
    pub fn clear_glyph(&mut self, codepoint: u8) -> Result<()> {
        self.apply_to_glyph("Clear glyph", codepoint, |g| Ok(Glyph::new(g.codepoint(), g.width(), g.height())))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Copy & Resize
    // ═══════════════════════════════════════════════════════════════════════

    /// Copy width and pixels of `source` over `target`
    pub fn clone_glyph(&mut self, source: u8, target: u8) -> Result<()> {
        let copy = self.glyph(source).clone().with_codepoint(target);
        self.apply_to_glyph("Clone glyph", target, |_| Ok(copy))
    }

    /// Pad or truncate one glyph to `width` columns
    pub fn resize_glyph_width(&mut self, codepoint: u8, width: u8) -> Result<()> {
        self.apply_to_glyph("Resize glyph", codepoint, |g| transform::set_width(g, width))
    }
}
