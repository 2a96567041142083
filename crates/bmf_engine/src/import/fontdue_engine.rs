//! [`FontEngine`] backed by fontdue.

use std::path::Path;

use crate::{BmfError, CoverageBuffer, CoverageDepth, FontEngine, Result, TextBounds, VerticalMetrics};

/// Coverage at or above this value counts as ink in [`RenderMode::OneBit`](crate::RenderMode::OneBit).
pub const ONE_BIT_CUTOFF: u8 = 128;

pub struct FontdueEngine {
    font: fontdue::Font,
}

impl FontdueEngine {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).map_err(|e| BmfError::FontLoad { message: e.to_string() })?;
        Ok(Self { font })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let engine = Self::from_bytes(&data)?;
        log::debug!("Loaded {} ({} glyphs)", path.display(), engine.font.glyph_count());
        Ok(engine)
    }

    /// Distance from the top of the line to the baseline.
    fn ascent(&self, px: f32) -> i32 {
        self.font.horizontal_line_metrics(px).map_or(px, |m| m.ascent).round() as i32
    }
}

impl FontEngine for FontdueEngine {
    fn vertical_metrics(&self, px: f32) -> Option<VerticalMetrics> {
        self.font.horizontal_line_metrics(px).map(|m| VerticalMetrics {
            ascent: m.ascent.round() as i32,
            descent: (-m.descent).round() as i32,
        })
    }

    fn text_bounds(&self, text: &str, px: f32) -> TextBounds {
        let ascent = self.ascent(px);
        let mut pen = 0.0f32;
        let mut bounds: Option<TextBounds> = None;

        for ch in text.chars() {
            let metrics = self.font.metrics(ch, px);
            if metrics.width > 0 && metrics.height > 0 {
                let left = pen.round() as i32 + metrics.xmin;
                let bottom = ascent - metrics.ymin;
                let glyph = TextBounds {
                    left,
                    top: bottom - metrics.height as i32,
                    right: left + metrics.width as i32,
                    bottom,
                };
                bounds = Some(match bounds {
                    Some(b) => TextBounds {
                        left: b.left.min(glyph.left),
                        top: b.top.min(glyph.top),
                        right: b.right.max(glyph.right),
                        bottom: b.bottom.max(glyph.bottom),
                    },
                    None => glyph,
                });
            }
            pen += metrics.advance_width;
        }

        // no ink (e.g. space): the box spans the advance width
        bounds.unwrap_or(TextBounds {
            left: 0,
            top: 0,
            right: pen.round() as i32,
            bottom: 0,
        })
    }

    fn render_char(&self, ch: char, px: f32, origin_x: i32, depth: CoverageDepth, canvas: &mut CoverageBuffer) -> Result<()> {
        if self.font.lookup_glyph_index(ch) == 0 {
            return Err(BmfError::rasterization(u8::try_from(ch).unwrap_or(b'?'), "character not in font"));
        }
        let (metrics, bitmap) = self.font.rasterize(ch, px);
        let left = origin_x + metrics.xmin;
        let top = self.ascent(px) - metrics.ymin - metrics.height as i32;

        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let coverage = bitmap[gy * metrics.width + gx];
                let value = match depth {
                    CoverageDepth::OneBit if coverage >= ONE_BIT_CUTOFF => 255,
                    CoverageDepth::OneBit => 0,
                    CoverageDepth::Gray => coverage,
                };
                canvas.put(left + gx as i32, top + gy as i32, value);
            }
        }
        Ok(())
    }
}
