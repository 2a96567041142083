//! Scalable font to bitmap sequence conversion.
//!
//! The actual outline rendering is delegated to a [`FontEngine`]. This module
//! only derives the sequence metrics and per-glyph widths from what the engine
//! reports, and binarizes the coverage it renders.
//!
//! Coordinates used by the engine: `x = 0` is the pen origin, `y = 0` is the
//! top of the line (the ascent line), `y` grows downwards.

use crate::{BmfError, Glyph, RasterOptions, RenderMode, Result, Sequence};

/// String with ascenders and descenders used to estimate the line height.
pub const REFERENCE_TEXT: &str = "Agyjpq|";

/// The point sizes the "standard sizes" import produces.
pub const STANDARD_SIZES: [u8; 7] = [10, 12, 14, 16, 18, 24, 32];

/// Ascent and descent in pixels, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalMetrics {
    pub ascent: i32,
    pub descent: i32,
}

/// Ink bounding box of a rendered string, right/bottom exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageDepth {
    /// Pixels are either 0 or 255.
    OneBit,
    /// 8-bit anti-aliased coverage.
    Gray,
}

/// 8-bit coverage canvas a [`FontEngine`] renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl CoverageBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.data[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend `value` into the pixel at signed coordinates, clipping to the canvas.
    pub fn put(&mut self, x: i32, y: i32, value: u8) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.data[idx] = self.data[idx].max(value);
    }
}

/// A scalable font renderer.
pub trait FontEngine {
    /// Intrinsic ascent/descent at pixel size `px`, if the font provides them.
    fn vertical_metrics(&self, px: f32) -> Option<VerticalMetrics>;

    /// Ink bounds of `text` drawn at the origin.
    fn text_bounds(&self, text: &str, px: f32) -> TextBounds;

    /// Render `ch` with its pen origin at `(origin_x, 0)`.
    fn render_char(&self, ch: char, px: f32, origin_x: i32, depth: CoverageDepth, canvas: &mut CoverageBuffer) -> Result<()>;
}

/// Progress of a multi-size import, reported before each size is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportProgress {
    pub index: usize,
    pub total: usize,
    pub size: u8,
}

/// Height and baseline of a sequence rendered at `size`.
pub fn sequence_metrics(engine: &dyn FontEngine, size: u8) -> (u8, u8) {
    let px = f32::from(size);
    let (height, mut baseline) = if let Some(metrics) = engine.vertical_metrics(px) {
        (metrics.ascent + metrics.descent, metrics.ascent)
    } else {
        let mut height = engine.text_bounds(REFERENCE_TEXT, px).height();
        if height < 1 {
            height = i32::from(size);
        }
        (height, three_quarters(height))
    };

    if baseline < 1 {
        baseline = three_quarters(height);
    }
    if baseline >= height {
        baseline = height - 2;
    }

    let height = height.clamp(1, 255);
    let baseline = baseline.clamp(0, height - 1);
    (height as u8, baseline as u8)
}

fn three_quarters(height: i32) -> i32 {
    (height as f32 * 0.75).round() as i32
}

/// Rasterize all 256 codepoints at `size` into a new sequence.
///
/// A glyph the engine fails to render is replaced by an empty glyph of the
/// computed width.
pub fn rasterize_sequence(engine: &dyn FontEngine, size: u8, options: &RasterOptions) -> Result<Sequence> {
    if size == 0 {
        return Err(BmfError::argument("point size must be at least 1"));
    }
    let (height, baseline) = sequence_metrics(engine, size);
    log::info!("Rasterizing size {size}: height {height}, baseline {baseline}");

    let mut substituted = 0;
    let glyphs: [Glyph; 256] = std::array::from_fn(|cp| {
        let cp = cp as u8;
        rasterize_glyph(engine, cp, size, height, options).unwrap_or_else(|(width, err)| {
            log::warn!("Substituting empty glyph for codepoint {cp}: {err}");
            substituted += 1;
            Glyph::new(cp, width, height)
        })
    });
    if substituted > 0 {
        log::info!("Size {size}: {substituted} glyphs substituted");
    }
    Sequence::from_glyphs(height, baseline, size, glyphs)
}

/// On failure returns the computed width along with the error so the caller can substitute.
fn rasterize_glyph(engine: &dyn FontEngine, cp: u8, size: u8, height: u8, options: &RasterOptions) -> std::result::Result<Glyph, (u8, BmfError)> {
    let px = f32::from(size);
    let ch = char::from(cp);
    let bounds = engine.text_bounds(ch.encode_utf8(&mut [0; 4]), px);

    let mut width = bounds.width().max(1);
    if cp == b' ' {
        width = width.max(i32::from(size) / 3);
    }
    let (padding, origin_x) = if options.bearing_padding {
        let padding = bounds.left.max(0) + 1;
        (padding, padding - bounds.left)
    } else {
        (0, 0)
    };
    let total_width = (width + padding).clamp(1, 255) as u8;

    let depth = match options.mode {
        RenderMode::OneBit => CoverageDepth::OneBit,
        RenderMode::Threshold => CoverageDepth::Gray,
    };
    let mut canvas = CoverageBuffer::new(total_width as usize, height as usize);
    engine
        .render_char(ch, px, origin_x, depth, &mut canvas)
        .map_err(|err| (total_width, err))?;

    Ok(Glyph::from_fn(cp, total_width, height, |x, y| options.is_set(canvas.get(x, y))))
}

/// Rasterize several sizes in order, calling `progress` before each one.
///
/// All sizes are validated before the first one is rendered.
pub fn rasterize_sizes(
    engine: &dyn FontEngine,
    sizes: &[u8],
    options: &RasterOptions,
    mut progress: impl FnMut(ImportProgress),
) -> Result<Vec<Sequence>> {
    if sizes.is_empty() {
        return Err(BmfError::argument("no sizes given"));
    }
    if sizes.contains(&0) {
        return Err(BmfError::argument("point size must be at least 1"));
    }
    let total = sizes.len();
    let mut sequences = Vec::with_capacity(total);
    for (index, &size) in sizes.iter().enumerate() {
        progress(ImportProgress { index, total, size });
        sequences.push(rasterize_sequence(engine, size, options)?);
    }
    Ok(sequences)
}
