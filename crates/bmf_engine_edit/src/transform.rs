//! Structural glyph transforms.
//!
//! Every transform takes a glyph by reference and returns a new one; the edit
//! state decides where the result is stored. `trim_vertical` and
//! `center_vertical` change the row count, so their results only fit back into
//! a sequence once the height matches again.

use bmf_engine::{BmfError, Glyph, Result};

/// Inclusive codepoint range. Codepoints outside 0-255 are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRange {
    start: i32,
    end: i32,
}

impl GlyphRange {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(BmfError::argument(format!("range start {start} is after end {end}")));
        }
        Ok(Self { start, end })
    }

    pub fn all() -> Self {
        Self { start: 0, end: 255 }
    }

    pub fn single(codepoint: u8) -> Self {
        Self {
            start: i32::from(codepoint),
            end: i32::from(codepoint),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// The valid codepoints of the range, ascending.
    pub fn codepoints(&self) -> impl Iterator<Item = u8> {
        (self.start.max(0)..=self.end.min(255)).map(|cp| cp as u8)
    }
}

impl From<u8> for GlyphRange {
    fn from(codepoint: u8) -> Self {
        Self::single(codepoint)
    }
}

fn check_width(width: usize) -> Result<u8> {
    match u8::try_from(width) {
        Ok(w) if w >= 1 => Ok(w),
        _ => Err(BmfError::argument(format!("glyph width {width} must be 1-255"))),
    }
}

/// Pad or cut trailing columns so the glyph is exactly `width` wide.
pub fn set_width(glyph: &Glyph, width: u8) -> Result<Glyph> {
    let width = check_width(width as usize)?;
    Ok(Glyph::from_fn(glyph.codepoint(), width, glyph.height(), |x, y| glyph.pixel(x, y)))
}

/// Pad glyphs narrower than `width`.
pub fn pad_to_min(glyph: &Glyph, width: u8) -> Result<Glyph> {
    if glyph.width() < width {
        set_width(glyph, width)
    } else {
        Ok(glyph.clone())
    }
}

/// Cut glyphs wider than `width`.
pub fn truncate_to_max(glyph: &Glyph, width: u8) -> Result<Glyph> {
    if glyph.width() > width {
        set_width(glyph, width)
    } else {
        Ok(glyph.clone())
    }
}

/// Add empty columns on both sides.
pub fn add_margins(glyph: &Glyph, left: u8, right: u8) -> Result<Glyph> {
    let width = check_width(glyph.width() as usize + left as usize + right as usize)?;
    let left = left as usize;
    Ok(Glyph::from_fn(glyph.codepoint(), width, glyph.height(), |x, y| {
        x >= left && glyph.pixel(x - left, y)
    }))
}

/// Drop empty leading and trailing columns. An empty glyph keeps its last column.
pub fn trim_horizontal(glyph: &Glyph) -> Glyph {
    let width = glyph.width() as usize;
    let Some(first) = (0..width).find(|&x| !glyph.is_column_empty(x)) else {
        return Glyph::from_fn(glyph.codepoint(), 1, glyph.height(), |x, y| glyph.pixel(width - 1 + x, y));
    };
    let last = (0..width).rev().find(|&x| !glyph.is_column_empty(x)).unwrap_or(first);
    Glyph::from_fn(glyph.codepoint(), (last - first + 1) as u8, glyph.height(), |x, y| glyph.pixel(first + x, y))
}

/// Drop empty leading and trailing rows. An empty glyph keeps its last row.
pub fn trim_vertical(glyph: &Glyph) -> Glyph {
    let height = glyph.height() as usize;
    let Some(first) = (0..height).find(|&y| !glyph.is_row_empty(y)) else {
        return Glyph::from_fn(glyph.codepoint(), glyph.width(), 1, |x, y| glyph.pixel(x, height - 1 + y));
    };
    let last = (0..height).rev().find(|&y| !glyph.is_row_empty(y)).unwrap_or(first);
    Glyph::from_fn(glyph.codepoint(), glyph.width(), (last - first + 1) as u8, |x, y| glyph.pixel(x, first + y))
}

/// Pad with empty rows up to `target_height`, the odd row goes to the bottom.
///
/// Glyphs already at least `target_height` rows high are returned unchanged.
pub fn center_vertical(glyph: &Glyph, target_height: u8) -> Glyph {
    if glyph.height() >= target_height {
        return glyph.clone();
    }
    let top = ((target_height - glyph.height()) / 2) as usize;
    Glyph::from_fn(glyph.codepoint(), glyph.width(), target_height, |x, y| y >= top && glyph.pixel(x, y - top))
}

/// Smear every row one pixel to the right and widen the glyph by one column.
pub fn bold(glyph: &Glyph) -> Result<Glyph> {
    let width = glyph.width() as usize;
    let new_width = check_width(width + 1)?;
    Ok(Glyph::from_fn(glyph.codepoint(), new_width, glyph.height(), |x, y| {
        glyph.pixel(x, y) || (x >= 1 && x - 1 < width - 1 && glyph.pixel(x - 1, y))
    }))
}

/// Slant the glyph to the right: row `y` moves by `(height - 1 - y) * slant / height`.
///
/// A slant of 0 leaves the glyph unchanged.
pub fn italic(glyph: &Glyph, slant: u8) -> Result<Glyph> {
    if slant == 0 {
        return Ok(glyph.clone());
    }
    let new_width = check_width(glyph.width() as usize + slant as usize)?;
    let height = glyph.height() as usize;
    Ok(Glyph::from_fn(glyph.codepoint(), new_width, glyph.height(), |x, y| {
        let offset = (height - 1 - y) * slant as usize / height;
        x >= offset && glyph.pixel(x - offset, y)
    }))
}

pub fn invert(glyph: &Glyph) -> Glyph {
    Glyph::from_fn(glyph.codepoint(), glyph.width(), glyph.height(), |x, y| !glyph.pixel(x, y))
}

/// Move all pixels by `(dx, dy)`, wrapping around the edges.
pub fn shift(glyph: &Glyph, dx: i32, dy: i32) -> Glyph {
    let width = i32::from(glyph.width());
    let height = i32::from(glyph.height());
    Glyph::from_fn(glyph.codepoint(), glyph.width(), glyph.height(), |x, y| {
        let src_x = (x as i32 - dx).rem_euclid(width);
        let src_y = (y as i32 - dy).rem_euclid(height);
        glyph.pixel(src_x as usize, src_y as usize)
    })
}
