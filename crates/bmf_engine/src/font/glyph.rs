//! Packed 1-bit glyph bitmaps.
//!
//! A glyph stores its pixels in one flat buffer of `height * pitch` bytes.
//! Every row occupies `pitch = ceil(width / 8)` bytes with MSB-first bit
//! ordering:
//! - Bit 7 of the first byte = leftmost pixel
//! - Pixel `(x, y)` lives at bit index `y * pitch * 8 + x`
//!
//! Padding bits beyond `width` in the last byte of a row are always zero,
//! so the buffer can be written to a BMF stream verbatim.

use crate::{BmfError, Result};

/// Default width of an empty glyph.
pub const DEFAULT_GLYPH_WIDTH: u8 = 6;

/// Default width of an empty space glyph (codepoint 32).
pub const DEFAULT_SPACE_WIDTH: u8 = 8;

/// Bytes per bitmap row for a glyph of the given width.
#[inline]
pub const fn pitch_for_width(width: u8) -> usize {
    (width as usize).div_ceil(8)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    codepoint: u8,
    width: u8,
    height: u8,
    data: Vec<u8>,
}

impl Glyph {
    /// Create an all-zero glyph. Width and height are raised to at least 1.
    pub fn new(codepoint: u8, width: u8, height: u8) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            codepoint,
            width,
            height,
            data: vec![0; pitch_for_width(width) * height as usize],
        }
    }

    /// The glyph a freshly created sequence holds for `codepoint`.
    pub fn empty_default(codepoint: u8, height: u8) -> Self {
        let width = if codepoint == b' ' { DEFAULT_SPACE_WIDTH } else { DEFAULT_GLYPH_WIDTH };
        Self::new(codepoint, width, height)
    }

    /// Build a glyph by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(codepoint: u8, width: u8, height: u8, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut glyph = Self::new(codepoint, width, height);
        for y in 0..glyph.height as usize {
            for x in 0..glyph.width as usize {
                if f(x, y) {
                    glyph.set_pixel(x, y, true);
                }
            }
        }
        glyph
    }

    /// Build a glyph from `Vec<Vec<bool>>` rows (top row first).
    ///
    /// All rows must have the same, non-zero length.
    pub fn from_rows(codepoint: u8, rows: &[Vec<bool>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(BmfError::argument("glyph needs at least one row"));
        };
        let width = first.len();
        if rows.len() > u8::MAX as usize {
            return Err(BmfError::argument(format!("glyph height {} exceeds 255", rows.len())));
        }
        if width == 0 || width > u8::MAX as usize {
            return Err(BmfError::argument(format!("glyph width {width} must be 1-255")));
        }
        if let Some(y) = rows.iter().position(|row| row.len() != width) {
            return Err(BmfError::argument(format!("row {y} has length {} but width is {width}", rows[y].len())));
        }
        Ok(Self::from_fn(codepoint, width as u8, rows.len() as u8, |x, y| rows[y][x]))
    }

    /// Unpack rows stored with an arbitrary `pitch` (at least `ceil(width / 8)`).
    ///
    /// Only the first `width` bits of each row are kept; padding is discarded.
    pub fn from_packed(codepoint: u8, width: u8, height: u8, pitch: usize, bytes: &[u8]) -> Self {
        Self::from_fn(codepoint, width, height, |x, y| {
            bytes.get(y * pitch + x / 8).is_some_and(|b| b & (0x80 >> (x % 8)) != 0)
        })
    }

    pub fn codepoint(&self) -> u8 {
        self.codepoint
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn pitch(&self) -> usize {
        pitch_for_width(self.width)
    }

    /// Packed bitmap, `height * pitch` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Packed bytes of row `y`, empty if out of bounds.
    pub fn row_bytes(&self, y: usize) -> &[u8] {
        let pitch = self.pitch();
        self.data.get(y * pitch..(y + 1) * pitch).unwrap_or(&[])
    }

    /// Same glyph stored under another codepoint.
    pub fn with_codepoint(mut self, codepoint: u8) -> Self {
        self.codepoint = codepoint;
        self
    }

    #[inline]
    fn bit_position(&self, x: usize, y: usize) -> (usize, u8) {
        let bit = y * self.pitch() * 8 + x;
        (bit / 8, 0x80 >> (bit % 8))
    }

    /// Pixel value, `false` outside the bitmap.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width as usize || y >= self.height as usize {
            return false;
        }
        let (byte, mask) = self.bit_position(x, y);
        self.data[byte] & mask != 0
    }

    /// Set a pixel. Does nothing outside the bitmap.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width as usize || y >= self.height as usize {
            return;
        }
        let (byte, mask) = self.bit_position(x, y);
        if value {
            self.data[byte] |= mask;
        } else {
            self.data[byte] &= !mask;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row_bytes(y).iter().all(|&b| b == 0)
    }

    pub fn is_column_empty(&self, x: usize) -> bool {
        (0..self.height as usize).all(|y| !self.pixel(x, y))
    }

    /// Number of set pixels.
    pub fn count_pixels(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Convert to `Vec<Vec<bool>>` rows (top row first).
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height as usize)
            .map(|y| (0..self.width as usize).map(|x| self.pixel(x, y)).collect())
            .collect()
    }
}
