//! Import of a 16x16 glyph atlas ("strip") image.

use std::path::Path;

use crate::{BmfError, Glyph, Result, Sequence};

/// Cells per atlas row and column.
pub const GRID_SIZE: u32 = 16;

/// Luma at or above this value is a set pixel.
const LUMA_CUTOFF: u8 = 128;

/// Raw 1-bit image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoImage {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl MonoImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut image = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.set_pixel(x, y, f(x, y));
            }
        }
        image
    }

    /// Convert without dithering: luma >= 128 is set.
    pub fn from_dynamic_image(image: &image::DynamicImage) -> Self {
        let luma = image.to_luma8();
        Self::from_fn(luma.width(), luma.height(), |x, y| luma.get_pixel(x, y).0[0] >= LUMA_CUTOFF)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path)?;
        Ok(Self::from_dynamic_image(&image))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.pixels[(y * self.width + x) as usize]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = value;
        }
    }
}

/// Cut a 16x16 grid of `glyph_width` x `glyph_height` cells out of `image`.
///
/// Codepoint `row * 16 + column` comes from the cell at that grid position.
/// The sequence gets `point_size = glyph_height` and `baseline = glyph_height - 2`.
pub fn import_strip(image: &MonoImage, glyph_width: u8, glyph_height: u8) -> Result<Sequence> {
    if glyph_width == 0 || glyph_height == 0 {
        return Err(BmfError::argument(format!("glyph size {glyph_width}x{glyph_height} must be at least 1x1")));
    }
    let needed_width = GRID_SIZE * u32::from(glyph_width);
    let needed_height = GRID_SIZE * u32::from(glyph_height);
    if image.width() < needed_width || image.height() < needed_height {
        return Err(BmfError::argument(format!(
            "image is {}x{}, a {glyph_width}x{glyph_height} grid needs at least {needed_width}x{needed_height}",
            image.width(),
            image.height()
        )));
    }

    let glyphs: [Glyph; 256] = std::array::from_fn(|cp| {
        let cell_x = (cp as u32 % GRID_SIZE) * u32::from(glyph_width);
        let cell_y = (cp as u32 / GRID_SIZE) * u32::from(glyph_height);
        Glyph::from_fn(cp as u8, glyph_width, glyph_height, |x, y| image.pixel(cell_x + x as u32, cell_y + y as u32))
    });

    let baseline = glyph_height.saturating_sub(2);
    log::info!("Imported {glyph_width}x{glyph_height} strip, baseline {baseline}");
    Sequence::from_glyphs(glyph_height, baseline, glyph_height, glyphs)
}
