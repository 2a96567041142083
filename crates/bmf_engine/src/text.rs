//! Text measuring and rendering with a single sequence.
//!
//! Text is interpreted as Latin-1: every `char` up to U+00FF selects the glyph
//! with the same codepoint, anything above is skipped.

use crate::{Glyph, Sequence};

/// Extra vertical space between two lines of rendered text.
pub const LINE_GAP: usize = 2;

/// Tab stops are this many space widths apart.
pub const TAB_SPACES: usize = 4;

/// A 1-bit canvas holding rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl TextCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = true;
        }
    }

    fn draw_glyph(&mut self, glyph: &Glyph, left: usize, top: usize) {
        for y in 0..glyph.height() as usize {
            for x in 0..glyph.width() as usize {
                if glyph.pixel(x, y) {
                    self.set(left + x, top + y);
                }
            }
        }
    }

    /// `#` for set pixels, `.` for clear ones, one line per row.
    pub fn ascii_art(&self) -> String {
        let mut result = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                result.push(if self.pixel(x, y) { '#' } else { '.' });
            }
            result.push('\n');
        }
        result
    }
}

fn latin1(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars().filter_map(|ch| u8::try_from(ch).ok())
}

struct Placement {
    codepoint: u8,
    x: usize,
    line: usize,
}

impl Sequence {
    /// Width of `text` in pixels: every glyph counts its width plus one.
    pub fn measure_text(&self, text: &str) -> usize {
        latin1(text).map(|cp| self.glyph(cp).width() as usize + 1).sum()
    }

    /// Width of one tab stop.
    pub fn tab_width(&self) -> usize {
        self.glyph(b' ').width() as usize * TAB_SPACES
    }

    /// Render `text` into a canvas just large enough to hold it.
    ///
    /// Glyphs advance by their width, `\n` starts a new line `height + 2` pixels
    /// further down and `\t` jumps to the next tab stop.
    pub fn render_text(&self, text: &str) -> TextCanvas {
        let tab = self.tab_width();
        let mut placements = Vec::new();
        let mut x = 0;
        let mut line = 0;
        let mut width = 0;

        for cp in latin1(text) {
            match cp {
                b'\n' => {
                    x = 0;
                    line += 1;
                }
                b'\t' => x = (x + tab) / tab * tab,
                _ => {
                    placements.push(Placement { codepoint: cp, x, line });
                    x += self.glyph(cp).width() as usize;
                }
            }
            width = width.max(x);
        }

        let line_height = self.height() as usize;
        let height = (line + 1) * line_height + line * LINE_GAP;
        let mut canvas = TextCanvas::new(width, height);
        for p in placements {
            canvas.draw_glyph(self.glyph(p.codepoint), p.x, p.line * (line_height + LINE_GAP));
        }
        canvas
    }
}
