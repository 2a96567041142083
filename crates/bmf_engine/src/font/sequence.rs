use crate::{BmfError, Glyph, Result};

/// Number of glyphs in every sequence, one per codepoint 0-255.
pub const GLYPH_COUNT: usize = 256;

/// One complete 256-glyph set rendered at a single pixel size.
///
/// Every glyph's row count equals `height`; `baseline < height` always.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    height: u8,
    baseline: u8,
    point_size: u8,
    glyphs: [Glyph; GLYPH_COUNT],
}

impl Sequence {
    /// Create a sequence of empty default glyphs.
    pub fn new(height: u8, baseline: u8, point_size: u8) -> Result<Self> {
        validate_metrics(height, baseline)?;
        Ok(Self::blank(height, baseline, point_size))
    }

    /// Unchecked constructor for metrics validated by the caller.
    pub(crate) fn blank(height: u8, baseline: u8, point_size: u8) -> Self {
        Self {
            height,
            baseline,
            point_size,
            glyphs: std::array::from_fn(|cp| Glyph::empty_default(cp as u8, height)),
        }
    }

    /// Create a sequence from a full glyph array. Glyph `i` is stored under codepoint `i`.
    pub fn from_glyphs(height: u8, baseline: u8, point_size: u8, glyphs: [Glyph; GLYPH_COUNT]) -> Result<Self> {
        validate_metrics(height, baseline)?;
        if let Some(bad) = glyphs.iter().find(|g| g.height() != height) {
            return Err(BmfError::argument(format!(
                "glyph {} has {} rows, sequence height is {height}",
                bad.codepoint(),
                bad.height()
            )));
        }
        let mut cp = 0u8;
        let glyphs = glyphs.map(|g| {
            let g = g.with_codepoint(cp);
            cp = cp.wrapping_add(1);
            g
        });
        Ok(Self {
            height,
            baseline,
            point_size,
            glyphs,
        })
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn baseline(&self) -> u8 {
        self.baseline
    }

    pub fn point_size(&self) -> u8 {
        self.point_size
    }

    pub fn set_baseline(&mut self, baseline: u8) -> Result<()> {
        validate_metrics(self.height, baseline)?;
        self.baseline = baseline;
        Ok(())
    }

    pub fn set_point_size(&mut self, point_size: u8) {
        self.point_size = point_size;
    }

    pub fn glyph(&self, codepoint: u8) -> &Glyph {
        &self.glyphs[codepoint as usize]
    }

    pub fn glyphs(&self) -> &[Glyph; GLYPH_COUNT] {
        &self.glyphs
    }

    /// Store `glyph` under `codepoint`. The glyph's row count must match the sequence height.
    pub fn set_glyph(&mut self, codepoint: u8, glyph: Glyph) -> Result<()> {
        self.check_height(&glyph)?;
        self.glyphs[codepoint as usize] = glyph.with_codepoint(codepoint);
        Ok(())
    }

    /// Replace the glyph at `codepoint` with `f(old)`. Nothing changes if the result has the wrong height.
    pub fn modify_glyph(&mut self, codepoint: u8, f: impl FnOnce(&Glyph) -> Glyph) -> Result<()> {
        let glyph = f(self.glyph(codepoint));
        self.set_glyph(codepoint, glyph)
    }

    /// Replace several glyphs at once, each keyed by its own codepoint.
    ///
    /// All glyphs are checked before the first one is stored.
    pub fn replace_glyphs(&mut self, glyphs: Vec<Glyph>) -> Result<()> {
        for glyph in &glyphs {
            self.check_height(glyph)?;
        }
        for glyph in glyphs {
            let cp = glyph.codepoint() as usize;
            self.glyphs[cp] = glyph;
        }
        Ok(())
    }

    /// Take over height, baseline and all glyphs of `source`. The point size is kept.
    pub fn copy_glyphs_from(&mut self, source: &Sequence) {
        self.height = source.height;
        self.baseline = source.baseline;
        self.glyphs = source.glyphs.clone();
    }

    fn check_height(&self, glyph: &Glyph) -> Result<()> {
        if glyph.height() == self.height {
            Ok(())
        } else {
            Err(BmfError::argument(format!(
                "glyph {} has {} rows, sequence height is {}",
                glyph.codepoint(),
                glyph.height(),
                self.height
            )))
        }
    }
}

fn validate_metrics(height: u8, baseline: u8) -> Result<()> {
    if height == 0 {
        return Err(BmfError::argument("sequence height must be at least 1"));
    }
    if baseline >= height {
        return Err(BmfError::argument(format!("baseline {baseline} must be below height {height}")));
    }
    Ok(())
}
