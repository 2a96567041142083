use serde::{Deserialize, Serialize};

/// How rendered coverage is turned into 1-bit pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Render without anti-aliasing, every set pixel is kept.
    ///
    /// [`FontdueEngine`](crate::FontdueEngine) hardens coverage at
    /// [`ONE_BIT_CUTOFF`](crate::ONE_BIT_CUTOFF) (50 %), which can break up
    /// strokes thinner than a pixel at small sizes. Use `Threshold` with a
    /// lower value to keep them.
    #[default]
    OneBit,
    /// Render grayscale coverage and keep pixels at or above `threshold`.
    Threshold,
}

/// Options for rasterizing a scalable font into sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    pub mode: RenderMode,
    pub threshold: u8,
    /// Widen each glyph by its left bearing plus one column.
    pub bearing_padding: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::OneBit,
            threshold: 128,
            bearing_padding: true,
        }
    }
}

impl RasterOptions {
    pub fn threshold(threshold: u8) -> Self {
        Self {
            mode: RenderMode::Threshold,
            threshold,
            ..Default::default()
        }
    }

    /// Whether a coverage value becomes a set pixel.
    #[inline]
    pub fn is_set(&self, coverage: u8) -> bool {
        match self.mode {
            RenderMode::OneBit => coverage != 0,
            RenderMode::Threshold => coverage >= self.threshold,
        }
    }
}
