//! Unified error types for bmf_engine

use thiserror::Error;

/// Reasons a byte stream is not a valid BMF font.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid BMF magic number")]
    BadMagic,

    #[error("Stream truncated at offset {offset}")]
    Truncated { offset: u64 },

    #[error("Unsupported BMF version: {version}")]
    UnsupportedVersion { version: u8 },

    #[error("Font contains no sequences")]
    NoSequences,

    #[error("Sequence {sequence} declares {count} glyphs (max 256)")]
    TooManyGlyphs { sequence: usize, count: u16 },

    #[error("Sequence {sequence} has zero height")]
    ZeroHeight { sequence: usize },

    #[error("Glyph {codepoint} in sequence {sequence} has zero width")]
    ZeroWidth { sequence: usize, codepoint: u8 },

    #[error("Glyph {codepoint} in sequence {sequence}: pitch {pitch} too small for width {width}")]
    PitchTooSmall { sequence: usize, codepoint: u8, width: u8, pitch: u8 },
}

/// Main error type for bmf_engine operations
#[derive(Debug, Error)]
pub enum BmfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid BMF data: {0}")]
    Format(#[from] FormatError),

    #[error("Invalid argument: {message}")]
    Argument { message: String },

    #[error("Failed to rasterize codepoint {codepoint}: {message}")]
    Rasterization { codepoint: u8, message: String },

    #[error("Failed to load font: {message}")]
    FontLoad { message: String },

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("The last sequence of a font cannot be removed")]
    LastSequence,
}

/// Result type alias for bmf_engine operations
pub type Result<T> = std::result::Result<T, BmfError>;

impl BmfError {
    /// Create an argument error from any displayable message
    pub fn argument(msg: impl std::fmt::Display) -> Self {
        Self::Argument { message: msg.to_string() }
    }

    /// Create a rasterization error for a single codepoint
    pub fn rasterization(codepoint: u8, msg: impl std::fmt::Display) -> Self {
        Self::Rasterization {
            codepoint,
            message: msg.to_string(),
        }
    }
}
