//! BMF binary codec.
//!
//! All multi-byte fields are little-endian.
//!
//! | Offset | Size | Field                                 |
//! |--------|------|---------------------------------------|
//! | 0      | 4    | magic `"BMF\0"`                       |
//! | 4      | 28   | font name, ASCII, NUL padded          |
//! | 32     | 1    | version                               |
//! | 33     | 1    | flags (reserved, 0)                   |
//! | 34     | 2    | sequence count                        |
//!
//! Each sequence: height, baseline, point size (version 1 only), a 16 bit
//! glyph count and then per glyph codepoint, width, pitch followed by
//! `pitch * height` bitmap bytes, rows MSB-first.
//!
//! Version 0 streams lack the point size byte; they decode with
//! `point_size = height`.

use std::io::{self, Cursor, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{pitch_for_width, BmfError, Font, FormatError, Glyph, Result, Sequence, GLYPH_COUNT, MAX_NAME_LEN};

pub const BMF_MAGIC: [u8; 4] = *b"BMF\0";

/// Canonical format version, always written by [`encode`].
pub const BMF_VERSION: u8 = 1;

/// Layout without the per-sequence point size byte.
pub const BMF_LEGACY_VERSION: u8 = 0;

/// Size of the fixed font header.
pub const HEADER_SIZE: usize = 4 + MAX_NAME_LEN + 1 + 1 + 2;

/// Encode `font` as a version 1 stream.
pub fn encode(font: &Font) -> Result<Vec<u8>> {
    encode_version(font, BMF_VERSION)
}

/// Encode `font` as a version 0 stream for loaders that predate the point size field.
pub fn encode_legacy(font: &Font) -> Result<Vec<u8>> {
    encode_version(font, BMF_LEGACY_VERSION)
}

fn encode_version(font: &Font, version: u8) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(estimated_size(font));
    write(font, version, &mut out)?;
    Ok(out)
}

fn estimated_size(font: &Font) -> usize {
    HEADER_SIZE
        + font
            .sequences()
            .iter()
            .map(|seq| 5 + seq.glyphs().iter().map(|g| 3 + g.data().len()).sum::<usize>())
            .sum::<usize>()
}

/// Write `font` to `out` using the given format version.
pub fn write<W: Write>(font: &Font, version: u8, out: &mut W) -> Result<()> {
    if version > BMF_VERSION {
        return Err(FormatError::UnsupportedVersion { version }.into());
    }
    let sequence_count = u16::try_from(font.sequence_count())
        .map_err(|_| BmfError::argument(format!("{} sequences do not fit the header", font.sequence_count())))?;

    out.write_all(&BMF_MAGIC)?;
    let mut name = [0u8; MAX_NAME_LEN];
    for (dst, src) in name.iter_mut().zip(font.name().bytes().filter(u8::is_ascii)) {
        *dst = src;
    }
    out.write_all(&name)?;
    out.write_u8(version)?;
    out.write_u8(font.flags())?;
    out.write_u16::<LittleEndian>(sequence_count)?;

    for seq in font.sequences() {
        out.write_u8(seq.height())?;
        out.write_u8(seq.baseline())?;
        if version >= BMF_VERSION {
            out.write_u8(seq.point_size())?;
        }
        out.write_u16::<LittleEndian>(GLYPH_COUNT as u16)?;
        for glyph in seq.glyphs() {
            write_glyph(glyph, out)?;
        }
    }
    Ok(())
}

fn write_glyph<W: Write>(glyph: &Glyph, out: &mut W) -> io::Result<()> {
    out.write_u8(glyph.codepoint())?;
    out.write_u8(glyph.width())?;
    // pitch is recomputed from the width, never taken from a stored field
    out.write_u8(pitch_for_width(glyph.width()) as u8)?;
    out.write_all(glyph.data())
}

/// Decode a BMF stream. No partial font is returned on error.
pub fn decode(data: &[u8]) -> Result<Font> {
    let mut reader = Reader::new(data);

    if reader.bytes(BMF_MAGIC.len())? != BMF_MAGIC {
        return Err(FormatError::BadMagic.into());
    }
    let name: String = reader
        .bytes(MAX_NAME_LEN)?
        .iter()
        .take_while(|&&b| b != 0)
        .filter(|b| b.is_ascii())
        .map(|&b| char::from(b))
        .collect();
    let version = reader.u8()?;
    if version > BMF_VERSION {
        return Err(FormatError::UnsupportedVersion { version }.into());
    }
    let flags = reader.u8()?;
    let sequence_count = reader.u16()?;
    if sequence_count == 0 {
        return Err(FormatError::NoSequences.into());
    }

    let mut sequences = Vec::with_capacity(sequence_count.min(64) as usize);
    for index in 0..sequence_count as usize {
        sequences.push(decode_sequence(&mut reader, index, version)?);
    }

    let remaining = reader.remaining();
    if remaining > 0 {
        log::debug!("Ignoring {remaining} trailing bytes after last sequence");
    }

    let mut font = Font::from_sequences(name, sequences)?;
    font.set_header(version, flags);
    Ok(font)
}

fn decode_sequence(reader: &mut Reader<'_>, index: usize, version: u8) -> Result<Sequence> {
    let height = reader.u8()?;
    let baseline = reader.u8()?;
    let point_size = if version >= BMF_VERSION { reader.u8()? } else { height };
    let glyph_count = reader.u16()?;

    if height == 0 {
        return Err(FormatError::ZeroHeight { sequence: index }.into());
    }
    if glyph_count as usize > GLYPH_COUNT {
        return Err(FormatError::TooManyGlyphs {
            sequence: index,
            count: glyph_count,
        }
        .into());
    }
    let baseline = if baseline >= height {
        log::warn!("Sequence {index}: baseline {baseline} not below height {height}, clamped to {}", height - 1);
        height - 1
    } else {
        baseline
    };

    let mut sequence = Sequence::blank(height, baseline, point_size);
    for _ in 0..glyph_count {
        let codepoint = reader.u8()?;
        let width = reader.u8()?;
        let pitch = reader.u8()?;
        if width == 0 {
            return Err(FormatError::ZeroWidth { sequence: index, codepoint }.into());
        }
        if (pitch as usize) < pitch_for_width(width) {
            return Err(FormatError::PitchTooSmall {
                sequence: index,
                codepoint,
                width,
                pitch,
            }
            .into());
        }
        let bitmap = reader.bytes(pitch as usize * height as usize)?;
        sequence.set_glyph(codepoint, Glyph::from_packed(codepoint, width, height, pitch as usize, bitmap))?;
    }
    if (glyph_count as usize) < GLYPH_COUNT {
        log::debug!("Sequence {index}: {glyph_count} glyph records, remaining codepoints use the default glyph");
    }
    Ok(sequence)
}

/// Cursor that reports end of data as [`FormatError::Truncated`].
struct Reader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { cursor: Cursor::new(data) }
    }

    fn u8(&mut self) -> Result<u8> {
        let offset = self.cursor.position();
        self.cursor.read_u8().map_err(|err| truncated(err, offset))
    }

    fn u16(&mut self) -> Result<u16> {
        let offset = self.cursor.position();
        self.cursor.read_u16::<LittleEndian>().map_err(|err| truncated(err, offset))
    }

    fn bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.cursor.position() as usize;
        let Some(slice) = data.get(start..start + len) else {
            return Err(FormatError::Truncated { offset: start as u64 }.into());
        };
        self.cursor.set_position((start + len) as u64);
        Ok(slice)
    }

    fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.cursor.position() as usize)
    }
}

fn truncated(err: io::Error, offset: u64) -> BmfError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        FormatError::Truncated { offset }.into()
    } else {
        err.into()
    }
}
