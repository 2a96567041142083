//! Version 0 streams: no point size byte in the sequence header.

use bmf_engine::{
    formats::{self, BMF_LEGACY_VERSION, BMF_VERSION},
    Font,
};
use pretty_assertions::assert_eq;

use super::{header, sample_font};

#[test]
fn test_decode_legacy_stream() {
    let mut data = header(b"Old", BMF_LEGACY_VERSION, 1);
    // height, baseline, glyph count
    data.extend_from_slice(&[3, 2]);
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&[b'X', 3, 1, 0xA0, 0x40, 0xA0]);

    let font = Font::from_bytes(&data).unwrap();
    assert_eq!(font.version(), BMF_LEGACY_VERSION);
    let seq = &font.sequences()[0];
    assert_eq!(seq.height(), 3);
    assert_eq!(seq.baseline(), 2);
    assert_eq!(seq.point_size(), 3);
    assert_eq!(
        seq.glyph(b'X').to_rows(),
        vec![vec![true, false, true], vec![false, true, false], vec![true, false, true]]
    );
}

#[test]
fn test_legacy_round_trip_keeps_glyphs() {
    let font = sample_font();
    let data = formats::encode_legacy(&font).unwrap();
    assert_eq!(data[32], BMF_LEGACY_VERSION);

    let decoded = formats::decode(&data).unwrap();
    for (a, b) in font.sequences().iter().zip(decoded.sequences()) {
        assert_eq!(a.glyphs(), b.glyphs());
        assert_eq!(a.baseline(), b.baseline());
        // point size is not stored in version 0
        assert_eq!(b.point_size(), b.height());
    }
}

#[test]
fn test_legacy_font_is_written_as_current_version() {
    let legacy = formats::encode_legacy(&sample_font()).unwrap();
    let font = Font::from_bytes(&legacy).unwrap();
    let data = font.to_bytes().unwrap();
    assert_eq!(data[32], BMF_VERSION);
    assert_eq!(data.len(), legacy.len() + font.sequence_count());
}
