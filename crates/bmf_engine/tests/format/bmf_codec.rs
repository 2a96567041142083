use bmf_engine::{
    formats::{self, BMF_VERSION, HEADER_SIZE},
    Font, Glyph, Sequence,
};
use pretty_assertions::assert_eq;

use super::{header, sample_font};

/// Offset of the first glyph record of the first sequence.
const FIRST_GLYPH: usize = HEADER_SIZE + 5;

#[test]
fn test_round_trip() {
    let font = sample_font();
    let data = formats::encode(&font).unwrap();
    let decoded = formats::decode(&data).unwrap();
    assert_eq!(decoded, font);
}

#[test]
fn test_round_trip_through_file() {
    let font = sample_font();
    let path = std::env::temp_dir().join(format!("bmf_engine_round_trip_{}.bmf", std::process::id()));
    font.save(&path).unwrap();
    let loaded = Font::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, font);
}

#[test]
fn test_header_layout() {
    let font = sample_font();
    let data = font.to_bytes().unwrap();

    assert_eq!(&data[0..4], b"BMF\0");
    assert_eq!(&data[4..15], b"Sample Font");
    assert!(data[15..32].iter().all(|&b| b == 0));
    assert_eq!(data[32], BMF_VERSION);
    assert_eq!(data[33], 0);
    assert_eq!(u16::from_le_bytes([data[34], data[35]]), 2);

    // height, baseline, point size, glyph count
    assert_eq!(&data[36..41], &[8, 6, 8, 0, 1]);
}

#[test]
fn test_pitch_law() {
    let mut seq = Sequence::new(1, 0, 1).unwrap();
    seq.set_glyph(0, Glyph::new(0, 8, 1)).unwrap();
    seq.set_glyph(1, Glyph::new(1, 9, 1)).unwrap();
    let data = Font::with_sequence("p", seq).to_bytes().unwrap();

    // codepoint 0: width 8 => pitch 1
    assert_eq!(&data[FIRST_GLYPH..FIRST_GLYPH + 3], &[0, 8, 1]);
    // codepoint 1 follows the single bitmap byte of codepoint 0: width 9 => pitch 2
    let second = FIRST_GLYPH + 3 + 1;
    assert_eq!(&data[second..second + 3], &[1, 9, 2]);
}

#[test]
fn test_bit_order() {
    let mut seq = Sequence::new(2, 1, 2).unwrap();
    let mut glyph = Glyph::new(0, 8, 2);
    glyph.set_pixel(0, 0, true);
    seq.set_glyph(0, glyph).unwrap();
    let data = Font::with_sequence("b", seq).to_bytes().unwrap();

    let bitmap = FIRST_GLYPH + 3;
    assert_eq!(&data[bitmap..bitmap + 2], &[0x80, 0x00]);
}

#[test]
fn test_padding_bits_are_zero() {
    let mut seq = Sequence::new(1, 0, 1).unwrap();
    seq.set_glyph(0, Glyph::from_fn(0, 3, 1, |_, _| true)).unwrap();
    let data = Font::with_sequence("b", seq).to_bytes().unwrap();
    assert_eq!(data[FIRST_GLYPH + 3], 0b1110_0000);
}

#[test]
fn test_long_name_round_trips() {
    let font = Font::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
    assert_eq!(font.name(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ01");

    let data = font.to_bytes().unwrap();
    assert_eq!(&data[4..32], b"ABCDEFGHIJKLMNOPQRSTUVWXYZ01");
    assert_eq!(Font::from_bytes(&data).unwrap(), font);
}

#[test]
fn test_decode_wider_pitch_and_unordered_records() {
    let mut data = header(b"Wide", 1, 1);
    data.extend_from_slice(&[2, 1, 2]);
    data.extend_from_slice(&2u16.to_le_bytes());
    // codepoint 66, width 4, pitch 3 (two bytes of slack per row)
    data.extend_from_slice(&[66, 4, 3, 0xF0, 0xFF, 0xFF, 0x90, 0x00, 0x00]);
    // codepoint 65, width 2, pitch 1
    data.extend_from_slice(&[65, 2, 1, 0x40, 0x80]);

    let font = Font::from_bytes(&data).unwrap();
    let seq = &font.sequences()[0];
    assert_eq!(seq.glyph(66).to_rows(), vec![vec![true, true, true, true], vec![true, false, false, true]]);
    assert_eq!(seq.glyph(65).to_rows(), vec![vec![false, true], vec![true, false]]);

    // codepoints without a record keep the default glyph
    assert_eq!(seq.glyph(b' ').width(), 8);
    assert_eq!(seq.glyph(b'C').width(), 6);
    assert!(seq.glyph(b'C').is_empty());
    assert_eq!(seq.glyph(b'C').height(), 2);
}

#[test]
fn test_decode_duplicate_codepoint_overwrites() {
    let mut data = header(b"Dup", 1, 1);
    data.extend_from_slice(&[1, 0, 1]);
    data.extend_from_slice(&2u16.to_le_bytes());
    data.extend_from_slice(&[7, 1, 1, 0x80]);
    data.extend_from_slice(&[7, 3, 1, 0x20]);

    let font = Font::from_bytes(&data).unwrap();
    let glyph = font.sequences()[0].glyph(7);
    assert_eq!(glyph.width(), 3);
    assert_eq!(glyph.to_rows(), vec![vec![false, false, true]]);
}

#[test]
fn test_decode_clamps_baseline() {
    let mut data = header(b"Base", 1, 1);
    data.extend_from_slice(&[4, 9, 4]);
    data.extend_from_slice(&0u16.to_le_bytes());

    let font = Font::from_bytes(&data).unwrap();
    assert_eq!(font.sequences()[0].baseline(), 3);
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let font = sample_font();
    let mut data = font.to_bytes().unwrap();
    data.extend_from_slice(b"trailer");
    assert_eq!(Font::from_bytes(&data).unwrap(), font);
}

#[test]
fn test_decode_name_stops_at_nul_and_drops_non_ascii() {
    let mut data = header(b"Ab\xE9c\0zz", 1, 1);
    data.extend_from_slice(&[1, 0, 1]);
    data.extend_from_slice(&0u16.to_le_bytes());
    assert_eq!(Font::from_bytes(&data).unwrap().name(), "Abc");
}
