mod bmf_codec;
mod legacy;

use bmf_engine::{Font, Glyph, Sequence};

/// Font with two sequences and a few distinctive glyphs.
pub fn sample_font() -> Font {
    let mut small = Sequence::new(8, 6, 8).unwrap();
    small
        .set_glyph(b'A', Glyph::from_fn(b'A', 5, 8, |x, y| y == 3 || (y > 0 && (x == 0 || x == 4))))
        .unwrap();
    small.set_glyph(b'|', Glyph::from_fn(b'|', 1, 8, |_, _| true)).unwrap();
    small.set_glyph(255, Glyph::from_fn(255, 9, 8, |x, y| (x + y) % 3 == 0)).unwrap();

    let mut large = Sequence::new(20, 15, 18).unwrap();
    large.set_glyph(b'W', Glyph::from_fn(b'W', 17, 20, |x, y| x == y || x + y == 16)).unwrap();
    large.set_glyph(0, Glyph::from_fn(0, 255, 20, |x, _| x % 2 == 0)).unwrap();

    let mut font = Font::with_sequence("Sample Font", small);
    font.push_sequence(large);
    font
}

/// Hand-written BMF header.
pub fn header(name: &[u8], version: u8, sequence_count: u16) -> Vec<u8> {
    let mut data = b"BMF\0".to_vec();
    let mut name_field = [0u8; 28];
    name_field[..name.len()].copy_from_slice(name);
    data.extend_from_slice(&name_field);
    data.push(version);
    data.push(0);
    data.extend_from_slice(&sequence_count.to_le_bytes());
    data
}
