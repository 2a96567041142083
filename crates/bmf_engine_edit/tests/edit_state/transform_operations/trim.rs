//! Trimming and vertical centering tests

use bmf_engine_edit::GlyphRange;
use pretty_assertions::assert_eq;

use super::super::helpers::{create_test_state, glyph_from_pattern, pattern_of};

#[test]
fn test_trim_horizontal() {
    let mut state = create_test_state();
    state.add_margins(GlyphRange::single(b'A'), 2, 3).unwrap();
    state.trim_horizontal(GlyphRange::single(b'A')).unwrap();
    assert_eq!(state.glyph(b'A').width(), 5);
    assert_eq!(pattern_of(state.glyph(b'A'))[0], ".###.");
}

#[test]
fn test_trim_horizontal_empty_glyph_keeps_one_column() {
    let mut state = create_test_state();
    state.trim_horizontal(GlyphRange::all()).unwrap();
    assert_eq!(state.glyph(b'x').width(), 1);
    assert_eq!(state.glyph(b'x').height(), 8);
}

#[test]
fn test_center_vertical() {
    let mut state = create_test_state();
    // 'A' has ink in rows 0..=5 and two empty rows below
    state.center_vertical(GlyphRange::single(b'A')).unwrap();
    let rows = pattern_of(state.glyph(b'A'));
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], ".....");
    assert_eq!(rows[1], ".###.");
    assert_eq!(rows[6], "#...#");
    assert_eq!(rows[7], ".....");
}

#[test]
fn test_center_vertical_odd_padding_goes_to_bottom() {
    let mut state = create_test_state();
    // 'B' has ink in rows 0..=4, three empty rows: one on top, two below
    state.center_vertical(GlyphRange::single(b'B')).unwrap();
    let rows = pattern_of(state.glyph(b'B'));
    assert_eq!(rows[0], "...");
    assert_eq!(rows[1], "###");
    assert_eq!(rows[5], "###");
    assert_eq!(&rows[6..], &["...", "..."]);
}

#[test]
fn test_center_vertical_keeps_sequence_height() {
    let mut state = create_test_state();
    state.center_vertical(GlyphRange::all()).unwrap();
    for cp in 0..=255u8 {
        assert_eq!(state.glyph(cp).height(), 8);
    }
    assert_eq!(state.undo_stack_len(), 1);
}

#[test]
fn test_short_glyph_is_rejected_by_sequence() {
    let state = create_test_state();
    let mut seq = state.active_sequence().clone();
    let short = glyph_from_pattern(b'A', &["#", "#"]);
    assert!(seq.set_glyph(b'A', short).is_err());
    assert_eq!(&seq, state.active_sequence());
}
