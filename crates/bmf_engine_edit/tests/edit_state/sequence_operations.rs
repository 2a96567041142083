//! Sequence management tests

use bmf_engine_edit::{BmfError, BmfUndoState, HistoryOutcome, Sequence, DEFAULT_MIN_SPACE_WIDTH};
use pretty_assertions::assert_eq;

use super::helpers::{create_test_state, pattern_of};

#[test]
fn test_add_sequence_becomes_active() {
    let mut state = create_test_state();
    let index = state.add_sequence(12, 9, 12).unwrap();
    assert_eq!(index, 1);
    assert_eq!(state.active_sequence_index(), 1);
    assert_eq!(state.active_sequence().height(), 12);
    assert_eq!(state.undo_stack_len(), 1);
    assert_eq!(state.undo_description().as_deref(), Some("Add sequence"));
}

#[test]
fn test_add_sequence_validates_metrics() {
    let mut state = create_test_state();
    assert!(state.add_sequence(0, 0, 8).is_err());
    assert!(state.add_sequence(8, 8, 8).is_err());
    assert_eq!(state.font().sequence_count(), 1);
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_last_sequence_cannot_be_removed() {
    let mut state = create_test_state();
    assert!(matches!(state.remove_sequence(0), Err(BmfError::LastSequence)));
    assert!(state.remove_sequence(3).is_err());
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_remove_sequence_clamps_active() {
    let mut state = create_test_state();
    state.add_sequence(12, 9, 12).unwrap();
    state.remove_sequence(1).unwrap();
    assert_eq!(state.active_sequence_index(), 0);
    assert_eq!(state.font().sequence_count(), 1);
}

#[test]
fn test_undo_import() {
    let mut state = create_test_state();
    state.import_sequence(Sequence::new(10, 8, 10).unwrap());
    assert_eq!(state.font().sequence_count(), 2);
    assert_eq!(state.active_sequence_index(), 1);
    assert_eq!(state.undo_description().as_deref(), Some("Import sequence"));

    assert_eq!(state.undo().unwrap(), HistoryOutcome::Applied);
    assert_eq!(state.font().sequence_count(), 1);
    assert_eq!(state.active_sequence_index(), 0);
}

#[test]
fn test_import_sequences_is_one_step() {
    let mut state = create_test_state();
    let sequences = vec![Sequence::new(10, 8, 10).unwrap(), Sequence::new(12, 9, 12).unwrap()];
    assert_eq!(state.import_sequences(sequences).unwrap(), 1);
    assert_eq!(state.font().sequence_count(), 3);
    assert_eq!(state.undo_stack_len(), 1);
    assert!(state.import_sequences(Vec::new()).is_err());
}

#[test]
fn test_copy_sequence_to_all() {
    let mut state = create_test_state();
    state.add_sequence(12, 9, 12).unwrap();
    state.add_sequence(16, 12, 16).unwrap();
    state.set_active_sequence(0).unwrap();

    state.copy_sequence_to_all().unwrap();

    let source = state.font().sequences()[0].clone();
    for seq in &state.font().sequences()[1..] {
        assert_eq!(seq.glyphs(), source.glyphs());
        assert_eq!(seq.height(), 8);
        assert_eq!(seq.baseline(), 6);
    }
    assert_eq!(state.font().sequences()[1].point_size(), 12);
    assert_eq!(state.font().sequences()[2].point_size(), 16);
    assert_eq!(pattern_of(state.font().sequences()[2].glyph(b'B'))[0], "###");
}

#[test]
fn test_set_baseline() {
    let mut state = create_test_state();
    state.set_baseline(7).unwrap();
    assert_eq!(state.active_sequence().baseline(), 7);
    assert!(state.set_baseline(8).is_err());
    assert_eq!(state.undo_stack_len(), 1);

    state.undo().unwrap();
    assert_eq!(state.active_sequence().baseline(), 6);
}

#[test]
fn test_set_point_size() {
    let mut state = create_test_state();
    state.set_point_size(9).unwrap();
    assert_eq!(state.active_sequence().point_size(), 9);
    assert_eq!(state.active_sequence().height(), 8);
    assert!(state.set_point_size(0).is_err());
    assert_eq!(state.undo_stack_len(), 1);
}

#[test]
fn test_fix_space_width() {
    let mut state = create_test_state();
    state.set_fixed_width(bmf_engine_edit::GlyphRange::single(b' '), 2).unwrap();
    state.add_sequence(12, 9, 12).unwrap();

    let fixed = state.fix_space_width(DEFAULT_MIN_SPACE_WIDTH).unwrap();
    assert_eq!(fixed, 1);
    let space = state.font().sequences()[0].glyph(b' ');
    assert_eq!(space.width(), 4);
    assert!(space.is_empty());
    assert_eq!(space.height(), 8);
    assert_eq!(state.font().sequences()[1].glyph(b' ').width(), 8);
}

#[test]
fn test_set_active_sequence_out_of_range() {
    let mut state = create_test_state();
    assert!(state.set_active_sequence(1).is_err());
    assert_eq!(state.active_sequence_index(), 0);
}

#[test]
fn test_rename_is_not_in_history() {
    let mut state = create_test_state();
    state.set_font_name("Renamed").unwrap();
    assert_eq!(state.font().name(), "Renamed");
    assert_eq!(state.undo_stack_len(), 0);
    assert!(state.set_font_name(&"x".repeat(40)).is_err());
}

#[test]
fn test_save_and_load() {
    let mut state = create_test_state();
    state.bold(bmf_engine_edit::GlyphRange::all()).unwrap();
    let path = std::env::temp_dir().join(format!("bmf_engine_edit_{}.bmf", std::process::id()));
    assert!(state.is_dirty());
    state.save_as(&path).unwrap();
    assert!(!state.is_dirty());

    let loaded = bmf_engine_edit::BmfEditState::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded.font(), state.font());
    assert_eq!(loaded.file_path(), Some(path.as_path()));
}
