use bmf_engine::{rasterize_sequence, BmfError, CoverageBuffer, CoverageDepth, FontEngine, FontdueEngine, RasterOptions};

const SYSTEM_FONTS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

/// First installed font from the list, `None` if the machine has none of them.
fn system_font() -> Option<FontdueEngine> {
    let engine = SYSTEM_FONTS.iter().find_map(|path| FontdueEngine::open(path).ok());
    if engine.is_none() {
        eprintln!("no system font found, skipping");
    }
    engine
}

fn first_ink_column(canvas: &CoverageBuffer) -> Option<usize> {
    (0..canvas.width()).find(|&x| (0..canvas.height()).any(|y| canvas.get(x, y) != 0))
}

#[test]
fn test_garbage_is_font_load_error() {
    assert!(matches!(FontdueEngine::from_bytes(b"not a font"), Err(BmfError::FontLoad { .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(FontdueEngine::open("/nonexistent/font.ttf"), Err(BmfError::Io(_))));
}

#[test]
fn test_bounds_sit_on_the_baseline() {
    let Some(engine) = system_font() else {
        return;
    };
    let metrics = engine.vertical_metrics(32.0).unwrap();
    assert!(metrics.ascent > 0 && metrics.descent > 0);

    let cap = engine.text_bounds("A", 32.0);
    assert!(cap.top >= 0);
    assert!((cap.bottom - metrics.ascent).abs() <= 1, "{cap:?} vs ascent {}", metrics.ascent);

    let descender = engine.text_bounds("g", 32.0);
    assert!(descender.bottom > metrics.ascent);
    assert!(descender.bottom <= metrics.ascent + metrics.descent + 1);
}

#[test]
fn test_space_spans_advance() {
    let Some(engine) = system_font() else {
        return;
    };
    let space = engine.text_bounds(" ", 16.0);
    assert!(space.width() >= 3, "{space:?}");
}

#[test]
fn test_render_honours_origin() {
    let Some(engine) = system_font() else {
        return;
    };
    let mut at_zero = CoverageBuffer::new(24, 24);
    let mut shifted = CoverageBuffer::new(24, 24);
    engine.render_char('l', 16.0, 2, CoverageDepth::OneBit, &mut at_zero).unwrap();
    engine.render_char('l', 16.0, 5, CoverageDepth::OneBit, &mut shifted).unwrap();

    let first = first_ink_column(&at_zero).unwrap();
    assert_eq!(first_ink_column(&shifted), Some(first + 3));
    // 1-bit mode only produces fully set or unset pixels
    assert!((0..24).all(|y| (0..24).all(|x| matches!(at_zero.get(x, y), 0 | 255))));
}

#[test]
fn test_sequence_metrics_and_descenders() {
    let Some(engine) = system_font() else {
        return;
    };
    let metrics = engine.vertical_metrics(16.0).unwrap();
    let seq = rasterize_sequence(&engine, 16, &RasterOptions::default()).unwrap();
    assert_eq!(i32::from(seq.height()), metrics.ascent + metrics.descent);
    assert_eq!(i32::from(seq.baseline()), metrics.ascent);

    let baseline = seq.baseline() as usize;
    let cap = seq.glyph(b'A');
    assert!(!cap.is_empty());
    assert!((baseline + 1..seq.height() as usize).all(|y| cap.is_row_empty(y)));
    assert!((baseline + 1..seq.height() as usize).any(|y| !seq.glyph(b'g').is_row_empty(y)));
}

#[test]
fn test_low_threshold_keeps_thin_strokes() {
    let Some(engine) = system_font() else {
        return;
    };
    let one_bit = rasterize_sequence(&engine, 16, &RasterOptions::default()).unwrap();
    let soft = rasterize_sequence(&engine, 16, &RasterOptions::threshold(1)).unwrap();

    let hard = one_bit.glyph(b'g');
    let full = soft.glyph(b'g');
    assert_eq!(hard.width(), full.width());
    for y in 0..hard.height() as usize {
        for x in 0..hard.width() as usize {
            assert!(!hard.pixel(x, y) || full.pixel(x, y), "pixel {x},{y}");
        }
    }
    assert!(full.count_pixels() > hard.count_pixels());
}
