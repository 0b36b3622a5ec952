use super::*;

/// A system font to shape with, if the host has one.
fn system_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

#[test]
fn rejects_non_positive_and_non_finite_sizes() {
    let mut engine = TextLayoutEngine::new();
    let brush = TextBrushRgba8::default();
    for size in [0.0, -12.0, f32::NAN, f32::INFINITY] {
        let err = engine.layout_plain("x", &[], size, brush).err().unwrap();
        assert!(matches!(err, GlowError::Validation(_)));
    }
}

#[test]
fn rejects_bytes_that_are_not_a_font() {
    let mut engine = TextLayoutEngine::new();
    let err = engine
        .layout_plain("x", b"not a font", 16.0, TextBrushRgba8::default())
        .err()
        .unwrap();
    assert!(matches!(err, GlowError::Validation(_)));
}

#[test]
fn prepared_font_reports_missing_files() {
    let err = PreparedFont::from_path("does/not/exist.ttf").unwrap_err();
    assert!(matches!(err, GlowError::Data(_)));
    assert!(err.to_string().contains("exist.ttf"));
}

#[test]
fn prepared_font_keeps_bytes_and_handle_in_sync() {
    let bytes = vec![0u8, 1, 0, 0];
    let font = PreparedFont::from_bytes(bytes.clone());
    assert_eq!(font.bytes(), bytes.as_slice());
    assert_eq!(font.font_data().data.as_ref(), bytes.as_slice());
    assert!(format!("{font:?}").contains("bytes_len"));
}

#[test]
fn lays_out_a_line_with_positive_extent() {
    let Some(bytes) = system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let brush = TextBrushRgba8 {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    let layout = engine
        .layout_plain("Barcelona passes", &bytes, 30.0, brush)
        .unwrap();
    assert!(layout.width() > 0.0);
    assert!(layout.height() > 0.0);

    // Bigger text takes more horizontal space.
    let wider = engine
        .layout_plain("Barcelona passes", &bytes, 60.0, brush)
        .unwrap();
    assert!(wider.width() > layout.width());
}
