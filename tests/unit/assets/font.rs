use super::*;

#[test]
fn garbage_bytes_are_not_a_font() {
    let err = CaptionFont::from_bytes(b"definitely not a font".to_vec()).unwrap_err();
    assert!(err.to_string().contains("no font families"));
}

#[test]
fn missing_font_file_reports_path() {
    let err = CaptionFont::from_path("target/no-such-dir/caption.ttf").unwrap_err();
    assert!(err.to_string().contains("caption.ttf"));
}

const FIXTURE: &str = "tests/data/fonts/DejaVuSans.ttf";

#[test]
fn fixture_font_registers_its_family() {
    let font = CaptionFont::from_path(FIXTURE).unwrap();
    assert!(font.family_name().contains("DejaVu"), "{}", font.family_name());
}

#[test]
fn shaped_glyphs_advance_along_the_baseline() {
    let mut font = CaptionFont::from_path(FIXTURE).unwrap();
    let line = font.shape_line("WWWW", 36.0, true).unwrap();

    assert_eq!(line.glyphs.len(), 4);
    assert_eq!(line.font_size, 36.0);
    assert!(line.advance > 100.0, "advance {}", line.advance);
    assert!(line.baseline > 20.0, "baseline {}", line.baseline);

    assert!(line.glyphs[0].x.abs() < 0.5);
    for pair in line.glyphs.windows(2) {
        assert!(pair[1].x - pair[0].x > 30.0, "{pair:?}");
    }
    for g in &line.glyphs {
        assert!((g.y - line.baseline).abs() < 0.5, "{g:?} vs {}", line.baseline);
    }
}

#[test]
fn empty_text_shapes_to_nothing() {
    let mut font = CaptionFont::from_path(FIXTURE).unwrap();
    let line = font.shape_line("", 36.0, false).unwrap();
    assert!(line.glyphs.is_empty());
}
