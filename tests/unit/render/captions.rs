use super::*;

#[test]
fn anchors_follow_surface_size() {
    let style = CaptionStyle::default();
    let a = caption_anchors(Canvas::new(400, 300).unwrap(), &style);
    assert_eq!(a.top, Point::new(200.0, 48.0));
    assert_eq!(a.bottom, Point::new(200.0, 276.0));
}

#[test]
fn default_style_matches_classic_meme_text() {
    let s = CaptionStyle::default();
    assert_eq!(s.font_size_px, 36.0);
    assert!(s.bold);
    assert_eq!(s.stroke_width_px, 6.0);
    assert_eq!(s.miter_limit, 2.0);
    assert_eq!(s.fill_rgba8, [255, 255, 255, 255]);
    assert_eq!(s.stroke_rgba8, [0, 0, 0, 255]);
    s.validate().unwrap();
}

#[test]
fn style_validation_rejects_bad_values() {
    let s = CaptionStyle {
        font_size_px: 0.0,
        ..CaptionStyle::default()
    };
    assert!(s.validate().is_err());

    let s = CaptionStyle {
        miter_limit: 0.5,
        ..CaptionStyle::default()
    };
    assert!(s.validate().is_err());

    let s = CaptionStyle {
        bottom_inset_px: f64::NAN,
        ..CaptionStyle::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn centering_puts_line_midpoint_on_anchor() {
    let (dx, dy) = centering_offset(Point::new(200.0, 48.0), 120.0, 30.0);
    assert_eq!(dx, 140.0);
    assert_eq!(dy, 18.0);
}

#[test]
fn captions_emptiness() {
    assert!(Captions::default().is_empty());
    assert!(!Captions::new("top", "").is_empty());
    assert!(!Captions::new("", "bottom").is_empty());
}

#[test]
fn style_deserializes_with_defaults() {
    let s: CaptionStyle = serde_json::from_str(r#"{ "font_size_px": 48 }"#).unwrap();
    assert_eq!(s.font_size_px, 48.0);
    assert_eq!(s.top_baseline_px, 48.0);
}
