use super::*;

#[test]
fn empty_object_is_default() {
    let cfg = MemeConfig::from_reader(&b"{}"[..]).unwrap();
    assert_eq!(cfg, MemeConfig::default());
    assert_eq!(cfg.canvas, Canvas::default());
    assert_eq!(cfg.background_rgba8, [0, 0, 0, 255]);
}

#[test]
fn overrides_are_applied() {
    let json = r#"{
        "canvas": { "width": 800, "height": 600 },
        "background_rgba8": [255, 255, 255, 255],
        "captions": { "font_size_px": 48, "bold": false }
    }"#;
    let cfg = MemeConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.canvas, Canvas::new(800, 600).unwrap());
    assert_eq!(cfg.background_rgba8, [255, 255, 255, 255]);
    assert_eq!(cfg.captions.font_size_px, 48.0);
    assert!(!cfg.captions.bold);
    assert_eq!(cfg.captions.stroke_width_px, 6.0);
}

#[test]
fn invalid_configs_are_rejected() {
    let zero = r#"{ "canvas": { "width": 0, "height": 600 } }"#;
    assert!(MemeConfig::from_reader(zero.as_bytes()).is_err());

    let huge = r#"{ "canvas": { "width": 70000, "height": 10 } }"#;
    assert!(MemeConfig::from_reader(huge.as_bytes()).is_err());

    let unknown = r#"{ "canvass": { "width": 10, "height": 10 } }"#;
    let err = MemeConfig::from_reader(unknown.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse config JSON"));

    let bad_caption = r#"{ "captions": { "font_size_px": -1 } }"#;
    assert!(MemeConfig::from_reader(bad_caption.as_bytes()).is_err());
}

#[test]
fn relative_font_path_resolves_against_config_dir() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("meme.json");
    std::fs::write(&path, r#"{ "font_path": "fonts/Impact.ttf" }"#).unwrap();

    let cfg = MemeConfig::from_path(&path).unwrap();
    assert_eq!(cfg.font_path, Some(dir.join("fonts/Impact.ttf")));
    assert_eq!(cfg.resolved_font_path(), Some(dir.join("fonts/Impact.ttf")));
}

#[test]
fn missing_config_file_names_the_path() {
    let err = MemeConfig::from_path("target/does-not-exist/meme.json").unwrap_err();
    assert!(err.to_string().contains("meme.json"));
}
