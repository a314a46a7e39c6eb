use super::*;

fn icon_level(v: u8) -> u8 {
    Volume::from_slider(v).unwrap().icon().level
}

#[test]
fn icon_thresholds() {
    assert_eq!(icon_level(0), 0);
    assert_eq!(icon_level(1), 1);
    assert_eq!(icon_level(33), 1);
    assert_eq!(icon_level(34), 2);
    assert_eq!(icon_level(66), 2);
    assert_eq!(icon_level(67), 3);
    assert_eq!(icon_level(100), 3);
}

#[test]
fn icon_paths_and_alt_text() {
    let icon = Volume::from_slider(50).unwrap().icon();
    assert_eq!(icon.src, "icons/volume-level-2.svg");
    assert_eq!(icon.alt, "Volume Level 2");
    assert_eq!(Volume::MUTE.icon().src, "icons/volume-level-0.svg");
}

#[test]
fn level_is_slider_fraction() {
    assert_eq!(Volume::from_slider(0).unwrap().level(), 0.0);
    assert_eq!(Volume::from_slider(50).unwrap().level(), 0.5);
    assert_eq!(Volume::default().level(), 1.0);
}

#[test]
fn out_of_range_slider_is_rejected() {
    assert!(Volume::from_slider(101).is_err());
    assert!(serde_json::from_str::<Volume>("150").is_err());
    assert_eq!(serde_json::from_str::<Volume>("40").unwrap().slider(), 40);
}
