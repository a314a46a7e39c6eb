use super::*;

#[test]
fn canvas_rejects_empty_axes() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(800, 600).unwrap();
    assert_eq!(c.size_f64(), (800.0, 600.0));
    assert_eq!(rgba8_len(c.width, c.height), 800 * 600 * 4);
    assert_eq!(rgba8_len(0, 600), 0);
}

#[test]
fn default_canvas_is_square() {
    let c = Canvas::default();
    assert_eq!(c.width, c.height);
    c.validate().unwrap();
}

#[test]
fn premultiply_rounds_to_nearest() {
    let c = Rgba8Premul::from_straight_rgba(100, 50, 200, 128);
    assert_eq!(
        c.to_array(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
    assert_eq!(Rgba8Premul::black().to_array(), [0, 0, 0, 255]);
    assert_eq!(Rgba8Premul::white().to_array(), [255, 255, 255, 255]);
    assert_eq!(Rgba8Premul::transparent().to_array(), [0, 0, 0, 0]);
}
