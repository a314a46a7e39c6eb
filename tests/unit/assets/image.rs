use super::*;

#[test]
fn straight_pixels_are_premultiplied() {
    let img = SourceImage::from_rgba8(1, 1, vec![100, 50, 200, 128]).unwrap();
    assert_eq!(img.width(), 1);
    assert_eq!(img.height(), 1);
    assert_eq!(
        img.rgba8_premul(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn fully_transparent_pixels_lose_color() {
    let img = SourceImage::from_rgba8(1, 1, vec![9, 9, 9, 0]).unwrap();
    assert_eq!(img.rgba8_premul(), &[0, 0, 0, 0]);
}

#[test]
fn byte_length_must_match_size() {
    let err = SourceImage::from_rgba8(2, 2, vec![0; 12]).unwrap_err();
    assert!(err.to_string().contains("expects 16"));
    assert!(SourceImage::from_premul_rgba8(1, 1, vec![0; 5]).is_err());
}

#[test]
fn zero_sized_image_is_representable() {
    let img = SourceImage::from_rgba8(0, 0, Vec::new()).unwrap();
    assert_eq!((img.width(), img.height()), (0, 0));
}

#[test]
fn solid_fills_every_pixel() {
    let img = SourceImage::solid(3, 2, Rgba8Premul::from_straight_rgba(255, 0, 0, 255)).unwrap();
    assert_eq!(img.rgba8_premul().len(), 24);
    for px in img.rgba8_premul().chunks_exact(4) {
        assert_eq!(px, &[255, 0, 0, 255]);
    }
}

#[test]
fn premultiplication_matches_color_conversion() {
    let mut straight = Vec::new();
    for a in [0u8, 1, 64, 128, 254, 255] {
        for c in [0u8, 1, 127, 200, 255] {
            straight.extend_from_slice(&[c, 255 - c, c / 2, a]);
        }
    }
    let n = (straight.len() / 4) as u32;
    let img = SourceImage::from_rgba8(n, 1, straight.clone()).unwrap();

    for (src, out) in straight.chunks_exact(4).zip(img.rgba8_premul().chunks_exact(4)) {
        let expected = Rgba8Premul::from_straight_rgba(src[0], src[1], src[2], src[3]);
        assert_eq!(out, &expected.to_array(), "straight {src:?}");
    }
}
