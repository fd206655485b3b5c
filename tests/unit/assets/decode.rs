use std::io::Cursor;

use super::*;

fn encode_png(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_background_resizes_to_canvas() {
    let src = image::RgbaImage::from_pixel(40, 10, image::Rgba([10, 200, 30, 255]));
    let canvas = Canvas::new(120, 63).unwrap();

    let bg = decode_background(&encode_png(src), canvas).unwrap();
    assert_eq!((bg.width, bg.height), (120, 63));
    assert_eq!(bg.rgba8_premul.len(), 120 * 63 * 4);
    // A flat source stays flat through Lanczos.
    let mid = (31 * 120 + 60) * 4;
    assert_eq!(&bg.rgba8_premul[mid..mid + 4], &[10, 200, 30, 255]);
}

#[test]
fn decode_background_premultiplies() {
    let src = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let bg = decode_background(&encode_png(src), Canvas::new(1, 1).unwrap()).unwrap();
    assert_eq!(
        bg.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn garbage_bytes_are_image_load_errors() {
    let err = decode_background(b"not an image", Canvas::new(4, 4).unwrap()).unwrap_err();
    assert!(matches!(err, CardError::ImageLoad(_)));
}

#[test]
fn missing_file_is_image_load_error_naming_the_path() {
    let err = load_background(
        Path::new("target/definitely/missing.png"),
        Canvas::new(4, 4).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, CardError::ImageLoad(_)));
    assert!(err.to_string().contains("missing.png"));
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = vec![64u8, 0, 32, 128, 9, 9, 9, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 0, 64, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[1, 2, 3, 255]);
}
