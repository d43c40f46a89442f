use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_keeps_straight_alpha() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba.clone()).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let frame = decode_image(&buf).unwrap();
    assert_eq!(frame.width, 1);
    assert_eq!(frame.height, 1);
    assert_eq!(frame.data, src_rgba);
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn encode_png_roundtrips_pixels() {
    let image = FrameImage::from_rgba8(2, 2, (0u8..16).collect()).unwrap();
    let bytes = encode_png(&image).unwrap();
    let back = decode_image(&bytes).unwrap();
    assert_eq!(back, image);
}

#[test]
fn encode_png_rejects_mismatched_buffer() {
    let image = FrameImage {
        width: 2,
        height: 2,
        data: vec![0u8; 4],
    };
    assert!(encode_png(&image).is_err());
}
