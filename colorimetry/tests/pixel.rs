use std::error::Error;

use image_colorimetry::{Color, HexErrorKind, Nrgba8, Pixel, Rgba16};

#[test]
fn color_is_opaque_pixel() {
    let color = Color::new(0.25, 0.5, 1.0);
    assert_eq!(color.to_rgba16_premultiplied(), [16384, 32768, 65535, 65535]);

    let (back, ok) = Color::from_pixel(&color);
    assert!(ok);
    assert!(back.almost_eq(color, 1.0 / 65535.0));
}

#[test]
fn premultiplied_half_alpha() {
    let pixel = Rgba16 {
        r: 0x4000,
        g: 0x2000,
        b: 0,
        a: 0x8000,
    };

    let (color, ok) = Color::from_pixel(&pixel);
    assert!(ok);
    assert!(color.almost_eq(Color::new(0.5, 0.25, 0.0), 1.0 / 65535.0));
}

#[test]
fn decode_image_row() {
    let row: Vec<u8> = [("#ff0000", 0xff), ("#00ff00", 0x80), ("#0000ff", 0)]
        .iter()
        .flat_map(|&(hex, a)| {
            let [r, g, b] = Color::from_hex(hex).unwrap().to_rgb8();
            [r, g, b, a]
        })
        .collect();

    let pixels: &[Nrgba8] = bytemuck::cast_slice(&row);
    let decoded: Vec<_> = pixels.iter().map(|p| Color::from_pixel(p)).collect();

    assert_eq!(decoded[0], (Color::new(1.0, 0.0, 0.0), true));
    assert_eq!(decoded[1].0.to_rgb8(), [0, 255, 0]);
    assert!(decoded[1].1);
    assert_eq!(decoded[2], (Color::BLACK, false));
}

#[test]
fn hex_errors() {
    let err = "#12345".parse::<Color>().unwrap_err();
    assert_eq!(err.kind(), HexErrorKind::InvalidFormat);
    assert_eq!(err.to_string(), "invalid hexadecimal color format");

    let boxed: Box<dyn Error> = Box::new(err);
    assert!(boxed.source().is_none());
}
