//! Test fixtures and constants.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Named colours with their expected RGB565 bytes (big-endian)
pub mod colors {
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const GREEN: [u8; 4] = [0, 255, 0, 255];
    pub const BLUE: [u8; 4] = [0, 0, 255, 255];

    pub const WHITE_565: [u8; 2] = [0xFF, 0xFF];
    pub const BLACK_565: [u8; 2] = [0x00, 0x00];
    pub const RED_565: [u8; 2] = [0xF8, 0x00];
    pub const GREEN_565: [u8; 2] = [0x07, 0xE0];
    pub const BLUE_565: [u8; 2] = [0x00, 0x1F];
}

/// Encode row-major RGBA pixels as a PNG file
pub fn png_from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize, "pixel count");

    let mut img = RgbaImage::new(width, height);
    for (i, pixel) in pixels.iter().enumerate() {
        let i = i as u32;
        img.put_pixel(i % width, i / width, Rgba(*pixel));
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encode");
    bytes
}

/// A single-colour PNG
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let pixels = vec![color; (width * height) as usize];
    png_from_pixels(width, height, &pixels)
}

/// 2x2 PNG: red, green / blue, white
pub fn quad_png() -> Vec<u8> {
    png_from_pixels(
        2,
        2,
        &[colors::RED, colors::GREEN, colors::BLUE, colors::WHITE],
    )
}

/// Expected RGB565 bytes for [`quad_png`]
pub fn quad_565() -> Vec<u8> {
    [
        colors::RED_565,
        colors::GREEN_565,
        colors::BLUE_565,
        colors::WHITE_565,
    ]
    .concat()
}

/// Text that no image decoder recognises
pub const NOT_AN_IMAGE: &[u8] = b"hello, this is plain text and not a picture";

/// Parse every `0x..` literal out of a generated header
pub fn parse_hex_literals(source: &str) -> Vec<u8> {
    source
        .split(|c: char| c == ',' || c.is_whitespace() || c == '{' || c == '}')
        .filter_map(|token| token.strip_prefix("0x"))
        .map(|hex| u8::from_str_radix(hex, 16).expect("hex literal"))
        .collect()
}
