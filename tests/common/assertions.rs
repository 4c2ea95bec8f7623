//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::io::Cursor;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A decoded PNG expanded to 8-bit RGB
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub rgb: Vec<u8>,
}

impl DecodedPng {
    /// Pixel at (`x`, `y`)
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * self.width + x) * 3) as usize;
        [self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]]
    }
}

/// Assert `bytes` is a PNG and decode it
pub fn decode_png(bytes: &[u8]) -> DecodedPng {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let color_type = png::Decoder::new(Cursor::new(bytes))
        .read_info()
        .expect("PNG header")
        .info()
        .color_type;

    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info().expect("PNG header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG frame");
    buf.truncate(info.buffer_size());

    assert_eq!(
        info.color_type,
        png::ColorType::Rgb,
        "expanded PNG should be RGB (source color type {color_type:?})"
    );

    DecodedPng {
        width: info.width,
        height: info.height,
        color_type,
        rgb: buf,
    }
}
