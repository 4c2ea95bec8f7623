use crate::error::RenderError;
use paint_grid::Rgb;
use resvg::usvg::{self, fontdb, Transform};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Rasterizes SVG and encodes lossless PNG.
///
/// The PNG output format is chosen from the rendered pixels:
/// - At most 256 distinct colors → indexed color type 3 with a PLTE chunk,
///   packed to 1, 2, 4 or 8 bits per pixel
/// - More colors (anti-aliased label text) → 8-bit RGB
pub struct SvgRasterizer {
    /// Font database for label text
    fontdb: Arc<fontdb::Database>,
    /// Canvas color under the SVG
    background: Rgb,
    /// Re-compress with oxipng
    optimize: bool,
}

impl SvgRasterizer {
    /// Create a rasterizer using the system fonts
    pub fn new(background: Rgb, optimize: bool) -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(font_count = fontdb.len(), "Loaded fonts for label rendering");
        Self::with_fontdb(Arc::new(fontdb), background, optimize)
    }

    /// Create a rasterizer sharing an existing font database
    pub fn with_fontdb(fontdb: Arc<fontdb::Database>, background: Rgb, optimize: bool) -> Self {
        Self {
            fontdb,
            background,
            optimize,
        }
    }

    /// Render SVG markup to PNG bytes
    pub fn render_png(&self, svg: &str) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize(svg)?;
        let (width, height) = (pixmap.width(), pixmap.height());
        let rgb = pixmap_to_rgb(&pixmap);

        let png_bytes = match index_colors(&rgb) {
            Some((plte, indices)) => {
                let (depth, bits) = match plte.len() / 3 {
                    0..=2 => (png::BitDepth::One, 1),
                    3..=4 => (png::BitDepth::Two, 2),
                    5..=16 => (png::BitDepth::Four, 4),
                    _ => (png::BitDepth::Eight, 8),
                };
                let packed = if bits == 8 {
                    indices
                } else {
                    pack_nbits(&indices, width, bits)
                };
                encode_png(width, height, png::ColorType::Indexed, depth, Some(&plte), &packed)?
            }
            None => encode_png(width, height, png::ColorType::Rgb, png::BitDepth::Eight, None, &rgb)?,
        };

        if !self.optimize {
            return Ok(png_bytes);
        }

        // Re-compress with oxipng (zopfli + adaptive filter selection)
        match oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        ) {
            Ok(optimized) => Ok(optimized),
            Err(e) => {
                tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
                Ok(png_bytes)
            }
        }
    }

    /// Parse and rasterize SVG at its intrinsic size over the background
    pub fn rasterize(&self, svg: &str) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree =
            usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let size = tree.size().to_int_size();
        let mut pixmap =
            Pixmap::new(size.width(), size.height()).ok_or(RenderError::PixmapAllocation)?;
        let Rgb { r, g, b } = self.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Drop the alpha channel. The canvas is filled opaque first, so the
/// premultiplied pixels are already straight RGB.
fn pixmap_to_rgb(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}

/// Build a PLTE and per-pixel indices, or `None` past 256 distinct colors.
///
/// Palette order is first appearance in scan order.
fn index_colors(rgb: &[u8]) -> Option<(Vec<u8>, Vec<u8>)> {
    let mut lookup: HashMap<[u8; 3], u8> = HashMap::new();
    let mut plte = Vec::new();
    let mut indices = Vec::with_capacity(rgb.len() / 3);

    for px in rgb.chunks_exact(3) {
        let key = [px[0], px[1], px[2]];
        let idx = match lookup.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = u8::try_from(lookup.len()).ok()?;
                lookup.insert(key, idx);
                plte.extend_from_slice(&key);
                idx
            }
        };
        indices.push(idx);
    }

    Some((plte, indices))
}

/// Encode packed pixel data as a PNG.
fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    packed: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        for chunk in row.chunks(pixels_per_byte) {
            let byte = chunk.iter().enumerate().fold(0u8, |byte, (i, &idx)| {
                byte | (idx & mask) << (8 - bits - i as u8 * bits)
            });
            packed.push(byte);
        }
    }

    packed
}
