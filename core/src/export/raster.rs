//! SVG rasterization to PNG and JPEG byte blobs.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use resvg::tiny_skia;

use crate::{Error, Result};

fn rasterize(svg: &str, size: u32) -> Result<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| Error::Raster(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| Error::Raster(format!("cannot allocate {size}x{size} pixmap")))?;

    let scale_x = size as f32 / tree.size().width();
    let scale_y = size as f32 / tree.size().height();
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale_x, scale_y),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Rasterize an SVG document to `size`-square PNG bytes.
pub fn svg_to_png(svg: &str, size: u32) -> Result<Vec<u8>> {
    rasterize(svg, size)?
        .encode_png()
        .map_err(|e| Error::Raster(e.to_string()))
}

/// Rasterize an SVG document to `size`-square JPEG bytes.
///
/// JPEG has no alpha channel, so transparent regions are composited
/// over white before encoding.
pub fn svg_to_jpeg(svg: &str, size: u32, quality: u8) -> Result<Vec<u8>> {
    let pixmap = rasterize(svg, size)?;

    let mut rgb = Vec::with_capacity((size * size * 3) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        let alpha = c.alpha() as f32 / 255.0;
        for channel in [c.red(), c.green(), c.blue()] {
            rgb.push((channel as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8);
        }
    }

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(Cursor::new(&mut bytes), quality)
        .write_image(&rgb, size, size, ExtendedColorType::Rgb8)
        .map_err(|e| Error::Raster(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64"><rect x="8" y="8" width="48" height="48" fill="black"/></svg>"#;

    #[test]
    fn png_bytes_have_magic() {
        let bytes = svg_to_png(DOC, 128).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn jpeg_bytes_have_magic() {
        let bytes = svg_to_jpeg(DOC, 128, 90).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn malformed_svg_fails() {
        assert!(matches!(
            svg_to_png("<not-svg/>", 64),
            Err(Error::Raster(_))
        ));
    }
}
