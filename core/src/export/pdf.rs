//! SVG to PDF conversion.

use crate::{Error, Result};

/// Convert an SVG document to a single-page PDF.
///
/// Goes through svg2pdf's own usvg re-export so the parsed tree always
/// matches the converter's expectations.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let tree = svg2pdf::usvg::Tree::from_str(svg, &svg2pdf::usvg::Options::default())
        .map_err(|e| Error::Pdf(e.to_string()))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| Error::Pdf(e.to_string()))
}
