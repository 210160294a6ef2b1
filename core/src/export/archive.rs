//! Zip bundling for batch exports.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::{Error, Result};

use super::{svg_to_jpeg, svg_to_pdf, svg_to_png, OutputFormat};

/// Bundle rendered documents into a zip archive, one file per requested
/// format per `(name, svg)` pair, in the given format order.
pub fn bundle(
    renders: &[(String, String)],
    formats: &[OutputFormat],
    size: u32,
    quality: u8,
) -> Result<Vec<u8>> {
    if formats.is_empty() {
        return Err(Error::EmptyFormatList);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, svg) in renders {
        for format in formats {
            let bytes = match format {
                OutputFormat::Svg => svg.as_bytes().to_vec(),
                OutputFormat::Png => svg_to_png(svg, size)?,
                OutputFormat::Jpeg => svg_to_jpeg(svg, size, quality)?,
                OutputFormat::Pdf => svg_to_pdf(svg)?,
            };
            writer.start_file(format!("{name}.{}", format.extension()), options)?;
            writer.write_all(&bytes)?;
        }
    }

    Ok(writer.finish()?.into_inner())
}
