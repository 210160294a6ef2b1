//! Render command implementation.

use std::path::PathBuf;

use anyhow::Context;
use qrglyph_core::{MatrixSource, OutputFormat, Pipeline, QrMatrixSource};

use crate::ui::print_matrix;

/// Render one payload and write it to a file.
#[allow(clippy::too_many_arguments)]
pub async fn render(
    payload: String,
    style: Option<PathBuf>,
    logo: Option<String>,
    format: OutputFormat,
    out: Option<PathBuf>,
    size: u32,
    quality: u8,
    preview: bool,
) -> anyhow::Result<()> {
    let style = super::load_style(style).await?;
    let logo = logo.as_deref();
    let pipeline = Pipeline::new();

    if preview {
        let matrix = QrMatrixSource
            .encode(&payload, style.error_correction, style.mask_pattern)
            .with_context(|| format!("encoding payload '{payload}'"))?;
        print_matrix(&matrix);
    }

    let bytes = match format {
        OutputFormat::Svg => pipeline
            .render_svg(&payload, &style, logo)
            .await?
            .into_bytes(),
        OutputFormat::Png => pipeline.to_png(&payload, &style, logo, size).await?,
        OutputFormat::Jpeg => pipeline.to_jpeg(&payload, &style, logo, size, quality).await?,
        OutputFormat::Pdf => pipeline.to_pdf(&payload, &style, logo).await?,
    };

    let out = out.unwrap_or_else(|| PathBuf::from(format!("qr.{}", format.extension())));
    tokio::fs::write(&out, &bytes)
        .await
        .with_context(|| format!("writing {}", out.display()))?;

    println!("\x1b[1;32m✓\x1b[0m Wrote {} ({} bytes)", out.display(), bytes.len());
    Ok(())
}
