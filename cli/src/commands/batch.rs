//! Batch command implementation.

use std::path::PathBuf;

use anyhow::Context;
use qrglyph_core::{BatchItem, OutputFormat, Pipeline};

/// Render a list of payloads into one zip archive.
#[allow(clippy::too_many_arguments)]
pub async fn batch(
    list: PathBuf,
    formats: Vec<OutputFormat>,
    style: Option<PathBuf>,
    logo: Option<String>,
    out: PathBuf,
    size: u32,
    quality: u8,
) -> anyhow::Result<()> {
    let style = super::load_style(style).await?;

    let text = tokio::fs::read_to_string(&list)
        .await
        .with_context(|| format!("reading batch list {}", list.display()))?;
    let items: Vec<BatchItem> = serde_json::from_str(&text)
        .with_context(|| format!("parsing batch list {}", list.display()))?;

    let pipeline = Pipeline::new();
    let bytes = pipeline
        .to_archive(&items, &style, logo.as_deref(), &formats, size, quality)
        .await?;

    tokio::fs::write(&out, &bytes)
        .await
        .with_context(|| format!("writing {}", out.display()))?;

    println!(
        "\x1b[1;32m✓\x1b[0m Bundled {} item(s) x {} format(s) into {}",
        items.len(),
        formats.len(),
        out.display()
    );
    Ok(())
}
