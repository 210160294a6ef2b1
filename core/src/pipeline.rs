//! Render pipeline tying the resolver, matrix source, layout engine,
//! and export adapters together.

use serde::{Deserialize, Serialize};

use crate::export::{self, OutputFormat};
use crate::layout::layout;
use crate::logo::{FsLogoLoader, LogoLoader, LogoResolver};
use crate::matrix::{MatrixSource, QrMatrixSource};
use crate::render::render;
use crate::style::StyleConfig;
use crate::{Error, Result};

/// One batch entry: the payload to encode and the output file stem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    pub payload: String,
    pub name: String,
}

/// Stateless render pipeline, except for the resolver's single-slot
/// logo cache. A render is a pure function of `(payload, style,
/// logo reference)` given a warm cache.
pub struct Pipeline<L = FsLogoLoader, S = QrMatrixSource> {
    resolver: LogoResolver<L>,
    source: S,
}

impl Pipeline {
    /// Pipeline with filesystem logo loading and the default encoder.
    pub fn new() -> Self {
        Self::with_parts(FsLogoLoader, QrMatrixSource)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LogoLoader, S: MatrixSource> Pipeline<L, S> {
    pub fn with_parts(loader: L, source: S) -> Self {
        Self {
            resolver: LogoResolver::new(loader),
            source,
        }
    }

    /// Render one payload to a styled SVG document.
    pub async fn render_svg(
        &self,
        payload: &str,
        style: &StyleConfig,
        logo: Option<&str>,
    ) -> Result<String> {
        let profile = self.resolver.resolve(logo).await?;
        let matrix = self
            .source
            .encode(payload, style.error_correction, style.mask_pattern)?;
        tracing::debug!(width = matrix.width(), "encoded module matrix");

        let laid = layout(&matrix, profile.as_ref(), style);
        Ok(render(&laid, profile.as_ref(), style))
    }

    /// Render and rasterize to `size`-square PNG bytes.
    pub async fn to_png(
        &self,
        payload: &str,
        style: &StyleConfig,
        logo: Option<&str>,
        size: u32,
    ) -> Result<Vec<u8>> {
        let svg = self.render_svg(payload, style, logo).await?;
        export::svg_to_png(&svg, size)
    }

    /// Render and rasterize to `size`-square JPEG bytes.
    pub async fn to_jpeg(
        &self,
        payload: &str,
        style: &StyleConfig,
        logo: Option<&str>,
        size: u32,
        quality: u8,
    ) -> Result<Vec<u8>> {
        let svg = self.render_svg(payload, style, logo).await?;
        export::svg_to_jpeg(&svg, size, quality)
    }

    /// Render and convert to a single-page PDF.
    pub async fn to_pdf(
        &self,
        payload: &str,
        style: &StyleConfig,
        logo: Option<&str>,
    ) -> Result<Vec<u8>> {
        let svg = self.render_svg(payload, style, logo).await?;
        export::svg_to_pdf(&svg)
    }

    /// Render a batch of payloads sharing one style and logo into a zip
    /// archive with one file per requested format per item.
    ///
    /// Fail-fast: an empty format list is rejected before any work, and
    /// the first failing item aborts the whole batch.
    pub async fn to_archive(
        &self,
        items: &[BatchItem],
        style: &StyleConfig,
        logo: Option<&str>,
        formats: &[OutputFormat],
        size: u32,
        quality: u8,
    ) -> Result<Vec<u8>> {
        if formats.is_empty() {
            return Err(Error::EmptyFormatList);
        }

        let mut renders = Vec::with_capacity(items.len());
        for item in items {
            let svg = self.render_svg(&item.payload, style, logo).await?;
            renders.push((item.name.clone(), svg));
        }
        tracing::info!(items = renders.len(), formats = formats.len(), "bundling batch archive");
        export::bundle(&renders, formats, size, quality)
    }
}
