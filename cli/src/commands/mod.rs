//! CLI command implementations.

mod batch;
mod render;

pub use batch::batch;
pub use render::render;

use std::path::PathBuf;

use anyhow::Context;
use qrglyph_core::StyleConfig;

/// Load a style config from a JSON file, or fall back to defaults.
pub(crate) async fn load_style(path: Option<PathBuf>) -> anyhow::Result<StyleConfig> {
    match path {
        Some(path) => {
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading style file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing style file {}", path.display()))
        }
        None => Ok(StyleConfig::default()),
    }
}
