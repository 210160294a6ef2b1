//! Export adapters: rasterization, PDF conversion, and archive
//! bundling. All of them consume the rendered SVG as an opaque,
//! self-contained document.

mod archive;
mod pdf;
mod raster;

pub use archive::bundle;
pub use pdf::svg_to_pdf;
pub use raster::{svg_to_jpeg, svg_to_png};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}
