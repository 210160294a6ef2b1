//! Qrglyph Core - Stylable QR code vector rendering library
//!
//! Renders a scannable, stylable QR code as a self-contained SVG
//! document: rounded "dot" modules, independently styled finder-pattern
//! ("eye") shapes, and an optional embedded logo occupying a
//! scan-preserving cleared area at the symbol center. Export adapters
//! convert the vector output to PNG, JPEG, PDF, or a zip bundle.

pub mod export;
pub mod layout;
pub mod logo;
pub mod matrix;
pub mod render;
pub mod style;

mod error;
mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{BatchItem, Pipeline};

// Re-export key types for convenience
pub use export::OutputFormat;
pub use logo::{FsLogoLoader, LogoLoader, LogoProfile, LogoResolver};
pub use matrix::{MatrixSource, ModuleMatrix, QrMatrixSource};
pub use style::{CanvasSizing, EcLevel, LogoAreaTiers, StyleConfig};
