use thiserror::Error;

/// Qrglyph error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load logo asset '{reference}': {message}")]
    AssetLoad { reference: String, message: String },

    #[error("logo asset '{0}' is not a vector image")]
    InvalidAssetFormat(String),

    #[error("payload could not be encoded: {0}")]
    Encoding(String),

    #[error("at least one output format must be selected")]
    EmptyFormatList,

    #[error("failed to rasterize vector output: {0}")]
    Raster(String),

    #[error("failed to produce PDF output: {0}")]
    Pdf(String),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
