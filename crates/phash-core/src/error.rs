use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the phash library
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("Cannot access file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a recognised or valid image
    #[error("Cannot decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image has no pixels to hash
    #[error("Image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Matrix shape does not match the planned transform
    #[error("Dimension mismatch: {0}")]
    Dimension(String),

    /// Text is not a 16 digit hexadecimal hash
    #[error("Invalid hash string: {0:?}")]
    InvalidHash(String),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}
