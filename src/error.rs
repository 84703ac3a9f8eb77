use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Empty region: every pixel has zero alpha")]
    EmptyRegion,
}
