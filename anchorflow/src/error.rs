//! Error types for the edges of the layout system.
//!
//! The layout passes themselves never fail. Errors only come from loading
//! documents and configuration, probing image headers, and host contract
//! violations such as negative measure sizes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("negative measure size: {0}")]
    NegativeMeasure(i32),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
