// file: src/error.rs
// version: 1.0.0
// guid: 4f2a9c1e-8b3d-4a57-9e06-c1d72f58a3b4

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error types for the image converter
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("VM error: {0}")]
    Vm(String),

    #[error("ZFS error: {0}")]
    Zfs(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("System error: {0}")]
    System(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new image error
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Create a new VM error
    pub fn vm(msg: impl Into<String>) -> Self {
        Self::Vm(msg.into())
    }

    /// Create a new ZFS error
    pub fn zfs(msg: impl Into<String>) -> Self {
        Self::Zfs(msg.into())
    }

    /// Create a new manifest error
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }
}
