//! Error types for penlight-core

use thiserror::Error;

/// Result type alias using penlight-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in penlight-core operations
///
/// The wire codecs never surface errors; they fall back to defaults or
/// drop the affected slot instead. These variants cover the store layer
/// and direct table manipulation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Preset slot index outside the fixed table
    #[error("Preset slot out of range: {0}")]
    SlotOutOfRange(usize),
}
