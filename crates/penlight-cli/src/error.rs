use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] penlight_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),
    #[error("Unknown font {0:?} (see `penlight fonts`)")]
    UnknownFont(String),
    #[error("Preset slot must be between 1 and 5, got {0}")]
    InvalidSlot(usize),
}
