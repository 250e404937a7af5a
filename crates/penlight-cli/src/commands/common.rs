//! Shared helpers for CLI commands.

use std::path::PathBuf;

use penlight_core::store::JsonFileStore;
use penlight_core::{DisplaySettings, TextSize};

/// Resolve the data directory: explicit flag first, then the platform
/// data dir, then the working directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("penlight")
    })
}

pub fn open_store(data_dir: Option<PathBuf>) -> JsonFileStore {
    JsonFileStore::new(resolve_data_dir(data_dir))
}

/// One-line summary of a settings record for command output.
pub fn settings_summary(settings: &DisplaySettings) -> String {
    let text = if settings.text.is_empty() {
        "(no text)".to_string()
    } else {
        format!("{:?}", settings.text)
    };
    let orientation = orientation_label(settings.is_vertical);
    format!(
        "{} {} in {}, {}, {}",
        settings.color,
        text,
        settings.font,
        size_label(settings.size),
        orientation
    )
}

pub const fn orientation_label(is_vertical: bool) -> &'static str {
    if is_vertical {
        "vertical"
    } else {
        "horizontal"
    }
}

pub const fn size_label(size: TextSize) -> &'static str {
    size.as_str()
}
