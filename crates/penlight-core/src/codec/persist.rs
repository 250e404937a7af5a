//! Persisted-form codec for settings and presets
//!
//! The local store holds two JSON entries: the current settings record
//! and the preset table. Decoding is total. A missing entry, an entry
//! that is not valid JSON, and an entry with missing fields all converge
//! on the same per-field defaults; the codec does not distinguish
//! "corrupt" from "absent".

use serde::Deserialize;

use crate::error::Result;
use crate::models::{DisplaySettings, FontCatalog, PresetTable, TextSize, DEFAULT_COLOR};

/// Raw persisted settings record; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSettings {
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    font: Option<String>,
    #[serde(default)]
    size: Option<TextSize>,
    #[serde(default)]
    is_vertical: Option<bool>,
}

/// Serialize the full settings record for the store.
///
/// Always a full-record write; there is no partial update.
pub fn encode_settings(settings: &DisplaySettings) -> Result<String> {
    Ok(serde_json::to_string_pretty(settings)?)
}

/// Decode a possibly-absent persisted settings blob.
///
/// Missing or empty fields fall back per field: color `#00aaff`, empty
/// text, the catalog's first font, medium size, horizontal orientation.
pub fn decode_settings(raw: Option<&str>, fonts: &FontCatalog) -> DisplaySettings {
    let record = raw
        .and_then(|raw| serde_json::from_str::<PersistedSettings>(raw).ok())
        .unwrap_or_default();

    DisplaySettings {
        color: record
            .color
            .filter(|color| !color.is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        text: record.text.unwrap_or_default(),
        font: record
            .font
            .filter(|font| !font.is_empty())
            .unwrap_or_else(|| fonts.first().unwrap_or_default().to_string()),
        size: record.size.unwrap_or_default(),
        is_vertical: record.is_vertical.unwrap_or_default(),
    }
}

/// Serialize the full preset table for the store.
pub fn encode_presets(presets: &PresetTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(presets)?)
}

/// Decode a possibly-absent persisted preset table.
///
/// Anything that does not parse as a five-slot table yields an empty
/// table.
pub fn decode_presets(raw: Option<&str>) -> PresetTable {
    raw.and_then(|raw| serde_json::from_str::<PresetTable>(raw).ok())
        .unwrap_or_default()
}
