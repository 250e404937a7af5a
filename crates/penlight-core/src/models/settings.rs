//! Display settings model

use serde::{Deserialize, Serialize};

use crate::models::FontCatalog;

/// Fallback color applied when a persisted or shared color is missing.
pub const DEFAULT_COLOR: &str = "#00aaff";

/// Label size options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// Small label
    Small,
    /// Medium label
    #[default]
    Medium,
    /// Large label
    Large,
}

impl TextSize {
    /// Single-letter code carried in the share URL (`s` key).
    pub const fn query_code(self) -> &'static str {
        match self {
            Self::Small => "s",
            Self::Medium => "m",
            Self::Large => "l",
        }
    }

    /// Parse a query code; anything unrecognized falls back to the default.
    pub fn from_query_code(code: &str) -> Self {
        match code {
            "s" => Self::Small,
            "l" => Self::Large,
            _ => Self::Medium,
        }
    }

    /// Lowercase name, matching the persisted form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Current display state of the glow stick panel.
///
/// A value type with no identity: every edit replaces the record
/// wholesale and the host re-persists it in full. Serializes to the
/// persisted settings entry shape (`color`, `text`, `font`, `size`,
/// `isVertical`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Panel color as `#rrggbb`.
    pub color: String,
    /// Label shown on the panel; may be empty.
    pub text: String,
    /// Font identifier from the host's font catalog.
    pub font: String,
    /// Label size.
    #[serde(default)]
    pub size: TextSize,
    /// Vertical (tategaki) label orientation.
    #[serde(default)]
    pub is_vertical: bool,
}

impl DisplaySettings {
    /// Settings with every field at its documented default.
    ///
    /// The default font is the first entry of the supplied catalog, so an
    /// empty catalog yields an empty font identifier.
    pub fn defaults(fonts: &FontCatalog) -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            text: String::new(),
            font: fonts.first().unwrap_or_default().to_string(),
            size: TextSize::default(),
            is_vertical: false,
        }
    }
}
