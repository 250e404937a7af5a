//! Host-owned font catalog.
//!
//! The codec layer treats fonts as an opaque ordered enumeration; this
//! module supplies the built-in list and the environment override.

use penlight_core::FontCatalog;

/// Comma-separated override for the font list.
pub const FONTS_ENV_VAR: &str = "PENLIGHT_FONTS";

/// Built-in font identifiers, in display order.
///
/// Preset wire slots reference fonts by position in this list, so the
/// order is part of the shared-URL surface: append new fonts, never
/// reorder.
const DEFAULT_FONTS: &[&str] = &["sans-serif", "serif", "monospace", "cursive", "fantasy"];

/// Resolve the active catalog.
///
/// `PENLIGHT_FONTS` wins when set and non-empty; otherwise the built-in
/// list is used.
pub fn font_catalog() -> FontCatalog {
    std::env::var(FONTS_ENV_VAR)
        .ok()
        .and_then(|raw| parse_font_list(&raw))
        .unwrap_or_else(|| FontCatalog::new(DEFAULT_FONTS.iter().copied()))
}

/// Parse a comma-separated font list; `None` when no usable entry remains.
pub fn parse_font_list(raw: &str) -> Option<FontCatalog> {
    let fonts: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|font| !font.is_empty())
        .map(ToString::to_string)
        .collect();
    if fonts.is_empty() {
        None
    } else {
        Some(FontCatalog::new(fonts))
    }
}
