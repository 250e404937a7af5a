//! Share-URL query codec
//!
//! Current settings travel as single-letter query parameters (`c`, `t`,
//! `f`, `s`, `v`) and the preset table as `p`. Every key is optional and
//! omission means "use the default" on decode, so a URL with no settings
//! keys at all leaves the receiving display untouched. Unknown keys are
//! ignored.

use crate::codec::preset;
use crate::models::color::{display_color, wire_color};
use crate::models::{DisplaySettings, FontCatalog, PresetTable, TextSize, DEFAULT_COLOR};

/// Result of decoding one share query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDecode {
    /// Decoded settings; `None` when no settings-bearing key was present.
    pub settings: Option<DisplaySettings>,
    /// Preset table restore outcome.
    pub presets: PresetRestore,
}

/// Outcome of the preset (`p`) parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetRestore {
    /// No `p` parameter in the query.
    Absent,
    /// Table parsed; the host overwrites the whole persisted table.
    Restored(PresetTable),
    /// `p` was present but did not parse; the host shows a notice.
    Failed(String),
}

/// Build the query string for a share URL.
///
/// Keys with nothing to say are omitted: empty text, default size,
/// horizontal orientation, and a preset table with no encodable slots.
/// Values are percent-encoded here; callers append the result verbatim.
pub fn encode_query(
    settings: &DisplaySettings,
    presets: &PresetTable,
    fonts: &FontCatalog,
) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    let color = wire_color(&settings.color);
    if !color.is_empty() {
        pairs.push(("c", color.to_string()));
    }
    if !settings.text.is_empty() {
        pairs.push(("t", settings.text.clone()));
    }
    if !settings.font.is_empty() {
        pairs.push(("f", settings.font.clone()));
    }
    if settings.size != TextSize::default() {
        pairs.push(("s", settings.size.query_code().to_string()));
    }
    if settings.is_vertical {
        pairs.push(("v", "1".to_string()));
    }

    let table = preset::encode_table(presets, fonts);
    if !table.is_empty() {
        pairs.push(("p", table));
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a share query string (with or without the leading `?`).
///
/// Settings are produced when `p` or any of `c`/`t`/`f`/`v` is present,
/// with per-key defaults filling the gaps; `s` alone does not trigger a
/// settings decode. Nothing here fails: malformed values fall back to
/// defaults, and a broken preset table is reported, not raised.
pub fn decode_query(query: &str, fonts: &FontCatalog) -> ShareDecode {
    let pairs = parse_pairs(query);
    let get = |key: &str| {
        pairs
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    };

    let presets = match get("p") {
        None => PresetRestore::Absent,
        Some(wire) => match preset::decode_table(wire, fonts) {
            Ok(table) => PresetRestore::Restored(table),
            Err(reason) => PresetRestore::Failed(reason),
        },
    };

    let triggered = ["c", "t", "f", "v"].iter().any(|key| get(key).is_some())
        || !matches!(presets, PresetRestore::Absent);
    let settings = triggered.then(|| {
        let color = match get("c").filter(|value| !value.is_empty()) {
            Some(wire) => display_color(wire),
            None => DEFAULT_COLOR.to_string(),
        };
        let font = match get("f").filter(|value| !value.is_empty()) {
            Some(font) => font.to_string(),
            None => fonts.first().unwrap_or_default().to_string(),
        };
        DisplaySettings {
            color,
            text: get("t").unwrap_or_default().to_string(),
            font,
            size: get("s").map(TextSize::from_query_code).unwrap_or_default(),
            is_vertical: get("v") == Some("1"),
        }
    });

    ShareDecode { settings, presets }
}

/// Split a raw query into percent-decoded key/value pairs.
///
/// Keeps the first occurrence of a duplicated key and drops pairs whose
/// percent-encoding does not decode.
fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            let key = urlencoding::decode(key).ok()?;
            let value = urlencoding::decode(value).ok()?;
            Some((key.into_owned(), value.into_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Preset;

    fn catalog() -> FontCatalog {
        FontCatalog::new(["serif", "sans", "mono"])
    }

    fn full_settings() -> DisplaySettings {
        DisplaySettings {
            color: "#ff0000".to_string(),
            text: "Go!".to_string(),
            font: "serif".to_string(),
            size: TextSize::Large,
            is_vertical: true,
        }
    }

    #[test]
    fn encodes_the_documented_query() {
        let query = encode_query(&full_settings(), &PresetTable::default(), &catalog());
        assert_eq!(query, "c=ff0000&t=Go%21&f=serif&s=l&v=1");
    }

    #[test]
    fn documented_query_decodes_to_the_same_record() {
        let decoded = decode_query("c=ff0000&t=Go%21&f=serif&s=l&v=1", &catalog());
        assert_eq!(decoded.settings, Some(full_settings()));
        assert_eq!(decoded.presets, PresetRestore::Absent);
    }

    #[test]
    fn settings_round_trip_through_the_query_form() {
        let settings = DisplaySettings {
            color: "#8b5cf6".to_string(),
            text: "応援中🎉".to_string(),
            font: "mono".to_string(),
            size: TextSize::Medium,
            is_vertical: false,
        };
        let query = encode_query(&settings, &PresetTable::default(), &catalog());
        let decoded = decode_query(&query, &catalog());
        assert_eq!(decoded.settings, Some(settings));
    }

    #[test]
    fn default_size_and_orientation_are_omitted() {
        let mut settings = full_settings();
        settings.size = TextSize::Medium;
        settings.is_vertical = false;

        let query = encode_query(&settings, &PresetTable::default(), &catalog());
        assert_eq!(query, "c=ff0000&t=Go%21&f=serif");
    }

    #[test]
    fn empty_text_is_omitted() {
        let mut settings = full_settings();
        settings.text = String::new();

        let query = encode_query(&settings, &PresetTable::default(), &catalog());
        assert!(!query.contains("t="));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let decoded = decode_query("t=Hi", &catalog());
        let settings = decoded.settings.unwrap();
        assert_eq!(settings.color, "#00aaff");
        assert_eq!(settings.font, "serif");
        assert_eq!(settings.size, TextSize::Medium);
        assert!(!settings.is_vertical);
    }

    #[test]
    fn no_trigger_key_yields_no_settings() {
        assert_eq!(decode_query("", &catalog()).settings, None);
        // `s` and unknown keys alone do not trigger a settings decode.
        assert_eq!(decode_query("s=l&x=1", &catalog()).settings, None);
    }

    #[test]
    fn preset_parameter_alone_triggers_default_settings() {
        let mut table = PresetTable::default();
        table
            .set(
                0,
                Preset {
                    color: "#00ff00".to_string(),
                    text: "Hi".to_string(),
                    font: "mono".to_string(),
                    is_vertical: false,
                },
            )
            .unwrap();
        let query = encode_query(
            &DisplaySettings {
                color: String::new(),
                text: String::new(),
                font: String::new(),
                size: TextSize::Medium,
                is_vertical: false,
            },
            &table,
            &catalog(),
        );
        assert_eq!(query, "p=00ff00~SGk%3D~2~0%7C%7C%7C%7C");

        let decoded = decode_query(&query, &catalog());
        assert_eq!(decoded.presets, PresetRestore::Restored(table));
        assert_eq!(
            decoded.settings,
            Some(DisplaySettings::defaults(&catalog()))
        );
    }

    #[test]
    fn broken_preset_parameter_is_reported_not_raised() {
        let decoded = decode_query("c=ff0000&p=oops", &catalog());
        assert!(matches!(decoded.presets, PresetRestore::Failed(_)));
        // The settings decode still runs.
        assert_eq!(decoded.settings.unwrap().color, "#ff0000");
    }

    #[test]
    fn presets_ride_along_with_settings() {
        let mut table = PresetTable::default();
        table
            .set(
                4,
                Preset {
                    color: "#ec4899".to_string(),
                    text: "ラスト".to_string(),
                    font: "sans".to_string(),
                    is_vertical: true,
                },
            )
            .unwrap();

        let query = encode_query(&full_settings(), &table, &catalog());
        let decoded = decode_query(&query, &catalog());
        assert_eq!(decoded.settings, Some(full_settings()));
        assert_eq!(decoded.presets, PresetRestore::Restored(table));
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        let decoded = decode_query("?c=00ff00", &catalog());
        assert_eq!(decoded.settings.unwrap().color, "#00ff00");
    }
}
