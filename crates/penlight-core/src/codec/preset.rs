//! Preset table wire codec
//!
//! A preset table travels inside the share URL as a single parameter:
//! five `|`-separated segments, one per slot, each either empty or
//! `color~textBase64~fontIndex~verticalFlag`. The font index is a
//! zero-based position in the host's font catalog, resolved against the
//! catalog supplied at decode time.

use base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::models::color::{display_color, wire_color};
use crate::models::{FontCatalog, Preset, PresetTable, PRESET_SLOTS};

const SLOT_SEPARATOR: &str = "|";
const FIELD_SEPARATOR: &str = "~";
const SLOT_FIELDS: usize = 4;

/// Encode one slot.
///
/// Empty slots encode to the empty string, and so does a slot whose font
/// is missing from `fonts`: such a preset is silently dropped from the
/// share URL rather than rejected. That drop is part of the codec
/// contract.
fn encode_slot(slot: Option<&Preset>, fonts: &FontCatalog) -> String {
    let Some(preset) = slot else {
        return String::new();
    };
    let Some(font_index) = fonts.index_of(&preset.font) else {
        return String::new();
    };

    let color = wire_color(&preset.color);
    let text = BASE64_STANDARD.encode(preset.text.as_bytes());
    let vertical = if preset.is_vertical { "1" } else { "0" };
    format!("{color}{FIELD_SEPARATOR}{text}{FIELD_SEPARATOR}{font_index}{FIELD_SEPARATOR}{vertical}")
}

/// Encode the full table.
///
/// A table with nothing to carry (every slot empty or dropped) encodes to
/// the empty string, which the query assembler turns into an omitted
/// parameter.
pub fn encode_table(table: &PresetTable, fonts: &FontCatalog) -> String {
    let segments: Vec<String> = table
        .iter()
        .map(|slot| encode_slot(slot.as_ref(), fonts))
        .collect();
    if segments.iter().all(String::is_empty) {
        return String::new();
    }
    segments.join(SLOT_SEPARATOR)
}

/// Decode a wire table against the decode-time font catalog.
///
/// Individually malformed segments (wrong field count, non-numeric or
/// out-of-range font index) become empty slots. The restore fails as a
/// whole only when the string has the wrong slot count or a text payload
/// that is not valid base64-encoded UTF-8.
pub fn decode_table(wire: &str, fonts: &FontCatalog) -> Result<PresetTable, String> {
    let segments: Vec<&str> = wire.split(SLOT_SEPARATOR).collect();
    if segments.len() != PRESET_SLOTS {
        return Err(format!(
            "expected {PRESET_SLOTS} preset slots, got {}",
            segments.len()
        ));
    }

    let mut slots: [Option<Preset>; PRESET_SLOTS] = Default::default();
    for (slot, segment) in slots.iter_mut().zip(segments) {
        *slot = decode_slot(segment, fonts)?;
    }
    Ok(PresetTable::from_slots(slots))
}

fn decode_slot(segment: &str, fonts: &FontCatalog) -> Result<Option<Preset>, String> {
    if segment.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = segment.split(FIELD_SEPARATOR).collect();
    if fields.len() != SLOT_FIELDS {
        return Ok(None);
    }
    let Ok(font_index) = fields[2].parse::<usize>() else {
        return Ok(None);
    };
    let Some(font) = fonts.get(font_index) else {
        return Ok(None);
    };

    let bytes = BASE64_STANDARD
        .decode(fields[1])
        .map_err(|error| format!("invalid preset text encoding: {error}"))?;
    let text = String::from_utf8(bytes)
        .map_err(|error| format!("invalid preset text encoding: {error}"))?;

    Ok(Some(Preset {
        color: display_color(fields[0]),
        text,
        font: font.to_string(),
        is_vertical: fields[3] == "1",
    }))
}
