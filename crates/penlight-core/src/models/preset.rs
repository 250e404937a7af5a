//! Preset table model

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::DisplaySettings;

/// Number of preset slots; fixed, never resized.
pub const PRESET_SLOTS: usize = 5;

/// One saved look: the display settings minus the size field.
///
/// Serializes to the persisted preset entry shape (`color`, `text`,
/// `font`, `isVertical`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Panel color as `#rrggbb`.
    pub color: String,
    /// Label text.
    pub text: String,
    /// Font identifier.
    pub font: String,
    /// Vertical label orientation.
    #[serde(default)]
    pub is_vertical: bool,
}

impl Preset {
    /// Capture the current display settings; the size field is not part
    /// of a preset.
    pub fn from_settings(settings: &DisplaySettings) -> Self {
        Self {
            color: settings.color.clone(),
            text: settings.text.clone(),
            font: settings.font.clone(),
            is_vertical: settings.is_vertical,
        }
    }

    /// Expand into display settings, carrying the size over from
    /// `current` since presets do not store one.
    pub fn apply(&self, current: &DisplaySettings) -> DisplaySettings {
        DisplaySettings {
            color: self.color.clone(),
            text: self.text.clone(),
            font: self.font.clone(),
            size: current.size,
            is_vertical: self.is_vertical,
        }
    }
}

/// Fixed table of five optional presets, indexed 0..4.
///
/// Slots change only through explicit overwrites; the table is never
/// reordered or resized, and the host rewrites it in full after every
/// change. Serializes to a five-element JSON array of `null` or preset
/// objects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetTable {
    slots: [Option<Preset>; PRESET_SLOTS],
}

impl PresetTable {
    /// Build a table from explicit slot contents.
    pub fn from_slots(slots: [Option<Preset>; PRESET_SLOTS]) -> Self {
        Self { slots }
    }

    /// Slot contents, or `None` for an empty or out-of-range slot.
    pub fn get(&self, index: usize) -> Option<&Preset> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Overwrite slot `index` with `preset`.
    pub fn set(&mut self, index: usize, preset: Preset) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::SlotOutOfRange(index))?;
        *slot = Some(preset);
        Ok(())
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate slots in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Option<Preset>> {
        self.slots.iter()
    }
}
