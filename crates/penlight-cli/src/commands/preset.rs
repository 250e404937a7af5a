use penlight_core::models::PRESET_SLOTS;
use penlight_core::store::StateStore;
use penlight_core::{FontCatalog, Preset};

use crate::cli::PresetCommands;
use crate::commands::common::{orientation_label, settings_summary};
use crate::error::CliError;

pub fn run_preset(
    command: PresetCommands,
    store: &impl StateStore,
    fonts: &FontCatalog,
) -> Result<(), CliError> {
    match command {
        PresetCommands::Save { slot } => {
            let index = slot_index(slot)?;
            let settings = store.load_settings(fonts);
            let mut presets = store.load_presets();
            presets.set(index, Preset::from_settings(&settings))?;
            store.save_presets(&presets)?;
            println!("Saved preset {slot}.");
        }
        PresetCommands::Load { slot } => {
            let index = slot_index(slot)?;
            let presets = store.load_presets();
            match presets.get(index) {
                Some(preset) => {
                    let settings = preset.apply(&store.load_settings(fonts));
                    store.save_settings(&settings)?;
                    println!("{}", settings_summary(&settings));
                }
                None => println!("Preset {slot} is empty."),
            }
        }
        PresetCommands::List { json } => {
            let presets = store.load_presets();
            if json {
                println!("{}", serde_json::to_string_pretty(&presets)?);
            } else {
                for (index, slot) in presets.iter().enumerate() {
                    match slot {
                        Some(preset) => println!(
                            "{}. {} {:?} in {}, {}",
                            index + 1,
                            preset.color,
                            preset.text,
                            preset.font,
                            orientation_label(preset.is_vertical)
                        ),
                        None => println!("{}. (empty)", index + 1),
                    }
                }
            }
        }
    }
    Ok(())
}

/// Slots are 1-based on the command line, 0-based in the table.
pub fn slot_index(slot: usize) -> Result<usize, CliError> {
    if (1..=PRESET_SLOTS).contains(&slot) {
        Ok(slot - 1)
    } else {
        Err(CliError::InvalidSlot(slot))
    }
}
