use penlight_core::store::StateStore;
use penlight_core::{DisplaySettings, FontCatalog, PresetTable};
use serde::Serialize;

use crate::commands::common::{orientation_label, size_label};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    settings: &'a DisplaySettings,
    presets: &'a PresetTable,
}

pub fn run_show(json: bool, store: &impl StateStore, fonts: &FontCatalog) -> Result<(), CliError> {
    let settings = store.load_settings(fonts);
    let presets = store.load_presets();

    if json {
        let output = ShowOutput {
            settings: &settings,
            presets: &presets,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Color:       {}", settings.color);
    println!(
        "Text:        {}",
        if settings.text.is_empty() {
            "(none)"
        } else {
            &settings.text
        }
    );
    println!("Font:        {}", settings.font);
    println!("Size:        {}", size_label(settings.size));
    println!("Orientation: {}", orientation_label(settings.is_vertical));
    println!();
    println!("Presets:");
    for (index, slot) in presets.iter().enumerate() {
        match slot {
            Some(preset) => println!(
                "  {}. {} {:?} in {}, {}",
                index + 1,
                preset.color,
                preset.text,
                preset.font,
                orientation_label(preset.is_vertical)
            ),
            None => println!("  {}. (empty)", index + 1),
        }
    }

    Ok(())
}
