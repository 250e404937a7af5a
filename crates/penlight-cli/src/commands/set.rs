use penlight_core::models::color::is_valid_hex_color;
use penlight_core::store::StateStore;
use penlight_core::FontCatalog;

use crate::cli::SizeArg;
use crate::commands::common::settings_summary;
use crate::error::CliError;

pub struct SetArgs {
    pub color: Option<String>,
    pub text: Option<String>,
    pub font: Option<String>,
    pub size: Option<SizeArg>,
    pub vertical: bool,
    pub horizontal: bool,
}

pub fn run_set(
    args: SetArgs,
    store: &impl StateStore,
    fonts: &FontCatalog,
) -> Result<(), CliError> {
    let mut settings = store.load_settings(fonts);

    if let Some(color) = args.color {
        settings.color = normalize_color(&color)?;
    }
    if let Some(text) = args.text {
        settings.text = text;
    }
    if let Some(font) = args.font {
        if !fonts.contains(&font) {
            return Err(CliError::UnknownFont(font));
        }
        settings.font = font;
    }
    if let Some(size) = args.size {
        settings.size = size.into();
    }
    if args.vertical {
        settings.is_vertical = true;
    }
    if args.horizontal {
        settings.is_vertical = false;
    }

    store.save_settings(&settings)?;
    println!("{}", settings_summary(&settings));
    Ok(())
}

/// Accept a color with or without the leading `#`; reject anything that
/// is not six hex digits.
pub fn normalize_color(value: &str) -> Result<String, CliError> {
    let candidate = if value.starts_with('#') {
        value.to_string()
    } else {
        format!("#{value}")
    };
    if is_valid_hex_color(&candidate) {
        Ok(candidate)
    } else {
        Err(CliError::InvalidColor(value.to_string()))
    }
}
