use penlight_core::FontCatalog;

use crate::fonts::FONTS_ENV_VAR;

pub fn run_fonts(fonts: &FontCatalog) {
    for (index, font) in fonts.iter().enumerate() {
        println!("{index}. {font}");
    }
    if std::env::var_os(FONTS_ENV_VAR).is_some() {
        println!("(catalog overridden by {FONTS_ENV_VAR})");
    }
}
