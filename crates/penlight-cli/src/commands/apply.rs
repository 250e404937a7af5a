use penlight_core::codec::{decode_query, PresetRestore};
use penlight_core::store::StateStore;
use penlight_core::FontCatalog;

use crate::commands::common::settings_summary;
use crate::error::CliError;

/// Startup/restore path: decode a shared URL, overwrite presets when the
/// table parses, then apply and persist the decoded settings.
pub fn run_apply(url: &str, store: &impl StateStore, fonts: &FontCatalog) -> Result<(), CliError> {
    let decoded = decode_query(extract_query(url), fonts);

    match decoded.presets {
        PresetRestore::Restored(table) => {
            store.save_presets(&table)?;
            println!("Presets restored from the shared URL.");
        }
        PresetRestore::Failed(reason) => {
            tracing::warn!("preset restore failed: {reason}");
            println!("Could not restore presets from this URL.");
        }
        PresetRestore::Absent => {}
    }

    if let Some(settings) = decoded.settings {
        store.save_settings(&settings)?;
        println!("{}", settings_summary(&settings));
    } else {
        println!("No display settings in this URL; current state kept.");
    }

    Ok(())
}

/// Pull the query part out of a share URL; raw query strings pass
/// through unchanged, and a URL with no query yields nothing.
pub fn extract_query(input: &str) -> &str {
    if let Some((_, query)) = input.split_once('?') {
        return query;
    }
    if input.contains("://") {
        ""
    } else {
        input
    }
}
