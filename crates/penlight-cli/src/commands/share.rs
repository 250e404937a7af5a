use penlight_core::codec::encode_query;
use penlight_core::store::StateStore;
use penlight_core::FontCatalog;

use crate::error::CliError;

pub fn run_share(
    base_url: &str,
    store: &impl StateStore,
    fonts: &FontCatalog,
) -> Result<(), CliError> {
    let settings = store.load_settings(fonts);
    let presets = store.load_presets();
    let query = encode_query(&settings, &presets, fonts);
    println!("{}", share_url(base_url, &query));
    Ok(())
}

/// Append the query to the base URL; an empty query yields the bare URL.
pub fn share_url(base_url: &str, query: &str) -> String {
    if query.is_empty() {
        base_url.to_string()
    } else {
        format!("{base_url}?{query}")
    }
}
