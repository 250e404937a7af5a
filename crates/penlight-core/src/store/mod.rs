//! Local key-value store for display state
//!
//! The native counterpart of the original app's browser-local storage:
//! two entries, one for the current settings and one for the preset
//! table, each rewritten in full on every change. All access is
//! synchronous and single-threaded; each mutation completes before the
//! next host event is processed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::codec::persist;
use crate::error::Result;
use crate::models::{DisplaySettings, FontCatalog, PresetTable};

const SETTINGS_FILE_NAME: &str = "settings.json";
const PRESETS_FILE_NAME: &str = "presets.json";

/// Storage operations for display state.
///
/// Loads are best-effort and never fail: absent or unreadable state
/// decodes to defaults. Saves report I/O failures.
pub trait StateStore {
    /// Load the current settings.
    fn load_settings(&self, fonts: &FontCatalog) -> DisplaySettings;

    /// Persist the full settings record.
    fn save_settings(&self, settings: &DisplaySettings) -> Result<()>;

    /// Load the preset table.
    fn load_presets(&self) -> PresetTable;

    /// Persist the full preset table.
    fn save_presets(&self, presets: &PresetTable) -> Result<()>;
}

/// JSON-file implementation of `StateStore`.
///
/// Keeps `settings.json` and `presets.json` under one data directory,
/// created on first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_entry(&self, file_name: &str) -> Option<String> {
        let path = self.dir.join(file_name);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(error) if error.kind() == ErrorKind::NotFound => None,
            Err(error) => {
                tracing::warn!("failed to read {}: {error}", path.display());
                None
            }
        }
    }

    fn write_entry(&self, file_name: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(file_name), contents)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn load_settings(&self, fonts: &FontCatalog) -> DisplaySettings {
        persist::decode_settings(self.read_entry(SETTINGS_FILE_NAME).as_deref(), fonts)
    }

    fn save_settings(&self, settings: &DisplaySettings) -> Result<()> {
        self.write_entry(SETTINGS_FILE_NAME, &persist::encode_settings(settings)?)
    }

    fn load_presets(&self) -> PresetTable {
        persist::decode_presets(self.read_entry(PRESETS_FILE_NAME).as_deref())
    }

    fn save_presets(&self, presets: &PresetTable) -> Result<()> {
        self.write_entry(PRESETS_FILE_NAME, &persist::encode_presets(presets)?)
    }
}
