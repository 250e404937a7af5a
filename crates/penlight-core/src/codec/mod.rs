//! Wire and persisted-form codecs
//!
//! Three deterministic, synchronous transforms: the persisted JSON form
//! of settings and presets, the compact share-URL query form of the
//! current settings, and the `|`-delimited preset table string that rides
//! along in the same URL. None of them can fail outward; malformed input
//! decodes to defaults or empty slots.

pub mod persist;
pub mod preset;
pub mod query;

pub use query::{decode_query, encode_query, PresetRestore, ShareDecode};
