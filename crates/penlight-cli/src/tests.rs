use std::path::PathBuf;

use penlight_core::codec::encode_query;
use penlight_core::store::{JsonFileStore, StateStore};
use penlight_core::{FontCatalog, TextSize};
use pretty_assertions::assert_eq;

use crate::cli::{PresetCommands, SizeArg};
use crate::commands::apply::{extract_query, run_apply};
use crate::commands::common::{resolve_data_dir, settings_summary};
use crate::commands::preset::{run_preset, slot_index};
use crate::commands::set::{normalize_color, run_set, SetArgs};
use crate::commands::share::share_url;
use crate::error::CliError;
use crate::fonts::parse_font_list;

fn catalog() -> FontCatalog {
    FontCatalog::new(["serif", "sans", "mono"])
}

fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("penlight"));
    (dir, store)
}

fn set_args() -> SetArgs {
    SetArgs {
        color: None,
        text: None,
        font: None,
        size: None,
        vertical: false,
        horizontal: false,
    }
}

#[test]
fn normalize_color_accepts_both_forms() {
    assert_eq!(normalize_color("#ff0000").unwrap(), "#ff0000");
    assert_eq!(normalize_color("ff0000").unwrap(), "#ff0000");
}

#[test]
fn normalize_color_rejects_junk() {
    assert!(matches!(
        normalize_color("red"),
        Err(CliError::InvalidColor(_))
    ));
    assert!(matches!(
        normalize_color("#ff00"),
        Err(CliError::InvalidColor(_))
    ));
}

#[test]
fn slot_index_is_one_based_and_bounded() {
    assert_eq!(slot_index(1).unwrap(), 0);
    assert_eq!(slot_index(5).unwrap(), 4);
    assert!(matches!(slot_index(0), Err(CliError::InvalidSlot(0))));
    assert!(matches!(slot_index(6), Err(CliError::InvalidSlot(6))));
}

#[test]
fn extract_query_handles_urls_and_raw_queries() {
    assert_eq!(extract_query("https://example.com/p/?c=ff0000"), "c=ff0000");
    assert_eq!(extract_query("c=ff0000&v=1"), "c=ff0000&v=1");
    assert_eq!(extract_query("https://example.com/p/"), "");
}

#[test]
fn share_url_omits_the_question_mark_without_a_query() {
    assert_eq!(share_url("https://example.com/", ""), "https://example.com/");
    assert_eq!(
        share_url("https://example.com/", "c=ff0000"),
        "https://example.com/?c=ff0000"
    );
}

#[test]
fn parse_font_list_trims_and_drops_empties() {
    let fonts = parse_font_list(" serif , sans ,, mono ").unwrap();
    assert_eq!(fonts.iter().collect::<Vec<_>>(), vec!["serif", "sans", "mono"]);
    assert!(parse_font_list("  ,, ").is_none());
}

#[test]
fn resolve_data_dir_prefers_the_explicit_flag() {
    let explicit = PathBuf::from("/tmp/penlight-test");
    assert_eq!(resolve_data_dir(Some(explicit.clone())), explicit);
}

#[test]
fn set_persists_every_edit_immediately() {
    let (_guard, store) = temp_store();
    run_set(
        SetArgs {
            color: Some("ff0000".to_string()),
            text: Some("Go!".to_string()),
            font: Some("mono".to_string()),
            size: Some(SizeArg::Large),
            vertical: true,
            ..set_args()
        },
        &store,
        &catalog(),
    )
    .unwrap();

    let settings = store.load_settings(&catalog());
    assert_eq!(settings.color, "#ff0000");
    assert_eq!(settings.text, "Go!");
    assert_eq!(settings.font, "mono");
    assert_eq!(settings.size, TextSize::Large);
    assert!(settings.is_vertical);
}

#[test]
fn set_rejects_fonts_outside_the_catalog() {
    let (_guard, store) = temp_store();
    let result = run_set(
        SetArgs {
            font: Some("comic".to_string()),
            ..set_args()
        },
        &store,
        &catalog(),
    );
    assert!(matches!(result, Err(CliError::UnknownFont(_))));
}

#[test]
fn shared_state_round_trips_into_a_fresh_store() {
    let (_guard, store) = temp_store();
    run_set(
        SetArgs {
            color: Some("#8b5cf6".to_string()),
            text: Some("応援中🎉".to_string()),
            font: Some("sans".to_string()),
            vertical: true,
            ..set_args()
        },
        &store,
        &catalog(),
    )
    .unwrap();
    run_preset(PresetCommands::Save { slot: 2 }, &store, &catalog()).unwrap();

    let settings = store.load_settings(&catalog());
    let presets = store.load_presets();
    let query = encode_query(&settings, &presets, &catalog());
    let url = share_url("https://example.com/p/", &query);

    let (_guard2, receiver) = temp_store();
    run_apply(&url, &receiver, &catalog()).unwrap();

    assert_eq!(receiver.load_settings(&catalog()), settings);
    assert_eq!(receiver.load_presets(), presets);
}

#[test]
fn loading_an_empty_preset_keeps_current_settings() {
    let (_guard, store) = temp_store();
    run_set(
        SetArgs {
            text: Some("keep me".to_string()),
            ..set_args()
        },
        &store,
        &catalog(),
    )
    .unwrap();

    run_preset(PresetCommands::Load { slot: 3 }, &store, &catalog()).unwrap();
    assert_eq!(store.load_settings(&catalog()).text, "keep me");
}

#[test]
fn settings_summary_mentions_the_load_bearing_fields() {
    let (_guard, store) = temp_store();
    let settings = store.load_settings(&catalog());
    let summary = settings_summary(&settings);
    assert!(summary.contains("#00aaff"));
    assert!(summary.contains("horizontal"));
}
