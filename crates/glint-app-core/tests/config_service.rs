// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use glint_app_core::{ConfigError, ConfigService, PreviewSettings, PREVIEW_SETTINGS_KEY};
use glint_dry_tests::InMemoryConfigStore;

#[test]
fn missing_settings_load_as_none_and_default() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());

    let loaded: Option<PreviewSettings> = service.load(PREVIEW_SETTINGS_KEY).unwrap();
    assert!(loaded.is_none());
    let fallback: PreviewSettings = service.load_or_default(PREVIEW_SETTINGS_KEY);
    assert_eq!(fallback, PreviewSettings::default());
    assert_eq!(store.load_count(), 2);
}

#[test]
fn saved_settings_round_trip() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());
    let settings = PreviewSettings {
        hue_steps: 24,
        frame_length: 2,
        emissive_divisor: 6.0,
    };

    service.save(PREVIEW_SETTINGS_KEY, &settings).unwrap();
    assert!(store.contains_key(PREVIEW_SETTINGS_KEY));
    let loaded: PreviewSettings = service.load_or_default(PREVIEW_SETTINGS_KEY);
    assert_eq!(loaded, settings);
}

#[test]
fn empty_blob_is_treated_as_missing() {
    let service = ConfigService::new(InMemoryConfigStore::with_entry(PREVIEW_SETTINGS_KEY, b""));
    let loaded: Option<PreviewSettings> = service.load(PREVIEW_SETTINGS_KEY).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn store_failure_surfaces_from_load_but_not_load_or_default() {
    let store = InMemoryConfigStore::new();
    store.set_fail_on_load(true);
    let service = ConfigService::new(store);

    assert!(matches!(
        service.load::<PreviewSettings>(PREVIEW_SETTINGS_KEY),
        Err(ConfigError::Other(_))
    ));
    let fallback: PreviewSettings = service.load_or_default(PREVIEW_SETTINGS_KEY);
    assert_eq!(fallback, PreviewSettings::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let service = ConfigService::new(InMemoryConfigStore::with_entry(
        PREVIEW_SETTINGS_KEY,
        br#"{"hue_steps": "many"}"#,
    ));
    assert!(matches!(
        service.load::<PreviewSettings>(PREVIEW_SETTINGS_KEY),
        Err(ConfigError::Serde(_))
    ));
}

#[test]
fn save_failure_is_reported() {
    let store = InMemoryConfigStore::new();
    store.set_fail_on_save(true);
    let service = ConfigService::new(store);
    assert!(service
        .save(PREVIEW_SETTINGS_KEY, &PreviewSettings::default())
        .is_err());
}
