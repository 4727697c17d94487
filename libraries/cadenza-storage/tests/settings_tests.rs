//! Integration tests for settings persistence
//!
//! Tests meaningful behavior of settings including:
//! - Settings persistence roundtrip (set/get)
//! - Update behavior (overwrite)
//! - Defaults for missing settings
//! - Error paths (malformed values)


use cadenza_core::EnqueueBehaviour;
use cadenza_storage::{settings, KeyValueStore, MemoryStore, StorageError};
use test_helpers::TestStore;

// ============================================================================
// Core Settings Behavior Tests
// ============================================================================

#[test]
fn test_get_missing_setting() {
    let store = MemoryStore::new();

    let result = settings::get_setting(&store, settings::SETTING_DOUBLE_CLICK_MS).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_update_existing_setting() {
    let test_store = TestStore::new();

    {
        let store = test_store.open();
        settings::set_setting(&store, settings::SETTING_DOUBLE_CLICK_MS, &serde_json::json!(300))
            .unwrap();
        settings::set_setting(&store, settings::SETTING_DOUBLE_CLICK_MS, &serde_json::json!(450))
            .unwrap();
    }

    let result =
        settings::get_setting(&test_store.open(), settings::SETTING_DOUBLE_CLICK_MS).unwrap();
    assert_eq!(result, Some(serde_json::json!(450)));
}

#[test]
fn test_delete_setting() {
    let store = MemoryStore::new();
    settings::set_setting(&store, settings::SETTING_DOUBLE_CLICK_MS, &serde_json::json!(1)).unwrap();

    settings::delete_setting(&store, settings::SETTING_DOUBLE_CLICK_MS).unwrap();

    assert_eq!(
        settings::get_setting(&store, settings::SETTING_DOUBLE_CLICK_MS).unwrap(),
        None
    );
}

#[test]
fn test_malformed_setting_is_an_error() {
    let store = MemoryStore::new();
    store.set(settings::SETTING_DOUBLE_CLICK_MS, "{oops").unwrap();

    let result = settings::get_setting(&store, settings::SETTING_DOUBLE_CLICK_MS);
    assert!(matches!(result, Err(StorageError::Serialization(_))));
}

// ============================================================================
// Enqueue Behaviour Tests
// ============================================================================

#[test]
fn test_enqueue_behaviour_defaults_when_missing() {
    let store = MemoryStore::new();

    let behaviour = settings::load_enqueue_behaviour(&store).unwrap();
    assert_eq!(behaviour, EnqueueBehaviour::default());
}

#[test]
fn test_enqueue_behaviour_roundtrip() {
    let test_store = TestStore::new();
    let behaviour = EnqueueBehaviour {
        on_click: false,
        clear_before: true,
    };

    settings::save_enqueue_behaviour(&test_store.open(), behaviour).unwrap();

    let loaded = settings::load_enqueue_behaviour(&test_store.open()).unwrap();
    assert_eq!(loaded, behaviour);
}

#[test]
fn test_enqueue_behaviour_stored_camel_case() {
    let store = MemoryStore::new();
    settings::save_enqueue_behaviour(
        &store,
        EnqueueBehaviour {
            on_click: true,
            clear_before: true,
        },
    )
    .unwrap();

    let raw = settings::get_setting(&store, settings::SETTING_ENQUEUE_BEHAVIOUR)
        .unwrap()
        .unwrap();
    assert_eq!(raw, serde_json::json!({"onClick": true, "clearBefore": true}));
}

#[test]
fn test_enqueue_behaviour_partial_value_fills_defaults() {
    let store = MemoryStore::new();
    store
        .set(settings::SETTING_ENQUEUE_BEHAVIOUR, r#"{"clearBefore": true}"#)
        .unwrap();

    let behaviour = settings::load_enqueue_behaviour(&store).unwrap();
    assert!(behaviour.on_click);
    assert!(behaviour.clear_before);
}

#[test]
fn test_enqueue_behaviour_wrong_type_is_an_error() {
    let store = MemoryStore::new();
    store
        .set(settings::SETTING_ENQUEUE_BEHAVIOUR, r#"{"onClick": "yes"}"#)
        .unwrap();

    assert!(settings::load_enqueue_behaviour(&store).is_err());
}

#[test]
fn test_stored_enqueue_behaviour_distinguishes_missing() {
    let store = MemoryStore::new();
    assert_eq!(settings::stored_enqueue_behaviour(&store).unwrap(), None);

    settings::save_enqueue_behaviour(&store, EnqueueBehaviour::default()).unwrap();
    assert_eq!(
        settings::stored_enqueue_behaviour(&store).unwrap(),
        Some(EnqueueBehaviour::default())
    );
}
