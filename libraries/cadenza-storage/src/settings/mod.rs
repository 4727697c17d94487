//! User settings management
//!
//! Settings are stored as key-value pairs with JSON values, one key per
//! setting under the `settings.` prefix.
//!
//! # Example
//!
//! ```rust
//! use cadenza_storage::{settings, MemoryStore};
//!
//! let store = MemoryStore::new();
//! settings::set_setting(&store, settings::SETTING_DOUBLE_CLICK_MS, &serde_json::json!(250))?;
//!
//! let value = settings::get_setting(&store, settings::SETTING_DOUBLE_CLICK_MS)?;
//! assert_eq!(value, Some(serde_json::json!(250)));
//! # Ok::<(), cadenza_storage::StorageError>(())
//! ```

use cadenza_core::EnqueueBehaviour;

use crate::error::Result;
use crate::kv::KeyValueStore;

/// Prefix shared by every settings key
pub const SETTINGS_PREFIX: &str = "settings.";

/// How clicks feed the queue (`{"onClick": bool, "clearBefore": bool}`)
pub const SETTING_ENQUEUE_BEHAVIOUR: &str = "settings.enqueue-behaviour";

/// Double-click window in milliseconds
pub const SETTING_DOUBLE_CLICK_MS: &str = "settings.double-click-ms";

/// Get a single setting value
///
/// Returns `Ok(None)` if the setting was never stored.
///
/// # Errors
///
/// Returns an error if the store fails or the stored value is not JSON
pub fn get_setting(store: &impl KeyValueStore, key: &str) -> Result<Option<serde_json::Value>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Set a setting value
///
/// # Errors
///
/// Returns an error if the store fails
pub fn set_setting(store: &impl KeyValueStore, key: &str, value: &serde_json::Value) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Delete a setting, falling back to its default on the next read
///
/// # Errors
///
/// Returns an error if the store fails
pub fn delete_setting(store: &impl KeyValueStore, key: &str) -> Result<()> {
    store.remove(key)
}

/// Stored enqueue behaviour, or the default if none was saved
///
/// # Errors
///
/// Returns an error if the store fails or the stored value is malformed
pub fn load_enqueue_behaviour(store: &impl KeyValueStore) -> Result<EnqueueBehaviour> {
    Ok(stored_enqueue_behaviour(store)?.unwrap_or_default())
}

/// Stored enqueue behaviour, `None` if none was saved
///
/// # Errors
///
/// Returns an error if the store fails or the stored value is malformed
pub fn stored_enqueue_behaviour(store: &impl KeyValueStore) -> Result<Option<EnqueueBehaviour>> {
    match get_setting(store, SETTING_ENQUEUE_BEHAVIOUR)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Store the enqueue behaviour
///
/// # Errors
///
/// Returns an error if the store fails
pub fn save_enqueue_behaviour(store: &impl KeyValueStore, behaviour: EnqueueBehaviour) -> Result<()> {
    set_setting(store, SETTING_ENQUEUE_BEHAVIOUR, &serde_json::to_value(behaviour)?)
}
