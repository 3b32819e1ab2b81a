//! Browser localStorage helpers for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize browser-only read/write behavior so state modules
//! can persist JSON without repeating web-sys glue. Outside the browser they
//! read nothing and write nothing.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable localStorage entry {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to persist localStorage entry {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}
