//! # Browser localStorage store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**. Every
//! call looks up `window.localStorage` afresh; when storage is unavailable (private
//! mode, sandboxed iframe) reads return `None` and writes are dropped, so the client
//! behaves as signed out instead of failing.

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to {key}");
        }
    }

    async fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, cannot remove {key}");
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("localStorage rejected removal of {key}");
        }
    }
}
