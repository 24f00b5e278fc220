//! # Key-value persistence contract
//!
//! [`KeyValueStore`] is the small async interface every client-local storage backend
//! implements: `get`/`set`/`remove` of string values under string keys. Each
//! operation touches exactly one key, which is all the session layer needs. The
//! browser's `localStorage` gives the same single-key atomicity.
//!
//! | Backend | Module | Used by |
//! |---------|--------|---------|
//! | [`crate::MemoryStore`] | `memory` | tests, native fallback |
//! | [`crate::FileStore`] | `file_store` | desktop / native builds |
//! | `LocalStorageStore` | `local` | web (WASM + `web` feature) |
//!
//! Backends swallow their own I/O errors: a failed read is `None`, a failed write is a
//! no-op logged at `warn`. A broken storage layer degrades to "signed out".

use std::future::Future;

/// Async trait for storing and retrieving string values by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = ()>;
    fn remove(&self, key: &str) -> impl Future<Output = ()>;
}
