//! Single-key session persistence.
//!
//! [`SessionStore`] binds a [`KeyValueStore`] to one key and stores one JSON value
//! there. Saving overwrites the previous value wholesale, so at most one session is
//! ever persisted per key. A value that no longer parses is reported as absent.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KeyValueStore;

/// A JSON value persisted under a fixed key.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: S,
    key: &'static str,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S, key: &'static str) -> Self {
        Self { backend, key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read and parse the stored value. Missing and unparsable values are both `None`.
    pub async fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.backend.get(self.key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring unparsable value under {}: {}", self.key, e);
                None
            }
        }
    }

    pub async fn save<T: Serialize>(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.backend.set(self.key, &raw).await,
            Err(e) => tracing::error!("Failed to serialise value for {}: {}", self.key, e),
        }
    }

    pub async fn clear(&self) {
        self.backend.remove(self.key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        token: String,
    }

    #[tokio::test]
    async fn test_save_overwrites_and_clear_removes() {
        let store = SessionStore::new(MemoryStore::new(), "session");
        assert_eq!(store.load::<Blob>().await, None);

        store.save(&Blob { token: "a".into() }).await;
        store.save(&Blob { token: "b".into() }).await;
        assert_eq!(store.load::<Blob>().await, Some(Blob { token: "b".into() }));

        store.clear().await;
        assert_eq!(store.load::<Blob>().await, None);
    }

    #[tokio::test]
    async fn test_corrupted_value_loads_as_none() {
        let backend = MemoryStore::new();
        backend.set("session", "{not json").await;

        let store = SessionStore::new(backend.clone(), "session");
        assert_eq!(store.load::<Blob>().await, None);

        // The corrupted value is left alone until the next save or clear.
        assert_eq!(backend.get("session").await.as_deref(), Some("{not json"));
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let backend = MemoryStore::new();
        let a = SessionStore::new(backend.clone(), "a");
        let b = SessionStore::new(backend, "b");

        a.save(&Blob { token: "x".into() }).await;
        assert_eq!(b.load::<Blob>().await, None);
        b.clear().await;
        assert!(a.load::<Blob>().await.is_some());
    }
}
