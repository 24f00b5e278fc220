//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in its own
//! file under a base directory. It is used on native builds so a signed-in session
//! survives restarts, the same way `localStorage` survives page reloads on the web.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── kv/
//!     └── <key>          # raw value, UTF-8
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/travelnotes/` |
//! | Linux | `~/.local/share/travelnotes/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\travelnotes\` |

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entries_dir(&self) -> PathBuf {
        self.base.join("kv")
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.entries_dir().join(name)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
        }
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "travelnotes_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = temp_base("reopen");

        let store = FileStore::new(dir.clone());
        store.set("mock_session", "{\"a\":1}").await;

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(
            reopened.get("mock_session").await.as_deref(),
            Some("{\"a\":1}")
        );

        reopened.remove("mock_session").await;
        assert!(store.get("mock_session").await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_key_is_sanitised_into_file_name() {
        let dir = temp_base("sanitise");
        let store = FileStore::new(dir.clone());

        store.set("../escape/attempt", "x").await;
        assert!(dir.join("kv").join("___escape_attempt").exists());
        assert_eq!(store.get("../escape/attempt").await.as_deref(), Some("x"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_noop() {
        let dir = temp_base("missing");
        let store = FileStore::new(dir.clone());
        store.remove("never-set").await;
        assert!(store.get("never-set").await.is_none());
    }
}
