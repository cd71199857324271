//! Key-value credential storage.
//!
//! The session layer persists two entries: an auth token string and a
//! JSON-encoded user profile blob. The `CredentialStore` trait abstracts
//! over where those entries live so the session logic can be tested against
//! an in-memory store.

use super::SessionError;
use log::*;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io::Write};

/// Key under which the simulated auth token is stored.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Key under which the JSON-encoded user profile is stored.
pub const USER_DATA_KEY: &str = "userData";

const FILE_NAME: &str = "credentials.json";

/// External key-value storage for credentials.
///
/// Reads report absence rather than failure; only mutations can fail.
pub trait CredentialStore {
    /// Return the value stored under `key`, or None if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove the entry under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

/// Credential store backed by a JSON file on disk.
///
pub struct FileCredentialStore {
    file_path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileCredentialStore {
    /// Open the store inside the given directory, reading any existing
    /// entries. A missing or malformed file yields an empty store rather
    /// than an error.
    ///
    pub fn open(directory: &Path) -> FileCredentialStore {
        let file_path = directory.join(FILE_NAME);
        let entries = match fs::read_to_string(&file_path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, Value>>(&contents) {
                Ok(raw) => raw
                    .into_iter()
                    .filter_map(|(key, value)| match value {
                        Value::String(text) => Some((key, text)),
                        other => Some((key, other.to_string())),
                    })
                    .collect(),
                Err(e) => {
                    warn!(
                        "Malformed credential store at {}, starting empty: {}",
                        file_path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        FileCredentialStore { file_path, entries }
    }

    /// Write the full entry map to disk. Writes go through a temp file and
    /// an atomic rename so a reader never observes a partial store.
    ///
    fn persist(&self) -> Result<(), SessionError> {
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        let temp_path = self.file_path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| SessionError::WriteFailed {
            path: temp_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| SessionError::WriteFailed {
            path: temp_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| SessionError::WriteFailed {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.file_path).map_err(|e| SessionError::WriteFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// Credential store held entirely in memory. Used for demo runs and tests.
///
#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: HashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> MemoryCredentialStore {
        MemoryCredentialStore::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryCredentialStore::new();
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);

        store.set(AUTH_TOKEN_KEY, "demo-token-1").unwrap();
        assert_eq!(store.get(AUTH_TOKEN_KEY), Some("demo-token-1".to_string()));

        store.remove(AUTH_TOKEN_KEY).unwrap();
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);

        // Removing again is a no-op
        store.remove(AUTH_TOKEN_KEY).unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileCredentialStore::open(dir.path());
            store.set(AUTH_TOKEN_KEY, "demo-token-2").unwrap();
            store.set(USER_DATA_KEY, r#"{"name":"A"}"#).unwrap();
        }

        let store = FileCredentialStore::open(dir.path());
        assert_eq!(store.get(AUTH_TOKEN_KEY), Some("demo-token-2".to_string()));
        assert_eq!(store.get(USER_DATA_KEY), Some(r#"{"name":"A"}"#.to_string()));
    }

    #[test]
    fn test_file_store_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "not json at all {{{").unwrap();

        let store = FileCredentialStore::open(dir.path());
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn test_file_store_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileCredentialStore::open(dir.path());
            store.set(AUTH_TOKEN_KEY, "demo-token-3").unwrap();
            store.remove(AUTH_TOKEN_KEY).unwrap();
        }

        let store = FileCredentialStore::open(dir.path());
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileCredentialStore::open(dir.path());
        store.set(AUTH_TOKEN_KEY, "demo-token-4").unwrap();
        assert!(dir.path().join(FILE_NAME).exists());
        assert!(!dir.path().join("credentials.json.tmp").exists());
    }
}
