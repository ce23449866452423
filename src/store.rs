use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

/// Key-value persistence contract for session state.
///
/// One JSON document per key. `load` returns `Ok(None)` for a key that has
/// never been written; undecodable payloads map to
/// `io::ErrorKind::InvalidData`.
pub trait StateStore {
    fn load(&self, key: &str) -> io::Result<Option<Value>>;
    fn save(&self, key: &str, value: &Value) -> io::Result<()>;
}

/// Directory-backed store: each key lives at `<dir>/<key>.json`.
///
/// `save` writes the whole document to `<key>.json.tmp`, fsyncs, then renames
/// over the live file; a crash mid-save never leaves a torn document behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (or create) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn load(&self, key: &str) -> io::Result<Option<Value>> {
        let raw = match fs::read(self.document_path(key)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let value = serde_json::from_slice(&raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &Value) -> io::Result<()> {
        let path = self.document_path(key);
        let tmp_path = path.with_extension("json.tmp");
        let payload = serde_json::to_vec_pretty(value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = File::create(&tmp_path)?;
        file.write_all(&payload)?;
        file.sync_all()?;
        fs::rename(&tmp_path, &path)
    }
}

/// Ephemeral in-memory store. Clones share contents, so a store handle can
/// outlive the engine writing through it; tests reopen sessions this way.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> io::Result<Option<Value>> {
        Ok(self.entries.get(key).map(|e| e.value().clone()))
    }

    fn save(&self, key: &str, value: &Value) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("maitred_test_store").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn save_and_load_roundtrip() {
        let store = FileStore::open(scratch_dir("roundtrip")).unwrap();
        let doc = json!([{"id": "T1", "name": "Table 1", "seats": 2}]);

        store.save("tables", &doc).unwrap();
        let loaded = store.load("tables").unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn load_missing_key_is_none() {
        let store = FileStore::open(scratch_dir("missing")).unwrap();
        assert_eq!(store.load("bookings").unwrap(), None);
    }

    #[test]
    fn save_overwrites_previous_document() {
        let store = FileStore::open(scratch_dir("overwrite")).unwrap();
        store.save("tables", &json!(["old"])).unwrap();
        store.save("tables", &json!(["new"])).unwrap();
        assert_eq!(store.load("tables").unwrap(), Some(json!(["new"])));
    }

    #[test]
    fn save_leaves_no_tmp_file() {
        let dir = scratch_dir("tmpfile");
        let store = FileStore::open(&dir).unwrap();
        store.save("tables", &json!([])).unwrap();

        assert!(dir.join("tables.json").exists());
        assert!(!dir.join("tables.json.tmp").exists());
    }

    #[test]
    fn load_rejects_corrupt_document() {
        let dir = scratch_dir("corrupt");
        let store = FileStore::open(&dir).unwrap();
        fs::write(dir.join("tables.json"), b"{not json").unwrap();

        let err = store.load("tables").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn open_creates_nested_directory() {
        let dir = scratch_dir("nested").join("a").join("b");
        let store = FileStore::open(&dir).unwrap();
        store.save("tables", &json!([])).unwrap();
        assert!(dir.join("tables.json").exists());
    }

    #[test]
    fn memory_store_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save("tables", &json!(["x"])).unwrap();
        assert_eq!(other.load("tables").unwrap(), Some(json!(["x"])));
    }

    #[test]
    fn memory_store_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("nothing").unwrap(), None);
    }
}
