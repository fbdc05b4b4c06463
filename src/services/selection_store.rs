use std::fs;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use super::config_service::get_app_data_dir;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Slot {
    #[serde(rename = "lastSelection", default, skip_serializing_if = "Option::is_none")]
    last_selection: Option<String>,
}

/// Single-slot store holding the most recent selection, last write wins.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_app_data_dir() -> Result<Self, String> {
        Ok(Self::new(get_app_data_dir()?.join("last_selection.json")))
    }

    pub fn put(&self, text: &str) -> Result<(), String> {
        self.write(&Slot {
            last_selection: Some(text.to_string()),
        })
    }

    /// Missing or unreadable slots read as empty.
    pub fn get(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        let slot = fs::read_to_string(&self.path)
            .map_err(|e| log::warn!("Failed to read selection slot: {}", e))
            .ok()
            .and_then(|content| {
                serde_json::from_str::<Slot>(&content)
                    .map_err(|e| log::warn!("Failed to parse selection slot: {}", e))
                    .ok()
            })?;

        slot.last_selection.filter(|text| !text.is_empty())
    }

    pub fn take(&self) -> Option<String> {
        let text = self.get()?;
        if let Err(e) = self.write(&Slot::default()) {
            log::warn!("Failed to clear selection slot: {}", e);
        }
        Some(text)
    }

    fn write(&self, slot: &Slot) -> Result<(), String> {
        let content = serde_json::to_string(slot)
            .map_err(|e| format!("Failed to serialize selection: {}", e))?;
        fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write selection: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SelectionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path().join("last_selection.json"));
        (dir, store)
    }

    #[test]
    fn empty_store_reads_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(), None);
        assert_eq!(store.take(), None);
    }

    #[test]
    fn put_overwrites_previous_value() {
        let (_dir, store) = temp_store();
        store.put("first").unwrap();
        store.put("second").unwrap();
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn take_clears_the_slot() {
        let (_dir, store) = temp_store();
        store.put("Terrible service.").unwrap();
        assert_eq!(store.take().as_deref(), Some("Terrible service."));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn slot_uses_fixed_key() {
        let (dir, store) = temp_store();
        store.put("hello").unwrap();
        let raw = fs::read_to_string(dir.path().join("last_selection.json")).unwrap();
        assert_eq!(raw, r#"{"lastSelection":"hello"}"#);
    }

    #[test]
    fn corrupt_slot_reads_none() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join("last_selection.json"), "garbage").unwrap();
        assert_eq!(store.get(), None);
    }
}
