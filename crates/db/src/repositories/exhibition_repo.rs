//! Persistence adapter for the exhibition collection.
//!
//! The whole collection lives in one JSON array under [`EXHIBITIONS_KEY`].
//! Reads never fail: a missing, unreadable, or malformed blob is the empty
//! collection. Writes always replace the whole array.

use std::sync::atomic::{AtomicUsize, Ordering};

use museu_core::exhibition::ExhibitionRecord;

use crate::storage::{KeyValueStorage, StorageResult};

/// Storage key holding the serialized collection.
pub const EXHIBITIONS_KEY: &str = "exhibitions-data";

/// Decode a persisted blob.
///
/// A blob that is not a JSON array decodes to the empty collection. Array
/// entries that do not match the record shape (including unknown
/// categories) are dropped; the rest keep their relative order.
pub fn decode_collection(blob: &str) -> Vec<ExhibitionRecord> {
    decode_entries(blob).0
}

/// Decoded records plus the number of array entries that were dropped.
fn decode_entries(blob: &str) -> (Vec<ExhibitionRecord>, usize) {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(blob) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "Stored exhibition data is not a JSON array, treating as empty");
            return (Vec::new(), 0);
        }
    };

    let total = entries.len();
    let records: Vec<ExhibitionRecord> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    let rejected = total - records.len();
    if rejected > 0 {
        tracing::warn!(rejected, kept = records.len(), "Dropped malformed exhibition entries");
    }
    (records, rejected)
}

/// Reads and writes the collection through a storage scope.
#[derive(Debug)]
pub struct ExhibitionRepo<S> {
    storage: S,
    /// Entries dropped by the last load that the next save will erase.
    dropped: AtomicUsize,
}

impl<S: KeyValueStorage> ExhibitionRepo<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            dropped: AtomicUsize::new(0),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored entries the last load could not read. They are still on disk
    /// until the next save.
    pub fn dropped_on_load(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Current persisted collection. Never fails.
    pub fn load(&self) -> Vec<ExhibitionRecord> {
        let blob = match self.storage.get_item(EXHIBITIONS_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!(key = EXHIBITIONS_KEY, "No stored exhibitions yet");
                self.dropped.store(0, Ordering::Relaxed);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(key = EXHIBITIONS_KEY, error = %e, "Failed to read stored exhibitions, treating as empty");
                return Vec::new();
            }
        };

        let (records, rejected) = decode_entries(&blob);
        self.dropped.store(rejected, Ordering::Relaxed);
        tracing::debug!(key = EXHIBITIONS_KEY, count = records.len(), "Loaded exhibitions");
        records
    }

    /// Overwrite the persisted collection with `records`.
    pub fn save(&self, records: &[ExhibitionRecord]) -> StorageResult<()> {
        let blob = serde_json::to_string(records)?;
        self.storage.set_item(EXHIBITIONS_KEY, &blob)?;

        let erased = self.dropped.swap(0, Ordering::Relaxed);
        if erased > 0 {
            tracing::warn!(key = EXHIBITIONS_KEY, erased, "Unreadable exhibition entries removed from storage");
        }
        tracing::debug!(key = EXHIBITIONS_KEY, count = records.len(), "Saved exhibitions");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use museu_core::exhibition::Category;

    use super::*;
    use crate::storage::MemoryStorage;

    fn record(title: &str, category: Category) -> ExhibitionRecord {
        ExhibitionRecord::new(title, "", category)
    }

    // -- decode_collection ---------------------------------------------------

    #[test]
    fn malformed_blob_decodes_to_empty() {
        assert!(decode_collection("{not json").is_empty());
        assert!(decode_collection(r#"{"title":"A"}"#).is_empty());
        assert!(decode_collection("null").is_empty());
    }

    #[test]
    fn entries_with_unknown_category_are_dropped() {
        let blob = r#"[
            {"title":"A","description":"","images":[],"category":"permanent"},
            {"title":"B","description":"","images":[],"category":"featured"},
            {"title":"C","description":"","images":[]},
            {"title":"D","description":"","images":["x.jpg"],"category":"archive"}
        ]"#;
        let titles: Vec<String> = decode_collection(blob)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["A".to_string(), "D".to_string()]);
    }

    // -- ExhibitionRepo ------------------------------------------------------

    #[test]
    fn load_without_key_is_empty() {
        let repo = ExhibitionRepo::new(MemoryStorage::new());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let repo = ExhibitionRepo::new(MemoryStorage::new());
        let records = vec![
            record("A", Category::Permanent).with_image("").with_image("a.jpg"),
            record("B", Category::Temporary),
        ];
        repo.save(&records).unwrap();
        assert_eq!(repo.load(), records);
    }

    #[test]
    fn save_writes_a_json_array_under_the_fixed_key() {
        let storage = MemoryStorage::new();
        let repo = ExhibitionRepo::new(storage.clone());
        repo.save(&[record("A", Category::Archive)]).unwrap();

        let blob = storage.get_item(EXHIBITIONS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"title": "A", "description": "", "images": [], "category": "archive"}
            ])
        );
    }

    #[test]
    fn dropped_entries_are_counted_until_the_next_save() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                EXHIBITIONS_KEY,
                r#"[{"title":"A","category":"permanent"},{"title":"B","category":"featured"}]"#,
            )
            .unwrap();
        let repo = ExhibitionRepo::new(storage.clone());

        let records = repo.load();
        assert_eq!(records.len(), 1);
        assert_eq!(repo.dropped_on_load(), 1);
        assert!(storage.get_item(EXHIBITIONS_KEY).unwrap().unwrap().contains("featured"));

        repo.save(&records).unwrap();
        assert_eq!(repo.dropped_on_load(), 0);
        assert!(!storage.get_item(EXHIBITIONS_KEY).unwrap().unwrap().contains("featured"));
    }

    #[test]
    fn corrupted_blob_loads_as_empty() {
        let storage = MemoryStorage::new();
        storage.set_item(EXHIBITIONS_KEY, "[{\"title\":").unwrap();
        assert!(ExhibitionRepo::new(storage).load().is_empty());
    }
}
