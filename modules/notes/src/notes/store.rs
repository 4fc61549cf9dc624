//! NoteStore — single-file JSON note storage
//!
//! Reads share a lock; every read-modify-write cycle holds it exclusively, so
//! two concurrent mutations can no longer both start from the same snapshot.
//! File I/O goes through `tokio::fs`, keeping runtime workers free while the
//! lock is held.

use super::{NoteStoreError, file_ops};
use notes_types::Note;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Outcome of a `NoteStore::modify` closure
pub enum Change<T> {
    /// Persist the edited collection, then return the value
    Commit(T),
    /// Leave the file untouched
    Keep(T),
}

pub struct NoteStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Path of the backing JSON file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is also
    /// treated as empty (logged, never surfaced to the caller).
    pub async fn load(&self) -> Vec<Note> {
        let _guard = self.lock.read().await;
        self.load_unlocked().await
    }

    /// Replace the whole collection on disk
    pub async fn save(&self, notes: &[Note]) -> Result<(), NoteStoreError> {
        let _guard = self.lock.write().await;
        self.save_unlocked(notes).await
    }

    /// Run one read-modify-write cycle under the exclusive lock.
    ///
    /// The collection is saved only when `f` returns `Change::Commit`.
    pub async fn modify<T, F>(&self, f: F) -> Result<T, NoteStoreError>
    where
        F: FnOnce(&mut Vec<Note>) -> Change<T>,
    {
        let _guard = self.lock.write().await;
        let mut notes = self.load_unlocked().await;

        match f(&mut notes) {
            Change::Commit(value) => {
                self.save_unlocked(&notes).await?;
                Ok(value)
            }
            Change::Keep(value) => Ok(value),
        }
    }

    async fn load_unlocked(&self) -> Vec<Note> {
        match file_ops::read_notes(&self.path).await {
            Ok(notes) => notes,
            Err(e) => {
                log::warn!("[NOTES] Treating notes file as empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn save_unlocked(&self, notes: &[Note]) -> Result<(), NoteStoreError> {
        file_ops::write_notes(&self.path, notes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn note(id: &str, title: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_fresh_store_is_empty() {
        let dir = tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("data.json"));
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "[{\"id\": ").unwrap();

        let store = NoteStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("data.json"));
        store
            .save(&[note("1", "A", "B"), note("2", "C", "D")])
            .await
            .unwrap();

        let before = fs::read_to_string(store.path()).unwrap();
        let loaded = store.load().await;
        store.save(&loaded).await.unwrap();
        let after = fs::read_to_string(store.path()).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_modify_keep_does_not_write() {
        let dir = tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("data.json"));

        let value = store
            .modify(|notes| {
                notes.push(note("1", "A", "B"));
                Change::Keep(notes.len())
            })
            .await
            .unwrap();

        assert_eq!(value, 1);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_modify_commit_persists() {
        let dir = tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("data.json"));

        store
            .modify(|notes| {
                notes.push(note("1", "A", "B"));
                Change::Commit(())
            })
            .await
            .unwrap();

        assert_eq!(store.load().await, vec![note("1", "A", "B")]);
    }

    #[tokio::test]
    async fn test_modify_propagates_write_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = NoteStore::new(blocker.join("data.json"));

        let result = store
            .modify(|notes| {
                notes.push(note("1", "A", "B"));
                Change::Commit(())
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_modify_loses_nothing() {
        let dir = tempdir().unwrap();
        let store = Arc::new(NoteStore::new(dir.path().join("data.json")));

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .modify(|notes| {
                        notes.push(note(&i.to_string(), "T", "X"));
                        Change::Commit(())
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.load().await.len(), 32);
    }
}
