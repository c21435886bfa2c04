//! In-memory exhibition collection with CRUD, persisted after every change.
//!
//! One [`ExhibitionStore`] is the single source of truth for one session.
//! Two stores over the same storage scope do not coordinate: whichever saves
//! last overwrites the other's changes (last writer wins). Callers that may
//! be looking at stale data call [`ExhibitionStore::reload`] first.

use museu_core::exhibition::ExhibitionRecord;

use crate::repositories::ExhibitionRepo;
use crate::storage::{KeyValueStorage, StorageError};

/// Error type for store mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The index does not address a record of the current collection.
    #[error("Index {index} is out of range for a collection of {len} records")]
    OutOfRange { index: usize, len: usize },

    /// Persisting the new collection failed; the in-memory state is unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The exhibition collection of the current session.
#[derive(Debug)]
pub struct ExhibitionStore<S> {
    repo: ExhibitionRepo<S>,
    records: Vec<ExhibitionRecord>,
}

impl<S: KeyValueStorage> ExhibitionStore<S> {
    /// Open a store over `storage`, loading the persisted collection.
    pub fn open(storage: S) -> Self {
        Self::with_repo(ExhibitionRepo::new(storage))
    }

    pub fn with_repo(repo: ExhibitionRepo<S>) -> Self {
        let records = repo.load();
        Self { repo, records }
    }

    pub fn storage(&self) -> &S {
        self.repo.storage()
    }

    pub fn list(&self) -> &[ExhibitionRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ExhibitionRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discard the in-memory collection and read the persisted one again.
    pub fn reload(&mut self) -> &[ExhibitionRecord] {
        self.records = self.repo.load();
        &self.records
    }

    /// Append `record`; returns its index.
    pub fn create(&mut self, record: ExhibitionRecord) -> StoreResult<usize> {
        let mut next = self.records.clone();
        let category = record.category;
        next.push(record);
        self.commit(next)?;

        let index = self.records.len() - 1;
        tracing::info!(index, %category, "Exhibition created");
        Ok(index)
    }

    /// Replace the record at `index`.
    pub fn update(&mut self, index: usize, record: ExhibitionRecord) -> StoreResult<()> {
        self.check(index)?;
        let mut next = self.records.clone();
        let category = record.category;
        next[index] = record;
        self.commit(next)?;

        tracing::info!(index, %category, "Exhibition updated");
        Ok(())
    }

    /// Remove the record at `index`; later records move down by one.
    pub fn delete(&mut self, index: usize) -> StoreResult<ExhibitionRecord> {
        self.check(index)?;
        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        tracing::info!(index, category = %removed.category, "Exhibition deleted");
        Ok(removed)
    }

    fn check(&self, index: usize) -> StoreResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            tracing::warn!(index, len = self.records.len(), "Exhibition index out of range");
            Err(StoreError::OutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    /// Persist `next` and adopt it only once the write succeeded.
    fn commit(&mut self, next: Vec<ExhibitionRecord>) -> StoreResult<()> {
        self.repo.save(&next)?;
        self.records = next;
        Ok(())
    }
}
