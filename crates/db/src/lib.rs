//! Persistence for the museum site: key-value storage scopes, the
//! exhibition persistence adapter, and the session store built on top.

pub mod repositories;
pub mod storage;
pub mod store;

pub use repositories::{ExhibitionRepo, EXHIBITIONS_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult};
pub use store::{ExhibitionStore, StoreError, StoreResult};
