//! Persistence adapters: typed access to values held in a storage scope.

mod exhibition_repo;

pub use exhibition_repo::{decode_collection, ExhibitionRepo, EXHIBITIONS_KEY};
