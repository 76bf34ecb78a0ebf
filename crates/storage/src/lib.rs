pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryRepository, ProgressSnapshotRepository, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
