//! Storage adapters shared by all frontends.

mod sqlite;

pub use sqlite::SqliteStore;
