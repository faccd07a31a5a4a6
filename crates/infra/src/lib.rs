//! Storage layer: the item store trait plus its implementations.
//!
//! Two backends share one contract: an in-memory store for dev/test and a
//! SQLite store for persistence. Each mutation runs inside its own scoped
//! transaction; on failure the pre-mutation state stays visible.

pub mod store;

pub use store::{InMemoryItemStore, ItemStore, SqliteItemStore};
