use async_trait::async_trait;

use stockroom_core::{DomainResult, ItemId};
use stockroom_inventory::{Item, ItemFilter, ValidatedItem};

mod memory;
mod sqlite;

pub use memory::InMemoryItemStore;
pub use sqlite::SqliteItemStore;

/// CRUD over the item collection, keyed by id.
///
/// The store is the transaction boundary: every mutation is all-or-nothing,
/// and a `Storage` failure leaves the previously committed state visible.
/// Listing order is stable across repeated calls with no intervening writes
/// (insertion/id order).
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Assign the next id, persist, and return the new record.
    async fn create(&self, fields: ValidatedItem) -> DomainResult<Item>;

    /// Fetch one record; `NotFound` if absent.
    async fn get(&self, id: ItemId) -> DomainResult<Item>;

    /// Overwrite every mutable field of an existing record.
    async fn update(&self, id: ItemId, fields: ValidatedItem) -> DomainResult<Item>;

    /// Remove a record; `NotFound` if absent.
    async fn delete(&self, id: ItemId) -> DomainResult<()>;

    /// All records matching the filter, in insertion order.
    async fn list(&self, filter: &ItemFilter) -> DomainResult<Vec<Item>>;
}
