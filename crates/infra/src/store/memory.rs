//! In-memory item store for dev/test.

use std::sync::RwLock;

use async_trait::async_trait;

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};
use stockroom_inventory::query::filter_items;
use stockroom_inventory::{Item, ItemFilter, ValidatedItem};

use super::ItemStore;

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    next_id: i64,
}

/// In-memory store. Items are kept in insertion order, so `list` is stable
/// for free.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock means a writer panicked mid-mutation; surface it as a
// storage failure instead of unwrapping.
fn poisoned<T>(_: T) -> DomainError {
    DomainError::storage("store lock poisoned")
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create(&self, fields: ValidatedItem) -> DomainResult<Item> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner.next_id += 1;
        let item = Item::new(ItemId::new(inner.next_id), fields);
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> DomainResult<Item> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner
            .items
            .iter()
            .find(|i| i.id() == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn update(&self, id: ItemId, fields: ValidatedItem) -> DomainResult<Item> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or(DomainError::NotFound)?;
        item.overwrite(fields);
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        let before = inner.items.len();
        inner.items.retain(|i| i.id() != id);
        if inner.items.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, filter: &ItemFilter) -> DomainResult<Vec<Item>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(filter_items(inner.items.clone(), filter))
    }
}
