//! SQLite-backed item store.
//!
//! Single `items` table, schema ensured at connect time. Prices are stored as
//! their canonical decimal string (SQLite has no decimal column type) and
//! parsed back on read. Every mutation runs in a scoped transaction: dropped
//! on error (rollback), committed only after the row check passes.

use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use stockroom_core::{DomainError, DomainResult, ItemId};
use stockroom_inventory::query::filter_items;
use stockroom_inventory::{Item, ItemFilter, ValidatedItem};

use super::ItemStore;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT    NOT NULL,
    quantity INTEGER NOT NULL,
    price    TEXT    NOT NULL,
    category TEXT
)
"#;

/// SQLite-backed store over a connection pool.
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Open (and create if missing) the database at `url` and ensure the
    /// schema exists. `url` is a `sqlite:` connection string.
    pub async fn connect(url: &str) -> DomainResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(to_storage)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(to_storage)?;
        Self::with_pool(pool).await
    }

    /// Private in-memory database, single connection so every query sees the
    /// same data. Test/dev helper.
    pub async fn connect_in_memory() -> DomainResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(to_storage)?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> DomainResult<Self> {
        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(to_storage)?;
        Ok(Self { pool })
    }
}

fn to_storage(err: impl std::fmt::Display) -> DomainError {
    DomainError::storage(err.to_string())
}

fn row_to_item(row: &SqliteRow) -> DomainResult<Item> {
    let id: i64 = row.try_get("id").map_err(to_storage)?;
    let name: String = row.try_get("name").map_err(to_storage)?;
    let quantity: i64 = row.try_get("quantity").map_err(to_storage)?;
    let price_text: String = row.try_get("price").map_err(to_storage)?;
    let category: Option<String> = row.try_get("category").map_err(to_storage)?;

    let price = Decimal::from_str(&price_text)
        .map_err(|e| DomainError::storage(format!("corrupt price column: {e}")))?;

    Ok(Item::from_parts(
        ItemId::new(id),
        name,
        quantity,
        price,
        category,
    ))
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn create(&self, fields: ValidatedItem) -> DomainResult<Item> {
        let mut tx = self.pool.begin().await.map_err(to_storage)?;

        let result = sqlx::query(
            "INSERT INTO items (name, quantity, price, category) VALUES (?, ?, ?, ?)",
        )
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(fields.price.to_string())
        .bind(fields.category.as_deref())
        .execute(&mut *tx)
        .await
        .map_err(to_storage)?;

        let id = ItemId::new(result.last_insert_rowid());
        tx.commit().await.map_err(to_storage)?;

        tracing::debug!(item_id = %id, "item created");
        Ok(Item::new(id, fields))
    }

    async fn get(&self, id: ItemId) -> DomainResult<Item> {
        let row = sqlx::query("SELECT id, name, quantity, price, category FROM items WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(to_storage)?;

        match row {
            Some(row) => row_to_item(&row),
            None => Err(DomainError::NotFound),
        }
    }

    async fn update(&self, id: ItemId, fields: ValidatedItem) -> DomainResult<Item> {
        let mut tx = self.pool.begin().await.map_err(to_storage)?;

        let result = sqlx::query(
            "UPDATE items SET name = ?, quantity = ?, price = ?, category = ? WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(fields.price.to_string())
        .bind(fields.category.as_deref())
        .bind(id.as_i64())
        .execute(&mut *tx)
        .await
        .map_err(to_storage)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(to_storage)?;
            return Err(DomainError::NotFound);
        }

        tx.commit().await.map_err(to_storage)?;
        Ok(Item::new(id, fields))
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(to_storage)?;

        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(to_storage)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(to_storage)?;
            return Err(DomainError::NotFound);
        }

        tx.commit().await.map_err(to_storage)?;
        tracing::debug!(item_id = %id, "item deleted");
        Ok(())
    }

    async fn list(&self, filter: &ItemFilter) -> DomainResult<Vec<Item>> {
        let rows = sqlx::query("SELECT id, name, quantity, price, category FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(to_storage)?;

        let items = rows
            .iter()
            .map(row_to_item)
            .collect::<DomainResult<Vec<Item>>>()?;

        Ok(filter_items(items, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Entity;

    fn fields(name: &str, quantity: i64, cents: i64, category: Option<&str>) -> ValidatedItem {
        ValidatedItem {
            name: name.to_string(),
            quantity,
            price: Decimal::new(cents, 2),
            category: category.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_all_fields() {
        let store = SqliteItemStore::connect_in_memory().await.unwrap();
        let created = store
            .create(fields("Bolt", 10, 50, Some("Hardware")))
            .await
            .unwrap();

        let fetched = store.get(created.id()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.price().to_string(), "0.50");
        assert_eq!(fetched.category(), Some("Hardware"));
    }

    #[tokio::test]
    async fn null_category_round_trips() {
        let store = SqliteItemStore::connect_in_memory().await.unwrap();
        let created = store.create(fields("Pen", 5, 120, None)).await.unwrap();
        assert_eq!(store.get(created.id()).await.unwrap().category(), None);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found_and_touches_nothing() {
        let store = SqliteItemStore::connect_in_memory().await.unwrap();
        let existing = store.create(fields("Bolt", 10, 50, None)).await.unwrap();

        let err = store
            .update(ItemId::new(999), fields("Ghost", 1, 100, None))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);

        // The failed update left committed state untouched.
        assert_eq!(store.get(existing.id()).await.unwrap(), existing);
        assert_eq!(store.list(&ItemFilter::all()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_aborted_by_the_engine_rolls_back() {
        let store = SqliteItemStore::connect_in_memory().await.unwrap();
        let existing = store
            .create(fields("Bolt", 10, 50, Some("Hardware")))
            .await
            .unwrap();

        // Make the next UPDATE fail inside its transaction.
        sqlx::query(
            "CREATE TRIGGER block_item_updates BEFORE UPDATE ON items \
             BEGIN SELECT RAISE(ABORT, 'writes blocked'); END",
        )
        .execute(&store.pool)
        .await
        .unwrap();

        let err = store
            .update(existing.id(), fields("Bolt M8", 4, 75, None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));

        sqlx::query("DROP TRIGGER block_item_updates")
            .execute(&store.pool)
            .await
            .unwrap();

        // The failed transaction rolled back; the row reads exactly as created.
        assert_eq!(store.get(existing.id()).await.unwrap(), existing);
    }

    #[tokio::test]
    async fn delete_aborted_by_the_engine_keeps_the_row() {
        let store = SqliteItemStore::connect_in_memory().await.unwrap();
        let existing = store.create(fields("Pen", 5, 120, None)).await.unwrap();

        sqlx::query(
            "CREATE TRIGGER block_item_deletes BEFORE DELETE ON items \
             BEGIN SELECT RAISE(ABORT, 'writes blocked'); END",
        )
        .execute(&store.pool)
        .await
        .unwrap();

        let err = store.delete(existing.id()).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));

        sqlx::query("DROP TRIGGER block_item_deletes")
            .execute(&store.pool)
            .await
            .unwrap();

        assert_eq!(store.get(existing.id()).await.unwrap(), existing);
        assert_eq!(store.list(&ItemFilter::all()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let store = SqliteItemStore::connect_in_memory().await.unwrap();
        let a = store.create(fields("A", 1, 100, None)).await.unwrap();
        let b = store.create(fields("B", 2, 200, None)).await.unwrap();

        store.delete(a.id()).await.unwrap();
        assert_eq!(store.get(a.id()).await, Err(DomainError::NotFound));
        assert_eq!(store.delete(a.id()).await, Err(DomainError::NotFound));

        let remaining = store.list(&ItemFilter::all()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), b.id());
    }

    #[tokio::test]
    async fn listing_is_id_order_and_filters_apply() {
        let store = SqliteItemStore::connect_in_memory().await.unwrap();
        store
            .create(fields("Bolt", 10, 50, Some("Hardware")))
            .await
            .unwrap();
        store
            .create(fields("Nail", 0, 10, Some("Hardware")))
            .await
            .unwrap();
        store.create(fields("Pen", 5, 120, None)).await.unwrap();

        let all = store.list(&ItemFilter::all()).await.unwrap();
        let names: Vec<_> = all.iter().map(|i| i.name().to_string()).collect();
        assert_eq!(names, ["Bolt", "Nail", "Pen"]);

        let searched = store
            .list(&ItemFilter {
                category: None,
                search: Some("nai".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].name(), "Nail");
    }
}
