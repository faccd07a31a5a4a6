use std::sync::Arc;

use stockroom_infra::{InMemoryItemStore, ItemStore, SqliteItemStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let store: Arc<dyn ItemStore> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            tracing::info!("using sqlite store at {url}");
            Arc::new(SqliteItemStore::connect(&url).await?)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory store (data is not persisted)");
            Arc::new(InMemoryItemStore::new())
        }
    };

    let app = stockroom_api::app::build_app(store);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
