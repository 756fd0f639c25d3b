use std::sync::Arc;

use rw_core::{RedZoneStorage, Result};

pub mod backends;

pub use backends::*;

/// Build a red-zone store from a connection URL.
///
/// `memory://` selects the in-memory backend; anything else is handed to
/// the SQLite backend (e.g. `sqlite:red_zones.db`).
pub async fn create_storage(database_url: &str) -> Result<Arc<dyn RedZoneStorage>> {
    if database_url.starts_with("memory://") {
        return Ok(Arc::new(MemoryStorage::new()));
    }

    #[cfg(feature = "sqlite")]
    return Ok(Arc::new(SqliteStorage::connect(database_url).await?));

    #[cfg(not(feature = "sqlite"))]
    Err(rw_core::Error::Config(format!(
        "no storage backend for '{}': rebuild with the sqlite feature",
        database_url
    )))
}

pub mod prelude {
    pub use super::backends::*;
    pub use rw_core::RedZoneStorage;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_scheme_selects_memory_backend() {
        let storage = create_storage("memory://").await.unwrap();
        assert!(storage.list_red_zones().await.unwrap().is_empty());
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn memory_prefixed_scheme_is_not_memory() {
        let err = create_storage("memorydb://zones").await.unwrap_err();
        assert!(matches!(err, rw_core::Error::Config(_)));
    }
}
