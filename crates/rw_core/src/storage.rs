use async_trait::async_trait;

use crate::types::RedZone;
use crate::Result;

#[async_trait]
pub trait RedZoneStorage: Send + Sync + std::fmt::Debug {
    /// Get every red zone currently in the store, in store order.
    async fn list_red_zones(&self) -> Result<Vec<RedZone>>;

    /// Insert a red zone. The HTTP surface never writes; this exists for
    /// the administrative path and for seeding test fixtures.
    async fn insert_red_zone(&self, zone: &RedZone) -> Result<()>;
}
