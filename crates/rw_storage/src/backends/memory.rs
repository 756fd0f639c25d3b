use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use rw_core::{RedZone, RedZoneStorage, Result};

/// In-memory store, used in tests and as the `memory://` backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    zones: Arc<RwLock<Vec<RedZone>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RedZoneStorage for MemoryStorage {
    async fn list_red_zones(&self) -> Result<Vec<RedZone>> {
        let zones = self.zones.read().await;
        Ok(zones.clone())
    }

    async fn insert_red_zone(&self, zone: &RedZone) -> Result<()> {
        let mut zones = self.zones.write().await;
        if let Some(existing) = zones.iter_mut().find(|z| z.id == zone.id) {
            *existing = zone.clone();
        } else {
            zones.push(zone.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn zone(id: i64, name: &str) -> RedZone {
        RedZone {
            id,
            name: name.to_string(),
            latitude: 18.52,
            longitude: 73.85,
            severity: "high".to_string(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.list_red_zones().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_then_list() {
        let storage = MemoryStorage::new();
        storage.insert_red_zone(&zone(1, "Station Road")).await.unwrap();
        storage.insert_red_zone(&zone(2, "Old Market")).await.unwrap();

        let zones = storage.list_red_zones().await.unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].name, "Station Road");
    }

    #[tokio::test]
    async fn reinserting_same_id_replaces() {
        let storage = MemoryStorage::new();
        storage.insert_red_zone(&zone(1, "Station Road")).await.unwrap();
        storage.insert_red_zone(&zone(1, "Station Road East")).await.unwrap();

        let zones = storage.list_red_zones().await.unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].name, "Station Road East");
    }
}
