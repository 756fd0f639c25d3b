use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;
use std::str::FromStr;

use rw_core::{Error, RedZone, RedZoneStorage, Result};

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS red_zones (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        severity TEXT NOT NULL,
        description TEXT,
        created_at TEXT NOT NULL
    )
    "#,
    // Add future migrations here
];

#[derive(Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Connect to the database named by `database_url` (e.g.
    /// `sqlite:red_zones.db`), creating the file and schema if missing.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| Error::Config(format!("invalid database URL '{}': {}", database_url, e)))?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| Error::StorageUnavailable(format!("failed to connect: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| {
                    Error::StorageUnavailable(format!("failed to run migration {}: {}", i, e))
                })?;
        }

        Ok(Self { pool })
    }

    fn zone_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<RedZone> {
        let created_at: String = row.get("created_at");
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| Error::StorageUnavailable(format!("failed to parse created_at: {}", e)))?
            .with_timezone(&chrono::Utc);

        Ok(RedZone {
            id: row.get("id"),
            name: row.get("name"),
            latitude: row.get("latitude"),
            longitude: row.get("longitude"),
            severity: row.get("severity"),
            description: row.get::<Option<String>, _>("description"),
            created_at,
        })
    }
}

#[async_trait]
impl RedZoneStorage for SqliteStorage {
    async fn list_red_zones(&self) -> Result<Vec<RedZone>> {
        let rows = sqlx::query("SELECT * FROM red_zones")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Error::StorageUnavailable(format!("failed to list red zones: {}", e)))?;

        let mut zones = Vec::with_capacity(rows.len());
        for row in &rows {
            zones.push(Self::zone_from_row(row)?);
        }

        Ok(zones)
    }

    async fn insert_red_zone(&self, zone: &RedZone) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO red_zones
            (id, name, latitude, longitude, severity, description, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(zone.id)
        .bind(&zone.name)
        .bind(zone.latitude)
        .bind(zone.longitude)
        .bind(&zone.severity)
        .bind(zone.description.as_deref())
        .bind(zone.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| Error::StorageUnavailable(format!("failed to insert red zone: {}", e)))?;

        Ok(())
    }
}
