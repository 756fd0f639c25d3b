use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article as served to the frontend.
///
/// This is a transient shape recomputed from upstream data on every request;
/// nothing here is persisted. Field names follow the wire contract the
/// frontend already consumes (`imageUrl` included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub date: String,
    pub location: String,
    pub category: String,
    pub priority: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub url: Option<String>,
}

/// A high-risk area row from the `red_zones` table.
///
/// Rows are written by an administrative process outside this service;
/// we only read them. Serializes to a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedZone {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub severity: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn article_serializes_with_frontend_field_names() {
        let article = Article {
            title: "X".to_string(),
            summary: String::new(),
            content: String::new(),
            date: "2024-01-01".to_string(),
            location: "Unknown".to_string(),
            category: "safety".to_string(),
            priority: "medium".to_string(),
            image_url: None,
            url: None,
        };

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["title"], "X");
        assert_eq!(value["imageUrl"], serde_json::Value::Null);
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn red_zone_serializes_flat() {
        let zone = RedZone {
            id: 1,
            name: "Station Road".to_string(),
            latitude: 18.5204,
            longitude: 73.8567,
            severity: "high".to_string(),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&zone).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.values().all(|v| !v.is_object() && !v.is_array()));
    }
}
