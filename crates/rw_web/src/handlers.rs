use axum::{extract::State, Json};
use std::sync::Arc;

use rw_core::{Article, RedZone};

use crate::{ApiError, AppState};

/// `GET /api/news` — proxy the configured upstream search, remapped to the
/// frontend's article shape. Any incoming querystring is ignored.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.news.fetch_latest().await?;
    Ok(Json(articles))
}

/// `GET /api/red_zones` — every row of the red-zone table as flat records.
pub async fn list_red_zones(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RedZone>>, ApiError> {
    let zones = state.red_zones.list_red_zones().await?;
    Ok(Json(zones))
}
