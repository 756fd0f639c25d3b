use std::sync::Arc;

use rw_core::{NewsSource, RedZoneStorage};

pub struct AppState {
    pub news: Arc<dyn NewsSource>,
    pub red_zones: Arc<dyn RedZoneStorage>,
}
