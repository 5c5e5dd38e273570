use axum::response::Json;

use crate::navigation::{SidebarData, SIDEBAR};

/// GET /navigation - static sidebar configuration for the UI shell
pub async fn navigation_get() -> Json<&'static SidebarData> {
    Json(&SIDEBAR)
}
