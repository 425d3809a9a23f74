use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/selections/:namespace",
            get(handlers::selection::get_selection),
        )
        .route(
            "/api/selections/:namespace/toggle",
            post(handlers::selection::toggle_slot),
        )
        .route(
            "/api/selections/:namespace/text",
            get(handlers::selection::render_selection),
        )
}
