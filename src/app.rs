use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/glass/add", post(handlers::add_glass))
        .route("/glass/subtract", post(handlers::subtract_glass))
        .route("/api/today", get(handlers::get_today))
        .route("/api/history", get(handlers::get_history))
        .route("/api/glass/add", post(handlers::api_add_glass))
        .route("/api/glass/subtract", post(handlers::api_subtract_glass))
        .route(
            "/api/settings",
            get(handlers::get_settings).post(handlers::update_settings),
        )
        .route("/api/export", get(handlers::export))
        .route("/api/import", post(handlers::import))
        .route("/api/visibility", post(handlers::set_visibility))
        .route("/api/signals", get(handlers::get_signals))
        .with_state(state)
}
