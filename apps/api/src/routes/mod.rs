pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/api/v1/jobs",
            get(handlers::handle_list_jobs).post(handlers::handle_add_job),
        )
        .route("/api/v1/jobs/scrape", post(handlers::handle_scrape))
        .route("/api/v1/jobs/:id", get(handlers::handle_get_job))
        .route("/api/v1/stats", get(handlers::handle_stats))
        .route("/api/v1/config", post(handlers::handle_set_config))
        .with_state(state)
}
