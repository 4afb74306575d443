use axum::{routing::get, Router};

use crate::server::AppState;

use super::animal::{create_animal, list_animals};
use super::health::health;
use super::metrics::prometheus_metrics;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Animals
        .route("/animal", get(list_animals).post(create_animal))
}
