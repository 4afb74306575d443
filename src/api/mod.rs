//! API layer - HTTP endpoint handlers.

mod animal;
mod health;
mod metrics;
mod routes;

pub use animal::{create_animal, list_animals, SuccessResponse};
pub use health::{health, HealthResponse};
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
