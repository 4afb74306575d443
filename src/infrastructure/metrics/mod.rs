//! Prometheus metrics for the animal service.

mod helpers;

pub use helpers::{encode_metrics, AnimalMetrics};

use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "animal_service";

lazy_static! {
    /// Animals successfully persisted
    pub static ref ANIMALS_CREATED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_animals_created_total", METRIC_PREFIX),
        "Total number of animals created"
    ).unwrap();

    /// Store failures by operation (create, list)
    pub static ref STORE_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_store_errors_total", METRIC_PREFIX),
        "Total number of failed store operations",
        &["operation"]
    ).unwrap();

    /// Create requests rejected before reaching the store
    pub static ref VALIDATION_FAILURES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_validation_failures_total", METRIC_PREFIX),
        "Total number of rejected create requests"
    ).unwrap();
}
