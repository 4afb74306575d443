use prometheus::{Encoder, TextEncoder};

use super::{ANIMALS_CREATED_TOTAL, STORE_ERRORS_TOTAL, VALIDATION_FAILURES_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording animal endpoint metrics
pub struct AnimalMetrics;

impl AnimalMetrics {
    pub fn record_created() {
        ANIMALS_CREATED_TOTAL.inc();
    }

    pub fn record_store_error(operation: &str) {
        STORE_ERRORS_TOTAL.with_label_values(&[operation]).inc();
    }

    pub fn record_validation_failure() {
        VALIDATION_FAILURES_TOTAL.inc();
    }
}
