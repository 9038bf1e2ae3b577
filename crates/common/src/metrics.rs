use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static STORE_WRITES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "scholarship_hub_store_writes_total",
        "Successful collection writes",
        &["collection"]
    )
    .expect("register store_writes_total")
});

pub static STORE_WRITE_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "scholarship_hub_store_write_failures_total",
        "Collection writes that failed before the rename",
        &["collection"]
    )
    .expect("register store_write_failures_total")
});

pub fn record_write(collection: &str) {
    STORE_WRITES_TOTAL.with_label_values(&[collection]).inc();
}

pub fn record_write_failure(collection: &str) {
    STORE_WRITE_FAILURES_TOTAL.with_label_values(&[collection]).inc();
}

/// Render the default registry in the Prometheus text format.
pub fn render() -> (StatusCode, String) {
    // Touch the lazies so the families show up before the first write.
    Lazy::force(&STORE_WRITES_TOTAL);
    Lazy::force(&STORE_WRITE_FAILURES_TOTAL);

    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buf) {
        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }
    match String::from_utf8(buf) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
