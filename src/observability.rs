use std::net::SocketAddr;
use std::time::Instant;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: total operations served. Labels: operation, status.
pub const REQUESTS_TOTAL: &str = "roombook_requests_total";

/// Histogram: operation latency in seconds. Labels: operation.
pub const REQUEST_DURATION_SECONDS: &str = "roombook_request_duration_seconds";

// ── Domain metrics ──────────────────────────────────────────────

/// Counter: rooms created.
pub const ROOMS_TOTAL: &str = "roombook_rooms_total";

/// Counter: bookings created.
pub const BOOKINGS_TOTAL: &str = "roombook_bookings_total";

/// Counter: booking attempts rejected because the slot was taken.
pub const BOOKING_CONFLICTS_TOTAL: &str = "roombook_booking_conflicts_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) -> Result<(), metrics_exporter_prometheus::BuildError> {
    let Some(port) = port else { return Ok(()) };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
    Ok(())
}

/// Times one operation; `finish` records the outcome.
pub struct RequestTimer {
    operation: &'static str,
    started: Instant,
}

impl RequestTimer {
    pub fn start(operation: &'static str) -> Self {
        Self {
            operation,
            started: Instant::now(),
        }
    }

    pub fn finish(self, status: &'static str) {
        metrics::counter!(REQUESTS_TOTAL, "operation" => self.operation, "status" => status)
            .increment(1);
        metrics::histogram!(REQUEST_DURATION_SECONDS, "operation" => self.operation)
            .record(self.started.elapsed().as_secs_f64());
    }
}
