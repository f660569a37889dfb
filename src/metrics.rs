//! Prometheus metrics for the HTTP layer and signal intake

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

/// Metrics registry shared by the router and handlers
///
/// Each instance owns its own `Registry`, so tests can build independent
/// servers without colliding on global registration.
pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub signals_accepted_total: IntCounter,
    /// Labelled by failure code (`MISSING_FIELD`, `INVALID_ACTION`, ...)
    pub signals_rejected_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Number of HTTP requests currently being served",
        )?;
        let signals_accepted_total = IntCounter::new(
            "signals_accepted_total",
            "Trading signals that passed validation",
        )?;
        let signals_rejected_total = IntCounterVec::new(
            Opts::new(
                "signals_rejected_total",
                "Validation failures on rejected trading signals, by reason",
            ),
            &["reason"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(signals_accepted_total.clone()))?;
        registry.register(Box::new(signals_rejected_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            signals_accepted_total,
            signals_rejected_total,
        })
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
