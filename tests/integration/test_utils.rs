//! Test utilities for HTTP integration tests

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};
use signal_webhook::config::ServerConfig;
use signal_webhook::core::http::{create_router, AppState, HealthStatus};
use signal_webhook::metrics::Metrics;
use tokio::sync::RwLock;

/// Router plus a handle on its metrics
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub router: Router,
    pub metrics: Arc<Metrics>,
}

#[allow(dead_code)]
impl TestApiServer {
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::default()).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            config: Arc::new(config),
        };

        let router = create_router(state);
        let server = TestServer::new(router.clone()).expect("start test server");

        Self {
            server,
            router,
            metrics,
        }
    }
}

/// Complete TradingView alert as sent by a strategy
#[allow(dead_code)]
pub fn trading_signal() -> Value {
    json!({
        "symbol": "BTCUSDT",
        "action": "buy",
        "price": 50000,
        "timestamp": "2024-12-12T05:00:00Z",
        "strategy": {
            "position_size": 1,
            "order_action": "buy",
            "order_contracts": 1,
            "order_price": 50000,
            "alert_message": "Buy signal triggered"
        }
    })
}
