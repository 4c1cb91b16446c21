//! Backend health probe behavior.

use std::time::Duration;

use emotion_engine::health_check::{BackendHealth, HealthChecker};

#[tokio::test]
async fn unreachable_backend_reports_unhealthy() {
    let checker = HealthChecker::with_timeout(Duration::from_millis(500));
    let health = checker.check_backend("http://127.0.0.1:1").await;

    assert!(!health.is_healthy);
    assert_eq!(health.url, "http://127.0.0.1:1");
    assert!(health.error.is_some());
    assert_eq!(health.status_str(), "disconnected");
}

#[tokio::test]
async fn probe_failure_is_not_an_error() {
    // The checker folds every transport failure into the health value.
    let checker = HealthChecker::new();
    let health = checker.check_backend("http://invalid.localdomain.test").await;
    assert!(!health.is_healthy);
}

#[test]
fn healthy_status_maps_to_connected() {
    let health = BackendHealth {
        is_healthy: true,
        url: "http://localhost:8001".to_string(),
        error: None,
    };
    assert_eq!(health.status_str(), "connected");
}
