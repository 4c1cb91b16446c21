//! Availability probe for the ML backend.

use std::time::Duration;

use reqwest::Client;

use crate::config::endpoints;

/// Outcome of a backend health probe.
#[derive(Debug, Clone)]
pub struct BackendHealth {
    pub is_healthy: bool,
    pub url: String,
    pub error: Option<String>,
}

impl BackendHealth {
    /// Wire representation used by the `/api/health` route.
    pub fn status_str(&self) -> &'static str {
        if self.is_healthy {
            "connected"
        } else {
            "disconnected"
        }
    }
}

pub struct HealthChecker {
    http: Client,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(3))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            http: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Probes the backend's health endpoint. Any transport error or
    /// non-success status counts as unhealthy, never as a failure.
    pub async fn check_backend(&self, base_url: &str) -> BackendHealth {
        let url = format!("{}{}", base_url, endpoints::HEALTH);
        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => BackendHealth {
                is_healthy: true,
                url: base_url.to_string(),
                error: None,
            },
            Ok(response) => BackendHealth {
                is_healthy: false,
                url: base_url.to_string(),
                error: Some(format!("HTTP {}", response.status())),
            },
            Err(e) => BackendHealth {
                is_healthy: false,
                url: base_url.to_string(),
                error: Some(e.to_string()),
            },
        }
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}
