//! Health status — the constant payload returned by the probe endpoint.

use serde::Serialize;

/// Liveness report for the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthStatus {
    pub const HEALTHY: &'static str = "healthy";

    /// A `healthy` report for the given service name and version.
    #[must_use]
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: Self::HEALTHY.to_string(),
            service: service.into(),
            version: version.into(),
        }
    }
}
