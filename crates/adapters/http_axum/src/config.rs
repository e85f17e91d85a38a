//! Settings consumed when assembling the router.

/// HTTP layer settings, built once by the composition root and passed by
/// reference into [`router::build`](crate::router::build) and
/// [`AppState::new`](crate::state::AppState::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Path prefix the API is mounted under (e.g. `/api/v1`).
    pub prefix: String,
    /// Service name reported by the health probe.
    pub service_name: String,
    /// Version reported by the health probe.
    pub version: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            prefix: "/api/v1".to_string(),
            service_name: "foxhen-core".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl HttpConfig {
    /// The prefix with any trailing slash removed; empty means "mount at root".
    #[must_use]
    pub fn normalized_prefix(&self) -> &str {
        self.prefix.trim_end_matches('/')
    }
}
