//! Shared application state for axum handlers.

use std::sync::Arc;

use foxhen_app::ports::TargetRepository;
use foxhen_app::services::target_service::TargetService;
use foxhen_domain::health::HealthStatus;

use crate::config::HttpConfig;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Target lookup service.
    pub target_service: Arc<TargetService<R>>,
    /// Constant payload answered by the health probe.
    pub health: Arc<HealthStatus>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            target_service: Arc::clone(&self.target_service),
            health: Arc::clone(&self.health),
        }
    }
}

impl<R> AppState<R>
where
    R: TargetRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service and HTTP settings.
    pub fn new(target_service: TargetService<R>, config: &HttpConfig) -> Self {
        Self {
            target_service: Arc::new(target_service),
            health: Arc::new(HealthStatus::healthy(
                config.service_name.clone(),
                config.version.clone(),
            )),
        }
    }
}
