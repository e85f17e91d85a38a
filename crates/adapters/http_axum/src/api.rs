//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod health;
#[allow(clippy::missing_errors_doc)]
pub mod targets;

use axum::Router;
use axum::routing::get;

use foxhen_app::ports::TargetRepository;

use crate::state::AppState;

/// Build the API sub-router, mounted under the configured prefix.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TargetRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::get::<R>))
        // Targets
        .route("/targets", get(targets::list::<R>))
        .route("/targets/", get(targets::missing_id))
        .route("/targets/{id}", get(targets::get::<R>))
}
