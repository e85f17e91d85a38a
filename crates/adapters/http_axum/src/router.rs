//! Axum router assembly.

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::Method;
use axum::middleware;
use tower_http::trace::TraceLayer;

use foxhen_app::ports::TargetRepository;

use crate::config::HttpConfig;
use crate::cors;
use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes under [`HttpConfig::prefix`]. Unknown paths get a
/// JSON `404`, unsupported methods on known paths a JSON `405`. Layers,
/// outermost first:
///
/// 1. [`TraceLayer`]: logs each HTTP request/response through `tracing`
/// 2. [`cors::intercept`]: CORS headers, `OPTIONS` short-circuit
pub fn build<R>(state: AppState<R>, config: &HttpConfig) -> Router
where
    R: TargetRepository + Send + Sync + 'static,
{
    let api = crate::api::routes::<R>();
    let prefix = config.normalized_prefix();
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };

    router
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn(cors::intercept))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}
