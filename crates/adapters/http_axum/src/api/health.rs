//! Health probe handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use foxhen_app::ports::TargetRepository;
use foxhen_domain::health::HealthStatus;

use crate::state::AppState;

/// Possible responses from the health endpoint.
pub enum GetResponse {
    Ok(Json<HealthStatus>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET {prefix}/health`
///
/// Never touches the registry.
pub async fn get<R>(State(state): State<AppState<R>>) -> GetResponse
where
    R: TargetRepository + Send + Sync + 'static,
{
    GetResponse::Ok(Json(HealthStatus::clone(&state.health)))
}
