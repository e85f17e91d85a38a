//! JSON handlers for targets.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use foxhen_app::ports::TargetRepository;
use foxhen_domain::error::ValidationError;
use foxhen_domain::id::TargetId;
use foxhen_domain::target::Target;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Target>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Target>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET {prefix}/targets`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: TargetRepository + Send + Sync + 'static,
{
    let targets = state.target_service.list_targets().await?;
    Ok(ListResponse::Ok(Json(targets)))
}

/// `GET {prefix}/targets/{id}`
///
/// The decoded segment is looked up verbatim.
pub async fn get<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    R: TargetRepository + Send + Sync + 'static,
{
    let Path(id) =
        path.map_err(|rejection| ValidationError::MalformedId(rejection.body_text()))?;
    let target_id = TargetId::new(id)?;
    let target = state.target_service.get_target(&target_id).await?;
    Ok(GetResponse::Ok(Json(target)))
}

/// `GET {prefix}/targets/`, a request with an empty id segment.
pub async fn missing_id() -> ApiError {
    ApiError::from(ValidationError::EmptyId)
}
