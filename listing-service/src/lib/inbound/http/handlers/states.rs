use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::refdata::errors::ReferenceDataError;
use crate::refdata::models;
use crate::refdata::models::StateCommand;
use crate::refdata::models::StateId;

pub async fn read_all(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<StateResponseData>>, ApiError> {
    state
        .refdata_service
        .list_states()
        .await
        .map_err(ApiError::from)
        .map(|states| {
            ApiSuccess::new(
                StatusCode::OK,
                states.iter().map(StateResponseData::from).collect(),
            )
        })
}

pub async fn read_state(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<ApiSuccess<StateResponseData>, ApiError> {
    let state_id =
        StateId::from_string(&state_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .refdata_service
        .get_state(&state_id)
        .await
        .map_err(ApiError::from)
        .map(|ref found| ApiSuccess::new(StatusCode::OK, found.into()))
}

pub async fn create_state(
    State(state): State<AppState>,
    Json(body): Json<StateRequestBody>,
) -> Result<ApiSuccess<StateResponseData>, ApiError> {
    state
        .refdata_service
        .create_state(StateCommand { state: body.state })
        .await
        .map_err(ApiError::from)
        .map(|ref created| ApiSuccess::new(StatusCode::CREATED, created.into()))
}

pub async fn update_state(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
    Json(body): Json<StateRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    let state_id = StateId::from_string(&state_id).map_err(ReferenceDataError::from)?;

    state
        .refdata_service
        .update_state(&state_id, StateCommand { state: body.state })
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

pub async fn delete_state(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let state_id = StateId::from_string(&state_id).map_err(ReferenceDataError::from)?;

    state
        .refdata_service
        .delete_state(&state_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateRequestBody {
    state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateResponseData {
    pub id: String,
    pub state: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&models::State> for StateResponseData {
    fn from(state: &models::State) -> Self {
        Self {
            id: state.id.to_string(),
            state: state.state.clone(),
            is_active: state.is_active,
            created_at: state.created_at,
            updated_at: state.updated_at,
        }
    }
}
