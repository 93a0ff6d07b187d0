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
use crate::refdata::models::City;
use crate::refdata::models::CityCommand;
use crate::refdata::models::CityId;
use crate::refdata::models::StateId;

pub async fn read_all(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CityResponseData>>, ApiError> {
    state
        .refdata_service
        .list_cities()
        .await
        .map_err(ApiError::from)
        .map(|cities| {
            ApiSuccess::new(
                StatusCode::OK,
                cities.iter().map(CityResponseData::from).collect(),
            )
        })
}

pub async fn read_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<ApiSuccess<CityResponseData>, ApiError> {
    let city_id = CityId::from_string(&city_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .refdata_service
        .get_city(&city_id)
        .await
        .map_err(ApiError::from)
        .map(|ref found| ApiSuccess::new(StatusCode::OK, found.into()))
}

pub async fn create_city(
    State(state): State<AppState>,
    Json(body): Json<CityRequestBody>,
) -> Result<ApiSuccess<CityResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .refdata_service
        .create_city(command)
        .await
        .map_err(ApiError::from)
        .map(|ref created| ApiSuccess::new(StatusCode::CREATED, created.into()))
}

pub async fn update_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
    Json(body): Json<CityRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    let city_id = CityId::from_string(&city_id).map_err(ReferenceDataError::from)?;
    let command = body.try_into_command()?;

    state
        .refdata_service
        .update_city(&city_id, command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

pub async fn delete_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let city_id = CityId::from_string(&city_id).map_err(ReferenceDataError::from)?;

    state
        .refdata_service
        .delete_city(&city_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityRequestBody {
    city: String,
    state_id: String,
}

impl CityRequestBody {
    fn try_into_command(self) -> Result<CityCommand, ReferenceDataError> {
        let state_id = StateId::from_string(&self.state_id)?;
        Ok(CityCommand {
            city: self.city,
            state_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityResponseData {
    pub id: String,
    pub city: String,
    pub state_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&City> for CityResponseData {
    fn from(city: &City) -> Self {
        Self {
            id: city.id.to_string(),
            city: city.city.clone(),
            state_id: city.state_id.to_string(),
            is_active: city.is_active,
            created_at: city.created_at,
            updated_at: city.updated_at,
        }
    }
}
