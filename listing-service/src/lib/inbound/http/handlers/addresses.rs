use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::refdata::errors::ReferenceDataError;
use crate::refdata::models::Address;
use crate::refdata::models::AddressCommand;
use crate::refdata::models::AddressId;
use crate::refdata::models::CityId;
use crate::refdata::models::StateId;

pub async fn read_all(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AddressResponseData>>, ApiError> {
    state
        .refdata_service
        .list_addresses()
        .await
        .map_err(ApiError::from)
        .map(|addresses| {
            ApiSuccess::new(
                StatusCode::OK,
                addresses.iter().map(AddressResponseData::from).collect(),
            )
        })
}

pub async fn read_address(
    State(state): State<AppState>,
    Path(address_id): Path<String>,
) -> Result<ApiSuccess<AddressResponseData>, ApiError> {
    let address_id =
        AddressId::from_string(&address_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .refdata_service
        .get_address(&address_id)
        .await
        .map_err(ApiError::from)
        .map(|ref found| ApiSuccess::new(StatusCode::OK, found.into()))
}

pub async fn create_address(
    State(state): State<AppState>,
    Json(body): Json<AddressRequestBody>,
) -> Result<ApiSuccess<AddressResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .refdata_service
        .create_address(command)
        .await
        .map_err(ApiError::from)
        .map(|ref created| ApiSuccess::new(StatusCode::CREATED, created.into()))
}

pub async fn update_address(
    State(state): State<AppState>,
    Path(address_id): Path<String>,
    Json(body): Json<AddressRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    let address_id = AddressId::from_string(&address_id).map_err(ReferenceDataError::from)?;
    let command = body.try_into_command()?;

    state
        .refdata_service
        .update_address(&address_id, command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

pub async fn delete_address(
    State(state): State<AppState>,
    Path(address_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let address_id = AddressId::from_string(&address_id).map_err(ReferenceDataError::from)?;

    state
        .refdata_service
        .delete_address(&address_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressRequestBody {
    state_id: String,
    city_id: String,
    address: String,
}

impl AddressRequestBody {
    fn try_into_command(self) -> Result<AddressCommand, ReferenceDataError> {
        let state_id = StateId::from_string(&self.state_id)?;
        let city_id = CityId::from_string(&self.city_id)?;
        Ok(AddressCommand {
            state_id,
            city_id,
            address: self.address,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressResponseData {
    pub id: String,
    pub state_id: String,
    pub city_id: String,
    pub address: String,
}

impl From<&Address> for AddressResponseData {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.to_string(),
            state_id: address.state_id.to_string(),
            city_id: address.city_id.to_string(),
            address: address.address.clone(),
        }
    }
}
