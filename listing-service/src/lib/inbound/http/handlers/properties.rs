use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::CurrentAgent;
use crate::inbound::http::router::AppState;
use crate::property::errors::PropertyError;
use crate::property::errors::UnknownPropertyStatus;
use crate::property::errors::UnknownPropertyType;
use crate::property::models::CreatePropertyCommand;
use crate::property::models::Property;
use crate::property::models::PropertyId;
use crate::property::models::PropertyStatus;
use crate::property::models::PropertyType;
use crate::property::models::UpdatePropertyCommand;
use crate::refdata::errors::ReferenceIdError;
use crate::refdata::models::AddressId;

pub async fn read_all(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PropertyResponseData>>, ApiError> {
    state
        .property_service
        .list_properties()
        .await
        .map_err(ApiError::from)
        .map(|properties| {
            ApiSuccess::new(
                StatusCode::OK,
                properties.iter().map(PropertyResponseData::from).collect(),
            )
        })
}

pub async fn read_property(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
) -> Result<ApiSuccess<PropertyResponseData>, ApiError> {
    let property_id =
        PropertyId::from_string(&property_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .property_service
        .get_property(&property_id)
        .await
        .map_err(ApiError::from)
        .map(|ref property| ApiSuccess::new(StatusCode::OK, property.into()))
}

/// Create a listing owned by the authenticated agent. The owner always comes
/// from the resolved principal, never from the request body.
pub async fn create_property(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Json(body): Json<PropertyRequestBody>,
) -> Result<ApiSuccess<PropertyResponseData>, ApiError> {
    let command = body.try_into_create_command()?;

    state
        .property_service
        .create_property(current.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref property| ApiSuccess::new(StatusCode::CREATED, property.into()))
}

pub async fn update_property(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Path(property_id): Path<String>,
    Json(body): Json<PropertyRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    let property_id = PropertyId::from_string(&property_id).map_err(PropertyError::from)?;
    let command = body.try_into_update_command()?;

    state
        .property_service
        .update_property(&current.id, &property_id, command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

pub async fn delete_property(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Path(property_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let property_id = PropertyId::from_string(&property_id).map_err(PropertyError::from)?;

    state
        .property_service
        .delete_property(&current.id, &property_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

/// Administrative deletion: the only role-gated operation.
pub async fn admin_delete_property(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Path(property_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    if !current.is_admin() {
        tracing::warn!(
            agent_id = %current.id,
            "Administrative deletion attempted without the admin role"
        );
        return Err(ApiError::Forbidden("Insufficient privileges".to_string()));
    }

    let property_id = PropertyId::from_string(&property_id).map_err(PropertyError::from)?;

    state
        .property_service
        .admin_delete_property(&property_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

/// HTTP request body for creating or replacing a listing (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyRequestBody {
    address_id: String,
    #[serde(rename = "type")]
    property_type: String,
    price: f64,
    status: String,
    title: String,
    subtitle: String,
    size: f64,
    bedrooms: i32,
    rooms: i32,
    bathrooms: i32,
    description: String,
    video: Option<String>,
    map: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParsePropertyRequestError {
    #[error("Invalid address id: {0}")]
    AddressId(#[from] ReferenceIdError),

    #[error("{0}")]
    Type(#[from] UnknownPropertyType),

    #[error("{0}")]
    Status(#[from] UnknownPropertyStatus),
}

impl PropertyRequestBody {
    fn try_into_create_command(self) -> Result<CreatePropertyCommand, ParsePropertyRequestError> {
        Ok(CreatePropertyCommand {
            address_id: AddressId::from_string(&self.address_id)?,
            property_type: self.property_type.parse::<PropertyType>()?,
            price: self.price,
            status: self.status.parse::<PropertyStatus>()?,
            title: self.title,
            subtitle: self.subtitle,
            size: self.size,
            bedrooms: self.bedrooms,
            rooms: self.rooms,
            bathrooms: self.bathrooms,
            description: self.description,
            video: self.video,
            map: self.map,
        })
    }

    fn try_into_update_command(self) -> Result<UpdatePropertyCommand, ParsePropertyRequestError> {
        let command = self.try_into_create_command()?;
        Ok(UpdatePropertyCommand {
            address_id: command.address_id,
            property_type: command.property_type,
            price: command.price,
            status: command.status,
            title: command.title,
            subtitle: command.subtitle,
            size: command.size,
            bedrooms: command.bedrooms,
            rooms: command.rooms,
            bathrooms: command.bathrooms,
            description: command.description,
            video: command.video,
            map: command.map,
        })
    }
}

impl From<ParsePropertyRequestError> for ApiError {
    fn from(err: ParsePropertyRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyResponseData {
    pub id: String,
    pub address_id: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: f64,
    pub status: PropertyStatus,
    pub agent_id: String,
    pub title: String,
    pub subtitle: String,
    pub size: f64,
    pub bedrooms: i32,
    pub rooms: i32,
    pub bathrooms: i32,
    pub description: String,
    pub video: Option<String>,
    pub map: Option<String>,
}

impl From<&Property> for PropertyResponseData {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.to_string(),
            address_id: property.address_id.to_string(),
            property_type: property.property_type,
            price: property.price,
            status: property.status,
            agent_id: property.agent_id.to_string(),
            title: property.title.clone(),
            subtitle: property.subtitle.clone(),
            size: property.size,
            bedrooms: property.bedrooms,
            rooms: property.rooms,
            bathrooms: property.bathrooms,
            description: property.description.clone(),
            video: property.video.clone(),
            map: property.map.clone(),
        }
    }
}
