use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::agent::errors::AgentError;
use crate::property::errors::PropertyError;
use crate::refdata::errors::ReferenceDataError;

pub mod addresses;
pub mod agents;
pub mod cities;
pub mod login;
pub mod properties;
pub mod states;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AgentError::UsernameAlreadyExists(_) | AgentError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            // One message for every credential failure; internals are logged,
            // never surfaced.
            AgentError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AgentError::InvalidUsername(_)
            | AgentError::InvalidEmail(_)
            | AgentError::InvalidRole(_)
            | AgentError::InvalidAgentId(_) => ApiError::UnprocessableEntity(err.to_string()),
            AgentError::Password(_) | AgentError::DatabaseError(_) | AgentError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PropertyError> for ApiError {
    fn from(err: PropertyError) -> Self {
        match err {
            PropertyError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PropertyError::InvalidPropertyId(_)
            | PropertyError::InvalidType(_)
            | PropertyError::InvalidStatus(_) => ApiError::UnprocessableEntity(err.to_string()),
            PropertyError::DatabaseError(_) | PropertyError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ReferenceDataError> for ApiError {
    fn from(err: ReferenceDataError) -> Self {
        match err {
            ReferenceDataError::StateNotFound(_)
            | ReferenceDataError::CityNotFound(_)
            | ReferenceDataError::AddressNotFound(_) => ApiError::NotFound(err.to_string()),
            ReferenceDataError::InvalidId(_) => ApiError::UnprocessableEntity(err.to_string()),
            ReferenceDataError::DatabaseError(_) | ReferenceDataError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
