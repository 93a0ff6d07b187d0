use auth::Role;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::agent::errors::EmailError;
use crate::agent::errors::UsernameError;
use crate::agent::models::Agent;
use crate::agent::models::ChangePasswordCommand;
use crate::agent::models::EmailAddress;
use crate::agent::models::RegisterAgentCommand;
use crate::agent::models::Username;
use crate::inbound::http::middleware::CurrentAgent;
use crate::inbound::http::router::AppState;

pub async fn register_agent(
    State(state): State<AppState>,
    Json(body): Json<RegisterAgentRequestBody>,
) -> Result<ApiSuccess<AgentResponseData>, ApiError> {
    state
        .agent_service
        .register_agent(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref agent| ApiSuccess::new(StatusCode::CREATED, agent.into()))
}

/// Return the profile of the agent resolved from the bearer token.
pub async fn read_current_agent(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
) -> Result<ApiSuccess<AgentResponseData>, ApiError> {
    state
        .agent_service
        .get_agent(&current.id)
        .await
        .map_err(ApiError::from)
        .map(|ref agent| ApiSuccess::new(StatusCode::OK, agent.into()))
}

pub async fn change_password(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAgent>,
    Json(body): Json<ChangePasswordRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    let command = ChangePasswordCommand {
        current_password: body.password,
        new_password: body.new_password,
    };

    state
        .agent_service
        .change_password(&current.id, command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

/// HTTP request body for registering an agent (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterAgentRequestBody {
    name: String,
    email: String,
    username: String,
    password: String,
    phone: String,
    role: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterAgentRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid role: {0}")]
    Role(#[from] auth::UnknownRole),
}

impl RegisterAgentRequestBody {
    fn try_into_command(self) -> Result<RegisterAgentCommand, ParseRegisterAgentRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        let role = self.role.parse::<Role>()?;
        Ok(RegisterAgentCommand {
            name: self.name,
            email,
            username,
            password: self.password,
            phone: self.phone,
            role,
        })
    }
}

impl From<ParseRegisterAgentRequestError> for ApiError {
    fn from(err: ParseRegisterAgentRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangePasswordRequestBody {
    password: String,
    new_password: String,
}

/// Agent profile payload. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Agent> for AgentResponseData {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id.to_string(),
            name: agent.name.clone(),
            email: agent.email.as_str().to_string(),
            username: agent.username.as_str().to_string(),
            phone: agent.phone.clone(),
            role: agent.role,
            is_active: agent.is_active,
            created_at: agent.created_at,
        }
    }
}
