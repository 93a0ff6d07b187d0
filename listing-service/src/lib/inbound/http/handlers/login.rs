use auth::Claims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Exchange form-encoded credentials for a bearer token.
///
/// This is the only place claims are minted. Unknown usernames and wrong
/// passwords produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let agent = state
        .agent_service
        .authenticate(&body.username, &body.password)
        .await
        .map_err(ApiError::from)?;

    let claims = Claims::for_agent(
        agent.id,
        agent.username.as_str(),
        agent.role,
        state.token_ttl_minutes,
    );

    let issued = state
        .authenticator
        .issue_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenResponseData {
            access_token: issued.access_token,
            token_type: issued.token_type.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}
