use auth::Role;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::agent::models::AgentId;
use crate::inbound::http::router::AppState;

/// Resolved principal attached to request extensions, valid for one request.
#[derive(Debug, Clone)]
pub struct CurrentAgent {
    pub id: AgentId,
    pub username: String,
    /// Tokens minted before roles were introduced resolve with no role;
    /// that means no elevated privilege.
    pub role: Option<Role>,
}

impl CurrentAgent {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Middleware that resolves the bearer token into a `CurrentAgent`.
///
/// Every failure mode (missing/malformed header, bad signature, expired
/// token, missing claims) produces the same generic 401; the actual cause
/// only reaches the logs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.resolve_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token resolution failed");
        unauthorized()
    })?;

    let agent_id = AgentId::from_string(&claims.id).map_err(|e| {
        tracing::warn!(error = %e, "Token carried an unparseable agent id");
        unauthorized()
    })?;

    req.extensions_mut().insert(CurrentAgent {
        id: agent_id,
        username: claims.sub,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::debug!("Missing Authorization header");
            unauthorized()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not valid UTF-8");
        unauthorized()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::debug!("Authorization header is not a bearer token");
        unauthorized()
    })
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Authentication failed"
        })),
    )
        .into_response()
}
