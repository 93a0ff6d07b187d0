use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Closed set of account roles carried in tokens.
///
/// Deserialization is strict: a token carrying any other role value fails to
/// decode instead of passing the value through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
}

/// Error for role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Wire/storage representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "agent" => Ok(Role::Agent),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Claims minted at login and resolved on every protected request.
///
/// Self-contained: no server-side session state backs a token, and a token is
/// never mutated after minting. It simply stops validating once `exp` passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the account's username.
    pub sub: String,

    /// Account identifier.
    pub id: String,

    /// Account role. Tokens minted before roles were introduced omit this;
    /// resolvers must treat an absent role as no elevated privilege.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Expiration time (Unix timestamp, UTC).
    pub exp: i64,

    /// Issued at (Unix timestamp, UTC).
    pub iat: i64,
}

impl Claims {
    /// Create claims for a freshly authenticated agent.
    ///
    /// # Arguments
    /// * `id` - Account identifier
    /// * `username` - Account username, stored as the subject
    /// * `role` - Account role
    /// * `ttl_minutes` - Minutes until the token expires
    pub fn for_agent(
        id: impl ToString,
        username: impl Into<String>,
        role: Role,
        ttl_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ttl_minutes);

        Self {
            sub: username.into(),
            id: id.to_string(),
            role: Some(role),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }
}
