use async_trait::async_trait;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::agent::errors::AgentError;
use crate::agent::models::Agent;
use crate::agent::models::AgentId;
use crate::agent::models::EmailAddress;
use crate::agent::models::Username;
use crate::agent::ports::AgentRepository;

pub struct PostgresAgentRepository {
    pool: PgPool,
}

impl PostgresAgentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat row shape; converted into the domain entity with value-type
/// validation re-applied on the way out of storage.
#[derive(sqlx::FromRow)]
struct AgentRow {
    id: Uuid,
    name: String,
    email: String,
    username: String,
    password_hash: String,
    phone: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AgentRow {
    fn try_into_agent(self) -> Result<Agent, AgentError> {
        Ok(Agent {
            id: AgentId(self.id),
            name: self.name,
            email: EmailAddress::new(self.email)?,
            username: Username::new(self.username)?,
            password_hash: self.password_hash,
            phone: self.phone,
            role: self.role.parse::<Role>()?,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl AgentRepository for PostgresAgentRepository {
    async fn create(&self, agent: Agent) -> Result<Agent, AgentError> {
        sqlx::query(
            r#"
            INSERT INTO agents (id, name, email, username, password_hash, phone, role, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(agent.id.0)
        .bind(&agent.name)
        .bind(agent.email.as_str())
        .bind(agent.username.as_str())
        .bind(&agent.password_hash)
        .bind(&agent.phone)
        .bind(agent.role.as_str())
        .bind(agent.is_active)
        .bind(agent.created_at)
        .bind(agent.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("agents_username_key") {
                        return AgentError::UsernameAlreadyExists(
                            agent.username.as_str().to_string(),
                        );
                    }
                    if db_err.constraint() == Some("agents_email_key") {
                        return AgentError::EmailAlreadyExists(agent.email.as_str().to_string());
                    }
                }
            }
            AgentError::DatabaseError(e.to_string())
        })?;

        Ok(agent)
    }

    async fn find_by_id(&self, id: &AgentId) -> Result<Option<Agent>, AgentError> {
        let row = sqlx::query_as::<_, AgentRow>(
            r#"
            SELECT id, name, email, username, password_hash, phone, role, is_active, created_at, updated_at
            FROM agents
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AgentError::DatabaseError(e.to_string()))?;

        row.map(AgentRow::try_into_agent).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Agent>, AgentError> {
        let row = sqlx::query_as::<_, AgentRow>(
            r#"
            SELECT id, name, email, username, password_hash, phone, role, is_active, created_at, updated_at
            FROM agents
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AgentError::DatabaseError(e.to_string()))?;

        row.map(AgentRow::try_into_agent).transpose()
    }

    async fn update(&self, agent: Agent) -> Result<Agent, AgentError> {
        let result = sqlx::query(
            r#"
            UPDATE agents
            SET name = $2, email = $3, username = $4, password_hash = $5, phone = $6, role = $7, is_active = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(agent.id.0)
        .bind(&agent.name)
        .bind(agent.email.as_str())
        .bind(agent.username.as_str())
        .bind(&agent.password_hash)
        .bind(&agent.phone)
        .bind(agent.role.as_str())
        .bind(agent.is_active)
        .bind(agent.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AgentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AgentError::NotFound(agent.id.to_string()));
        }

        Ok(agent)
    }
}
