use async_trait::async_trait;

use crate::agent::errors::AgentError;
use crate::agent::models::Agent;
use crate::agent::models::AgentId;
use crate::agent::models::ChangePasswordCommand;
use crate::agent::models::RegisterAgentCommand;
use crate::agent::models::Username;

/// Port for agent domain service operations.
#[async_trait]
pub trait AgentServicePort: Send + Sync + 'static {
    /// Register a new agent account.
    ///
    /// The plaintext password is hashed before it reaches storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn register_agent(&self, command: RegisterAgentCommand) -> Result<Agent, AgentError>;

    /// Verify a username/password pair against the credential store.
    ///
    /// Unknown usernames and wrong passwords both fail with
    /// `InvalidCredentials`; the two cases are indistinguishable to callers.
    ///
    /// # Returns
    /// The full verified agent record, used by the caller to mint a token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown account or wrong password
    /// * `DatabaseError` - Storage operation failed
    async fn authenticate(&self, username: &str, password: &str) -> Result<Agent, AgentError>;

    /// Retrieve an agent by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Agent does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn get_agent(&self, id: &AgentId) -> Result<Agent, AgentError>;

    /// Rotate an agent's password after re-verifying the current one.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Current password does not match
    /// * `DatabaseError` - Storage operation failed
    async fn change_password(
        &self,
        id: &AgentId,
        command: ChangePasswordCommand,
    ) -> Result<(), AgentError>;
}

/// Persistence operations for the agent aggregate.
///
/// The credential store accessed by authentication; the core only ever reads
/// stored hashes through this port and writes fresh ones on rotation.
#[async_trait]
pub trait AgentRepository: Send + Sync + 'static {
    /// Persist a new agent.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, agent: Agent) -> Result<Agent, AgentError>;

    /// Retrieve an agent by identifier.
    ///
    /// # Returns
    /// Optional agent entity (None if not found)
    async fn find_by_id(&self, id: &AgentId) -> Result<Option<Agent>, AgentError>;

    /// Retrieve an agent by username (case-sensitive exact match).
    ///
    /// # Returns
    /// Optional agent entity (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<Agent>, AgentError>;

    /// Update an existing agent.
    ///
    /// # Errors
    /// * `NotFound` - Agent does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn update(&self, agent: Agent) -> Result<Agent, AgentError>;
}
