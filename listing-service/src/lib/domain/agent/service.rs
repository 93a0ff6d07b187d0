use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::agent::errors::AgentError;
use crate::agent::models::Agent;
use crate::agent::models::AgentId;
use crate::agent::models::ChangePasswordCommand;
use crate::agent::models::RegisterAgentCommand;
use crate::agent::models::Username;
use crate::agent::ports::AgentRepository;
use crate::agent::ports::AgentServicePort;

/// Domain service implementation for agent operations.
///
/// Owns credential verification: lookups go through the repository port,
/// password checks through the hasher. Nothing here rate-limits; the single
/// call site in `authenticate` is where a lockout policy would attach.
pub struct AgentService<R>
where
    R: AgentRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
}

impl<R> AgentService<R>
where
    R: AgentRepository,
{
    /// Create a new agent service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<R> AgentServicePort for AgentService<R>
where
    R: AgentRepository,
{
    async fn register_agent(&self, command: RegisterAgentCommand) -> Result<Agent, AgentError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let agent = Agent {
            id: AgentId::new(),
            name: command.name,
            email: command.email,
            username: command.username,
            password_hash,
            phone: command.phone,
            role: command.role,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(agent).await
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Agent, AgentError> {
        // A username that cannot exist fails the same way an unknown one does.
        let username = Username::new(username.to_string())
            .map_err(|_| AgentError::InvalidCredentials)?;

        let agent = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(AgentError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(password, &agent.password_hash)
        {
            return Err(AgentError::InvalidCredentials);
        }

        Ok(agent)
    }

    async fn get_agent(&self, id: &AgentId) -> Result<Agent, AgentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AgentError::NotFound(id.to_string()))
    }

    async fn change_password(
        &self,
        id: &AgentId,
        command: ChangePasswordCommand,
    ) -> Result<(), AgentError> {
        let mut agent = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AgentError::NotFound(id.to_string()))?;

        if !self
            .password_hasher
            .verify(&command.current_password, &agent.password_hash)
        {
            return Err(AgentError::InvalidCredentials);
        }

        agent.password_hash = self.password_hasher.hash(&command.new_password)?;
        agent.updated_at = Utc::now();

        self.repository.update(agent).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use auth::Role;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::agent::models::EmailAddress;

    mock! {
        pub TestAgentRepository {}

        #[async_trait]
        impl AgentRepository for TestAgentRepository {
            async fn create(&self, agent: Agent) -> Result<Agent, AgentError>;
            async fn find_by_id(&self, id: &AgentId) -> Result<Option<Agent>, AgentError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<Agent>, AgentError>;
            async fn update(&self, agent: Agent) -> Result<Agent, AgentError>;
        }
    }

    fn register_command() -> RegisterAgentCommand {
        RegisterAgentCommand {
            name: "Alice Smith".to_string(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            username: Username::new("alice".to_string()).unwrap(),
            password: "secret123".to_string(),
            phone: "555-0100".to_string(),
            role: Role::Agent,
        }
    }

    fn stored_agent(password: &str) -> Agent {
        let hasher = auth::PasswordHasher::new();
        let now = Utc::now();
        Agent {
            id: AgentId::new(),
            name: "Alice Smith".to_string(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            username: Username::new("alice".to_string()).unwrap(),
            password_hash: hasher.hash(password).unwrap(),
            phone: "555-0100".to_string(),
            role: Role::Agent,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_register_agent_hashes_password() {
        let mut repository = MockTestAgentRepository::new();

        repository
            .expect_create()
            .withf(|agent| {
                agent.username.as_str() == "alice"
                    && agent.password_hash != "secret123"
                    && agent.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|agent| Ok(agent));

        let service = AgentService::new(Arc::new(repository));

        let agent = service
            .register_agent(register_command())
            .await
            .expect("Registration failed");

        assert_eq!(agent.role, Role::Agent);
        assert!(agent.is_active);
    }

    #[tokio::test]
    async fn test_register_agent_duplicate_username() {
        let mut repository = MockTestAgentRepository::new();

        repository.expect_create().times(1).returning(|agent| {
            Err(AgentError::UsernameAlreadyExists(
                agent.username.as_str().to_string(),
            ))
        });

        let service = AgentService::new(Arc::new(repository));

        let result = service.register_agent(register_command()).await;
        assert!(matches!(
            result.unwrap_err(),
            AgentError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut repository = MockTestAgentRepository::new();

        let agent = stored_agent("secret123");
        let returned = agent.clone();
        repository
            .expect_find_by_username()
            .withf(|u| u.as_str() == "alice")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = AgentService::new(Arc::new(repository));

        let verified = service
            .authenticate("alice", "secret123")
            .await
            .expect("Authentication failed");
        assert_eq!(verified.id, agent.id);
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_indistinguishable() {
        // Unknown username and wrong password must produce the same signal.
        let mut repository = MockTestAgentRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        let service = AgentService::new(Arc::new(repository));
        let unknown_user = service.authenticate("nobody", "secret123").await;

        let mut repository = MockTestAgentRepository::new();
        let agent = stored_agent("secret123");
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(agent.clone())));
        let service = AgentService::new(Arc::new(repository));
        let wrong_password = service.authenticate("alice", "wrong_password").await;

        assert!(matches!(
            unknown_user.unwrap_err(),
            AgentError::InvalidCredentials
        ));
        assert!(matches!(
            wrong_password.unwrap_err(),
            AgentError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_authenticate_unrepresentable_username() {
        // No repository call at all: the name cannot exist, but the caller
        // still just sees invalid credentials.
        let mut repository = MockTestAgentRepository::new();
        repository.expect_find_by_username().times(0);

        let service = AgentService::new(Arc::new(repository));

        let result = service.authenticate("a", "secret123").await;
        assert!(matches!(
            result.unwrap_err(),
            AgentError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_get_agent_not_found() {
        let mut repository = MockTestAgentRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AgentService::new(Arc::new(repository));

        let result = service.get_agent(&AgentId::new()).await;
        assert!(matches!(result.unwrap_err(), AgentError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let mut repository = MockTestAgentRepository::new();

        let agent = stored_agent("old_password");
        let old_hash = agent.password_hash.clone();
        let agent_id = agent.id;
        repository
            .expect_find_by_id()
            .withf(move |id| *id == agent_id)
            .times(1)
            .returning(move |_| Ok(Some(agent.clone())));

        repository
            .expect_update()
            .withf(move |agent| {
                agent.password_hash != old_hash && agent.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|agent| Ok(agent));

        let service = AgentService::new(Arc::new(repository));

        let command = ChangePasswordCommand {
            current_password: "old_password".to_string(),
            new_password: "new_password".to_string(),
        };
        service
            .change_password(&agent_id, command)
            .await
            .expect("Password change failed");
    }

    #[tokio::test]
    async fn test_change_password_wrong_current_password() {
        let mut repository = MockTestAgentRepository::new();

        let agent = stored_agent("old_password");
        let agent_id = agent.id;
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(agent.clone())));
        repository.expect_update().times(0);

        let service = AgentService::new(Arc::new(repository));

        let command = ChangePasswordCommand {
            current_password: "guessed_wrong".to_string(),
            new_password: "new_password".to_string(),
        };
        let result = service.change_password(&agent_id, command).await;
        assert!(matches!(
            result.unwrap_err(),
            AgentError::InvalidCredentials
        ));
    }
}
