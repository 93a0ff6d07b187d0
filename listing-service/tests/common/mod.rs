use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtCodec;
use jsonwebtoken::Algorithm;
use listing_service::agent::errors::AgentError;
use listing_service::agent::models::Agent;
use listing_service::agent::models::AgentId;
use listing_service::agent::models::Username;
use listing_service::agent::ports::AgentRepository;
use listing_service::domain::agent::service::AgentService;
use listing_service::domain::property::service::PropertyService;
use listing_service::domain::refdata::service::ReferenceDataService;
use listing_service::inbound::http::router::create_router;
use listing_service::inbound::http::router::AppState;
use listing_service::property::errors::PropertyError;
use listing_service::property::models::Property;
use listing_service::property::models::PropertyId;
use listing_service::property::ports::PropertyRepository;
use listing_service::refdata::errors::ReferenceDataError;
use listing_service::refdata::models::Address;
use listing_service::refdata::models::AddressId;
use listing_service::refdata::models::City;
use listing_service::refdata::models::CityId;
use listing_service::refdata::models::State;
use listing_service::refdata::models::StateId;
use listing_service::refdata::ports::AddressRepository;
use listing_service::refdata::ports::CityRepository;
use listing_service::refdata::ports::StateRepository;
use serde_json::json;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns the real router on a random port, backed by
/// in-memory repositories.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Codec sharing the app's signing secret, for minting tokens with
    /// arbitrary claims in tests.
    pub jwt_codec: JwtCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(
            Authenticator::new(TEST_JWT_SECRET.as_bytes(), Algorithm::HS256)
                .expect("Failed to build authenticator"),
        );

        let state = AppState {
            agent_service: Arc::new(AgentService::new(Arc::new(
                InMemoryAgentRepository::default(),
            ))),
            property_service: Arc::new(PropertyService::new(Arc::new(
                InMemoryPropertyRepository::default(),
            ))),
            refdata_service: Arc::new(ReferenceDataService::new(
                Arc::new(InMemoryStateRepository::default()),
                Arc::new(InMemoryCityRepository::default()),
                Arc::new(InMemoryAddressRepository::default()),
            )),
            authenticator,
            token_ttl_minutes: 20,
        };

        let application = create_router(state);
        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server stopped unexpectedly");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_codec: JwtCodec::new(TEST_JWT_SECRET.as_bytes(), Algorithm::HS256)
                .expect("Failed to build codec"),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an agent and return its id.
    pub async fn register_agent(&self, username: &str, password: &str, role: &str) -> String {
        let response = self
            .post("/api/agents")
            .json(&json!({
                "name": format!("{} Example", username),
                "email": format!("{}@example.com", username),
                "username": username,
                "password": password,
                "phone": "555-0100",
                "role": role,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_str().expect("Missing agent id").to_string()
    }

    /// Login through the form endpoint and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}

#[derive(Default)]
pub struct InMemoryAgentRepository {
    agents: RwLock<HashMap<Uuid, Agent>>,
}

#[async_trait]
impl AgentRepository for InMemoryAgentRepository {
    async fn create(&self, agent: Agent) -> Result<Agent, AgentError> {
        let mut agents = self.agents.write().unwrap();

        if agents
            .values()
            .any(|existing| existing.username == agent.username)
        {
            return Err(AgentError::UsernameAlreadyExists(
                agent.username.as_str().to_string(),
            ));
        }
        if agents.values().any(|existing| existing.email == agent.email) {
            return Err(AgentError::EmailAlreadyExists(
                agent.email.as_str().to_string(),
            ));
        }

        agents.insert(agent.id.0, agent.clone());
        Ok(agent)
    }

    async fn find_by_id(&self, id: &AgentId) -> Result<Option<Agent>, AgentError> {
        Ok(self.agents.read().unwrap().get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Agent>, AgentError> {
        Ok(self
            .agents
            .read()
            .unwrap()
            .values()
            .find(|agent| agent.username == *username)
            .cloned())
    }

    async fn update(&self, agent: Agent) -> Result<Agent, AgentError> {
        let mut agents = self.agents.write().unwrap();
        if !agents.contains_key(&agent.id.0) {
            return Err(AgentError::NotFound(agent.id.to_string()));
        }
        agents.insert(agent.id.0, agent.clone());
        Ok(agent)
    }
}

#[derive(Default)]
pub struct InMemoryPropertyRepository {
    properties: RwLock<HashMap<Uuid, Property>>,
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn create(&self, property: Property) -> Result<Property, PropertyError> {
        self.properties
            .write()
            .unwrap()
            .insert(property.id.0, property.clone());
        Ok(property)
    }

    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<Property>, PropertyError> {
        Ok(self.properties.read().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Property>, PropertyError> {
        Ok(self.properties.read().unwrap().values().cloned().collect())
    }

    async fn update(&self, property: Property) -> Result<Property, PropertyError> {
        let mut properties = self.properties.write().unwrap();
        if !properties.contains_key(&property.id.0) {
            return Err(PropertyError::NotFound(property.id.to_string()));
        }
        properties.insert(property.id.0, property.clone());
        Ok(property)
    }

    async fn delete(&self, id: &PropertyId) -> Result<(), PropertyError> {
        self.properties
            .write()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(PropertyError::NotFound(id.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryStateRepository {
    states: RwLock<HashMap<Uuid, State>>,
}

#[async_trait]
impl StateRepository for InMemoryStateRepository {
    async fn create(&self, state: State) -> Result<State, ReferenceDataError> {
        self.states.write().unwrap().insert(state.id.0, state.clone());
        Ok(state)
    }

    async fn find_by_id(&self, id: &StateId) -> Result<Option<State>, ReferenceDataError> {
        Ok(self.states.read().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<State>, ReferenceDataError> {
        Ok(self.states.read().unwrap().values().cloned().collect())
    }

    async fn update(&self, state: State) -> Result<State, ReferenceDataError> {
        let mut states = self.states.write().unwrap();
        if !states.contains_key(&state.id.0) {
            return Err(ReferenceDataError::StateNotFound(state.id.to_string()));
        }
        states.insert(state.id.0, state.clone());
        Ok(state)
    }

    async fn delete(&self, id: &StateId) -> Result<(), ReferenceDataError> {
        self.states
            .write()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(ReferenceDataError::StateNotFound(id.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryCityRepository {
    cities: RwLock<HashMap<Uuid, City>>,
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn create(&self, city: City) -> Result<City, ReferenceDataError> {
        self.cities.write().unwrap().insert(city.id.0, city.clone());
        Ok(city)
    }

    async fn find_by_id(&self, id: &CityId) -> Result<Option<City>, ReferenceDataError> {
        Ok(self.cities.read().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<City>, ReferenceDataError> {
        Ok(self.cities.read().unwrap().values().cloned().collect())
    }

    async fn update(&self, city: City) -> Result<City, ReferenceDataError> {
        let mut cities = self.cities.write().unwrap();
        if !cities.contains_key(&city.id.0) {
            return Err(ReferenceDataError::CityNotFound(city.id.to_string()));
        }
        cities.insert(city.id.0, city.clone());
        Ok(city)
    }

    async fn delete(&self, id: &CityId) -> Result<(), ReferenceDataError> {
        self.cities
            .write()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(ReferenceDataError::CityNotFound(id.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryAddressRepository {
    addresses: RwLock<HashMap<Uuid, Address>>,
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn create(&self, address: Address) -> Result<Address, ReferenceDataError> {
        self.addresses
            .write()
            .unwrap()
            .insert(address.id.0, address.clone());
        Ok(address)
    }

    async fn find_by_id(&self, id: &AddressId) -> Result<Option<Address>, ReferenceDataError> {
        Ok(self.addresses.read().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Address>, ReferenceDataError> {
        Ok(self.addresses.read().unwrap().values().cloned().collect())
    }

    async fn update(&self, address: Address) -> Result<Address, ReferenceDataError> {
        let mut addresses = self.addresses.write().unwrap();
        if !addresses.contains_key(&address.id.0) {
            return Err(ReferenceDataError::AddressNotFound(address.id.to_string()));
        }
        addresses.insert(address.id.0, address.clone());
        Ok(address)
    }

    async fn delete(&self, id: &AddressId) -> Result<(), ReferenceDataError> {
        self.addresses
            .write()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(ReferenceDataError::AddressNotFound(id.to_string()))
    }
}
