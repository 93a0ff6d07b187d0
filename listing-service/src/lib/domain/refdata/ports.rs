use async_trait::async_trait;

use crate::refdata::errors::ReferenceDataError;
use crate::refdata::models::Address;
use crate::refdata::models::AddressCommand;
use crate::refdata::models::AddressId;
use crate::refdata::models::City;
use crate::refdata::models::CityCommand;
use crate::refdata::models::CityId;
use crate::refdata::models::State;
use crate::refdata::models::StateCommand;
use crate::refdata::models::StateId;

/// Port for reference-data service operations (states, cities, addresses).
///
/// All three aggregates share the same plumbing shape: list, get, create,
/// full-field update, delete.
#[async_trait]
pub trait ReferenceDataServicePort: Send + Sync + 'static {
    async fn list_states(&self) -> Result<Vec<State>, ReferenceDataError>;
    async fn get_state(&self, id: &StateId) -> Result<State, ReferenceDataError>;
    async fn create_state(&self, command: StateCommand) -> Result<State, ReferenceDataError>;
    async fn update_state(
        &self,
        id: &StateId,
        command: StateCommand,
    ) -> Result<State, ReferenceDataError>;
    async fn delete_state(&self, id: &StateId) -> Result<(), ReferenceDataError>;

    async fn list_cities(&self) -> Result<Vec<City>, ReferenceDataError>;
    async fn get_city(&self, id: &CityId) -> Result<City, ReferenceDataError>;
    async fn create_city(&self, command: CityCommand) -> Result<City, ReferenceDataError>;
    async fn update_city(
        &self,
        id: &CityId,
        command: CityCommand,
    ) -> Result<City, ReferenceDataError>;
    async fn delete_city(&self, id: &CityId) -> Result<(), ReferenceDataError>;

    async fn list_addresses(&self) -> Result<Vec<Address>, ReferenceDataError>;
    async fn get_address(&self, id: &AddressId) -> Result<Address, ReferenceDataError>;
    async fn create_address(&self, command: AddressCommand)
        -> Result<Address, ReferenceDataError>;
    async fn update_address(
        &self,
        id: &AddressId,
        command: AddressCommand,
    ) -> Result<Address, ReferenceDataError>;
    async fn delete_address(&self, id: &AddressId) -> Result<(), ReferenceDataError>;
}

/// Persistence operations for states.
#[async_trait]
pub trait StateRepository: Send + Sync + 'static {
    async fn create(&self, state: State) -> Result<State, ReferenceDataError>;
    async fn find_by_id(&self, id: &StateId) -> Result<Option<State>, ReferenceDataError>;
    async fn list_all(&self) -> Result<Vec<State>, ReferenceDataError>;
    async fn update(&self, state: State) -> Result<State, ReferenceDataError>;
    async fn delete(&self, id: &StateId) -> Result<(), ReferenceDataError>;
}

/// Persistence operations for cities.
#[async_trait]
pub trait CityRepository: Send + Sync + 'static {
    async fn create(&self, city: City) -> Result<City, ReferenceDataError>;
    async fn find_by_id(&self, id: &CityId) -> Result<Option<City>, ReferenceDataError>;
    async fn list_all(&self) -> Result<Vec<City>, ReferenceDataError>;
    async fn update(&self, city: City) -> Result<City, ReferenceDataError>;
    async fn delete(&self, id: &CityId) -> Result<(), ReferenceDataError>;
}

/// Persistence operations for addresses.
#[async_trait]
pub trait AddressRepository: Send + Sync + 'static {
    async fn create(&self, address: Address) -> Result<Address, ReferenceDataError>;
    async fn find_by_id(&self, id: &AddressId) -> Result<Option<Address>, ReferenceDataError>;
    async fn list_all(&self) -> Result<Vec<Address>, ReferenceDataError>;
    async fn update(&self, address: Address) -> Result<Address, ReferenceDataError>;
    async fn delete(&self, id: &AddressId) -> Result<(), ReferenceDataError>;
}
