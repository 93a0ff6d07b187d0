use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

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
use crate::refdata::ports::AddressRepository;
use crate::refdata::ports::CityRepository;
use crate::refdata::ports::ReferenceDataServicePort;
use crate::refdata::ports::StateRepository;

/// Domain service implementation for reference data.
pub struct ReferenceDataService<SR, CR, AR>
where
    SR: StateRepository,
    CR: CityRepository,
    AR: AddressRepository,
{
    states: Arc<SR>,
    cities: Arc<CR>,
    addresses: Arc<AR>,
}

impl<SR, CR, AR> ReferenceDataService<SR, CR, AR>
where
    SR: StateRepository,
    CR: CityRepository,
    AR: AddressRepository,
{
    pub fn new(states: Arc<SR>, cities: Arc<CR>, addresses: Arc<AR>) -> Self {
        Self {
            states,
            cities,
            addresses,
        }
    }
}

#[async_trait]
impl<SR, CR, AR> ReferenceDataServicePort for ReferenceDataService<SR, CR, AR>
where
    SR: StateRepository,
    CR: CityRepository,
    AR: AddressRepository,
{
    async fn list_states(&self) -> Result<Vec<State>, ReferenceDataError> {
        self.states.list_all().await
    }

    async fn get_state(&self, id: &StateId) -> Result<State, ReferenceDataError> {
        self.states
            .find_by_id(id)
            .await?
            .ok_or(ReferenceDataError::StateNotFound(id.to_string()))
    }

    async fn create_state(&self, command: StateCommand) -> Result<State, ReferenceDataError> {
        let now = Utc::now();
        let state = State {
            id: StateId::new(),
            state: command.state,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.states.create(state).await
    }

    async fn update_state(
        &self,
        id: &StateId,
        command: StateCommand,
    ) -> Result<State, ReferenceDataError> {
        let mut state = self.get_state(id).await?;

        state.state = command.state;
        state.updated_at = Utc::now();

        self.states.update(state).await
    }

    async fn delete_state(&self, id: &StateId) -> Result<(), ReferenceDataError> {
        self.get_state(id).await?;
        self.states.delete(id).await
    }

    async fn list_cities(&self) -> Result<Vec<City>, ReferenceDataError> {
        self.cities.list_all().await
    }

    async fn get_city(&self, id: &CityId) -> Result<City, ReferenceDataError> {
        self.cities
            .find_by_id(id)
            .await?
            .ok_or(ReferenceDataError::CityNotFound(id.to_string()))
    }

    async fn create_city(&self, command: CityCommand) -> Result<City, ReferenceDataError> {
        let now = Utc::now();
        let city = City {
            id: CityId::new(),
            city: command.city,
            state_id: command.state_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.cities.create(city).await
    }

    async fn update_city(
        &self,
        id: &CityId,
        command: CityCommand,
    ) -> Result<City, ReferenceDataError> {
        let mut city = self.get_city(id).await?;

        city.city = command.city;
        city.state_id = command.state_id;
        city.updated_at = Utc::now();

        self.cities.update(city).await
    }

    async fn delete_city(&self, id: &CityId) -> Result<(), ReferenceDataError> {
        self.get_city(id).await?;
        self.cities.delete(id).await
    }

    async fn list_addresses(&self) -> Result<Vec<Address>, ReferenceDataError> {
        self.addresses.list_all().await
    }

    async fn get_address(&self, id: &AddressId) -> Result<Address, ReferenceDataError> {
        self.addresses
            .find_by_id(id)
            .await?
            .ok_or(ReferenceDataError::AddressNotFound(id.to_string()))
    }

    async fn create_address(
        &self,
        command: AddressCommand,
    ) -> Result<Address, ReferenceDataError> {
        let address = Address {
            id: AddressId::new(),
            state_id: command.state_id,
            city_id: command.city_id,
            address: command.address,
        };

        self.addresses.create(address).await
    }

    async fn update_address(
        &self,
        id: &AddressId,
        command: AddressCommand,
    ) -> Result<Address, ReferenceDataError> {
        let mut address = self.get_address(id).await?;

        address.state_id = command.state_id;
        address.city_id = command.city_id;
        address.address = command.address;

        self.addresses.update(address).await
    }

    async fn delete_address(&self, id: &AddressId) -> Result<(), ReferenceDataError> {
        self.get_address(id).await?;
        self.addresses.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestStateRepository {}

        #[async_trait]
        impl StateRepository for TestStateRepository {
            async fn create(&self, state: State) -> Result<State, ReferenceDataError>;
            async fn find_by_id(&self, id: &StateId) -> Result<Option<State>, ReferenceDataError>;
            async fn list_all(&self) -> Result<Vec<State>, ReferenceDataError>;
            async fn update(&self, state: State) -> Result<State, ReferenceDataError>;
            async fn delete(&self, id: &StateId) -> Result<(), ReferenceDataError>;
        }
    }

    mock! {
        pub TestCityRepository {}

        #[async_trait]
        impl CityRepository for TestCityRepository {
            async fn create(&self, city: City) -> Result<City, ReferenceDataError>;
            async fn find_by_id(&self, id: &CityId) -> Result<Option<City>, ReferenceDataError>;
            async fn list_all(&self) -> Result<Vec<City>, ReferenceDataError>;
            async fn update(&self, city: City) -> Result<City, ReferenceDataError>;
            async fn delete(&self, id: &CityId) -> Result<(), ReferenceDataError>;
        }
    }

    mock! {
        pub TestAddressRepository {}

        #[async_trait]
        impl AddressRepository for TestAddressRepository {
            async fn create(&self, address: Address) -> Result<Address, ReferenceDataError>;
            async fn find_by_id(&self, id: &AddressId) -> Result<Option<Address>, ReferenceDataError>;
            async fn list_all(&self) -> Result<Vec<Address>, ReferenceDataError>;
            async fn update(&self, address: Address) -> Result<Address, ReferenceDataError>;
            async fn delete(&self, id: &AddressId) -> Result<(), ReferenceDataError>;
        }
    }

    fn service(
        states: MockTestStateRepository,
    ) -> ReferenceDataService<MockTestStateRepository, MockTestCityRepository, MockTestAddressRepository>
    {
        ReferenceDataService::new(
            Arc::new(states),
            Arc::new(MockTestCityRepository::new()),
            Arc::new(MockTestAddressRepository::new()),
        )
    }

    // An earlier revision of the state/city/address update endpoints answered
    // 204 while the field assignments sat unreachable behind the not-found
    // guard, so nothing was ever persisted. That is treated as a defect here:
    // updates apply and persist. TODO: confirm with the product owner that no
    // caller depends on the old no-op behavior.
    #[tokio::test]
    async fn test_update_state_persists_fields() {
        let mut states = MockTestStateRepository::new();
        let state_id = StateId::new();
        let existing = State {
            id: state_id,
            state: "Carabobo".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        states
            .expect_find_by_id()
            .withf(move |id| *id == state_id)
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        states
            .expect_update()
            .withf(|state| state.state == "Miranda")
            .times(1)
            .returning(|state| Ok(state));

        let service = service(states);

        let updated = service
            .update_state(
                &state_id,
                StateCommand {
                    state: "Miranda".to_string(),
                },
            )
            .await
            .expect("Update failed");
        assert_eq!(updated.state, "Miranda");
    }

    #[tokio::test]
    async fn test_update_missing_state() {
        let mut states = MockTestStateRepository::new();
        states.expect_find_by_id().times(1).returning(|_| Ok(None));
        states.expect_update().times(0);

        let service = service(states);

        let result = service
            .update_state(
                &StateId::new(),
                StateCommand {
                    state: "Miranda".to_string(),
                },
            )
            .await;
        assert!(matches!(
            result.unwrap_err(),
            ReferenceDataError::StateNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_state() {
        let mut states = MockTestStateRepository::new();
        states.expect_find_by_id().times(1).returning(|_| Ok(None));
        states.expect_delete().times(0);

        let service = service(states);

        let result = service.delete_state(&StateId::new()).await;
        assert!(matches!(
            result.unwrap_err(),
            ReferenceDataError::StateNotFound(_)
        ));
    }
}
