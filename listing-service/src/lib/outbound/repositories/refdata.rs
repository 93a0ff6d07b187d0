//! Postgres adapters for the reference-data aggregates.

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::refdata::errors::ReferenceDataError;
use crate::refdata::models::Address;
use crate::refdata::models::AddressId;
use crate::refdata::models::City;
use crate::refdata::models::CityId;
use crate::refdata::models::State;
use crate::refdata::models::StateId;
use crate::refdata::ports::AddressRepository;
use crate::refdata::ports::CityRepository;
use crate::refdata::ports::StateRepository;

pub struct PostgresStateRepository {
    pool: PgPool,
}

impl PostgresStateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StateRow {
    id: Uuid,
    state: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StateRow> for State {
    fn from(row: StateRow) -> Self {
        State {
            id: StateId(row.id),
            state: row.state,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl StateRepository for PostgresStateRepository {
    async fn create(&self, state: State) -> Result<State, ReferenceDataError> {
        sqlx::query(
            r#"
            INSERT INTO states (id, state, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(state.id.0)
        .bind(&state.state)
        .bind(state.is_active)
        .bind(state.created_at)
        .bind(state.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(state)
    }

    async fn find_by_id(&self, id: &StateId) -> Result<Option<State>, ReferenceDataError> {
        let row = sqlx::query_as::<_, StateRow>(
            "SELECT id, state, is_active, created_at, updated_at FROM states WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(row.map(State::from))
    }

    async fn list_all(&self) -> Result<Vec<State>, ReferenceDataError> {
        let rows = sqlx::query_as::<_, StateRow>(
            "SELECT id, state, is_active, created_at, updated_at FROM states ORDER BY state",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(State::from).collect())
    }

    async fn update(&self, state: State) -> Result<State, ReferenceDataError> {
        let result = sqlx::query(
            "UPDATE states SET state = $2, is_active = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(state.id.0)
        .bind(&state.state)
        .bind(state.is_active)
        .bind(state.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReferenceDataError::StateNotFound(state.id.to_string()));
        }

        Ok(state)
    }

    async fn delete(&self, id: &StateId) -> Result<(), ReferenceDataError> {
        let result = sqlx::query("DELETE FROM states WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReferenceDataError::StateNotFound(id.to_string()));
        }

        Ok(())
    }
}

pub struct PostgresCityRepository {
    pool: PgPool,
}

impl PostgresCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CityRow {
    id: Uuid,
    city: String,
    state_id: Uuid,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CityRow> for City {
    fn from(row: CityRow) -> Self {
        City {
            id: CityId(row.id),
            city: row.city,
            state_id: StateId(row.state_id),
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CityRepository for PostgresCityRepository {
    async fn create(&self, city: City) -> Result<City, ReferenceDataError> {
        sqlx::query(
            r#"
            INSERT INTO cities (id, city, state_id, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(city.id.0)
        .bind(&city.city)
        .bind(city.state_id.0)
        .bind(city.is_active)
        .bind(city.created_at)
        .bind(city.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(city)
    }

    async fn find_by_id(&self, id: &CityId) -> Result<Option<City>, ReferenceDataError> {
        let row = sqlx::query_as::<_, CityRow>(
            "SELECT id, city, state_id, is_active, created_at, updated_at FROM cities WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(row.map(City::from))
    }

    async fn list_all(&self) -> Result<Vec<City>, ReferenceDataError> {
        let rows = sqlx::query_as::<_, CityRow>(
            "SELECT id, city, state_id, is_active, created_at, updated_at FROM cities ORDER BY city",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn update(&self, city: City) -> Result<City, ReferenceDataError> {
        let result = sqlx::query(
            "UPDATE cities SET city = $2, state_id = $3, is_active = $4, updated_at = $5 WHERE id = $1",
        )
        .bind(city.id.0)
        .bind(&city.city)
        .bind(city.state_id.0)
        .bind(city.is_active)
        .bind(city.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReferenceDataError::CityNotFound(city.id.to_string()));
        }

        Ok(city)
    }

    async fn delete(&self, id: &CityId) -> Result<(), ReferenceDataError> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReferenceDataError::CityNotFound(id.to_string()));
        }

        Ok(())
    }
}

pub struct PostgresAddressRepository {
    pool: PgPool,
}

impl PostgresAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AddressRow {
    id: Uuid,
    state_id: Uuid,
    city_id: Uuid,
    address: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address {
            id: AddressId(row.id),
            state_id: StateId(row.state_id),
            city_id: CityId(row.city_id),
            address: row.address,
        }
    }
}

#[async_trait]
impl AddressRepository for PostgresAddressRepository {
    async fn create(&self, address: Address) -> Result<Address, ReferenceDataError> {
        sqlx::query(
            r#"
            INSERT INTO addresses (id, state_id, city_id, address)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(address.id.0)
        .bind(address.state_id.0)
        .bind(address.city_id.0)
        .bind(&address.address)
        .execute(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(address)
    }

    async fn find_by_id(&self, id: &AddressId) -> Result<Option<Address>, ReferenceDataError> {
        let row = sqlx::query_as::<_, AddressRow>(
            "SELECT id, state_id, city_id, address FROM addresses WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(row.map(Address::from))
    }

    async fn list_all(&self) -> Result<Vec<Address>, ReferenceDataError> {
        let rows = sqlx::query_as::<_, AddressRow>(
            "SELECT id, state_id, city_id, address FROM addresses ORDER BY address",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Address::from).collect())
    }

    async fn update(&self, address: Address) -> Result<Address, ReferenceDataError> {
        let result = sqlx::query(
            "UPDATE addresses SET state_id = $2, city_id = $3, address = $4 WHERE id = $1",
        )
        .bind(address.id.0)
        .bind(address.state_id.0)
        .bind(address.city_id.0)
        .bind(&address.address)
        .execute(&self.pool)
        .await
        .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReferenceDataError::AddressNotFound(address.id.to_string()));
        }

        Ok(address)
    }

    async fn delete(&self, id: &AddressId) -> Result<(), ReferenceDataError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ReferenceDataError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReferenceDataError::AddressNotFound(id.to_string()));
        }

        Ok(())
    }
}
