//! Reference data backing listings: states, cities, and street addresses.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::refdata::errors::ReferenceIdError;

/// State unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub Uuid);

impl StateId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, ReferenceIdError> {
        Uuid::parse_str(s)
            .map(StateId)
            .map_err(|e| ReferenceIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for StateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// City unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CityId(pub Uuid);

impl CityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, ReferenceIdError> {
        Uuid::parse_str(s)
            .map(CityId)
            .map_err(|e| ReferenceIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Address unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressId(pub Uuid);

impl AddressId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, ReferenceIdError> {
        Uuid::parse_str(s)
            .map(AddressId)
            .map_err(|e| ReferenceIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AddressId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pub id: StateId,
    pub state: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct City {
    pub id: CityId,
    pub city: String,
    pub state_id: StateId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Address {
    pub id: AddressId,
    pub state_id: StateId,
    pub city_id: CityId,
    pub address: String,
}

#[derive(Debug)]
pub struct StateCommand {
    pub state: String,
}

#[derive(Debug)]
pub struct CityCommand {
    pub city: String,
    pub state_id: StateId,
}

#[derive(Debug)]
pub struct AddressCommand {
    pub state_id: StateId,
    pub city_id: CityId,
    pub address: String,
}
