use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::agent::models::AgentId;
use crate::property::errors::PropertyIdError;
use crate::property::errors::UnknownPropertyStatus;
use crate::property::errors::UnknownPropertyType;
use crate::refdata::models::AddressId;

/// Property listing aggregate entity.
#[derive(Debug, Clone)]
pub struct Property {
    pub id: PropertyId,
    pub address_id: AddressId,
    pub property_type: PropertyType,
    pub price: f64,
    pub status: PropertyStatus,
    /// Owning agent. Ownership-gated operations compare this against the
    /// requesting principal.
    pub agent_id: AgentId,
    pub title: String,
    pub subtitle: String,
    pub size: f64,
    pub bedrooms: i32,
    pub rooms: i32,
    pub bathrooms: i32,
    pub description: String,
    pub video: Option<String>,
    pub map: Option<String>,
}

/// Property unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(pub Uuid);

impl PropertyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a property ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PropertyIdError> {
        Uuid::parse_str(s)
            .map(PropertyId)
            .map_err(|e| PropertyIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PropertyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of property categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Land,
    Local,
    Commercial,
    Other,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Land => "land",
            PropertyType::Local => "local",
            PropertyType::Commercial => "commercial",
            PropertyType::Other => "other",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "land" => Ok(PropertyType::Land),
            "local" => Ok(PropertyType::Local),
            "commercial" => Ok(PropertyType::Commercial),
            "other" => Ok(PropertyType::Other),
            other => Err(UnknownPropertyType(other.to_string())),
        }
    }
}

/// Listing lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[serde(rename = "sold")]
    Sold,
    #[serde(rename = "rented")]
    Rented,
    #[serde(rename = "for sale")]
    ForSale,
    #[serde(rename = "for rent")]
    ForRent,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
            PropertyStatus::ForSale => "for sale",
            PropertyStatus::ForRent => "for rent",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = UnknownPropertyStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sold" => Ok(PropertyStatus::Sold),
            "rented" => Ok(PropertyStatus::Rented),
            "for sale" => Ok(PropertyStatus::ForSale),
            "for rent" => Ok(PropertyStatus::ForRent),
            other => Err(UnknownPropertyStatus(other.to_string())),
        }
    }
}

/// Command to create a new listing. The owner is supplied separately by the
/// service from the authenticated principal, never from request data.
#[derive(Debug)]
pub struct CreatePropertyCommand {
    pub address_id: AddressId,
    pub property_type: PropertyType,
    pub price: f64,
    pub status: PropertyStatus,
    pub title: String,
    pub subtitle: String,
    pub size: f64,
    pub bedrooms: i32,
    pub rooms: i32,
    pub bathrooms: i32,
    pub description: String,
    pub video: Option<String>,
    pub map: Option<String>,
}

/// Full-replacement update for an existing listing.
#[derive(Debug)]
pub struct UpdatePropertyCommand {
    pub address_id: AddressId,
    pub property_type: PropertyType,
    pub price: f64,
    pub status: PropertyStatus,
    pub title: String,
    pub subtitle: String,
    pub size: f64,
    pub bedrooms: i32,
    pub rooms: i32,
    pub bathrooms: i32,
    pub description: String,
    pub video: Option<String>,
    pub map: Option<String>,
}
