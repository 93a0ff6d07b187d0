use async_trait::async_trait;

use crate::agent::models::AgentId;
use crate::property::errors::PropertyError;
use crate::property::models::CreatePropertyCommand;
use crate::property::models::Property;
use crate::property::models::PropertyId;
use crate::property::models::UpdatePropertyCommand;

/// Port for property domain service operations.
#[async_trait]
pub trait PropertyServicePort: Send + Sync + 'static {
    /// Create a new listing owned by `owner`.
    async fn create_property(
        &self,
        owner: AgentId,
        command: CreatePropertyCommand,
    ) -> Result<Property, PropertyError>;

    /// Retrieve all listings.
    async fn list_properties(&self) -> Result<Vec<Property>, PropertyError>;

    /// Retrieve a single listing.
    ///
    /// # Errors
    /// * `NotFound` - Listing does not exist
    async fn get_property(&self, id: &PropertyId) -> Result<Property, PropertyError>;

    /// Replace a listing's fields. Ownership-gated: a requester who does not
    /// own the listing gets `NotFound`, identical to a nonexistent listing.
    async fn update_property(
        &self,
        requester: &AgentId,
        id: &PropertyId,
        command: UpdatePropertyCommand,
    ) -> Result<Property, PropertyError>;

    /// Delete a listing. Ownership-gated like `update_property`.
    async fn delete_property(
        &self,
        requester: &AgentId,
        id: &PropertyId,
    ) -> Result<(), PropertyError>;

    /// Delete any listing regardless of owner. Role gating (admin only)
    /// happens at the boundary before this is called.
    ///
    /// # Errors
    /// * `NotFound` - Listing does not exist
    async fn admin_delete_property(&self, id: &PropertyId) -> Result<(), PropertyError>;
}

/// Persistence operations for the property aggregate.
#[async_trait]
pub trait PropertyRepository: Send + Sync + 'static {
    async fn create(&self, property: Property) -> Result<Property, PropertyError>;

    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<Property>, PropertyError>;

    async fn list_all(&self) -> Result<Vec<Property>, PropertyError>;

    async fn update(&self, property: Property) -> Result<Property, PropertyError>;

    async fn delete(&self, id: &PropertyId) -> Result<(), PropertyError>;
}
