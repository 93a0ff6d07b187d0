use std::sync::Arc;

use async_trait::async_trait;

use crate::agent::models::AgentId;
use crate::property::errors::PropertyError;
use crate::property::models::CreatePropertyCommand;
use crate::property::models::Property;
use crate::property::models::PropertyId;
use crate::property::models::UpdatePropertyCommand;
use crate::property::ports::PropertyRepository;
use crate::property::ports::PropertyServicePort;

/// Domain service implementation for property listings.
pub struct PropertyService<R>
where
    R: PropertyRepository,
{
    repository: Arc<R>,
}

impl<R> PropertyService<R>
where
    R: PropertyRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetch a listing on behalf of `requester`, hiding listings the
    /// requester does not own. Missing and not-owned are deliberately the
    /// same `NotFound`.
    async fn find_owned(
        &self,
        requester: &AgentId,
        id: &PropertyId,
    ) -> Result<Property, PropertyError> {
        let property = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PropertyError::NotFound(id.to_string()))?;

        if property.agent_id != *requester {
            tracing::info!(
                property_id = %id,
                requester = %requester,
                owner = %property.agent_id,
                "Ownership mismatch reported as not found"
            );
            return Err(PropertyError::NotFound(id.to_string()));
        }

        Ok(property)
    }
}

#[async_trait]
impl<R> PropertyServicePort for PropertyService<R>
where
    R: PropertyRepository,
{
    async fn create_property(
        &self,
        owner: AgentId,
        command: CreatePropertyCommand,
    ) -> Result<Property, PropertyError> {
        let property = Property {
            id: PropertyId::new(),
            address_id: command.address_id,
            property_type: command.property_type,
            price: command.price,
            status: command.status,
            agent_id: owner,
            title: command.title,
            subtitle: command.subtitle,
            size: command.size,
            bedrooms: command.bedrooms,
            rooms: command.rooms,
            bathrooms: command.bathrooms,
            description: command.description,
            video: command.video,
            map: command.map,
        };

        self.repository.create(property).await
    }

    async fn list_properties(&self) -> Result<Vec<Property>, PropertyError> {
        self.repository.list_all().await
    }

    async fn get_property(&self, id: &PropertyId) -> Result<Property, PropertyError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PropertyError::NotFound(id.to_string()))
    }

    async fn update_property(
        &self,
        requester: &AgentId,
        id: &PropertyId,
        command: UpdatePropertyCommand,
    ) -> Result<Property, PropertyError> {
        let mut property = self.find_owned(requester, id).await?;

        property.address_id = command.address_id;
        property.property_type = command.property_type;
        property.price = command.price;
        property.status = command.status;
        property.title = command.title;
        property.subtitle = command.subtitle;
        property.size = command.size;
        property.bedrooms = command.bedrooms;
        property.rooms = command.rooms;
        property.bathrooms = command.bathrooms;
        property.description = command.description;
        property.video = command.video;
        property.map = command.map;

        self.repository.update(property).await
    }

    async fn delete_property(
        &self,
        requester: &AgentId,
        id: &PropertyId,
    ) -> Result<(), PropertyError> {
        self.find_owned(requester, id).await?;

        self.repository.delete(id).await
    }

    async fn admin_delete_property(&self, id: &PropertyId) -> Result<(), PropertyError> {
        // Admins may learn whether a listing exists.
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PropertyError::NotFound(id.to_string()))?;

        self.repository.delete(id).await
    }
}
