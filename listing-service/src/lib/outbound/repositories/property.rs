use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::agent::models::AgentId;
use crate::property::errors::PropertyError;
use crate::property::models::Property;
use crate::property::models::PropertyId;
use crate::property::models::PropertyStatus;
use crate::property::models::PropertyType;
use crate::property::ports::PropertyRepository;
use crate::refdata::models::AddressId;

pub struct PostgresPropertyRepository {
    pool: PgPool,
}

impl PostgresPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PropertyRow {
    id: Uuid,
    address_id: Uuid,
    property_type: String,
    price: f64,
    status: String,
    agent_id: Uuid,
    title: String,
    subtitle: String,
    size: f64,
    bedrooms: i32,
    rooms: i32,
    bathrooms: i32,
    description: String,
    video: Option<String>,
    map: Option<String>,
}

impl PropertyRow {
    fn try_into_property(self) -> Result<Property, PropertyError> {
        Ok(Property {
            id: PropertyId(self.id),
            address_id: AddressId(self.address_id),
            property_type: self.property_type.parse::<PropertyType>()?,
            price: self.price,
            status: self.status.parse::<PropertyStatus>()?,
            agent_id: AgentId(self.agent_id),
            title: self.title,
            subtitle: self.subtitle,
            size: self.size,
            bedrooms: self.bedrooms,
            rooms: self.rooms,
            bathrooms: self.bathrooms,
            description: self.description,
            video: self.video,
            map: self.map,
        })
    }
}

#[async_trait]
impl PropertyRepository for PostgresPropertyRepository {
    async fn create(&self, property: Property) -> Result<Property, PropertyError> {
        sqlx::query(
            r#"
            INSERT INTO properties (id, address_id, property_type, price, status, agent_id, title, subtitle, size, bedrooms, rooms, bathrooms, description, video, map)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(property.id.0)
        .bind(property.address_id.0)
        .bind(property.property_type.as_str())
        .bind(property.price)
        .bind(property.status.as_str())
        .bind(property.agent_id.0)
        .bind(&property.title)
        .bind(&property.subtitle)
        .bind(property.size)
        .bind(property.bedrooms)
        .bind(property.rooms)
        .bind(property.bathrooms)
        .bind(&property.description)
        .bind(&property.video)
        .bind(&property.map)
        .execute(&self.pool)
        .await
        .map_err(|e| PropertyError::DatabaseError(e.to_string()))?;

        Ok(property)
    }

    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<Property>, PropertyError> {
        let row = sqlx::query_as::<_, PropertyRow>(
            r#"
            SELECT id, address_id, property_type, price, status, agent_id, title, subtitle, size, bedrooms, rooms, bathrooms, description, video, map
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PropertyError::DatabaseError(e.to_string()))?;

        row.map(PropertyRow::try_into_property).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Property>, PropertyError> {
        let rows = sqlx::query_as::<_, PropertyRow>(
            r#"
            SELECT id, address_id, property_type, price, status, agent_id, title, subtitle, size, bedrooms, rooms, bathrooms, description, video, map
            FROM properties
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PropertyError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(PropertyRow::try_into_property)
            .collect()
    }

    async fn update(&self, property: Property) -> Result<Property, PropertyError> {
        let result = sqlx::query(
            r#"
            UPDATE properties
            SET address_id = $2, property_type = $3, price = $4, status = $5, title = $6, subtitle = $7, size = $8, bedrooms = $9, rooms = $10, bathrooms = $11, description = $12, video = $13, map = $14
            WHERE id = $1
            "#,
        )
        .bind(property.id.0)
        .bind(property.address_id.0)
        .bind(property.property_type.as_str())
        .bind(property.price)
        .bind(property.status.as_str())
        .bind(&property.title)
        .bind(&property.subtitle)
        .bind(property.size)
        .bind(property.bedrooms)
        .bind(property.rooms)
        .bind(property.bathrooms)
        .bind(&property.description)
        .bind(&property.video)
        .bind(&property.map)
        .execute(&self.pool)
        .await
        .map_err(|e| PropertyError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PropertyError::NotFound(property.id.to_string()));
        }

        Ok(property)
    }

    async fn delete(&self, id: &PropertyId) -> Result<(), PropertyError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PropertyError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PropertyError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
