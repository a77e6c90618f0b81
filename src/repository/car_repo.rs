use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::car_store::{is_valid_collection_name, CarStore};
use super::errors::StoreError;
use crate::models::{Car, CarDetails, CarId};

/// Car documents kept in a Postgres table: one row per car, the business
/// fields stored as a JSONB document next to the storage-assigned id.
#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
    collection: String,
}

impl CarRepository {
    pub fn new(pool: PgPool, collection: impl Into<String>) -> Result<Self, StoreError> {
        let collection = collection.into();
        if !is_valid_collection_name(&collection) {
            return Err(StoreError::InvalidCollection(collection));
        }
        Ok(Self { pool, collection })
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The collection as a quoted SQL identifier, so reserved words and
    /// mixed-case names reach Postgres unchanged.
    pub fn table(&self) -> String {
        quote_identifier(&self.collection)
    }

    /// Creates the collection if it does not exist yet.
    pub async fn ensure_collection(&self) -> Result<(), StoreError> {
        let query = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                 id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                 document JSONB NOT NULL
             )",
            self.table()
        );
        sqlx::query(&query).execute(&self.pool).await?;
        Ok(())
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn into_car((id, document): (Uuid, Json<CarDetails>)) -> Car {
    Car::new(CarId::from(id), document.0)
}

#[async_trait]
impl CarStore for CarRepository {
    async fn insert(&self, details: &CarDetails) -> Result<Car, StoreError> {
        let query = format!(
            "INSERT INTO {} (document) VALUES ($1) RETURNING id, document",
            self.table()
        );
        let row = sqlx::query_as::<_, (Uuid, Json<CarDetails>)>(&query)
            .bind(Json(details))
            .fetch_one(&self.pool)
            .await?;
        Ok(into_car(row))
    }

    async fn find_all(&self) -> Result<Vec<Car>, StoreError> {
        let query = format!("SELECT id, document FROM {}", self.table());
        let rows = sqlx::query_as::<_, (Uuid, Json<CarDetails>)>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(into_car).collect())
    }

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, StoreError> {
        let query = format!("SELECT id, document FROM {} WHERE id = $1", self.table());
        let row = sqlx::query_as::<_, (Uuid, Json<CarDetails>)>(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(into_car))
    }

    async fn replace(&self, id: CarId, details: &CarDetails) -> Result<Option<Car>, StoreError> {
        let query = format!(
            "UPDATE {} SET document = $1 WHERE id = $2 RETURNING id, document",
            self.table()
        );
        let row = sqlx::query_as::<_, (Uuid, Json<CarDetails>)>(&query)
            .bind(Json(details))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(into_car))
    }

    async fn remove(&self, id: CarId) -> Result<bool, StoreError> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.table());
        let result = sqlx::query(&query)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
