use std::sync::Arc;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarDetails, CarId};
use crate::repository::CarStore;

/// Stateless façade over a [`CarStore`]; every call is one storage round-trip.
#[derive(Clone)]
pub struct CarService {
    store: Arc<dyn CarStore>,
}

impl CarService {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }

    pub async fn create_car(&self, details: CarDetails) -> Result<Car, AppError> {
        tracing::info!("{} Creating car: {} ({})", API_NAME, details.model, details.year);

        let car = self.store.insert(&details).await?;

        tracing::info!("{} Successfully created car: {}", API_NAME, car.id);
        Ok(car)
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        let cars = self.store.find_all().await?;
        tracing::debug!("{} Listed {} cars", API_NAME, cars.len());
        Ok(cars)
    }

    pub async fn update_car(&self, id: CarId, details: CarDetails) -> Result<Car, AppError> {
        tracing::info!("{} Updating car: {}", API_NAME, id);

        match self.store.replace(id, &details).await? {
            Some(car) => {
                tracing::info!("{} Successfully updated car: {}", API_NAME, id);
                Ok(car)
            }
            None => {
                tracing::warn!("{} Update skipped, no car with id: {}", API_NAME, id);
                Err(AppError::NotFound(id))
            }
        }
    }

    pub async fn delete_car(&self, id: CarId) -> Result<(), AppError> {
        tracing::info!("{} Deleting car: {}", API_NAME, id);

        if self.store.remove(id).await? {
            tracing::info!("{} Successfully deleted car: {}", API_NAME, id);
            Ok(())
        } else {
            tracing::warn!("{} Delete skipped, no car with id: {}", API_NAME, id);
            Err(AppError::NotFound(id))
        }
    }
}
