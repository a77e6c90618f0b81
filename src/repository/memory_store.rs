use async_trait::async_trait;
use tokio::sync::RwLock;

use super::car_store::CarStore;
use super::errors::StoreError;
use crate::models::{Car, CarDetails, CarId};

/// Process-local store; documents are kept in insertion order.
#[derive(Default)]
pub struct InMemoryCarStore {
    cars: RwLock<Vec<Car>>,
}

impl InMemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.cars.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cars.read().await.is_empty()
    }
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn insert(&self, details: &CarDetails) -> Result<Car, StoreError> {
        let mut cars = self.cars.write().await;
        let mut id = CarId::new_random();
        while cars.iter().any(|car| car.id == id) {
            id = CarId::new_random();
        }
        let car = Car::new(id, details.clone());
        cars.push(car.clone());
        Ok(car)
    }

    async fn find_all(&self) -> Result<Vec<Car>, StoreError> {
        Ok(self.cars.read().await.clone())
    }

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, StoreError> {
        Ok(self.cars.read().await.iter().find(|car| car.id == id).cloned())
    }

    async fn replace(&self, id: CarId, details: &CarDetails) -> Result<Option<Car>, StoreError> {
        let mut cars = self.cars.write().await;
        Ok(cars.iter_mut().find(|car| car.id == id).map(|car| {
            car.details = details.clone();
            car.clone()
        }))
    }

    async fn remove(&self, id: CarId) -> Result<bool, StoreError> {
        let mut cars = self.cars.write().await;
        let before = cars.len();
        cars.retain(|car| car.id != id);
        Ok(cars.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(model: &str, year: i32) -> CarDetails {
        CarDetails {
            model: model.to_string(),
            year,
            color: "silver".to_string(),
            price: 10000.0,
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids_to_identical_documents() {
        let store = InMemoryCarStore::new();
        let first = store.insert(&details("Golf", 2018)).await.unwrap();
        let second = store.insert(&details("Golf", 2018)).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = InMemoryCarStore::new();
        store.insert(&details("A", 2001)).await.unwrap();
        store.insert(&details("B", 2002)).await.unwrap();
        let models: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|car| car.details.model)
            .collect();
        assert_eq!(models, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn replace_and_remove_report_missing_documents() {
        let store = InMemoryCarStore::new();
        let kept = store.insert(&details("Kept", 2010)).await.unwrap();
        let missing = CarId::new_random();

        assert!(store.replace(missing, &details("X", 1999)).await.unwrap().is_none());
        assert!(!store.remove(missing).await.unwrap());
        assert_eq!(store.find_all().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn replace_swaps_every_field() {
        let store = InMemoryCarStore::new();
        let car = store.insert(&details("Old", 2000)).await.unwrap();
        let new_details = CarDetails {
            model: "New".to_string(),
            year: 2024,
            color: "green".to_string(),
            price: 1.5,
        };
        let updated = store.replace(car.id, &new_details).await.unwrap().unwrap();
        assert_eq!(updated, Car::new(car.id, new_details.clone()));
        assert_eq!(
            store.find_by_id(car.id).await.unwrap().unwrap().details,
            new_details
        );
    }
}
