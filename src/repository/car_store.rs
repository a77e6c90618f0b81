use async_trait::async_trait;

use super::errors::StoreError;
use crate::models::{Car, CarDetails, CarId};

/// Persistence port for car documents. Every method is a single atomic
/// operation against the collection; nothing spans more than one record.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Stores a new document and returns it with its freshly assigned id.
    async fn insert(&self, details: &CarDetails) -> Result<Car, StoreError>;

    async fn find_all(&self) -> Result<Vec<Car>, StoreError>;

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, StoreError>;

    /// Replaces all business fields of the document. `None` when no document has `id`.
    async fn replace(&self, id: CarId, details: &CarDetails) -> Result<Option<Car>, StoreError>;

    /// Returns whether a document was removed.
    async fn remove(&self, id: CarId) -> Result<bool, StoreError>;
}

/// Collection names end up interpolated into SQL, so only plain identifiers are allowed.
pub fn is_valid_collection_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
