pub mod car_repo;
pub mod car_store;
pub mod errors;
pub mod memory_store;

pub use car_repo::CarRepository;
pub use car_store::{is_valid_collection_name, CarStore};
pub use errors::StoreError;
pub use memory_store::InMemoryCarStore;
