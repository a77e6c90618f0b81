pub const API_NAME: &str = "[car-api-rust]";

pub const GREETING_MESSAGE: &str = "Hello In The Car World";
pub const CAR_NOT_FOUND_MESSAGE: &str = "Car not found";
pub const CAR_DELETED_MESSAGE: &str = "Car deleted successfully";
