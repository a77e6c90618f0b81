use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AppError;

// Accepts an integer, a float with no fractional part, or a string holding an integer
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    let year = match &value {
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64),
        },
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    year.and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| D::Error::custom(format!("year must be a valid integer, got {}", value)))
}

// Accepts any JSON number or a string holding a finite number
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    let price = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| D::Error::custom(format!("price must be a valid number, got {}", value)))
}

/// The four business attributes of a car. This is both the request body for
/// create/update and the document persisted in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDetails {
    pub model: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub year: i32,
    pub color: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
}

/// Storage-assigned identifier of a car record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(Uuid);

impl CarId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CarId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for CarId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(CarId)
            .map_err(|_| AppError::InvalidIdentifier(s.to_string()))
    }
}

/// A stored car record, rendered on the wire as `{id, model, year, color, price}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    #[serde(flatten)]
    pub details: CarDetails,
}

impl Car {
    pub fn new(id: CarId, details: CarDetails) -> Self {
        Self { id, details }
    }
}
