use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::json;

use crate::constants::CAR_DELETED_MESSAGE;
use crate::error::AppError;
use crate::models::{Car, CarDetails, CarId};
use crate::service::CarService;

pub fn router() -> Router<CarService> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:id", put(update_car).delete(delete_car))
}

async fn create_car(
    State(service): State<CarService>,
    payload: Result<Json<CarDetails>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let Json(details) = payload?;
    let car = service.create_car(details).await?;
    Ok(Json(car))
}

async fn list_cars(State(service): State<CarService>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = service.list_cars().await?;
    Ok(Json(cars))
}

async fn update_car(
    State(service): State<CarService>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CarDetails>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let id: CarId = raw_id.parse()?;
    let Json(details) = payload?;
    let car = service.update_car(id, details).await?;
    Ok(Json(car))
}

async fn delete_car(
    State(service): State<CarService>,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id: CarId = raw_id.parse()?;
    service.delete_car(id).await?;
    Ok(Json(json!({ "message": CAR_DELETED_MESSAGE })))
}
