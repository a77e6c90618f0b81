use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::constants::GREETING_MESSAGE;
use crate::service::CarService;

pub fn router() -> Router<CarService> {
    Router::new().route("/", get(hello))
}

async fn hello() -> Json<serde_json::Value> {
    Json(json!({ "message": GREETING_MESSAGE }))
}
