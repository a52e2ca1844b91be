use axum::{extract::State, Json};

use crate::database::ActivityDirectory;
use crate::services::health_service::{self, HealthView};

pub async fn health_handler(State(directory): State<ActivityDirectory>) -> Json<HealthView> {
    Json(health_service::health(&directory).await)
}
