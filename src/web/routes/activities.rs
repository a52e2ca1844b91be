use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::database::ActivityDirectory;
use crate::error::{detail, ApiError};
use crate::models::{ActivityCatalog, ConfirmationMessage};
use crate::services::activities_service;

// Raw pairs so a repeated parameter never trips the extractor's own
// plain-text rejection. The last `email` wins; format is not checked.
type QueryPairs = Query<Vec<(String, String)>>;

fn required_email(pairs: Vec<(String, String)>) -> Result<String, ApiError> {
    pairs
        .into_iter()
        .filter(|(k, _)| k == "email")
        .map(|(_, v)| v)
        .last()
        .ok_or_else(|| {
            detail(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Missing required query parameter: email",
            )
        })
}

pub async fn list_activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<ActivityCatalog> {
    Json(activities_service::list_activities(&directory).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(pairs): QueryPairs,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    let email = required_email(pairs)?;
    let confirmation = activities_service::signup(&directory, &activity_name, &email).await?;
    Ok(Json(confirmation))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(pairs): QueryPairs,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    let email = required_email(pairs)?;
    let confirmation = activities_service::unregister(&directory, &activity_name, &email).await?;
    Ok(Json(confirmation))
}
