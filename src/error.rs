use axum::{http::StatusCode, Json};
use serde_json::Value;
use thiserror::Error;

/// Error body shape shared by every JSON route: `{"detail": "..."}`.
pub type ApiError = (StatusCode, Json<Value>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, email: String },
}

impl DirectoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            DirectoryError::AlreadySignedUp { .. } | DirectoryError::NotSignedUp { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

pub fn detail(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(serde_json::json!({ "detail": message.into() })),
    )
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        detail(e.status(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_and_detail() {
        let (status, Json(body)) = ApiError::from(DirectoryError::NotFound {
            activity: "Nonexistent".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().unwrap().contains("not found"));

        let (status, Json(body)) = ApiError::from(DirectoryError::AlreadySignedUp {
            activity: "Basketball".to_string(),
            email: "james@mergington.edu".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("already signed up"));

        let (status, Json(body)) = ApiError::from(DirectoryError::NotSignedUp {
            activity: "Basketball".to_string(),
            email: "x@mergington.edu".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("not signed up"));
    }
}
