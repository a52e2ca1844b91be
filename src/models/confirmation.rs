use serde::{Deserialize, Serialize};

/// Body returned by a successful roster change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationMessage {
    pub message: String,
}

impl ConfirmationMessage {
    pub fn signed_up(activity_name: &str, email: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity_name),
        }
    }

    pub fn unregistered(activity_name: &str, email: &str) -> Self {
        Self {
            message: format!("Unregistered {} from {}", email, activity_name),
        }
    }
}
