use tracing::{info, warn};

use crate::database::{activities_repo, ActivityDirectory};
use crate::error::DirectoryError;
use crate::models::{ActivityCatalog, ConfirmationMessage};

pub async fn list_activities(directory: &ActivityDirectory) -> ActivityCatalog {
    activities_repo::list_activities(directory).await
}

pub async fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<ConfirmationMessage, DirectoryError> {
    match activities_repo::insert_participant(directory, activity_name, email).await {
        Ok(()) => {
            info!("Signed up {} for {}", email, activity_name);
            Ok(ConfirmationMessage::signed_up(activity_name, email))
        }
        Err(e) => {
            warn!("Signup of {} for {} rejected: {}", email, activity_name, e);
            Err(e)
        }
    }
}

pub async fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<ConfirmationMessage, DirectoryError> {
    match activities_repo::delete_participant(directory, activity_name, email).await {
        Ok(()) => {
            info!("Unregistered {} from {}", email, activity_name);
            Ok(ConfirmationMessage::unregistered(activity_name, email))
        }
        Err(e) => {
            warn!("Unregister of {} from {} rejected: {}", email, activity_name, e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn confirmations_name_email_and_activity() {
        let dir = ActivityDirectory::seeded();

        let signed = signup(&dir, "Art Studio", "amy@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            signed.message,
            "Signed up amy@mergington.edu for Art Studio"
        );

        let left = unregister(&dir, "Art Studio", "amy@mergington.edu")
            .await
            .unwrap();
        assert!(left.message.starts_with("Unregistered"));
        assert!(left.message.contains("amy@mergington.edu"));
    }

    #[tokio::test]
    async fn second_signup_is_a_conflict() {
        let dir = ActivityDirectory::seeded();
        signup(&dir, "Math Olympiad", "kim@mergington.edu")
            .await
            .unwrap();
        let err = signup(&dir, "Math Olympiad", "kim@mergington.edu")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already signed up"));

        let catalog = list_activities(&dir).await;
        let roster = &catalog.get("Math Olympiad").unwrap().participants;
        assert_eq!(roster, &vec!["ryan@mergington.edu", "kim@mergington.edu"]);
    }
}
