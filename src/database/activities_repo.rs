use crate::database::ActivityDirectory;
use crate::error::DirectoryError;
use crate::models::ActivityCatalog;

pub async fn list_activities(directory: &ActivityDirectory) -> ActivityCatalog {
    directory.read().await.clone()
}

pub async fn count_activities(directory: &ActivityDirectory) -> usize {
    directory.read().await.len()
}

pub async fn insert_participant(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<(), DirectoryError> {
    let mut catalog = directory.write().await;
    let Some(activity) = catalog.get_mut(activity_name) else {
        return Err(DirectoryError::NotFound {
            activity: activity_name.to_string(),
        });
    };

    if activity.has_participant(email) {
        return Err(DirectoryError::AlreadySignedUp {
            activity: activity_name.to_string(),
            email: email.to_string(),
        });
    }

    activity.participants.push(email.to_string());
    Ok(())
}

pub async fn delete_participant(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<(), DirectoryError> {
    let mut catalog = directory.write().await;
    let Some(activity) = catalog.get_mut(activity_name) else {
        return Err(DirectoryError::NotFound {
            activity: activity_name.to_string(),
        });
    };

    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return Err(DirectoryError::NotSignedUp {
            activity: activity_name.to_string(),
            email: email.to_string(),
        });
    };

    activity.participants.remove(pos);
    Ok(())
}
