use serde::Serialize;

use crate::database::{activities_repo, ActivityDirectory};

#[derive(Debug, Serialize)]
pub struct HealthView {
    pub status: &'static str,
    pub activities: usize,
}

pub async fn health(directory: &ActivityDirectory) -> HealthView {
    HealthView {
        status: "ok",
        activities: activities_repo::count_activities(directory).await,
    }
}
