pub mod activities_service;
pub mod health_service;
