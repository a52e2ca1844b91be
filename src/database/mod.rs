pub mod activities_repo;
pub mod directory;
pub mod seed;

pub use directory::ActivityDirectory;
