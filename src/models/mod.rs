pub mod activities;
pub mod confirmation;

pub use activities::{Activity, ActivityCatalog};
pub use confirmation::ConfirmationMessage;
