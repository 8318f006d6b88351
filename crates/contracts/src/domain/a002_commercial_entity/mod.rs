//! List pages of campaigns, partners and flyers: edit and delete dialogs.

pub mod config;
pub mod confirm;

pub use config::{EntityField, EntityListConfig, EntityRecord};
pub use confirm::TypeToConfirm;
