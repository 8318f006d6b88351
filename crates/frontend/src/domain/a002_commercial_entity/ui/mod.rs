pub mod delete_modal;
pub mod edit_modal;
pub mod list;

pub use list::EntityList;
