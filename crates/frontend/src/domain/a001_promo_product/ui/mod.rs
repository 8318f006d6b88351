pub mod bulk_delete;
pub mod description_modal;
pub mod page;
pub mod row;
pub mod view_model;

pub use page::ProductTablePage;
pub use view_model::ProductTableViewModel;
