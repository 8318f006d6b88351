//! Editable product table of campaign and flyer pages.

pub mod barcode;
pub mod bulk_delete;
pub mod config;
pub mod export;
pub mod gtin;
pub mod pricing;
pub mod row;
pub mod table;

pub use config::ProductTableConfig;
pub use row::{ProductRow, RowStatus};
pub use table::ProductTable;
