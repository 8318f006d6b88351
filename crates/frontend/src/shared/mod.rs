pub mod api_utils;
pub mod components;
pub mod dialogs;
pub mod export;
pub mod icons;
pub mod modal;
pub mod page_data;
