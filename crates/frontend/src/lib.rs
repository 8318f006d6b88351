pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the product table controllers found on the page
#[wasm_bindgen]
pub fn init_product_table() {
    app::mount_product_tables();
}

/// Mount the edit/delete dialogs of list pages
#[wasm_bindgen]
pub fn init_entity_list() {
    app::mount_entity_lists();
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    init_product_table();
    init_entity_list();
}
