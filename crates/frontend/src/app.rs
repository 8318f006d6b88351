//! Mounting of the Leptos controllers into server-rendered pages.
//!
//! Pages mark a mount root with `data-product-table` or `data-entity-list`
//! and embed their data as JSON next to it. Each controller kind is
//! initialized at most once per page load.

use crate::domain::a001_promo_product::ui::{ProductTablePage, ProductTableViewModel};
use crate::domain::a002_commercial_entity::ui::EntityList;
use crate::shared::api_utils::current_path;
use crate::shared::page_data::{embedded_json, read_embedded};
use contracts::domain::a001_promo_product::{ProductRow, ProductTableConfig};
use contracts::domain::a002_commercial_entity::{EntityListConfig, EntityRecord};
use contracts::shared::routes::ProductPage;
use leptos::prelude::*;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub const PRODUCT_TABLE_ROOT: &str = "[data-product-table]";
pub const ENTITY_LIST_ROOT: &str = "[data-entity-list]";

/// One-time initialization flag of a controller
pub struct InitFlag(Cell<bool>);

impl InitFlag {
    pub const fn new() -> Self {
        Self(Cell::new(false))
    }

    /// `true` only for the first caller
    pub fn claim(&self) -> bool {
        !self.0.replace(true)
    }
}

impl Default for InitFlag {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static PRODUCT_TABLE_INIT: InitFlag = const { InitFlag::new() };
    static ENTITY_LIST_INIT: InitFlag = const { InitFlag::new() };
}

/// Pick the product table configuration for a page.
///
/// An embedded JSON config wins; otherwise the preset named by `data-page`,
/// then the preset of the entity found in the URL.
pub fn resolve_product_config(
    preset: Option<&str>,
    override_json: Option<&str>,
    page: Option<&ProductPage>,
) -> Result<ProductTableConfig, String> {
    if let Some(json) = override_json {
        return ProductTableConfig::from_json(json).map_err(|e| e.to_string());
    }

    let name = preset
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .or_else(|| page.map(|p| p.kind.code().to_string()))
        .ok_or_else(|| "no product table preset for this page".to_string())?;

    ProductTableConfig::preset(&name).ok_or_else(|| format!("unknown product table preset '{name}'"))
}

pub fn resolve_entity_config(
    preset: Option<&str>,
    override_json: Option<&str>,
) -> Result<EntityListConfig, String> {
    if let Some(json) = override_json {
        return EntityListConfig::from_json(json).map_err(|e| e.to_string());
    }
    let name = preset.unwrap_or_default();
    EntityListConfig::preset(name).ok_or_else(|| format!("unknown entity list preset '{name}'"))
}

pub fn mount_product_tables() {
    if !PRODUCT_TABLE_INIT.with(InitFlag::claim) {
        log::debug!("product table already initialized");
        return;
    }

    let page = ProductPage::from_path(&current_path());
    if page.is_none() {
        log::warn!("product table: no entity id in {}", current_path());
    }

    for root in mount_roots(PRODUCT_TABLE_ROOT) {
        let preset = root.get_attribute("data-page");
        let config = resolve_product_config(
            preset.as_deref(),
            embedded_json(&root, "config").as_deref(),
            page.as_ref(),
        );
        let config = match config {
            Ok(config) => config,
            Err(e) => {
                log::error!("product table: {e}");
                continue;
            }
        };
        let rows = match read_embedded::<Vec<ProductRow>>(&root, "rows") {
            Ok(Some(rows)) => rows,
            Ok(None) => {
                log::warn!("product table: no embedded rows");
                Vec::new()
            }
            Err(e) => {
                log::error!("product table: {e}");
                continue;
            }
        };

        log::debug!("product table: mounting {} row(s)", rows.len());
        let page = page.clone();
        mount_into(root, move || {
            let vm = ProductTableViewModel::new(config, rows, page);
            view! { <ProductTablePage vm=vm /> }
        });
    }
}

pub fn mount_entity_lists() {
    if !ENTITY_LIST_INIT.with(InitFlag::claim) {
        log::debug!("entity list already initialized");
        return;
    }

    for root in mount_roots(ENTITY_LIST_ROOT) {
        let preset = root.get_attribute("data-entity-list");
        let config = match resolve_entity_config(
            preset.as_deref(),
            embedded_json(&root, "config").as_deref(),
        ) {
            Ok(config) => config,
            Err(e) => {
                log::error!("entity list: {e}");
                continue;
            }
        };
        let records = match read_embedded::<Vec<EntityRecord>>(&root, "records") {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                log::error!("entity list: {e}");
                continue;
            }
        };

        log::debug!(
            "entity list: mounting {} {}(s)",
            records.len(),
            config.kind.code()
        );
        mount_into(root, move || view! { <EntityList config=config records=records /> });
    }
}

fn mount_roots(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn mount_into<F, N>(root: Element, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    match root.dyn_into::<HtmlElement>() {
        Ok(root) => leptos::mount::mount_to(root, view).forget(),
        Err(_) => log::error!("mount root is not an HTML element"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ResourceKind;

    #[test]
    fn test_init_flag_claims_once() {
        let flag = InitFlag::new();
        assert!(flag.claim());
        assert!(!flag.claim());
        assert!(!flag.claim());
    }

    #[test]
    fn test_product_config_from_preset() {
        let config = resolve_product_config(Some("tabloide"), None, None).unwrap();
        assert_eq!(config.kind, ResourceKind::Tabloide);
    }

    #[test]
    fn test_product_config_falls_back_to_url_entity() {
        let page = ProductPage::new(ResourceKind::Campanha, "12");
        let config = resolve_product_config(None, None, Some(&page)).unwrap();
        assert_eq!(config.kind, ResourceKind::Campanha);
    }

    #[test]
    fn test_product_config_override_wins() {
        let json = serde_json::to_string(&ProductTableConfig::tabloide()).unwrap();
        let page = ProductPage::new(ResourceKind::Campanha, "12");
        let config = resolve_product_config(Some("campanha"), Some(&json), Some(&page)).unwrap();
        assert_eq!(config.kind, ResourceKind::Tabloide);
    }

    #[test]
    fn test_product_config_errors() {
        assert!(resolve_product_config(None, None, None).is_err());
        assert!(resolve_product_config(Some("parceiro"), None, None).is_err());
        assert!(resolve_product_config(None, Some("{"), None).is_err());
    }

    #[test]
    fn test_entity_config_presets() {
        let config = resolve_entity_config(Some("parceiro"), None).unwrap();
        assert_eq!(config.name_field, "nome_ajustado");
        assert!(resolve_entity_config(None, None).is_err());
    }
}
