use super::super::api;
use crate::shared::api_utils::api_url;
use crate::shared::dialogs::alert;
use crate::shared::export::export_to_xlsx;
use contracts::domain::a001_promo_product::bulk_delete::{BulkDeleteGate, CONFIRMATION_FIELD};
use contracts::domain::a001_promo_product::{ProductRow, ProductTable, ProductTableConfig};
use contracts::shared::error::TableError;
use contracts::shared::routes::{ProductAction, ProductPage};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

/// ViewModel of one product table page
#[derive(Clone, Copy)]
pub struct ProductTableViewModel {
    pub table: RwSignal<ProductTable>,
    /// Campaign/flyer taken from the page URL; `None` disables the routes
    pub page: StoredValue<Option<ProductPage>>,
    pub gtin_busy: RwSignal<bool>,
    pub bulk_delete: RwSignal<BulkDeleteGate>,
    /// Full text shown by the description dialog
    pub description: RwSignal<Option<String>>,
}

impl ProductTableViewModel {
    pub fn new(
        config: ProductTableConfig,
        rows: Vec<ProductRow>,
        page: Option<ProductPage>,
    ) -> Self {
        let mut gate = BulkDeleteGate::new();
        gate.activate();

        Self {
            table: RwSignal::new(ProductTable::new(config, rows)),
            page: StoredValue::new(page),
            gtin_busy: RwSignal::new(false),
            bulk_delete: RwSignal::new(gate),
            description: RwSignal::new(None),
        }
    }

    pub fn config(&self) -> ProductTableConfig {
        self.table.with_untracked(|t| t.config().clone())
    }

    pub fn action_url(&self, action: ProductAction) -> Option<String> {
        self.page
            .with_value(|page| page.as_ref().map(|p| p.action(action)))
    }

    // ---- selection ----

    pub fn toggle_row(&self, index: usize, selected: bool) {
        self.table.update(|t| t.toggle_row(index, selected));
    }

    pub fn select_all(&self, selected: bool) {
        self.table.update(|t| t.select_all(selected));
    }

    pub fn selected_count(&self) -> usize {
        self.table.with(|t| t.selected_count())
    }

    // ---- local validation ----

    pub fn input(&self, index: usize, key: &str, value: String) {
        self.table.update(|t| t.input(index, key, value));
    }

    pub fn validate_prices(&self) {
        self.table.update(|t| t.validate_prices());
    }

    pub fn validate_format(&self) {
        self.table.update(|t| t.validate_format());
    }

    pub fn clear_validations(&self) {
        self.table.update(|t| t.clear_validations());
    }

    // ---- remote GTIN check ----

    /// Label of the GTIN button for the current state
    pub fn gtin_label(&self) -> &'static str {
        if self.page.with_value(Option::is_none) {
            "Erro: ID não encontrado na URL"
        } else if self.gtin_busy.get() {
            "Validando..."
        } else {
            "Validar GTINs"
        }
    }

    pub fn gtin_disabled(&self) -> bool {
        self.page.with_value(Option::is_none) || self.gtin_busy.get()
    }

    pub fn validate_gtins(&self) {
        if self.gtin_busy.get_untracked() {
            return;
        }
        let Some(template) = self.table.with_untracked(|t| t.config().validate_gtin_url.clone())
        else {
            return;
        };
        let Some(page) = self.page.get_value() else {
            log::warn!("GTIN check without an entity id in the URL");
            return;
        };
        let Some(request) = self.table.with_untracked(|t| t.gtin_request()) else {
            log::debug!("GTIN check skipped: no barcodes to send");
            return;
        };

        let url = api_url(&page.fill_template(&template));
        let table = self.table;
        let busy = self.gtin_busy;
        busy.set(true);
        log::debug!("GTIN check: POST {url}");

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::validate_gtins(&url, &request).await;
            busy.set(false);
            match result {
                Ok(result) => {
                    log::debug!(
                        "GTIN check: {} confirmed, {} updated",
                        result.valid_gtins.len(),
                        result.updated_count
                    );
                    table.update(|t| t.apply_remote(&result));
                    if let Some(message) = result.updated_message() {
                        alert(&message);
                    }
                }
                Err(e) => {
                    log::error!("GTIN check failed: {e}");
                    alert(&format!("Erro ao validar GTINs: {e}"));
                }
            }
        });
    }

    // ---- export ----

    pub fn export(&self) {
        let (table, config) = match self
            .table
            .with_untracked(|t| t.export_table().map(|e| (e, t.config().export.clone())))
        {
            Ok(data) => data,
            Err(e) => {
                alert(&e.message);
                return;
            }
        };

        if let Err(e) = export_to_xlsx(&table, &config) {
            log::error!("Export failed: {e}");
            alert(&format!("Erro ao exportar: {e}"));
        }
    }

    // ---- description dialog ----

    pub fn show_description(&self, index: usize) {
        let text = self.table.with_untracked(|t| {
            let key = &t.config().description_field;
            t.row(index).map(|row| row.value(key).to_string())
        });
        self.description.set(text);
    }

    pub fn close_description(&self) {
        self.description.set(None);
    }

    // ---- bulk delete ----

    pub fn open_bulk_delete(&self) {
        let selected = self.table.with_untracked(|t| t.selected_count());
        let mut gate = self.bulk_delete.get_untracked();
        match gate.open(selected) {
            Ok(_) => self.bulk_delete.set(gate),
            Err(e) => alert(&e.message),
        }
    }

    pub fn set_delete_token(&self, token: String) {
        self.bulk_delete.update(|g| g.set_token(token));
    }

    pub fn dismiss_bulk_delete(&self) {
        self.bulk_delete.update(|g| g.dismiss());
    }

    /// Switch the main form to the delete route and submit it natively.
    ///
    /// The selected rows' checkboxes are already inside the form; only the
    /// confirmation field is added.
    pub fn confirm_bulk_delete(&self, form: Option<HtmlFormElement>) {
        let Some(form) = form else {
            log::error!("Bulk delete: form element is not mounted");
            return;
        };
        let Some(delete_url) = self.action_url(ProductAction::Delete) else {
            alert(&TableError::missing_entity().message);
            return;
        };

        let mut gate = self.bulk_delete.get_untracked();
        let submission = match gate.confirm() {
            Ok(submission) => submission,
            Err(e) => {
                alert(&e.message);
                return;
            }
        };
        self.bulk_delete.set(gate);
        log::debug!("Bulk delete: submitting {} product(s)", submission.count);

        let result = set_hidden_field(&form, CONFIRMATION_FIELD, &submission.token)
            .and_then(|_| submit_to(&form, &delete_url));
        if let Err(e) = result {
            log::error!("Bulk delete submit failed: {e}");
            if let Some(update_url) = self.action_url(ProductAction::Update) {
                form.set_action(&update_url);
            }
            self.dismiss_bulk_delete();
            alert(&format!("Erro ao deletar: {e}"));
        }
    }

    /// "Adicionar": post the blank row to the add route
    pub fn submit_new_row(&self, form: Option<HtmlFormElement>) {
        let (Some(form), Some(add_url)) = (form, self.action_url(ProductAction::Add)) else {
            alert(&TableError::missing_entity().message);
            return;
        };
        if let Err(e) = submit_to(&form, &add_url) {
            log::error!("Add product submit failed: {e}");
            if let Some(update_url) = self.action_url(ProductAction::Update) {
                form.set_action(&update_url);
            }
            alert(&format!("Erro ao adicionar: {e}"));
        }
    }
}

/// Hidden input under `form`, created on first use and reused afterwards
fn set_hidden_field(form: &HtmlFormElement, name: &str, value: &str) -> Result<(), String> {
    let selector = format!("input[type=\"hidden\"][name=\"{name}\"]");
    let existing = form
        .query_selector(&selector)
        .map_err(|e| format!("{e:?}"))?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    let input = match existing {
        Some(input) => input,
        None => {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or("No document object")?;
            let input = document
                .create_element("input")
                .map_err(|e| format!("{e:?}"))?
                .dyn_into::<HtmlInputElement>()
                .map_err(|e| format!("{e:?}"))?;
            input.set_type("hidden");
            input.set_name(name);
            form.append_child(&input).map_err(|e| format!("{e:?}"))?;
            input
        }
    };
    input.set_value(value);
    Ok(())
}

fn submit_to(form: &HtmlFormElement, action: &str) -> Result<(), String> {
    form.set_action(action);
    form.submit().map_err(|e| format!("{e:?}"))
}
