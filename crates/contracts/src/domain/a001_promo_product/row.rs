use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation state of one table row.
///
/// The states are mutually exclusive: assigning one replaces whatever the row
/// showed before, so a row is never highlighted as both a format error and a
/// confirmed GTIN at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    #[default]
    Unvalidated,
    LengthError,
    PriceError,
    ConfirmedValid,
    ConfirmedInvalid,
}

impl RowStatus {
    /// CSS modifier the server stylesheet defines for the state
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            RowStatus::Unvalidated => None,
            RowStatus::LengthError => Some("row-error-length"),
            RowStatus::PriceError => Some("row-error-price"),
            RowStatus::ConfirmedValid => Some("row-valid"),
            RowStatus::ConfirmedInvalid => Some("row-invalid"),
        }
    }
}

/// One product line of the table.
///
/// `values` holds the raw text of every input keyed by the server field name
/// (`codigo_barras`, `preco_normal`, ...). A row without `id` is the blank
/// "add new" row rendered under the persisted products.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(skip)]
    pub status: RowStatus,
}

impl ProductRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// The transient "add new" row
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Raw value of a field, `None` when the page has no such column
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Raw value of a field, empty when missing
    pub fn value(&self, key: &str) -> &str {
        self.raw(key).unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Row editability gate: inputs follow the selection checkbox.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// `disabled` attribute of the row's text/number inputs.
    /// The blank row has no checkbox and is always editable.
    pub fn inputs_disabled(&self) -> bool {
        !self.is_new() && !self.selected
    }

    /// Form field name the server expects for this row's input
    pub fn input_name(&self, key: &str) -> String {
        match &self.id {
            Some(id) => format!("{}_{}", key, id),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_idempotent() {
        let mut row = ProductRow::new("1");
        assert!(row.inputs_disabled());

        row.set_selected(true);
        assert!(!row.inputs_disabled());
        row.set_selected(false);
        assert!(row.inputs_disabled());

        row.set_selected(false);
        assert!(row.inputs_disabled());
    }

    #[test]
    fn test_blank_row_is_always_editable() {
        let row = ProductRow::blank();
        assert!(row.is_new());
        assert!(!row.inputs_disabled());
    }

    #[test]
    fn test_input_names() {
        let row = ProductRow::new("42");
        assert_eq!(row.input_name("preco_normal"), "preco_normal_42");
        assert_eq!(ProductRow::blank().input_name("preco_normal"), "preco_normal");
    }

    #[test]
    fn test_deserialize_row_without_status() {
        let row: ProductRow = serde_json::from_str(
            r#"{"id":"5","values":{"codigo_barras":"7891234567890"}}"#,
        )
        .unwrap();
        assert_eq!(row.id.as_deref(), Some("5"));
        assert!(!row.selected);
        assert_eq!(row.value("codigo_barras"), "7891234567890");
        assert_eq!(row.value("descricao"), "");
        assert_eq!(row.status, RowStatus::Unvalidated);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(RowStatus::Unvalidated.css_class(), None);
        assert_eq!(RowStatus::PriceError.css_class(), Some("row-error-price"));
        assert_eq!(RowStatus::ConfirmedInvalid.css_class(), Some("row-invalid"));
    }
}
