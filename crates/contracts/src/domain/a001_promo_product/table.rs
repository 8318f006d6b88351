use super::barcode::{apply_barcode_input, apply_format_check};
use super::config::ProductTableConfig;
use super::export::ExportTable;
use super::gtin::{GtinCheckRequest, RemoteValidationResult};
use super::pricing::{apply_price_check, check_prices, PriceCheck};
use super::row::{ProductRow, RowStatus};
use crate::shared::error::TableResult;

/// State of one product table page.
///
/// Rows are owned here as view-models; every operation receives the row by
/// index instead of digging through markup, and the configuration is fixed
/// at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTable {
    config: ProductTableConfig,
    rows: Vec<ProductRow>,
}

impl ProductTable {
    pub fn new(config: ProductTableConfig, mut rows: Vec<ProductRow>) -> Self {
        rows.retain(|row| !row.is_new());
        if config.allow_new_row {
            rows.push(ProductRow::blank());
        }
        Self { config, rows }
    }

    pub fn config(&self) -> &ProductTableConfig {
        &self.config
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ProductRow> {
        self.rows.get(index)
    }

    /// Persisted rows, the blank row excluded
    pub fn data_rows(&self) -> impl Iterator<Item = &ProductRow> {
        self.rows.iter().filter(|row| !row.is_new())
    }

    pub fn toggle_row(&mut self, index: usize, selected: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            if !row.is_new() {
                row.set_selected(selected);
            }
        }
    }

    pub fn select_all(&mut self, selected: bool) {
        for row in self.rows.iter_mut().filter(|row| !row.is_new()) {
            row.set_selected(selected);
        }
    }

    pub fn selected_count(&self) -> usize {
        self.data_rows().filter(|row| row.selected).count()
    }

    pub fn all_selected(&self) -> bool {
        let mut rows = self.data_rows().peekable();
        rows.peek().is_some() && rows.all(|row| row.selected)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.data_rows()
            .filter(|row| row.selected)
            .filter_map(|row| row.id.clone())
            .collect()
    }

    /// Store a typed value and run the live checks for that field
    pub fn input(&mut self, index: usize, key: &str, value: impl Into<String>) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.set_value(key, value);

        if key == self.config.barcode_field {
            let had_length_error = row.status == RowStatus::LengthError;
            apply_barcode_input(row, &self.config.barcode_field);
            // a price error hidden behind the length error shows up again
            if had_length_error
                && row.status == RowStatus::Unvalidated
                && check_prices(row, &self.config.prices) == PriceCheck::Error
            {
                row.status = RowStatus::PriceError;
            }
        }
        if self.config.prices.watches(key) {
            apply_price_check(row, &self.config.prices);
        }
    }

    /// "Validar preços"
    pub fn validate_prices(&mut self) {
        for row in self.rows.iter_mut() {
            apply_price_check(row, &self.config.prices);
        }
    }

    /// "Validar formato": barcodes first, then prices
    pub fn validate_format(&mut self) {
        for row in self.rows.iter_mut() {
            apply_format_check(row, &self.config.barcode_field);
        }
        self.validate_prices();
    }

    /// "Limpar validações"
    pub fn clear_validations(&mut self) {
        for row in self.rows.iter_mut() {
            row.status = RowStatus::Unvalidated;
        }
    }

    pub fn gtin_request(&self) -> Option<GtinCheckRequest> {
        GtinCheckRequest::from_rows(&self.rows, &self.config.barcode_field, self.config.gtin_payload)
    }

    pub fn apply_remote(&mut self, result: &RemoteValidationResult) {
        result.apply(&mut self.rows, &self.config.barcode_field);
    }

    pub fn export_table(&self) -> TableResult<ExportTable> {
        ExportTable::build(&self.rows, &self.config.export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_promo_product::export::ExportCell;

    fn campanha_table() -> ProductTable {
        ProductTable::new(
            ProductTableConfig::campanha(),
            vec![
                ProductRow::new("1")
                    .with_value("codigo_barras", "7891234567890")
                    .with_value("pontuacao", "10")
                    .with_value("preco_normal", "19,90")
                    .with_value("preco_desconto", "17,50"),
                ProductRow::new("2")
                    .with_value("codigo_barras", "123")
                    .with_value("preco_normal", "5")
                    .with_value("preco_desconto", "6"),
            ],
        )
    }

    #[test]
    fn test_blank_row_appended_once() {
        let table = ProductTable::new(
            ProductTableConfig::campanha(),
            vec![ProductRow::blank(), ProductRow::new("1")],
        );
        assert_eq!(table.rows().len(), 2);
        assert!(table.rows()[1].is_new());
        assert_eq!(table.data_rows().count(), 1);
    }

    #[test]
    fn test_selection() {
        let mut table = campanha_table();
        assert_eq!(table.selected_count(), 0);
        assert!(!table.all_selected());

        table.toggle_row(1, true);
        assert_eq!(table.selected_ids(), vec!["2".to_string()]);

        table.select_all(true);
        assert!(table.all_selected());
        assert_eq!(table.selected_count(), 2);
        assert!(!table.rows()[2].selected);
        assert!(!table.rows()[2].inputs_disabled());

        table.select_all(false);
        assert!(table.data_rows().all(|row| row.inputs_disabled()));
    }

    #[test]
    fn test_live_barcode_input() {
        let mut table = campanha_table();
        table.input(0, "codigo_barras", "78912");
        assert_eq!(table.rows()[0].status, RowStatus::LengthError);
        table.input(0, "codigo_barras", "7891234");
        assert_eq!(table.rows()[0].status, RowStatus::Unvalidated);
    }

    #[test]
    fn test_live_price_input() {
        let mut table = campanha_table();
        table.input(0, "preco_desconto", "25");
        assert_eq!(table.rows()[0].status, RowStatus::PriceError);
        table.input(0, "preco_normal", "30");
        assert_eq!(table.rows()[0].status, RowStatus::ConfirmedValid);
        // not a price column, status untouched
        table.input(0, "descricao", "Dipirona 500mg");
        assert_eq!(table.rows()[0].status, RowStatus::ConfirmedValid);
    }

    #[test]
    fn test_bulk_validation_and_clear() {
        let mut table = campanha_table();
        table.validate_prices();
        assert_eq!(table.rows()[0].status, RowStatus::ConfirmedValid);
        assert_eq!(table.rows()[1].status, RowStatus::PriceError);

        table.validate_format();
        // barcode "123" is malformed; the length error wins over the price error
        assert_eq!(table.rows()[1].status, RowStatus::LengthError);

        table.clear_validations();
        assert!(table.rows().iter().all(|r| r.status == RowStatus::Unvalidated));
    }

    #[test]
    fn test_format_only_error() {
        let mut table = ProductTable::new(
            ProductTableConfig::campanha(),
            vec![ProductRow::new("1")
                .with_value("codigo_barras", "123")
                .with_value("preco_normal", "abc")
                .with_value("preco_desconto", "1")],
        );
        table.validate_format();
        assert_eq!(table.rows()[0].status, RowStatus::LengthError);
    }

    fn malformed_with_good_prices() -> ProductTable {
        ProductTable::new(
            ProductTableConfig::campanha(),
            vec![ProductRow::new("1")
                .with_value("codigo_barras", "123")
                .with_value("preco_normal", "10")
                .with_value("preco_desconto", "5")],
        )
    }

    #[test]
    fn test_validate_format_keeps_length_error_with_consistent_prices() {
        let mut table = malformed_with_good_prices();
        table.validate_format();
        assert_eq!(table.rows()[0].status, RowStatus::LengthError);

        table.validate_prices();
        assert_eq!(table.rows()[0].status, RowStatus::LengthError);
    }

    #[test]
    fn test_typing_price_keeps_length_error() {
        let mut table = malformed_with_good_prices();
        table.input(0, "codigo_barras", "123");
        assert_eq!(table.rows()[0].status, RowStatus::LengthError);

        table.input(0, "preco_desconto", "4");
        assert_eq!(table.rows()[0].status, RowStatus::LengthError);
        table.input(0, "preco_desconto", "40");
        assert_eq!(table.rows()[0].status, RowStatus::LengthError);

        // fixing the barcode uncovers the price error
        table.input(0, "codigo_barras", "7891234567890");
        assert_eq!(table.rows()[0].status, RowStatus::PriceError);
    }

    #[test]
    fn test_remote_round() {
        let mut table = campanha_table();
        assert!(table.gtin_request().is_some());

        let result = RemoteValidationResult::from_response(
            200,
            r#"{"valid_gtins": ["7891234567890"], "updated_count": 1}"#,
        )
        .unwrap();
        table.apply_remote(&result);
        assert_eq!(table.rows()[0].status, RowStatus::ConfirmedValid);
        assert_eq!(table.rows()[1].status, RowStatus::ConfirmedInvalid);
        assert_eq!(table.rows()[2].status, RowStatus::Unvalidated);
    }

    #[test]
    fn test_failed_remote_leaves_rows() {
        let mut table = campanha_table();
        table.validate_prices();
        let before = table.clone();

        if let Ok(result) = RemoteValidationResult::from_response(500, "erro") {
            table.apply_remote(&result);
        }
        assert_eq!(table, before);
    }

    #[test]
    fn test_export_one_row() {
        let table = ProductTable::new(
            ProductTableConfig::campanha(),
            vec![ProductRow::new("1")
                .with_value("codigo_barras", "7891234567890")
                .with_value("pontuacao", "10")
                .with_value("preco_normal", "19,90")],
        );
        let export = table.export_table().unwrap();
        assert_eq!(export.rows.len(), 1);
        assert_eq!(export.rows[0][3], ExportCell::Number(19.9));
        assert_eq!(
            table.config().export.format_for(3).map(|f| f.pattern()),
            Some("#,##0.00")
        );
    }

    #[test]
    fn test_export_without_rows() {
        let table = ProductTable::new(ProductTableConfig::tabloide(), vec![]);
        assert_eq!(table.export_table().unwrap_err().code, "EMPTY_EXPORT");
    }
}
