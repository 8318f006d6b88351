use super::export::{ColumnFormat, ExportConfig, ExportField, NumberFormat};
use super::gtin::GtinPayloadFormat;
use super::pricing::PriceRules;
use crate::enums::ResourceKind;
use crate::shared::error::{TableError, TableResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Decimal,
    Integer,
}

impl FieldKind {
    /// `type` attribute of the rendered input
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Decimal => "text",
            FieldKind::Integer => "number",
        }
    }
}

/// One editable column of the product table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}

/// Per-page configuration of the product table.
///
/// Supplied once when the table is mounted and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTableConfig {
    pub kind: ResourceKind,
    pub fields: Vec<FieldSpec>,
    #[serde(default = "default_barcode_field")]
    pub barcode_field: String,
    #[serde(default = "default_description_field")]
    pub description_field: String,
    pub prices: PriceRules,
    /// Endpoint template with an `{id}` placeholder; no GTIN button when absent
    #[serde(default)]
    pub validate_gtin_url: Option<String>,
    #[serde(default)]
    pub gtin_payload: GtinPayloadFormat,
    pub export: ExportConfig,
    /// Render the blank "add new" row under the products
    #[serde(default)]
    pub allow_new_row: bool,
}

fn default_barcode_field() -> String {
    "codigo_barras".to_string()
}

fn default_description_field() -> String {
    "descricao".to_string()
}

impl ProductTableConfig {
    /// Products of a campaign: one discount price, points and quantity limit
    pub fn campanha() -> Self {
        Self {
            kind: ResourceKind::Campanha,
            fields: vec![
                FieldSpec::new("codigo_barras", "Código de Barras", FieldKind::Text),
                FieldSpec::new("descricao", "Descrição", FieldKind::Text),
                FieldSpec::new("pontuacao", "Pontuação", FieldKind::Integer),
                FieldSpec::new("preco_normal", "Preço Normal", FieldKind::Decimal),
                FieldSpec::new("preco_desconto", "Preço Desconto", FieldKind::Decimal),
                FieldSpec::new("rebaixe", "Rebaixe", FieldKind::Decimal),
                FieldSpec::new("qtd_limite", "Qtd. Limite", FieldKind::Integer),
            ],
            barcode_field: default_barcode_field(),
            description_field: default_description_field(),
            prices: PriceRules::new("preco_normal", &["preco_desconto"]),
            validate_gtin_url: Some("/campanha/{id}/produtos/validar_gtins".to_string()),
            gtin_payload: GtinPayloadFormat::Products,
            export: ExportConfig {
                headers: [
                    "Codigo Barras",
                    "Descricao",
                    "Pontuacao",
                    "Preco Normal",
                    "Preco Desconto",
                    "Rebaixe",
                    "Qtd Limite",
                ]
                .iter()
                .map(|h| h.to_string())
                .collect(),
                fields: vec![
                    ExportField::text("codigo_barras"),
                    ExportField::text("descricao"),
                    ExportField::integer("pontuacao"),
                    ExportField::decimal("preco_normal"),
                    ExportField::decimal("preco_desconto"),
                    ExportField::decimal("rebaixe"),
                    ExportField::integer("qtd_limite"),
                ],
                formats: vec![
                    column(2, NumberFormat::Integer),
                    column(3, NumberFormat::TwoDecimals),
                    column(4, NumberFormat::TwoDecimals),
                    column(5, NumberFormat::TwoDecimals),
                    column(6, NumberFormat::Integer),
                ],
                sheet_name: "Produtos Campanha".to_string(),
                file_name: "produtos_campanha_export.xlsx".to_string(),
            },
            allow_new_row: true,
        }
    }

    /// Products of a flyer: general and "Cliente+" discount prices
    pub fn tabloide() -> Self {
        Self {
            kind: ResourceKind::Tabloide,
            fields: vec![
                FieldSpec::new("codigo_barras", "Código de Barras", FieldKind::Text),
                FieldSpec::new("descricao", "Descrição", FieldKind::Text),
                FieldSpec::new("laboratorio", "Laboratório", FieldKind::Text),
                FieldSpec::new("tipo_preco", "Tipo Preço", FieldKind::Text),
                FieldSpec::new("preco_normal", "Preço Normal", FieldKind::Decimal),
                FieldSpec::new("preco_desconto", "Preço Geral", FieldKind::Decimal),
                FieldSpec::new("preco_desconto_cliente", "Preço Cliente+", FieldKind::Decimal),
                FieldSpec::new("tipo_regra", "Tipo Regra", FieldKind::Text),
                FieldSpec::new("preco_app", "Preço APP", FieldKind::Decimal),
            ],
            barcode_field: default_barcode_field(),
            description_field: default_description_field(),
            prices: PriceRules::new("preco_normal", &["preco_desconto", "preco_desconto_cliente"]),
            validate_gtin_url: Some("/tabloide/{id}/produtos/validar_gtins".to_string()),
            gtin_payload: GtinPayloadFormat::Products,
            export: ExportConfig {
                headers: [
                    "Codigo Barras",
                    "Descricao",
                    "Laboratorio",
                    "Tipo Preco",
                    "Preco Normal",
                    "Preco Geral",
                    "Preco Cliente+",
                    "Tipo Regra",
                    "Preço APP",
                ]
                .iter()
                .map(|h| h.to_string())
                .collect(),
                fields: vec![
                    ExportField::text("codigo_barras"),
                    ExportField::text("descricao"),
                    ExportField::text("laboratorio"),
                    ExportField::text("tipo_preco"),
                    ExportField::decimal("preco_normal"),
                    ExportField::decimal("preco_desconto"),
                    ExportField::decimal("preco_desconto_cliente"),
                    ExportField::text("tipo_regra"),
                    ExportField::decimal("preco_app"),
                ],
                formats: vec![
                    column(4, NumberFormat::TwoDecimals),
                    column(5, NumberFormat::TwoDecimals),
                    column(6, NumberFormat::TwoDecimals),
                    column(8, NumberFormat::TwoDecimals),
                ],
                sheet_name: "Produtos Tabloide".to_string(),
                file_name: "produtos_tabloide_export.xlsx".to_string(),
            },
            allow_new_row: true,
        }
    }

    /// Built-in configuration by page name (`data-page` attribute)
    pub fn preset(name: &str) -> Option<Self> {
        match ResourceKind::from_code(name)? {
            ResourceKind::Campanha => Some(Self::campanha()),
            ResourceKind::Tabloide => Some(Self::tabloide()),
            ResourceKind::Parceiro => None,
        }
    }

    pub fn from_json(json: &str) -> TableResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TableError::config("configuração inválida").with_details(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Consistency checks for page-supplied configuration
    pub fn validate(&self) -> TableResult<()> {
        let has_field = |key: &str| self.fields.iter().any(|f| f.key == key);

        if !has_field(&self.barcode_field) {
            return Err(TableError::config(format!(
                "barcode field '{}' is not a table column",
                self.barcode_field
            )));
        }
        if self.prices.discounts.is_empty() || self.prices.discounts.len() > 2 {
            return Err(TableError::config(
                "one or two discount price fields are required",
            ));
        }
        if self.export.headers.len() != self.export.fields.len() {
            return Err(TableError::config(format!(
                "export has {} headers for {} fields",
                self.export.headers.len(),
                self.export.fields.len()
            )));
        }
        if let Some(f) = self
            .export
            .formats
            .iter()
            .find(|f| f.column >= self.export.headers.len())
        {
            return Err(TableError::config(format!(
                "export format for missing column {}",
                f.column
            )));
        }
        Ok(())
    }
}

fn column(column: usize, format: NumberFormat) -> ColumnFormat {
    ColumnFormat { column, format }
}
