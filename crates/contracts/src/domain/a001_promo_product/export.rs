//! Table-to-spreadsheet serialization.
//!
//! Produces a plain two-dimensional table; writing the actual `.xlsx`
//! workbook happens in the frontend.

use super::row::ProductRow;
use crate::shared::error::{TableError, TableResult};
use crate::shared::number_parse::{parse_decimal, parse_integer};
use serde::{Deserialize, Serialize};

/// One exported column: which row field feeds it and how to read it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportField {
    pub field: String,
    #[serde(default)]
    pub numeric: bool,
    #[serde(default)]
    pub integer: bool,
}

impl ExportField {
    pub fn text(field: &str) -> Self {
        Self {
            field: field.to_string(),
            numeric: false,
            integer: false,
        }
    }

    pub fn decimal(field: &str) -> Self {
        Self {
            field: field.to_string(),
            numeric: true,
            integer: false,
        }
    }

    pub fn integer(field: &str) -> Self {
        Self {
            field: field.to_string(),
            numeric: true,
            integer: true,
        }
    }
}

/// Excel number format applied to numeric cells of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    Integer,
    TwoDecimals,
}

impl NumberFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            NumberFormat::Integer => "0",
            NumberFormat::TwoDecimals => "#,##0.00",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFormat {
    pub column: usize,
    pub format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub headers: Vec<String>,
    pub fields: Vec<ExportField>,
    #[serde(default)]
    pub formats: Vec<ColumnFormat>,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_sheet_name() -> String {
    "Produtos".to_string()
}

fn default_file_name() -> String {
    "export.xlsx".to_string()
}

impl ExportConfig {
    pub fn format_for(&self, column: usize) -> Option<NumberFormat> {
        self.formats
            .iter()
            .find(|f| f.column == column)
            .map(|f| f.format)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Empty,
    Text(String),
    Number(f64),
}

impl ExportCell {
    /// Read a raw input value according to its column descriptor.
    ///
    /// Numeric fields that fail to parse keep their raw text so the user
    /// still sees what was typed.
    pub fn from_raw(raw: &str, field: &ExportField) -> Self {
        if !field.numeric {
            return ExportCell::Text(raw.to_string());
        }
        if raw.is_empty() {
            return ExportCell::Empty;
        }

        let parsed = if field.integer {
            parse_integer(raw).map(|n| n as f64)
        } else {
            parse_decimal(raw)
        };
        match parsed {
            Some(n) => ExportCell::Number(n),
            None => ExportCell::Text(raw.to_string()),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, ExportCell::Number(_))
    }
}

/// Header row plus one row of cells per exported product
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<ExportCell>>,
}

impl ExportTable {
    /// Serialize the persisted rows of the table.
    ///
    /// The blank "add new" row is not data and is skipped. An empty table is
    /// an error so that no file gets generated.
    pub fn build(rows: &[ProductRow], config: &ExportConfig) -> TableResult<Self> {
        let rows: Vec<Vec<ExportCell>> = rows
            .iter()
            .filter(|row| !row.is_new())
            .map(|row| {
                config
                    .fields
                    .iter()
                    .map(|field| ExportCell::from_raw(row.value(&field.field), field))
                    .collect()
            })
            .collect();

        if rows.is_empty() {
            return Err(TableError::empty_export());
        }

        Ok(Self {
            headers: config.headers.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExportConfig {
        ExportConfig {
            headers: vec![
                "Codigo Barras".into(),
                "Pontuacao".into(),
                "Preco Normal".into(),
            ],
            fields: vec![
                ExportField::text("codigo_barras"),
                ExportField::integer("pontuacao"),
                ExportField::decimal("preco_normal"),
            ],
            formats: vec![
                ColumnFormat {
                    column: 1,
                    format: NumberFormat::Integer,
                },
                ColumnFormat {
                    column: 2,
                    format: NumberFormat::TwoDecimals,
                },
            ],
            sheet_name: default_sheet_name(),
            file_name: default_file_name(),
        }
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let err = ExportTable::build(&[], &config()).unwrap_err();
        assert_eq!(err.code, "EMPTY_EXPORT");

        let only_blank = vec![ProductRow::blank().with_value("codigo_barras", "1")];
        assert!(ExportTable::build(&only_blank, &config()).is_err());
    }

    #[test]
    fn test_numeric_cells() {
        let rows = vec![ProductRow::new("1")
            .with_value("codigo_barras", "7891234567890")
            .with_value("pontuacao", "10")
            .with_value("preco_normal", "19,90")];
        let table = ExportTable::build(&rows, &config()).unwrap();

        assert_eq!(table.headers.len(), 3);
        assert_eq!(
            table.rows[0],
            vec![
                ExportCell::Text("7891234567890".into()),
                ExportCell::Number(10.0),
                ExportCell::Number(19.9),
            ]
        );
        assert_eq!(config().format_for(2).map(|f| f.pattern()), Some("#,##0.00"));
        assert_eq!(config().format_for(1).map(|f| f.pattern()), Some("0"));
        assert_eq!(config().format_for(0), None);
    }

    #[test]
    fn test_empty_and_unparsable_numbers() {
        let rows = vec![ProductRow::new("1")
            .with_value("pontuacao", "")
            .with_value("preco_normal", "sob consulta")];
        let table = ExportTable::build(&rows, &config()).unwrap();
        assert_eq!(
            table.rows[0],
            vec![
                ExportCell::Text(String::new()),
                ExportCell::Empty,
                ExportCell::Text("sob consulta".into()),
            ]
        );
    }

    #[test]
    fn test_integer_truncates() {
        let field = ExportField::integer("qtd_limite");
        assert_eq!(ExportCell::from_raw("3,7", &field), ExportCell::Number(3.0));
    }

    #[test]
    fn test_config_defaults() {
        let config: ExportConfig = serde_json::from_str(
            r#"{"headers": ["A"], "fields": [{"field": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(config.sheet_name, "Produtos");
        assert_eq!(config.file_name, "export.xlsx");
        assert!(!config.fields[0].numeric);
    }
}
