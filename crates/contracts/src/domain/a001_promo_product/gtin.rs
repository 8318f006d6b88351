//! Remote GTIN check: request payload, response decoding and row recoloring.

use super::row::{ProductRow, RowStatus};
use crate::shared::error::{TableError, TableResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Persisted product and the barcode currently typed for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductGtin {
    pub id: String,
    pub gtin: String,
}

/// Payload shape accepted by the page's endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GtinPayloadFormat {
    /// `{"products": [{"id": ..., "gtin": ...}]}`
    #[default]
    Products,
    /// `{"gtins": [...]}`, older route handlers
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GtinCheckRequest {
    Products { products: Vec<ProductGtin> },
    Legacy { gtins: Vec<String> },
}

impl GtinCheckRequest {
    /// Build the payload from the table.
    ///
    /// Only rows with a persisted id are sent. Returns `None` when there is
    /// nothing to validate, in which case no request should be made.
    pub fn from_rows(
        rows: &[ProductRow],
        barcode_field: &str,
        format: GtinPayloadFormat,
    ) -> Option<Self> {
        let products: Vec<ProductGtin> = rows
            .iter()
            .filter_map(|row| {
                let id = row.id.clone()?;
                Some(ProductGtin {
                    id,
                    gtin: row.value(barcode_field).trim().to_string(),
                })
            })
            .collect();

        let request = match format {
            GtinPayloadFormat::Products => GtinCheckRequest::Products { products },
            GtinPayloadFormat::Legacy => GtinCheckRequest::Legacy {
                gtins: products
                    .into_iter()
                    .map(|p| p.gtin)
                    .filter(|g| !g.is_empty())
                    .collect(),
            },
        };

        (!request.is_empty()).then_some(request)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            GtinCheckRequest::Products { products } => products.is_empty(),
            GtinCheckRequest::Legacy { gtins } => gtins.is_empty(),
        }
    }
}

/// Response body of `POST .../produtos/validar_gtins`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GtinCheckResponse {
    #[serde(default)]
    pub valid_gtins: Option<Vec<String>>,
    #[serde(default)]
    pub updated_count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decoded result of a successful check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteValidationResult {
    pub valid_gtins: HashSet<String>,
    pub updated_count: u64,
}

impl RemoteValidationResult {
    /// Decode an HTTP response.
    ///
    /// Any non-2xx status, an unparsable body or an `error` field in the body
    /// fails the whole operation.
    pub fn from_response(status: u16, body: &str) -> TableResult<Self> {
        if !(200..300).contains(&status) {
            return Err(TableError::http(status, body));
        }

        let response: GtinCheckResponse = serde_json::from_str(body)?;
        if let Some(error) = response.error {
            return Err(TableError::api(error));
        }

        Ok(Self {
            valid_gtins: response.valid_gtins.unwrap_or_default().into_iter().collect(),
            updated_count: response.updated_count.unwrap_or(0),
        })
    }

    /// Notice for the user when the server also refreshed internal codes
    pub fn updated_message(&self) -> Option<String> {
        (self.updated_count > 0).then(|| {
            format!(
                "{} produto(s) tiveram o Código Interno atualizado no banco de dados.",
                self.updated_count
            )
        })
    }

    /// Recolor every row from the confirmed set.
    ///
    /// Earlier valid/invalid marks are dropped first. Empty barcodes stay
    /// neutral; any other barcode becomes valid or invalid, replacing a
    /// format or price mark.
    pub fn apply(&self, rows: &mut [ProductRow], barcode_field: &str) {
        for row in rows.iter_mut() {
            if matches!(
                row.status,
                RowStatus::ConfirmedValid | RowStatus::ConfirmedInvalid
            ) {
                row.status = RowStatus::Unvalidated;
            }

            let gtin = row.value(barcode_field).trim();
            if gtin.is_empty() {
                continue;
            }
            row.status = if self.valid_gtins.contains(gtin) {
                RowStatus::ConfirmedValid
            } else {
                RowStatus::ConfirmedInvalid
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = "codigo_barras";

    fn rows() -> Vec<ProductRow> {
        vec![
            ProductRow::new("1").with_value(FIELD, "789123456"),
            ProductRow::new("2").with_value(FIELD, "000000000"),
            ProductRow::new("3").with_value(FIELD, ""),
            ProductRow::blank().with_value(FIELD, " 7891234567890 "),
        ]
    }

    #[test]
    fn test_products_payload_skips_new_rows() {
        let request =
            GtinCheckRequest::from_rows(&rows(), FIELD, GtinPayloadFormat::Products).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "products": [
                    {"id": "1", "gtin": "789123456"},
                    {"id": "2", "gtin": "000000000"},
                    {"id": "3", "gtin": ""}
                ]
            })
        );
    }

    #[test]
    fn test_legacy_payload() {
        let request =
            GtinCheckRequest::from_rows(&rows(), FIELD, GtinPayloadFormat::Legacy).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"gtins": ["789123456", "000000000"]})
        );
    }

    #[test]
    fn test_nothing_to_send() {
        let only_new = vec![ProductRow::blank().with_value(FIELD, "12345678")];
        assert!(GtinCheckRequest::from_rows(&only_new, FIELD, GtinPayloadFormat::Products).is_none());

        let empty_barcodes = vec![ProductRow::new("1")];
        assert!(
            GtinCheckRequest::from_rows(&empty_barcodes, FIELD, GtinPayloadFormat::Legacy).is_none()
        );
    }

    #[test]
    fn test_apply_valid_set() {
        let result =
            RemoteValidationResult::from_response(200, r#"{"valid_gtins": ["789123456"]}"#)
                .unwrap();
        let mut rows = rows();
        rows[2].status = RowStatus::ConfirmedValid;
        result.apply(&mut rows, FIELD);

        assert_eq!(rows[0].status, RowStatus::ConfirmedValid);
        assert_eq!(rows[1].status, RowStatus::ConfirmedInvalid);
        assert_eq!(rows[2].status, RowStatus::Unvalidated);
        assert_eq!(rows[3].status, RowStatus::ConfirmedInvalid);
        assert_eq!(result.updated_message(), None);
    }

    #[test]
    fn test_empty_barcode_keeps_price_error() {
        let result = RemoteValidationResult::from_response(200, r#"{"valid_gtins": []}"#).unwrap();
        let mut rows = vec![ProductRow::new("1")];
        rows[0].status = RowStatus::PriceError;
        result.apply(&mut rows, FIELD);
        assert_eq!(rows[0].status, RowStatus::PriceError);
    }

    #[test]
    fn test_http_error_fails() {
        let err = RemoteValidationResult::from_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(err.code, "HTTP_ERROR");
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_error_field_fails_even_with_200() {
        let err = RemoteValidationResult::from_response(
            200,
            r#"{"error": "Nenhum GTIN enviado", "valid_gtins": ["1"]}"#,
        )
        .unwrap_err();
        assert_eq!(err.code, "API_ERROR");
        assert_eq!(err.details.as_deref(), Some("Nenhum GTIN enviado"));
    }

    #[test]
    fn test_malformed_body_fails() {
        let err = RemoteValidationResult::from_response(200, "<html>").unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
    }

    #[test]
    fn test_updated_count_message() {
        let result = RemoteValidationResult::from_response(
            200,
            r#"{"valid_gtins": null, "updated_count": 3}"#,
        )
        .unwrap();
        assert!(result.valid_gtins.is_empty());
        assert_eq!(
            result.updated_message().as_deref(),
            Some("3 produto(s) tiveram o Código Interno atualizado no banco de dados.")
        );
    }
}
