use contracts::domain::a001_promo_product::gtin::{GtinCheckRequest, RemoteValidationResult};
use gloo_net::http::Request;

/// POST the page's barcodes to the catalog check endpoint
pub async fn validate_gtins(
    url: &str,
    request: &GtinCheckRequest,
) -> Result<RemoteValidationResult, String> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;
    RemoteValidationResult::from_response(status, &body).map_err(|e| e.to_string())
}
