//! API utilities for calls back to the server that rendered the page
//!
//! The product pages are served by the same origin that answers the JSON
//! endpoints, so URLs are resolved against `window.location`.

/// Get the base URL for API requests
///
/// # Returns
/// - Page origin like "https://comercial.example.com"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/campanha/12/produtos/validar_gtins");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path of the current page, e.g. "/tabloide/45/produtos"
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
