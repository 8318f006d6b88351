//! Data embedded by the server next to a mount root.
//!
//! Pages render `<script type="application/json" data-role="...">` blocks
//! inside the root element; the payload is read once at mount time.

use serde::de::DeserializeOwned;
use web_sys::Element;

/// Text of the `data-role` JSON block under `root`, if present
pub fn embedded_json(root: &Element, role: &str) -> Option<String> {
    let selector = format!("script[type=\"application/json\"][data-role=\"{role}\"]");
    root.query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|node| node.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Parse the `data-role` JSON block; a missing block is `Ok(None)`
pub fn read_embedded<T: DeserializeOwned>(root: &Element, role: &str) -> Result<Option<T>, String> {
    match embedded_json(root, role) {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| format!("data-role=\"{role}\": {e}")),
        None => Ok(None),
    }
}
