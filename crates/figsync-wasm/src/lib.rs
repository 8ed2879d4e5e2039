//! WASM bindings for figsync.
//!
//! Lets a browser preview regenerate the stylesheet from a token snapshot,
//! or extract a snapshot from a saved styles + nodes dump, without the CLI.

use figsync_tokens::TokenSnapshot;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Generate CSS from a token snapshot document.
///
/// Returns a JS object with `{ css: string, minified: string }`.
/// Throws a JS error if the snapshot JSON is invalid.
#[wasm_bindgen(js_name = generateCss)]
pub fn generate_css(tokens_json: &str) -> Result<JsValue, JsError> {
    let snapshot =
        TokenSnapshot::from_json(tokens_json).map_err(|e| JsError::new(&e.to_string()))?;
    let output = figsync_css::generate(&snapshot);

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"css".into(), &output.css.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;
    js_sys::Reflect::set(&js_obj, &"minified".into(), &output.minified.into())
        .map_err(|_| JsError::new("Failed to set minified property"))?;

    Ok(js_obj.into())
}

/// Extract a token snapshot from a `{ styles, nodes }` dump.
///
/// Returns the snapshot as a plain JS object (`{ global: { colors, ... } }`).
#[wasm_bindgen(js_name = extractTokens)]
pub fn extract_tokens(dump_json: &str) -> Result<JsValue, JsError> {
    let snapshot =
        figsync_extract::extract_from_dump(dump_json).map_err(|e| JsError::new(&e.to_string()))?;
    snapshot
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Token identifier for a style name.
#[wasm_bindgen(js_name = normalizeName)]
pub fn normalize_name(name: &str) -> String {
    figsync_tokens::normalize(name)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
