//! WASM bindings for the Draft.js to HTML converter.
//!
//! Exposes `convert()` to JavaScript via wasm-bindgen. Input can be given as
//! JSON text or as plain JS objects (`convertValue`). Throws on malformed
//! input or configuration.

use draft_html::Config;
use draft_model::raw::RawContent;
use draft_model::Parser;
use wasm_bindgen::prelude::*;

/// Convert raw content JSON to an HTML fragment.
///
/// `config_json` optionally holds a style configuration
/// (`{"inlineStyles": {...}}`).
#[wasm_bindgen]
pub fn convert(raw_json: &str, config_json: Option<String>) -> Result<String, JsError> {
    let doc = Parser::parse(raw_json).map_err(|e| JsError::new(&e.to_string()))?;
    let config = match config_json {
        Some(source) => Config::from_json(&source).map_err(|e| JsError::new(&e.to_string()))?,
        None => Config::default(),
    };
    Ok(draft_html::to_html(&doc, &config))
}

/// Convert a raw content object (as returned by Draft.js `convertToRaw`).
///
/// `config` may be `undefined`/`null` or an object of the same shape as the
/// JSON configuration.
#[wasm_bindgen(js_name = convertValue)]
pub fn convert_value(raw: JsValue, config: JsValue) -> Result<String, JsError> {
    let raw: RawContent =
        serde_wasm_bindgen::from_value(raw).map_err(|e| JsError::new(&e.to_string()))?;
    let doc = Parser::from_raw(raw);

    let config = if config.is_undefined() || config.is_null() {
        Config::default()
    } else {
        let value: serde_json::Value =
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?;
        Config::from_json(&value.to_string()).map_err(|e| JsError::new(&e.to_string()))?
    };

    Ok(draft_html::to_html(&doc, &config))
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
