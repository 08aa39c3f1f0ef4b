//! WASM bindings for medical license field extraction.
//!
//! This crate provides WebAssembly bindings for use in the browser client.

use wasm_bindgen::prelude::*;

use mediscan_core::license::{LicenseParser, RuleBasedLicenseParser};
use mediscan_core::models::profile::LicenseProfile;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract license fields from OCR transcript text.
///
/// Returns an object with only the fields that were extracted; an empty
/// object for unrecognizable input.
#[wasm_bindgen]
pub fn extract_fields(text: &str) -> Result<JsValue, JsValue> {
    let profile = mediscan_core::extract_fields(text);

    serde_wasm_bindgen::to_value(&profile).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// License scanner class for browser use.
#[wasm_bindgen]
pub struct LicenseScanner {
    parser: RuleBasedLicenseParser,
}

#[wasm_bindgen]
impl LicenseScanner {
    /// Create a new license scanner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: RuleBasedLicenseParser::new(),
        }
    }

    /// Configure the name line fallback.
    #[wasm_bindgen]
    pub fn set_name_fallback(&mut self, fallback: bool) {
        self.parser = RuleBasedLicenseParser::new().with_name_fallback(fallback);
    }

    /// Extract license fields from transcript text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        serde_wasm_bindgen::to_value(&result.profile)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        #[derive(serde::Serialize)]
        struct ExtractResult {
            profile: LicenseProfile,
            raw_text: String,
            warnings: Vec<String>,
            confidence: f32,
        }

        let output = ExtractResult {
            profile: result.profile,
            raw_text: result.raw_text,
            warnings: result.metadata.warnings,
            confidence: result.metadata.confidence,
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for LicenseScanner {
    fn default() -> Self {
        Self::new()
    }
}
