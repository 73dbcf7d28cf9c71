//! WebAssembly bindings for the bond valuation engine.
//!
//! The browser frontend talks JSON strings across this boundary: the raw
//! form goes in, the field-error map or the full valuation envelope comes
//! back. All display formatting stays on the JavaScript side.

use wasm_bindgen::prelude::*;

use bondcalc_core::validation::{self, BondForm};
use bondcalc_core::valuation;

/// Install the panic hook so engine panics surface in the console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert any Display error into a JsError.
fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Validate a raw form submission.
///
/// Returns the `field → message` map as JSON; an empty object means the
/// inputs are valid and [`value_bond`] may be called. This is the
/// frontend's "inputs valid" gate.
#[wasm_bindgen]
pub fn validate_inputs(form_json: &str) -> Result<String, JsError> {
    let form: BondForm = serde_json::from_str(form_json).map_err(to_js_error)?;
    match validation::validate(&form) {
        Ok(_) => Ok("{}".to_string()),
        Err(errors) => serde_json::to_string(&errors).map_err(to_js_error),
    }
}

/// Validate and value a bond, returning the serialized result envelope.
///
/// Validation failure is a JsError whose message is the serialized
/// field-error map.
#[wasm_bindgen]
pub fn value_bond(form_json: &str) -> Result<String, JsError> {
    let form: BondForm = serde_json::from_str(form_json).map_err(to_js_error)?;
    let inputs = match validation::validate(&form) {
        Ok(inputs) => inputs,
        Err(errors) => {
            let message =
                serde_json::to_string(&errors).unwrap_or_else(|_| errors.to_string());
            return Err(JsError::new(&message));
        }
    };
    let result = valuation::value_bond(&inputs);
    serde_json::to_string(&result).map_err(to_js_error)
}
