//! Shared helpers for WASM API operations
//!
//! Serialization, error conversion and logging used by every exported
//! function. Log records go through the `log` facade, which `console_log`
//! forwards to the browser console.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::errors::TheoryError;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        ::log::debug!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        ::log::info!("[WASM] {}", format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        ::log::warn!("[WASM] ⚠️ {}", format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        ::log::error!("[WASM] ❌ {}", format!($($arg)*))
    };
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize a list of strings handed over from JavaScript
pub fn deserialize_strings(value: JsValue, error_context: &str) -> Result<Vec<String>, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert an engine error to a JsValue, logging it on the way out
pub fn theory_error(err: TheoryError) -> JsValue {
    if err.is_lookup_error() {
        wasm_warn!("{}", err);
    } else {
        wasm_error!("{}", err);
    }
    JsValue::from_str(&err.to_string())
}

/// Form selects use "-" (or nothing) for "no selection"
pub fn selected(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "-")
}
