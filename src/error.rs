//! Error type shared by setup, rendering and DOM wiring.
//!
//! Browser APIs report failures as opaque [`JsValue`]s. They are folded into
//! [`FrontendError::Js`] with their string form so the rest of the crate can
//! use `?` on a single Rust error type. At the wasm boundary the error is
//! turned back into a `JsValue` so the page sees a readable message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Everything that can go wrong while starting or driving the front-end.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// A required element id is not present in the page.
    #[error("missing element: #{0}")]
    MissingElement(String),
    /// The canvas refused to hand out a 2D context.
    #[error("canvas has no 2d context")]
    NoContext2d,
    /// The config JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),
    /// The config parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A browser API call failed.
    #[error("browser api error: {0}")]
    Js(String),
}

impl FrontendError {
    /// Wrap a `JsValue` thrown by a web-sys call.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<JsValue> for FrontendError {
    fn from(value: JsValue) -> Self {
        Self::from_js(&value)
    }
}

impl From<FrontendError> for JsValue {
    fn from(err: FrontendError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = FrontendError> = std::result::Result<T, E>;
