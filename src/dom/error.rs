use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring behavior onto the page. None of them are fatal:
/// callers log and leave the affected section static.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{0} is not mounted")]
    NotMounted(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
