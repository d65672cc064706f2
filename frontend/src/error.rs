use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the page. Any of these aborts startup; the page
/// keeps working as plain HTML without the interactive behaviors.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element #{0} is missing")]
    MissingElement(String),
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
