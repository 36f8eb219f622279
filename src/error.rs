use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum TrailError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for TrailError {
    fn from(value: JsValue) -> Self {
        TrailError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<TrailError> for JsValue {
    fn from(err: TrailError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
