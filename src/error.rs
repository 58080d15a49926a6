//! Fetch Errors

use wasm_bindgen::JsValue;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// Browser API unavailable or threw
    #[error("browser error: {0}")]
    Js(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl FetchError {
    pub fn from_js(value: JsValue) -> Self {
        FetchError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
