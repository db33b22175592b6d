use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum UiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("file read failed: {0}")]
    Read(String),
}

impl UiError {
    pub fn network(err: JsValue) -> Self {
        Self::Network(js_error_message(err, "Request failed"))
    }

    pub fn read(err: JsValue) -> Self {
        Self::Read(js_error_message(err, "Read failed"))
    }
}

pub fn js_error_message(err: JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}
