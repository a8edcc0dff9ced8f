use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced to the page through exported functions
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("game not initialized; call init_game first")]
    NotInitialized,

    #[error("no browser window")]
    NoWindow,

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(format!("{value:?}"))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
