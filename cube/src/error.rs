use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the browser side of the game (canvas setup and drawing).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("canvas has no 2d context")]
    ContextUnavailable,
    #[error("canvas call failed: {0}")]
    Canvas(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        Self::Canvas(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
