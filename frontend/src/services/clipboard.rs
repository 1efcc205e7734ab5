//! Write-only access to the async clipboard API.
//!
//! Goes through `navigator.clipboard.writeText` by reflection so the
//! binding does not depend on web-sys' clipboard feature set.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::{AppError, AppResult};

/// Copies `text` to the system clipboard as plain text.
pub async fn write_text(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Clipboard("no window".to_string()))?;
    let navigator = Reflect::get(&window, &JsValue::from_str("navigator")).map_err(describe)?;
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(describe)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(AppError::Clipboard("clipboard API unavailable".to_string()));
    }

    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(describe)?
        .dyn_into()
        .map_err(|_| AppError::Clipboard("writeText is not a function".to_string()))?;

    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(describe)?
        .dyn_into()
        .map_err(|_| AppError::Clipboard("writeText did not return a promise".to_string()))?;

    JsFuture::from(promise).await.map_err(describe)?;
    Ok(())
}

fn describe(err: JsValue) -> AppError {
    let message = err
        .as_string()
        .or_else(|| {
            Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err));
    AppError::Clipboard(message)
}
