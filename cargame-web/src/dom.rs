//! Browser globals used at startup and when a DOM call throws.

use wasm_bindgen::{JsCast, JsValue};

/// Origin of the page the bundle was served from, or an empty string when
/// there is no `window` to ask.
#[must_use]
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Text of a thrown JS value: the `Error` message, the string itself, or its
/// debug form.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
