use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

use pinboard_shared::config::CSRF_COOKIE;
use pinboard_shared::cookie_value;

pub fn read_cookie(document: &Document, name: &str) -> Option<String> {
    let cookies = document.dyn_ref::<HtmlDocument>()?.cookie().ok()?;
    let raw = cookie_value(&cookies, name)?;
    Some(decode_uri_string(raw).unwrap_or_else(|| raw.to_string()))
}

pub fn csrf_token(document: &Document) -> Option<String> {
    read_cookie(document, CSRF_COOKIE)
}

fn decode_uri_string(text: &str) -> Option<String> {
    js_sys::decode_uri_component(text)
        .ok()
        .and_then(|value| value.as_string())
}
