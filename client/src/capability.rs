//! Feature detection for browser APIs that are not available everywhere.
//!
//! Callers match on [`Capability`] and pick their fallback explicitly.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{IntersectionObserver, Window};

pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> From<Option<T>> for Capability<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(handle) => Self::Available(handle),
            None => Self::Unavailable,
        }
    }
}

fn has_property(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn navigator(window: &Window) -> JsValue {
    window.navigator().into()
}

/// Builds an observer for `callback` when the runtime supports it.
pub fn intersection_observer(
    window: &Window,
    callback: &Function,
) -> Capability<IntersectionObserver> {
    if !has_property(window.as_ref(), "IntersectionObserver") {
        return Capability::Unavailable;
    }
    IntersectionObserver::new(callback).ok().into()
}

pub struct NativeShare {
    navigator: JsValue,
    share: Function,
}

impl NativeShare {
    pub async fn share(&self, title: &str, url: &str) -> Result<(), JsValue> {
        let data = Object::new();
        Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title))?;
        Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url))?;
        let promise: Promise = self.share.call1(&self.navigator, &data)?.dyn_into()?;
        JsFuture::from(promise).await.map(|_| ())
    }
}

pub fn native_share(window: &Window) -> Capability<NativeShare> {
    let navigator = navigator(window);
    method(&navigator, "share")
        .map(|share| NativeShare { navigator, share })
        .into()
}

pub struct Clipboard {
    clipboard: JsValue,
    write_text: Function,
}

impl Clipboard {
    pub async fn write_text(&self, text: &str) -> Result<(), JsValue> {
        let promise: Promise = self
            .write_text
            .call1(&self.clipboard, &JsValue::from_str(text))?
            .dyn_into()?;
        JsFuture::from(promise).await.map(|_| ())
    }
}

pub fn clipboard(window: &Window) -> Capability<Clipboard> {
    let navigator = navigator(window);
    let Some(clipboard) = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| value.is_object())
    else {
        return Capability::Unavailable;
    };
    method(&clipboard, "writeText")
        .map(|write_text| Clipboard {
            clipboard,
            write_text,
        })
        .into()
}
