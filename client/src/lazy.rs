use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use pinboard_shared::config::{LAZY_IMAGE_SELECTOR, LAZY_SOURCE_ATTR, LOADED_CLASS};

use crate::capability::{intersection_observer, Capability};
use crate::dom;
use crate::state::Page;

pub fn observe_lazy_images(page: &Page) -> Result<(), JsValue> {
    let images = dom::query_all(&page.document, LAZY_IMAGE_SELECTOR)?;
    if images.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal_image(&target);
                observer.unobserve(&target);
            }
        },
    );

    let observer = match intersection_observer(&page.window, callback.as_ref().unchecked_ref()) {
        Capability::Available(observer) => observer,
        Capability::Unavailable => {
            log::debug!("IntersectionObserver unavailable, relying on native lazy loading");
            return Ok(());
        }
    };
    for image in &images {
        observer.observe(image);
    }
    log::debug!("observing {} lazy images", images.len());
    callback.forget();
    Ok(())
}

/// Swaps in the real source of a lazily loaded image.
pub fn reveal_image(target: &Element) {
    if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
        let source = image
            .get_attribute(LAZY_SOURCE_ATTR)
            .filter(|source| !source.is_empty())
            .unwrap_or_else(|| image.src());
        image.set_src(&source);
    }
    dom::set_class(target, LOADED_CLASS, true);
}
