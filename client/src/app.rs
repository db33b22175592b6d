use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

use pinboard_shared::{Level, PinId};

use crate::dom;
use crate::forms::register_form_validation;
use crate::keys::register_shortcuts;
use crate::lazy::observe_lazy_images;
use crate::like::toggle_like;
use crate::messages::{expire_rendered_alerts, show_message};
use crate::preview::register_image_previews;
use crate::scroll::{register_scroll, scroll_to_top};
use crate::settings::Settings;
use crate::share::{copy_to_clipboard, share_pin};
use crate::state::Page;

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

fn document_ready_state(document: &Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

/// Console banner as `(text, style)` pairs.
const WELCOME: [(&str, &str); 2] = [
    (
        "%c🎨 Pinterest Clone",
        "font-size: 24px; font-weight: bold; color: #e60023;",
    ),
    (
        "%cСоздано на Django + HTML/CSS/JavaScript",
        "font-size: 14px; color: #666;",
    ),
];

fn print_welcome() {
    for (text, style) in WELCOME {
        web_sys::console::log_2(&text.into(), &style.into());
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let settings = Settings::from_window(&window);
    wasm_logger::init(wasm_logger::Config::new(settings.log_level()));

    if document_ready_state(&document).as_deref() != Some("loading") {
        if let Err(err) = start_page(window, document, settings) {
            log::error!("page startup failed: {err:?}");
        }
        return Ok(());
    }

    let started = Rc::new(Cell::new(false));
    let ready_document = document.clone();
    dom::listen(&document, "DOMContentLoaded", move |_: Event| {
        if started.replace(true) {
            return;
        }
        if let Err(err) = start_page(window.clone(), ready_document.clone(), settings) {
            log::error!("page startup failed: {err:?}");
        }
    })
}

fn start_page(window: Window, document: Document, settings: Settings) -> Result<(), JsValue> {
    let page = Rc::new(Page::new(window, document, settings));
    log::debug!("starting page enhancements {settings:?}");

    expire_rendered_alerts(&page)?;
    observe_lazy_images(&page)?;
    register_form_validation(&page)?;
    register_image_previews(&page)?;
    register_shortcuts(&page)?;
    register_scroll(&page)?;

    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    print_welcome();
    Ok(())
}

fn with_page(action: impl FnOnce(&Rc<Page>)) {
    let page = PAGE.with(|slot| slot.borrow().clone());
    match page {
        Some(page) => action(&page),
        None => log::warn!("page enhancements not started yet"),
    }
}

#[wasm_bindgen(js_name = toggleLike)]
pub fn toggle_like_entry(pin_id: u32) {
    with_page(|page| toggle_like(page, PinId::from(pin_id)));
}

#[wasm_bindgen(js_name = showMessage)]
pub fn show_message_entry(message: &str, level: Option<String>) {
    let level = level
        .as_deref()
        .and_then(Level::from_tag)
        .unwrap_or_default();
    with_page(|page| {
        show_message(page, message, level);
    });
}

#[wasm_bindgen(js_name = sharePin)]
pub fn share_pin_entry(url: String, title: String) {
    with_page(|page| share_pin(page, url, title));
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard_entry(text: String) {
    with_page(|page| copy_to_clipboard(page, text));
}

#[wasm_bindgen(js_name = scrollToTop)]
pub fn scroll_to_top_entry() {
    with_page(|page| scroll_to_top(&page.window));
}

#[cfg(test)]
mod tests {
    use super::WELCOME;

    #[test]
    fn test_welcome_lines() {
        assert_eq!(WELCOME.len(), 2);
        assert!(WELCOME[0].0.contains("Pinterest Clone"));
        assert_eq!(WELCOME[1].0, "%cСоздано на Django + HTML/CSS/JavaScript");
        assert_eq!(WELCOME[1].1, "font-size: 14px; color: #666;");
        for (text, _) in WELCOME {
            assert!(text.starts_with("%c"));
        }
    }
}
