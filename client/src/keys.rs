use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use pinboard_shared::config::SEARCH_INPUT_SELECTOR;
use pinboard_shared::{shortcut, Shortcut};

use crate::dom;
use crate::state::Page;

pub fn register_shortcuts(page: &Rc<Page>) -> Result<(), JsValue> {
    let pressed = page.clone();
    dom::listen(&page.document, "keydown", move |event: Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            handle_key(&pressed, event);
        }
    })
}

pub fn handle_key(page: &Page, event: &KeyboardEvent) {
    let Some(action) = shortcut(&event.key(), event.ctrl_key(), event.meta_key()) else {
        return;
    };
    let search = dom::query::<HtmlElement>(&page.document, SEARCH_INPUT_SELECTOR);
    match action {
        Shortcut::FocusSearch => {
            event.prevent_default();
            if let Some(search) = search {
                let _ = search.focus();
            }
        }
        Shortcut::BlurSearch => {
            let Some(search) = search else {
                return;
            };
            let focused = page
                .document
                .active_element()
                .is_some_and(|active| &active == search.unchecked_ref::<Element>());
            if focused {
                let _ = search.blur();
            }
        }
    }
}
