use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlButtonElement, ScrollBehavior, ScrollToOptions, Window};

use pinboard_shared::config::{
    MASONRY_GRID_SELECTOR, SCROLL_BUTTON_CLASS, SCROLL_BUTTON_LABEL, SCROLL_BUTTON_STYLE,
};
use pinboard_shared::{near_bottom, scroll_top_visible};

use crate::dom;
use crate::state::Page;

pub fn register_scroll(page: &Rc<Page>) -> Result<(), JsValue> {
    let scrolled = page.clone();
    dom::listen(&page.window, "scroll", move |_| on_scroll(&scrolled))
}

fn on_scroll(page: &Page) {
    let offset = page.window.scroll_y().unwrap_or(0.0);
    if let Err(err) = update_scroll_button(page, offset) {
        log::warn!("scroll-to-top button update failed: {err:?}");
    }
    detect_bottom(page, offset);
}

/// Shows the scroll-to-top button past the threshold, creating it on first use.
pub fn update_scroll_button(page: &Page, offset: f64) -> Result<(), JsValue> {
    if scroll_top_visible(offset) {
        let button = ensure_scroll_button(page)?;
        set_button_visible(&button, true);
    } else if let Some(button) = page.scroll_button.borrow().as_ref() {
        set_button_visible(button, false);
    }
    Ok(())
}

fn ensure_scroll_button(page: &Page) -> Result<HtmlButtonElement, JsValue> {
    if let Some(button) = page.scroll_button.borrow().as_ref() {
        return Ok(button.clone());
    }
    let button: HtmlButtonElement = dom::create(&page.document, "button")?;
    button.set_type("button");
    button.set_class_name(SCROLL_BUTTON_CLASS);
    button.set_text_content(Some(SCROLL_BUTTON_LABEL));
    button.set_attribute("style", SCROLL_BUTTON_STYLE)?;
    let window = page.window.clone();
    dom::listen(&button, "click", move |_| scroll_to_top(&window))?;
    dom::body(&page.document)?.append_child(&button)?;
    log::debug!("created scroll-to-top button");
    *page.scroll_button.borrow_mut() = Some(button.clone());
    Ok(button)
}

fn set_button_visible(button: &HtmlButtonElement, visible: bool) {
    let (opacity, pointer_events) = if visible { ("1", "auto") } else { ("0", "none") };
    dom::set_style(button, "opacity", opacity);
    dom::set_style(button, "pointer-events", pointer_events);
}

pub fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn detect_bottom(page: &Page, scroll_y: f64) {
    let viewport = page
        .window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let Some(body) = page.document.body() else {
        return;
    };
    if !near_bottom(viewport, scroll_y, f64::from(body.offset_height())) {
        return;
    }
    if page.settings.pagination {
        load_more_pins(page);
    } else {
        log::trace!("near bottom of page, pagination disabled");
    }
}

/// Appends the next page of pins.
///
/// Inert: there is no paginated endpoint to fetch from yet, so this only
/// honours the loading guard.
pub fn load_more_pins(page: &Page) {
    let pagination = page.pagination();
    if pagination.loading.get() {
        return;
    }
    if dom::query::<web_sys::Element>(&page.document, MASONRY_GRID_SELECTOR).is_none() {
        return;
    }
    pagination.loading.set(true);
    log::debug!("page {} requested, no paginated endpoint", pagination.page.get() + 1);
    pagination.loading.set(false);
}
