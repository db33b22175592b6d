use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

use pinboard_shared::config::{
    ALERT_CLOSE_CLASS, ALERT_FADE_ANIMATION, ALERT_FADE_MS, ALERT_SELECTOR,
    MESSAGES_CONTAINER_CLASS, MESSAGES_CONTAINER_SELECTOR, MESSAGE_TIMEOUT_MS,
};
use pinboard_shared::Level;

use crate::dom;
use crate::state::Page;

/// Shows a dismissible banner that expires on its own.
pub fn show_message(page: &Page, message: &str, level: Level) -> Option<Element> {
    match append_alert(page, message, level) {
        Ok(alert) => Some(alert),
        Err(err) => {
            log::warn!("could not show message {message:?}: {err:?}");
            None
        }
    }
}

fn append_alert(page: &Page, message: &str, level: Level) -> Result<Element, JsValue> {
    let container = messages_container(page)?;
    let document = &page.document;

    let alert = document.create_element("div")?;
    alert.set_class_name(&level.alert_class());
    alert.append_child(&document.create_text_node(message))?;

    let close: HtmlButtonElement = dom::create(document, "button")?;
    close.set_type("button");
    close.set_class_name(ALERT_CLOSE_CLASS);
    close.set_text_content(Some("×"));
    let dismissed = alert.clone();
    dom::listen(&close, "click", move |_| dismissed.remove())?;
    alert.append_child(&close)?;

    container.append_child(&alert)?;

    let expired = alert.clone();
    Timeout::new(MESSAGE_TIMEOUT_MS, move || expired.remove()).forget();
    Ok(alert)
}

fn messages_container(page: &Page) -> Result<Element, JsValue> {
    if let Some(container) = page.messages_container.borrow().as_ref() {
        if container.is_connected() {
            return Ok(container.clone());
        }
    }
    let container = match page.document.query_selector(MESSAGES_CONTAINER_SELECTOR)? {
        Some(container) => container,
        None => {
            let container = page.document.create_element("div")?;
            container.set_class_name(MESSAGES_CONTAINER_CLASS);
            dom::body(&page.document)?.append_child(&container)?;
            container
        }
    };
    *page.messages_container.borrow_mut() = Some(container.clone());
    Ok(container)
}

/// Fades out and removes the alerts rendered by the server.
pub fn expire_rendered_alerts(page: &Page) -> Result<(), JsValue> {
    for alert in dom::query_all(&page.document, ALERT_SELECTOR)? {
        let Ok(alert) = alert.dyn_into::<HtmlElement>() else {
            continue;
        };
        Timeout::new(MESSAGE_TIMEOUT_MS, move || {
            dom::set_style(&alert, "animation", ALERT_FADE_ANIMATION);
            Timeout::new(ALERT_FADE_MS, move || alert.remove()).forget();
        })
        .forget();
    }
    Ok(())
}
