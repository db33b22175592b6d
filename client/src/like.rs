use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use pinboard_shared::config::{LIKED_CLASS, LIKE_COUNT_SELECTOR};
use pinboard_shared::{pin_selector, text, Level, LikeResponse, PinId};

use crate::dom;
use crate::messages::show_message;
use crate::net::post_like;
use crate::state::Page;
use crate::util::csrf_token;

pub fn toggle_like(page: &Rc<Page>, pin: PinId) {
    let page = page.clone();
    spawn_local(async move {
        request_like(&page, pin).await;
    });
}

/// Sends one like request and applies the answer to the pin's button.
///
/// Nothing guards against overlapping requests; whichever answer arrives
/// last wins.
pub async fn request_like(page: &Page, pin: PinId) -> Option<LikeResponse> {
    let button = dom::query::<Element>(&page.document, &pin_selector(pin))?;
    let token = csrf_token(&page.document);
    match post_like(&page.window, pin, token.as_deref()).await {
        Ok(response) => {
            log::debug!("pin {pin} liked={} count={}", response.liked, response.like_count);
            apply_like(&button, &response);
            Some(response)
        }
        Err(err) => {
            log::error!("like for pin {pin} failed: {err}");
            show_message(page, text::LIKE_FAILED, Level::Error);
            None
        }
    }
}

pub fn apply_like(button: &Element, response: &LikeResponse) {
    if let Ok(Some(count)) = button.query_selector(LIKE_COUNT_SELECTOR) {
        count.set_text_content(Some(&response.like_count.to_string()));
    }
    dom::set_class(button, LIKED_CLASS, response.liked);
}
