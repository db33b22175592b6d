use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use pinboard_shared::{text, Level};

use crate::capability::{clipboard, native_share, Capability};
use crate::error::js_error_message;
use crate::messages::show_message;
use crate::state::Page;

pub fn share_pin(page: &Rc<Page>, url: String, title: String) {
    let page = page.clone();
    spawn_local(async move {
        share_or_copy(&page, &url, &title).await;
    });
}

/// Uses the native share sheet, falling back to copying `url`.
pub async fn share_or_copy(page: &Page, url: &str, title: &str) {
    match native_share(&page.window) {
        Capability::Available(share) => match share.share(title, url).await {
            Ok(()) => return,
            Err(err) => {
                log::info!("share failed, copying link: {}", js_error_message(err, "share failed"));
            }
        },
        Capability::Unavailable => log::debug!("native share unavailable, copying link"),
    }
    copy_text(page, url).await;
}

pub fn copy_to_clipboard(page: &Rc<Page>, value: String) {
    let page = page.clone();
    spawn_local(async move {
        copy_text(&page, &value).await;
    });
}

/// Copies `value` and reports the outcome with a banner. Without a
/// clipboard API nothing is shown.
pub async fn copy_text(page: &Page, value: &str) -> bool {
    let copied = match clipboard(&page.window) {
        Capability::Available(clipboard) => match clipboard.write_text(value).await {
            Ok(()) => true,
            Err(err) => {
                log::warn!("clipboard write failed: {}", js_error_message(err, "write failed"));
                false
            }
        },
        Capability::Unavailable => {
            log::debug!("clipboard unavailable, nothing copied");
            return false;
        }
    };
    if copied {
        show_message(page, text::COPIED, Level::Success);
    } else {
        show_message(page, text::COPY_FAILED, Level::Error);
    }
    copied
}
