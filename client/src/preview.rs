use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, File, FileReader, HtmlImageElement, HtmlInputElement, ProgressEvent};

use pinboard_shared::config::{IMAGE_INPUT_SELECTOR, PREVIEW_CLASS, PREVIEW_SELECTOR};
use pinboard_shared::{text, upload_allowed, Level};

use crate::dom;
use crate::error::UiError;
use crate::messages::show_message;
use crate::state::Page;

pub fn register_image_previews(page: &Rc<Page>) -> Result<(), JsValue> {
    for element in dom::query_all(&page.document, IMAGE_INPUT_SELECTOR)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let page = page.clone();
        let target = input.clone();
        dom::listen(&input, "change", move |_| {
            let Some(file) = target.files().and_then(|files| files.get(0)) else {
                return;
            };
            handle_selected_file(&page, &target, file);
        })?;
    }
    Ok(())
}

pub fn handle_selected_file(page: &Rc<Page>, input: &HtmlInputElement, file: File) {
    if !accept_file(page, input, &file) {
        return;
    }
    let page = page.clone();
    let input = input.clone();
    spawn_local(async move {
        show_preview(&page, &input, &file).await;
    });
}

/// Rejects files over the upload limit and clears the input.
pub fn accept_file(page: &Page, input: &HtmlInputElement, file: &File) -> bool {
    if upload_allowed(file.size()) {
        return true;
    }
    log::info!("rejected {} ({} bytes)", file.name(), file.size());
    show_message(page, text::FILE_TOO_LARGE, Level::Error);
    input.set_value("");
    false
}

/// Reads `file` and shows it next to `input`. A slower earlier read may
/// replace a newer preview.
pub async fn show_preview(
    page: &Page,
    input: &HtmlInputElement,
    file: &File,
) -> Option<HtmlImageElement> {
    let data_url = match read_data_url(file).await {
        Ok(data_url) => data_url,
        Err(err) => {
            log::warn!("preview of {} failed: {err}", file.name());
            return None;
        }
    };
    match render_preview(&page.document, input, &data_url) {
        Ok(image) => Some(image),
        Err(err) => {
            log::warn!("preview render failed: {err:?}");
            None
        }
    }
}

pub async fn read_data_url(file: &File) -> Result<String, UiError> {
    let reader = FileReader::new().map_err(UiError::read)?;
    let promise = Promise::new(&mut |resolve, reject| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move |_: ProgressEvent| {
            let result = loaded.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        reader.set_onload(Some(onload.unchecked_ref()));

        let failed = reader.clone();
        let onerror = Closure::once_into_js(move |_: ProgressEvent| {
            let err = failed
                .error()
                .map(JsValue::from)
                .unwrap_or_else(|| JsValue::from_str("Read failed"));
            let _ = reject.call1(&JsValue::NULL, &err);
        });
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader.read_as_data_url(file).map_err(UiError::read)?;
    JsFuture::from(promise)
        .await
        .map_err(UiError::read)?
        .as_string()
        .ok_or_else(|| UiError::Read("reader produced no data URL".to_string()))
}

/// Replaces the preview next to `input`, creating the region on demand.
pub fn render_preview(
    document: &Document,
    input: &HtmlInputElement,
    data_url: &str,
) -> Result<HtmlImageElement, JsValue> {
    let parent = input
        .parent_element()
        .ok_or_else(|| JsValue::from_str("File input has no parent"))?;
    let region = match parent.query_selector(PREVIEW_SELECTOR)? {
        Some(region) => region,
        None => {
            let region = document.create_element("div")?;
            region.set_class_name(PREVIEW_CLASS);
            parent.append_child(&region)?;
            region
        }
    };
    let image: HtmlImageElement = dom::create(document, "img")?;
    image.set_src(data_url);
    image.set_alt("Preview");
    region.set_text_content(None);
    region.append_child(&image)?;
    Ok(image)
}
