use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, Window};

use pinboard_shared::config::CSRF_HEADER;
use pinboard_shared::{like_path, LikeResponse, PinId};

use crate::error::UiError;

/// Toggles the like on `pin`. The server decides the new state.
pub async fn post_like(
    window: &Window,
    pin: PinId,
    csrf_token: Option<&str>,
) -> Result<LikeResponse, UiError> {
    let headers = Headers::new().map_err(UiError::network)?;
    if let Some(token) = csrf_token {
        headers
            .set(CSRF_HEADER, token)
            .map_err(UiError::network)?;
    }
    headers
        .set("Content-Type", "application/json")
        .map_err(UiError::network)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    let request =
        Request::new_with_str_and_init(&like_path(pin), &init).map_err(UiError::network)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(UiError::network)?
        .dyn_into()
        .map_err(UiError::network)?;
    if !response.ok() {
        return Err(UiError::Status(response.status()));
    }
    let text = JsFuture::from(response.text().map_err(UiError::network)?)
        .await
        .map_err(UiError::network)?
        .as_string()
        .unwrap_or_default();
    Ok(LikeResponse::parse(&text)?)
}
