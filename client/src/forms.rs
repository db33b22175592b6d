use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use pinboard_shared::config::{
    FIELD_ERROR_CLASS, REQUIRED_FIELD_SELECTOR, VALIDATED_FORM_SELECTOR,
};
use pinboard_shared::{is_blank, text, Level};

use crate::dom;
use crate::messages::show_message;
use crate::state::Page;

pub fn register_form_validation(page: &Rc<Page>) -> Result<(), JsValue> {
    let forms = dom::query_all(&page.document, VALIDATED_FORM_SELECTOR)?;
    for form in &forms {
        validate_on_submit(page, form)?;
    }
    if !forms.is_empty() {
        log::debug!("validating {} forms", forms.len());
    }
    Ok(())
}

pub fn validate_on_submit(page: &Rc<Page>, form: &Element) -> Result<(), JsValue> {
    let page = page.clone();
    let target = form.clone();
    dom::listen(form, "submit", move |event: Event| {
        if !validate_form(&page, &target) {
            event.prevent_default();
        }
    })
}

/// Flags every blank required field. Returns whether the form may submit.
pub fn validate_form(page: &Page, form: &Element) -> bool {
    let Ok(fields) = form.query_selector_all(REQUIRED_FIELD_SELECTOR) else {
        return true;
    };
    let mut valid = true;
    for field in dom::elements(&fields) {
        let Some(value) = field_value(&field) else {
            continue;
        };
        let blank = is_blank(&value);
        dom::set_class(&field, FIELD_ERROR_CLASS, blank);
        if blank {
            valid = false;
            let name = field.get_attribute("name").unwrap_or_default();
            show_message(page, &text::required_field(&name), Level::Error);
        }
    }
    valid
}

fn field_value(field: &Element) -> Option<String> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    field
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}
