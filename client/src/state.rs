use std::cell::{Cell, RefCell};

use web_sys::{Document, Element, HtmlButtonElement, Window};

use crate::settings::Settings;

/// Per-page controller. Built once at startup and shared via `Rc`.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub settings: Settings,
    pub(crate) messages_container: RefCell<Option<Element>>,
    pub(crate) scroll_button: RefCell<Option<HtmlButtonElement>>,
    pub(crate) pagination: Pagination,
}

/// Bookkeeping for appending further pages of pins.
pub struct Pagination {
    pub loading: Cell<bool>,
    pub page: Cell<u32>,
}

impl Page {
    pub fn new(window: Window, document: Document, settings: Settings) -> Self {
        Self {
            window,
            document,
            settings,
            messages_container: RefCell::new(None),
            scroll_button: RefCell::new(None),
            pagination: Pagination {
                loading: Cell::new(false),
                page: Cell::new(1),
            },
        }
    }

    pub fn scroll_button(&self) -> Option<HtmlButtonElement> {
        self.scroll_button.borrow().clone()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}
