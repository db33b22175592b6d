use crate::config::{BOTTOM_MARGIN, MAX_UPLOAD_BYTES, SCROLL_TOP_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    BlurSearch,
}

/// Maps a `keydown` to a page shortcut. `command` is Ctrl or Meta.
pub fn shortcut(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    if (ctrl || meta) && key == "k" {
        return Some(Shortcut::FocusSearch);
    }
    if key == "Escape" {
        return Some(Shortcut::BlurSearch);
    }
    None
}

/// Required fields only need some non-whitespace content.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn upload_allowed(size_bytes: f64) -> bool {
    size_bytes <= MAX_UPLOAD_BYTES as f64
}

pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

pub fn near_bottom(viewport_height: f64, scroll_y: f64, body_height: f64) -> bool {
    viewport_height + scroll_y >= body_height - BOTTOM_MARGIN
}
