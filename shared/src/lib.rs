pub mod config;
mod cookie;
mod like;
mod message;
mod rules;

pub use cookie::cookie_value;
pub use like::{like_path, pin_selector, LikeResponse, PinId};
pub use message::{text, Level};
pub use rules::{is_blank, near_bottom, scroll_top_visible, shortcut, upload_allowed, Shortcut};
