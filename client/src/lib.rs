mod app;
pub mod capability;
mod dom;
pub mod error;
pub mod forms;
pub mod keys;
pub mod lazy;
pub mod like;
pub mod messages;
mod net;
pub mod preview;
pub mod scroll;
pub mod settings;
pub mod share;
mod state;
pub mod util;

pub use app::{
    copy_to_clipboard_entry, run, scroll_to_top_entry, share_pin_entry, show_message_entry,
    toggle_like_entry,
};
pub use state::{Page, Pagination};
