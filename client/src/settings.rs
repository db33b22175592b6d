use web_sys::Window;

use pinboard_shared::config::PAGINATION_ENABLED;

/// Run-time switches for one page load.
#[derive(Clone, Copy, Debug, Default)]
pub struct Settings {
    pub debug: bool,
    pub pagination: bool,
}

impl Settings {
    pub fn from_window(window: &Window) -> Self {
        Self {
            debug: debug_enabled(window),
            pagination: PAGINATION_ENABLED,
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.debug {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1")
        || search.contains("debug=true")
        || search.contains("log=1")
        || search.contains("log=true")
}
