//! Page contract and tuning constants shared by every component.

/// Cookie holding the anti-forgery token issued by the server.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Request header the server reads the anti-forgery token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;
pub const ALERT_FADE_MS: u32 = 300;
pub const ALERT_FADE_ANIMATION: &str = "slideOut 0.3s ease";

pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
pub const BOTTOM_MARGIN: f64 = 1_000.0;

/// Appending further pages needs backend pagination, which does not exist yet.
pub const PAGINATION_ENABLED: bool = false;

pub const LIKE_COUNT_SELECTOR: &str = ".like-count";
pub const LIKED_CLASS: &str = "liked";

pub const MESSAGES_CONTAINER_CLASS: &str = "messages-container";
pub const MESSAGES_CONTAINER_SELECTOR: &str = ".messages-container";
pub const ALERT_SELECTOR: &str = ".alert";
pub const ALERT_CLOSE_CLASS: &str = "alert-close";

pub const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";
pub const LAZY_SOURCE_ATTR: &str = "data-src";
pub const LOADED_CLASS: &str = "loaded";

pub const MASONRY_GRID_SELECTOR: &str = ".masonry-grid";

pub const VALIDATED_FORM_SELECTOR: &str = "form[data-validate]";
pub const REQUIRED_FIELD_SELECTOR: &str = "[required]";
pub const FIELD_ERROR_CLASS: &str = "error";

pub const IMAGE_INPUT_SELECTOR: &str = "input[type=\"file\"][accept*=\"image\"]";
pub const PREVIEW_CLASS: &str = "image-preview";
pub const PREVIEW_SELECTOR: &str = ".image-preview";

pub const SEARCH_INPUT_SELECTOR: &str = ".search-input";

pub const SCROLL_BUTTON_CLASS: &str = "scroll-top-btn";
pub const SCROLL_BUTTON_LABEL: &str = "↑";
pub const SCROLL_BUTTON_STYLE: &str = "position:fixed;bottom:32px;right:32px;width:48px;height:48px;border-radius:50%;background:var(--primary-color);color:white;border:none;font-size:24px;cursor:pointer;box-shadow:0 4px 12px rgba(0,0,0,0.2);z-index:1000;transition:all 0.2s ease;";
