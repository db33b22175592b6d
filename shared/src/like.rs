use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PinId(pub u64);

impl From<u32> for PinId {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body returned by `POST /pin/{id}/like/`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: u64,
}

impl LikeResponse {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

pub fn like_path(pin: PinId) -> String {
    format!("/pin/{pin}/like/")
}

/// Selector for the like button of `pin`.
pub fn pin_selector(pin: PinId) -> String {
    format!("[data-pin-id=\"{pin}\"]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(like_path(PinId(7)), "/pin/7/like/");
        assert_eq!(pin_selector(PinId::from(42u32)), "[data-pin-id=\"42\"]");
    }

    #[test]
    fn test_parse_response() {
        let response = LikeResponse::parse(r#"{"liked": true, "like_count": 42}"#).unwrap();
        assert_eq!(
            response,
            LikeResponse {
                liked: true,
                like_count: 42
            }
        );
        let response = LikeResponse::parse(r#"{"like_count": 41, "liked": false, "extra": 1}"#)
            .unwrap();
        assert!(!response.liked);
        assert_eq!(response.like_count, 41);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(LikeResponse::parse("").is_err());
        assert!(LikeResponse::parse("<html>Forbidden</html>").is_err());
        assert!(LikeResponse::parse(r#"{"liked": true}"#).is_err());
        assert!(LikeResponse::parse(r#"{"liked": "yes", "like_count": 1}"#).is_err());
        assert!(LikeResponse::parse(r#"{"liked": true, "like_count": -1}"#).is_err());
    }
}
