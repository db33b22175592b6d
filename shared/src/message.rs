#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Level {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    pub fn alert_class(self) -> String {
        format!("alert alert-{}", self.tag())
    }
}

/// User-facing texts. The site is Russian-language.
pub mod text {
    pub const LIKE_FAILED: &str = "Ошибка при обработке лайка";
    pub const FILE_TOO_LARGE: &str = "Файл слишком большой. Максимальный размер: 5MB";
    pub const COPIED: &str = "Скопировано в буфер обмена";
    pub const COPY_FAILED: &str = "Ошибка при копировании";

    pub fn required_field(name: &str) -> String {
        format!("Поле \"{name}\" обязательно для заполнения")
    }
}
