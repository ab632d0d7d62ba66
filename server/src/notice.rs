use crate::error::CommandError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A user-visible outcome of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub code: String,
    pub message: String,
}

impl Notice {
    pub fn success(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, code, message)
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, code, message)
    }

    fn new(level: NoticeLevel, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<CommandError> for Notice {
    fn from(err: CommandError) -> Self {
        Self::error(err.code, err.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;

    #[test]
    fn test_notice_serialization() {
        let notice = Notice::warning(codes::ID_FALLBACK, "using fallback");
        let json = serde_json::to_value(&notice).expect("serialize notice");
        assert_eq!(
            json,
            serde_json::json!({
                "level": "warning",
                "code": "ID_FALLBACK",
                "message": "using fallback",
            })
        );
    }

    #[test]
    fn test_from_command_error() {
        let notice: Notice = CommandError::new(codes::SMTP_ERROR, "SMTP error occurred").into();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.code, codes::SMTP_ERROR);
    }
}
