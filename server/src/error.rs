//! Error types returned to form and API clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use feedback_mail::MailError;
use feedback_template::TemplateError;
use serde::Serialize;

/// Stable codes for client-facing errors and notices.
pub mod codes {
    pub const REQUIRED_FIELD_MISSING: &str = "REQUIRED_FIELD_MISSING";
    pub const ID_FALLBACK: &str = "ID_FALLBACK";
    pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
    pub const DISPATCH_SKIPPED: &str = "DISPATCH_SKIPPED";
    pub const SMTP_ERROR: &str = "SMTP_ERROR";
    pub const ATTACHMENT_ERROR: &str = "ATTACHMENT_ERROR";
    pub const MESSAGE_ERROR: &str = "MESSAGE_ERROR";
    pub const FEEDBACK_SENT: &str = "FEEDBACK_SENT";
    pub const RENDER_ERROR: &str = "RENDER_ERROR";
}

/// Serializable error for form and API handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandError {
    /// Error code for client handling (e.g., "DOCUMENT_ERROR")
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional debugging context (never contains credentials)
    pub details: Option<serde_json::Value>,
}

impl CommandError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    /// Whether the error comes from rejected input rather than a failure.
    pub fn is_validation(&self) -> bool {
        self.code == codes::REQUIRED_FIELD_MISSING
    }
}

impl From<TemplateError> for CommandError {
    fn from(err: TemplateError) -> Self {
        let message = format!("Error processing the document: {err}");
        match &err {
            TemplateError::Io { path, .. }
            | TemplateError::Read { path, .. }
            | TemplateError::Write { path, .. }
            | TemplateError::OutputDir { path, .. } => Self::with_details(
                codes::DOCUMENT_ERROR,
                message,
                serde_json::json!({ "path": path.display().to_string() }),
            ),
            TemplateError::MissingAnswer { key } => Self::with_details(
                codes::DOCUMENT_ERROR,
                message,
                serde_json::json!({ "field": key }),
            ),
            TemplateError::Task(_) => Self::new(codes::DOCUMENT_ERROR, message),
        }
    }
}

impl From<MailError> for CommandError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::FileAccess { .. } => Self::new(
                codes::ATTACHMENT_ERROR,
                format!("Error with file handling: {err}"),
            ),
            MailError::Address { .. } | MailError::Build(_) => Self::new(
                codes::MESSAGE_ERROR,
                format!("An error occurred while sending the email: {err}"),
            ),
            MailError::Credentials(_) | MailError::Smtp(_) => {
                Self::new(codes::SMTP_ERROR, format!("SMTP error occurred: {err}"))
            }
        }
    }
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let status = if self.is_validation() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_template_error_maps_to_document_error() {
        let err: CommandError = TemplateError::Io {
            path: PathBuf::from("resource/ph_feedback_form.docx"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert_eq!(err.code, codes::DOCUMENT_ERROR);
        assert!(err.message.starts_with("Error processing the document:"));
        assert_eq!(
            err.details,
            Some(serde_json::json!({ "path": "resource/ph_feedback_form.docx" }))
        );
    }

    #[test]
    fn test_mail_errors_keep_distinct_codes() {
        let attachment: CommandError = MailError::FileAccess {
            path: PathBuf::from("form.docx"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let message: CommandError = MailError::Build("bad header".to_string()).into();
        let smtp: CommandError = MailError::Smtp("connection refused".to_string()).into();

        assert_eq!(attachment.code, codes::ATTACHMENT_ERROR);
        assert_eq!(message.code, codes::MESSAGE_ERROR);
        assert_eq!(smtp.code, codes::SMTP_ERROR);
        assert_eq!(smtp.message, "SMTP error occurred: SMTP error: connection refused");
    }

    #[test]
    fn test_validation_status() {
        let err = CommandError::new(codes::REQUIRED_FIELD_MISSING, "missing");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = CommandError::new(codes::DOCUMENT_ERROR, "broken");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
