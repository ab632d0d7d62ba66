use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Failed to read attachment {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid email address '{address}': {reason}")]
    Address { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Mail account not configured: {0}")]
    Credentials(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MailError::FileAccess {
            path: PathBuf::from("/tmp/form.docx"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read attachment /tmp/form.docx: denied"
        );

        let err = MailError::Smtp("535 authentication failed".to_string());
        assert_eq!(err.to_string(), "SMTP error: 535 authentication failed");
    }
}
