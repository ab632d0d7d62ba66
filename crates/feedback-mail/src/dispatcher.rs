//! Sends a filled document to the configured account.

use crate::error::MailError;
use crate::message::{attachment_digest, build_message};
use crate::transport::{MailTransport, SmtpMailTransport};
use feedback_core::{Secrets, SmtpSettings};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What happened to one dispatch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The message was accepted by the transport.
    Sent {
        recipient: String,
        attachment_sha256: String,
    },
    /// The file was gone by the time it was to be sent.
    Skipped { path: PathBuf },
}

/// Builds and sends one message per filled document.
///
/// The account address is both sender and recipient.
pub struct Dispatcher {
    transport: Arc<dyn MailTransport>,
    account: String,
    subject: String,
    body: String,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        account: impl Into<String>,
        settings: &SmtpSettings,
    ) -> Self {
        Self {
            transport,
            account: account.into(),
            subject: settings.subject.clone(),
            body: settings.body.clone(),
        }
    }

    /// Dispatcher over the configured SMTP relay.
    ///
    /// Fails with [`MailError::Credentials`] when the account is not set up.
    pub fn smtp(settings: &SmtpSettings, secrets: &Secrets) -> Result<Self, MailError> {
        let account = secrets
            .sender_email()
            .map_err(|e| MailError::Credentials(e.to_string()))?;
        let password = secrets
            .sender_password()
            .map_err(|e| MailError::Credentials(e.to_string()))?;

        let transport = SmtpMailTransport::new(&settings.host, settings.port, account, password)?;
        tracing::info!(
            "Mail relay {}:{} configured for {}",
            settings.host,
            settings.port,
            account
        );
        Ok(Self::new(Arc::new(transport), account, settings))
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Send the document at `path` as an attachment.
    ///
    /// A missing file is not an error: the send is skipped and reported.
    pub async fn send(&self, path: &Path) -> Result<DispatchOutcome, MailError> {
        let exists = tokio::fs::try_exists(path)
            .await
            .map_err(|source| MailError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        if !exists {
            tracing::warn!("File not found: {}. Skipping email sending.", path.display());
            return Ok(DispatchOutcome::Skipped {
                path: path.to_path_buf(),
            });
        }

        let content = tokio::fs::read(path)
            .await
            .map_err(|source| MailError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| MailError::Build(format!("No file name in {}", path.display())))?;

        let attachment_sha256 = attachment_digest(&content);
        let message = build_message(
            &self.account,
            &self.account,
            &self.subject,
            &self.body,
            filename,
            content,
        )?;

        self.transport.deliver(message).await?;
        tracing::info!(
            "Feedback sent to {} (attachment sha256 {})",
            self.account,
            attachment_sha256
        );

        Ok(DispatchOutcome::Sent {
            recipient: self.account.clone(),
            attachment_sha256,
        })
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("account", &self.account)
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_requires_account() {
        let err = Dispatcher::smtp(&SmtpSettings::default(), &Secrets::default()).unwrap_err();
        assert!(matches!(err, MailError::Credentials(_)));

        let secrets = Secrets {
            sender_email: Some("desk@example.edu".to_string()),
            sender_password: None,
        };
        let err = Dispatcher::smtp(&SmtpSettings::default(), &secrets).unwrap_err();
        assert!(matches!(err, MailError::Credentials(_)));
    }

    #[tokio::test]
    async fn test_smtp_builds_with_account() {
        let secrets = Secrets {
            sender_email: Some("desk@example.edu".to_string()),
            sender_password: Some("hunter2".to_string()),
        };
        let dispatcher = Dispatcher::smtp(&SmtpSettings::default(), &secrets).expect("dispatcher");
        assert_eq!(dispatcher.account(), "desk@example.edu");
    }
}
